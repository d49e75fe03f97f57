/*!
# IO utilities

Saving of extracted records, dictionaries and tokenized output.

The core stages work on in-memory structures only; everything here serves
the CLI, which has to persist stage results somewhere.
!*/
pub mod writer;
