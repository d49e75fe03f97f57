/*! Corpus output writing

Sequences (records, tokenized pairs) are written as JSON lines; dictionaries
as single JSON objects.
!*/
mod jsonl;
mod writertrait;

pub use jsonl::write_vocab;
pub use jsonl::JsonlWriter;
pub use writertrait::WriterTrait;
