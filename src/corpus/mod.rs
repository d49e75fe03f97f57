/*! Corpus loading

Parses labeled word-alignment markup into [SentencePair]s and matching
[LabeledAlignment]s.

A corpus file is a markup document holding a flat list of sentence records.
Each record carries a whitespace-tokenized source sentence, its target-side
translation, and two optional link lists annotating word correspondences:
`sure` links (confident) and `possible` links (ambiguous).

Element names are configurable through [RecordSchema]; the defaults match the
legacy Czech-English corpus layout.
!*/
mod reader;
mod schema;
mod types;

pub use reader::extract_sentences;
pub use reader::extract_sentences_with_schema;
pub use reader::SentenceReader;
pub use schema::RecordSchema;
pub use types::CorpusRecord;
pub use types::LabeledAlignment;
pub use types::SentencePair;
