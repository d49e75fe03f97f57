/*! Sentence record reading

[SentenceReader] walks the markup event stream and yields one
[CorpusRecord] per sentence element, in document order.

Reading is fatal on structural problems: a document that does not parse
(after ampersand repair) or a record lacking its source/target text aborts
the whole load. Missing link fields are expected data variation and yield
empty link lists.
!*/
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;

use super::schema::RecordSchema;
use super::types::{CorpusRecord, LabeledAlignment, SentencePair};
use crate::error::Error;

lazy_static! {
    /// `source-target` link pattern; positions are 1-based.
    static ref LINK_RE: Regex = Regex::new(r"(\d+)-(\d+)").unwrap();
}

/// Escapes ampersands so that legacy corpora parse as markup.
///
/// The annotation files predate proper escaping and carry bare `&` in text
/// content; the repair is applied to the whole document before any
/// structural parsing.
fn repair_ampersands(raw: &str) -> String {
    raw.replace('&', "&amp;")
}

/// Extracts `a-b` links left to right.
///
/// Anything between links is ignored, so space- and comma-separated lists
/// both work.
fn parse_links(text: &str) -> Vec<(u32, u32)> {
    LINK_RE
        .captures_iter(text)
        .map(|cap| (cap[1].parse().unwrap(), cap[2].parse().unwrap()))
        .collect()
}

fn split_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Sub-field currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Source,
    Target,
    Sure,
    Possible,
}

/// Streaming reader over the sentence records of a repaired document.
///
/// Yields `Result<CorpusRecord, Error>`: iteration should stop at the first
/// `Err`, since the underlying parser state is not recoverable.
pub struct SentenceReader<'a> {
    reader: Reader<&'a [u8]>,
    schema: &'a RecordSchema,
    // open element count; the event parser itself does not flag truncated
    // documents at end of input
    depth: usize,
    in_sentence: bool,
    current: Option<Field>,
    source: Option<String>,
    target: Option<String>,
    sure: Option<String>,
    possible: Option<String>,
}

impl<'a> SentenceReader<'a> {
    /// Create a reader over already-repaired document content.
    pub fn new(content: &'a str, schema: &'a RecordSchema) -> Self {
        let mut reader = Reader::from_str(content);
        reader.trim_text(true);
        reader.expand_empty_elements(true);
        Self {
            reader,
            schema,
            depth: 0,
            in_sentence: false,
            current: None,
            source: None,
            target: None,
            sure: None,
            possible: None,
        }
    }

    fn enter(&mut self, name: &[u8]) {
        if !self.in_sentence {
            if name == self.schema.sentence().as_bytes() {
                self.in_sentence = true;
                self.current = None;
                self.source = None;
                self.target = None;
                self.sure = None;
                self.possible = None;
            }
            return;
        }

        self.current = if name == self.schema.source().as_bytes() {
            Some(Field::Source)
        } else if name == self.schema.target().as_bytes() {
            Some(Field::Target)
        } else if name == self.schema.sure().as_bytes() {
            Some(Field::Sure)
        } else if name == self.schema.possible().as_bytes() {
            Some(Field::Possible)
        } else {
            None
        };
    }

    fn collect_text(&mut self, text: &str) {
        let buf = match self.current {
            Some(Field::Source) => &mut self.source,
            Some(Field::Target) => &mut self.target,
            Some(Field::Sure) => &mut self.sure,
            Some(Field::Possible) => &mut self.possible,
            None => return,
        };
        buf.get_or_insert_with(String::new).push_str(text);
    }

    fn finish_record(&mut self) -> Result<CorpusRecord, Error> {
        self.in_sentence = false;
        self.current = None;

        let source = self
            .source
            .take()
            .ok_or_else(|| Error::MissingField(self.schema.source().to_string()))?;
        let target = self
            .target
            .take()
            .ok_or_else(|| Error::MissingField(self.schema.target().to_string()))?;

        let sure = self.sure.take().map(|s| parse_links(&s)).unwrap_or_default();
        let possible = self
            .possible
            .take()
            .map(|s| parse_links(&s))
            .unwrap_or_default();

        Ok(CorpusRecord::new(
            SentencePair::new(split_tokens(&source), split_tokens(&target)),
            LabeledAlignment::new(sure, possible),
        ))
    }
}

impl Iterator for SentenceReader<'_> {
    type Item = Result<CorpusRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_event() {
                Err(e) => return Some(Err(Error::Xml(e))),
                Ok(Event::Eof) => {
                    if self.depth > 0 {
                        return Some(Err(Error::Xml(quick_xml::Error::UnexpectedEof(
                            "document ends with open elements".to_string(),
                        ))));
                    }
                    return None;
                }
                Ok(Event::Start(start)) => {
                    self.depth += 1;
                    self.enter(start.name().as_ref());
                }
                Ok(Event::Text(text)) => match text.unescape() {
                    Ok(t) => self.collect_text(&t),
                    Err(e) => return Some(Err(Error::Xml(e))),
                },
                Ok(Event::End(end)) => {
                    self.depth = self.depth.saturating_sub(1);
                    if self.in_sentence && end.name().as_ref() == self.schema.sentence().as_bytes()
                    {
                        return Some(self.finish_record());
                    }
                    self.current = None;
                }
                Ok(_) => (),
            }
        }
    }
}

/// Reads a corpus file and returns its sentence pairs and alignments, in
/// file order, with element `i` of each sequence belonging to the `i`-th
/// record.
///
/// Fails if the file cannot be read or if the repaired content is not
/// well-formed markup. Uses the legacy Czech-English element names; see
/// [extract_sentences_with_schema] for other corpora.
pub fn extract_sentences<P: AsRef<Path>>(
    path: P,
) -> Result<(Vec<SentencePair>, Vec<LabeledAlignment>), Error> {
    extract_sentences_with_schema(path, &RecordSchema::default())
}

/// Same as [extract_sentences], with caller-provided element names.
pub fn extract_sentences_with_schema<P: AsRef<Path>>(
    path: P,
    schema: &RecordSchema,
) -> Result<(Vec<SentencePair>, Vec<LabeledAlignment>), Error> {
    let raw = fs::read_to_string(path)?;
    let content = repair_ampersands(&raw);

    let mut pairs = Vec::new();
    let mut alignments = Vec::new();
    for record in SentenceReader::new(&content, schema) {
        let (pair, alignment) = record?.into_parts();
        pairs.push(pair);
        alignments.push(alignment);
    }
    Ok((pairs, alignments))
}
