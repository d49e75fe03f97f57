//! JSON-lines writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::Path;

use serde::Serialize;

use super::writertrait::WriterTrait;
use crate::error::Error;
use crate::vocab::Vocabulary;

/// Writes one JSON document per line.
///
/// No file rotation: alignment corpora are small enough to live in a single
/// output file per kind.
pub struct JsonlWriter<T> {
    handle: BufWriter<File>,
    _item: PhantomData<T>,
}

impl<T> JsonlWriter<T> {
    pub fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}

impl<T: Serialize> WriterTrait for JsonlWriter<T> {
    type Item = T;

    fn new(dst: &Path) -> Result<Self, Error> {
        let handle = BufWriter::new(File::create(dst)?);
        Ok(Self {
            handle,
            _item: PhantomData,
        })
    }

    fn write(&mut self, vals: Vec<T>) -> Result<(), Error> {
        for val in &vals {
            self.write_single(val)?;
        }
        self.flush()
    }

    fn write_single(&mut self, val: &T) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, val)?;
        self.handle.write_all(b"\n")?;
        Ok(())
    }
}

/// Dumps one dictionary as a pretty-printed JSON object.
pub fn write_vocab(vocab: &Vocabulary, dst: &Path) -> Result<(), Error> {
    let file = BufWriter::new(File::create(dst)?);
    serde_json::to_writer_pretty(file, vocab)?;
    Ok(())
}
