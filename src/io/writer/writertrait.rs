use std::path::Path;

use crate::error::Error;

/// Common interface for corpus output writers.
pub trait WriterTrait {
    type Item;

    fn new(dst: &Path) -> Result<Self, Error>
    where
        Self: Sized;
    fn write(&mut self, vals: Vec<Self::Item>) -> Result<(), Error>;
    fn write_single(&mut self, val: &Self::Item) -> Result<(), Error>;
}
