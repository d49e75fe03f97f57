//! Pipeline trait.
use crate::error::Error;

/// Implemented by each pipeline; generic over the return type so that
/// pipelines that hand results back to the caller can use the trait as
/// well.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
