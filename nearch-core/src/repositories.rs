// Low-level access traits for the external place store.
// The store is read-only from the perspective of this crate.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PlaceRepo {
    /// Fetch all places of the collection in storage order.
    fn all_places(&self) -> Result<Vec<PlaceRecord>>;
}
