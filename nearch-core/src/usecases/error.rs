use crate::{entities::*, repositories, util::validate::PlaceInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid maximum distance: {0} km")]
    InvalidDistance(f64),
    #[error("Invalid place '{0}': {1}")]
    InvalidPlace(Id, #[source] PlaceInvalidation),
    #[error("Invalid position: {0}")]
    InvalidPosition(GeoPoint),
    #[error("Missing reference point")]
    MissingReferencePoint,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
