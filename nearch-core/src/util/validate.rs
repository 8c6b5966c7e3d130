use nearch_entities::place::PlaceRecord;
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceInvalidation {
    #[error("Missing id")]
    Id,
    #[error("Missing name")]
    Name,
    #[error("Invalid position")]
    Position,
}

impl Validate for PlaceRecord {
    type Error = PlaceInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.id.is_valid() {
            return Err(Self::Error::Id);
        }
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if !self.location.is_valid() {
            return Err(Self::Error::Position);
        }
        Ok(())
    }
}

pub fn is_valid_max_distance_km(km: f64) -> bool {
    km.is_finite() && km >= 0.0
}
