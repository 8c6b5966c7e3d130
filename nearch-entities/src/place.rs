use crate::{geo::*, id::*};

/// A place as it is stored in the external document store.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    pub id: Id,
    pub name: String,
    /// The kind of place, e.g. "Museum" or "Castle".
    pub category: String,
    pub location: GeoPoint,
}

impl PlaceRecord {
    pub fn distance_from(&self, reference: GeoPoint) -> Distance {
        GeoPoint::distance(reference, self.location)
    }
}
