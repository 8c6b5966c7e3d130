use nearch_entities::geo::GeoPoint;

pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use nearch_entities::{display_item::*, geo::*, id::*, place::*};
}

/// Source of the point that all distances are measured from,
/// usually the current position of the user.
pub trait LocationGateway {
    fn reference_point(&self) -> Option<GeoPoint>;
}
