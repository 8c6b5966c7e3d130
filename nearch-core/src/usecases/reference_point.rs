use super::prelude::*;
use crate::LocationGateway;

pub fn reference_point<G: LocationGateway>(gateway: &G) -> Result<GeoPoint> {
    let pos = gateway
        .reference_point()
        .ok_or(Error::MissingReferencePoint)?;
    if !pos.is_valid() {
        return Err(Error::InvalidPosition(pos));
    }
    Ok(pos)
}
