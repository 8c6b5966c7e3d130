use super::prelude::*;
use crate::util::{
    sort::SortByName,
    validate::{PlaceInvalidation, Validate},
};

/// Fetch all places and prepare them for the initial presentation:
/// measured against `reference` and sorted by name.
pub fn load_display_items<R: PlaceRepo>(repo: &R, reference: GeoPoint) -> Result<Vec<DisplayItem>> {
    let records = repo.all_places()?;
    log::debug!("Loaded {} place(s)", records.len());
    for record in &records {
        record.validate().map_err(|err| match err {
            PlaceInvalidation::Position => Error::InvalidPosition(record.location),
            err => Error::InvalidPlace(record.id.clone(), err),
        })?;
    }
    let mut items = super::derive_display_items(records, reference);
    items.sort_by_name();
    Ok(items)
}
