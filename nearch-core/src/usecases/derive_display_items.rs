use super::prelude::*;

/// Measure every record against the reference point, keeping the input order.
pub fn derive_display_items(
    records: impl IntoIterator<Item = PlaceRecord>,
    reference: GeoPoint,
) -> Vec<DisplayItem> {
    records
        .into_iter()
        .map(|record| DisplayItem::new(record, reference))
        .collect()
}
