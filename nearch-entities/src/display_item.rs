use crate::{geo::*, id::*, place::*};

/// A place prepared for presentation.
///
/// The distance is a snapshot relative to the reference point that
/// was used when the item was created. It is not updated when the
/// reference point changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub id: Id,
    pub name: String,
    pub category: String,
    pub distance: Distance,
}

impl DisplayItem {
    pub fn new(record: PlaceRecord, reference: GeoPoint) -> Self {
        let distance = record.distance_from(reference);
        (record, distance).into()
    }

    /// Expects an already lowercased needle.
    pub fn contains_lowercase_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }

    pub fn is_within(&self, max_distance: Distance) -> bool {
        self.distance <= max_distance
    }
}

impl From<(PlaceRecord, Distance)> for DisplayItem {
    fn from(from: (PlaceRecord, Distance)) -> Self {
        let (
            PlaceRecord {
                id, name, category, ..
            },
            distance,
        ) = from;
        Self {
            id,
            name,
            category,
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn new_item_from_record() {
        let record = PlaceRecord::build()
            .id("castle")
            .name("Castle")
            .category("Historic")
            .pos(GeoPoint::from_lat_lng_deg(48.8566, 2.3522))
            .finish();
        let reference = GeoPoint::from_lat_lng_deg(51.5074, -0.1278);
        let item = DisplayItem::new(record.clone(), reference);
        assert_eq!(item.id, record.id);
        assert_eq!(item.name, "Castle");
        assert_eq!(item.category, "Historic");
        assert_eq!(item.distance, GeoPoint::distance(reference, record.location));
    }

    #[test]
    fn item_at_reference_point() {
        let pos = GeoPoint::from_lat_lng_deg(10.0, 20.0);
        let item = DisplayItem::new(PlaceRecord::build().pos(pos).finish(), pos);
        assert_eq!(item.distance.to_meters(), 0.0);
    }

    #[test]
    fn contains_text_in_name_or_category() {
        let item = DisplayItem::build()
            .name("Old Castle")
            .category("Historic")
            .finish();
        assert!(item.contains_lowercase_text("castle"));
        assert!(item.contains_lowercase_text("hist"));
        assert!(item.contains_lowercase_text(""));
        assert!(!item.contains_lowercase_text("museum"));
        // the needle is expected to be lowercase already
        assert!(!item.contains_lowercase_text("Castle"));
    }

    #[test]
    fn within_distance_is_inclusive() {
        let item = DisplayItem::build().distance_meters(10_000.0).finish();
        assert!(item.is_within(Distance::from_km(10.0)));
        assert!(item.is_within(Distance::infinite()));
        assert!(!item.is_within(Distance::from_meters(9_999.9)));
    }
}
