pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{display_item_builder::*, place_record_builder::*};

pub mod place_record_builder {

    use super::*;
    use crate::{geo::*, place::*};

    #[derive(Debug)]
    pub struct PlaceRecordBuild {
        record: PlaceRecord,
    }

    impl PlaceRecordBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.record.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.record.name = name.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.record.category = category.into();
            self
        }
        pub fn pos(mut self, pos: GeoPoint) -> Self {
            self.record.location = pos;
            self
        }
        pub fn finish(self) -> PlaceRecord {
            self.record
        }
    }

    impl Builder for PlaceRecord {
        type Build = PlaceRecordBuild;
        fn build() -> Self::Build {
            Self::Build {
                record: PlaceRecord {
                    id: "place".into(),
                    name: "".into(),
                    category: "".into(),
                    location: GeoPoint::from_lat_lng_deg(0.0, 0.0),
                },
            }
        }
    }
}

pub mod display_item_builder {

    use super::*;
    use crate::{display_item::*, geo::*};

    #[derive(Debug)]
    pub struct DisplayItemBuild {
        item: DisplayItem,
    }

    impl DisplayItemBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.item.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.item.name = name.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.item.category = category.into();
            self
        }
        pub fn distance_meters(mut self, meters: f64) -> Self {
            self.item.distance = Distance::from_meters(meters);
            self
        }
        pub fn finish(self) -> DisplayItem {
            self.item
        }
    }

    impl Builder for DisplayItem {
        type Build = DisplayItemBuild;
        fn build() -> Self::Build {
            Self::Build {
                item: DisplayItem {
                    id: "item".into(),
                    name: "".into(),
                    category: "".into(),
                    distance: Distance::from_meters(0.0),
                },
            }
        }
    }
}
