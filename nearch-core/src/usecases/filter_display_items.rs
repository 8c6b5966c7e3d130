use super::prelude::*;
use crate::util::validate::is_valid_max_distance_km;

/// Text query and distance limit entered by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    lowercase_query: String,
    max_distance: Option<Distance>,
}

impl FilterCriteria {
    /// A `max_distance_km` of `0` disables the distance limit.
    pub fn new(query: &str, max_distance_km: f64) -> Result<Self> {
        if !is_valid_max_distance_km(max_distance_km) {
            return Err(Error::InvalidDistance(max_distance_km));
        }
        let max_distance = (max_distance_km > 0.0).then(|| Distance::from_km(max_distance_km));
        Ok(Self {
            lowercase_query: query.to_lowercase(),
            max_distance,
        })
    }

    pub fn query(&self) -> &str {
        &self.lowercase_query
    }

    pub const fn max_distance(&self) -> Option<Distance> {
        self.max_distance
    }

    pub fn matches(&self, item: &DisplayItem) -> bool {
        item.contains_lowercase_text(&self.lowercase_query)
            && self
                .max_distance
                .map_or(true, |max_distance| item.is_within(max_distance))
    }
}

pub fn filter_display_items(items: &[DisplayItem], criteria: &FilterCriteria) -> Vec<DisplayItem> {
    let filtered: Vec<_> = items
        .iter()
        .filter(|item| criteria.matches(item))
        .cloned()
        .collect();
    log::debug!(
        "Filtered {} of {} place(s) (query: '{}', max. distance: {:?})",
        filtered.len(),
        items.len(),
        criteria.query(),
        criteria.max_distance().map(Distance::to_meters),
    );
    filtered
}
