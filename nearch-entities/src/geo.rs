use itertools::Itertools;
use std::{fmt, num::ParseFloatError, str::FromStr};
use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid latitude '{0}': {1}")]
    LatitudeNumber(String, #[source] ParseFloatError),
    #[error("Invalid longitude '{0}': {1}")]
    LongitudeNumber(String, #[source] ParseFloatError),
    #[error("Invalid latitude degrees: {0}")]
    LatitudeRange(f64),
    #[error("Invalid longitude degrees: {0}")]
    LongitudeRange(f64),
    #[error("Failed to parse GeoPoint: {0}")]
    Format(String),
}

/// A geographical position given in decimal degrees.
///
/// Any pair of numbers can be stored, use [`GeoPoint::is_valid`]
/// or [`GeoPoint::try_from_lat_lng_deg`] at the boundaries where
/// untrusted coordinates enter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let pt = Self::from_lat_lng_deg(lat, lng);
        pt.is_valid().then_some(pt)
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        is_valid_lat_deg(self.lat) && is_valid_lng_deg(self.lng)
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, ParseError> {
        let lat_deg_str = lat_deg_str.trim();
        let lng_deg_str = lng_deg_str.trim();
        let lat_deg = lat_deg_str
            .parse::<f64>()
            .map_err(|err| ParseError::LatitudeNumber(lat_deg_str.to_owned(), err))?;
        let lng_deg = lng_deg_str
            .parse::<f64>()
            .map_err(|err| ParseError::LongitudeNumber(lng_deg_str.to_owned(), err))?;
        if !is_valid_lat_deg(lat_deg) {
            return Err(ParseError::LatitudeRange(lat_deg));
        }
        if !is_valid_lng_deg(lng_deg) {
            return Err(ParseError::LongitudeRange(lng_deg));
        }
        Ok(Self::from_lat_lng_deg(lat_deg, lng_deg))
    }
}

fn is_valid_lat_deg(deg: f64) -> bool {
    (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

fn is_valid_lng_deg(deg: f64) -> bool {
    (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat_deg(), self.lng_deg())
    }
}

impl FromStr for GeoPoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            GeoPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(ParseError::Format(s.to_owned()))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn from_km(km: f64) -> Self {
        Self(km * 1_000.0)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_km(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

impl GeoPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using the haversine formula.
    /// Reference: https://en.wikipedia.org/wiki/Haversine_formula
    pub fn distance(p1: GeoPoint, p2: GeoPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin;
        // Rounding may push `a` slightly above 1 for antipodal points
        let a = if a > 1.0 { 1.0 } else { a };
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * c)
    }
}
