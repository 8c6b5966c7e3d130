use anyhow::anyhow;
use nearch_core::repositories::{Error as RepoError, PlaceRepo};
use nearch_entities::{geo::GeoPoint, place::PlaceRecord};
use serde::Deserialize;
use std::{fs, io::ErrorKind, path::PathBuf};

/// A place document as exported from the `locations` collection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceDocument {
    id: String,
    name: String,
    place_type: String,
    latitude: f64,
    longitude: f64,
}

impl From<PlaceDocument> for PlaceRecord {
    fn from(from: PlaceDocument) -> Self {
        let PlaceDocument {
            id,
            name,
            place_type,
            latitude,
            longitude,
        } = from;
        Self {
            id: id.into(),
            name,
            category: place_type,
            location: GeoPoint::from_lat_lng_deg(latitude, longitude),
        }
    }
}

pub fn parse_places(json: &str) -> Result<Vec<PlaceRecord>, RepoError> {
    let documents: Vec<PlaceDocument> =
        serde_json::from_str(json).map_err(|err| anyhow!("Malformed place document: {err}"))?;
    Ok(documents.into_iter().map(PlaceRecord::from).collect())
}

/// Read-only place store backed by a JSON file.
#[derive(Debug)]
pub struct JsonFilePlaceRepo {
    path: PathBuf,
}

impl JsonFilePlaceRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PlaceRepo for JsonFilePlaceRepo {
    fn all_places(&self) -> Result<Vec<PlaceRecord>, RepoError> {
        log::debug!("Reading places from {}", self.path.display());
        let json = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => {
                log::warn!("Places file {} not found", self.path.display());
                RepoError::NotFound
            }
            _ => RepoError::Io(err),
        })?;
        parse_places(&json)
    }
}
