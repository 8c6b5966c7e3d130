use anyhow::{anyhow, Result};
use nearch_core::util::validate::is_valid_max_distance_km;
use nearch_entities::geo::GeoPoint;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "nearchitectural.toml";

const ENV_NAME_PLACES_FILE: &str = "PLACES_FILE";

#[derive(Debug)]
pub struct Config {
    pub places: Places,
    pub search: Search,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(places_file) = env::var(ENV_NAME_PLACES_FILE) {
            log::info!("Use places file from {ENV_NAME_PLACES_FILE}");
            cfg.places.file = places_file.into();
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Places {
    /// JSON file with all place documents.
    pub file: PathBuf,
}

#[derive(Debug)]
pub struct Search {
    pub reference_point: Option<GeoPoint>,
    /// `0` means no limit.
    pub max_distance_km: f64,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { places, search } = from;

        let raw::Places { file } = places.unwrap_or_default();
        let places = Places { file };

        let raw::Search {
            reference_point,
            max_distance_km,
        } = search.unwrap_or_default();

        let reference_point = reference_point
            .map(|pt| {
                pt.parse::<GeoPoint>()
                    .map_err(|err| anyhow!("Invalid reference point '{pt}': {err}"))
            })
            .transpose()?;
        if reference_point.is_none() {
            log::warn!("No default reference point configured");
        }

        let max_distance_km = max_distance_km.unwrap_or_default();
        if !is_valid_max_distance_km(max_distance_km) {
            return Err(anyhow!("Invalid maximum distance: {max_distance_km} km"));
        }

        Ok(Self {
            places,
            search: Search {
                reference_point,
                max_distance_km,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(cfg_string: &str) -> Result<Config> {
        let raw_config: raw::Config = toml::from_str(cfg_string)?;
        Config::try_from(raw_config)
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn load_default_config_if_file_is_missing() {
        let cfg = Config::try_load_from_file_or_default(Some("does-not-exist.toml")).unwrap();
        assert_eq!(0.0, cfg.search.max_distance_km);
    }

    #[test]
    fn convert_default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(Path::new("places.json"), cfg.places.file);
        assert!(cfg.search.reference_point.is_none());
        assert_eq!(0.0, cfg.search.max_distance_km);
    }

    #[test]
    fn convert_search_config() {
        let cfg = parse(
            r#"
            [search]
            reference-point = "48.8566,2.3522"
            max-distance-km = 10.0
        "#,
        )
        .unwrap();
        assert_eq!(
            Some(GeoPoint::from_lat_lng_deg(48.8566, 2.3522)),
            cfg.search.reference_point
        );
        assert_eq!(10.0, cfg.search.max_distance_km);
        assert_eq!(Path::new("places.json"), cfg.places.file);
    }

    #[test]
    fn reject_invalid_reference_point() {
        assert!(parse("[search]\nreference-point = \"95.0,0.0\"").is_err());
        assert!(parse("[search]\nreference-point = \"somewhere\"").is_err());
    }

    #[test]
    fn reject_negative_max_distance() {
        assert!(parse("[search]\nmax-distance-km = -1.0").is_err());
    }
}
