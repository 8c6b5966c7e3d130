use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("nearchitectural.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub places: Option<Places>,
    pub search: Option<Search>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Places {
    pub file: PathBuf,
}

impl Default for Places {
    fn default() -> Self {
        Config::default().places.expect("Places configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Search {
    pub reference_point: Option<String>,
    pub max_distance_km: Option<f64>,
}

impl Default for Search {
    fn default() -> Self {
        Config::default().search.expect("Search configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.places.is_some());
        assert!(cfg.search.is_some());
    }

    #[test]
    fn default_search_config() {
        let cfg = Search::default();
        assert!(cfg.reference_point.is_none());
        assert_eq!(Some(0.0), cfg.max_distance_km);
    }

    #[test]
    fn parse_full_config() {
        let cfg_string = r#"
            [places]
            file = "/var/lib/nearchitectural/locations.json"

            [search]
            reference-point = "51.5074,-0.1278"
            max-distance-km = 25.5
        "#;
        let cfg: Config = toml::from_str(cfg_string).unwrap();
        let search = cfg.search.unwrap();
        assert_eq!(Some("51.5074,-0.1278"), search.reference_point.as_deref());
        assert_eq!(Some(25.5), search.max_distance_km);
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str("[search]\nmax-distance-km = 3").unwrap();
        assert!(cfg.places.is_none());
        assert!(cfg.search.unwrap().reference_point.is_none());
    }
}
