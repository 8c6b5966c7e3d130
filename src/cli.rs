use crate::{browse, config::Config, presenter, store::JsonFilePlaceRepo};
use anyhow::Result;
use clap::{Parser, Subcommand};
use nearch_core::{
    usecases::{self, FilterCriteria},
    LocationGateway,
};
use nearch_entities::geo::GeoPoint;
use std::{io, path::PathBuf};

#[derive(Parser)]
#[command(version, about = "Find places near you")]
struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON file with the place documents
    #[arg(long, value_name = "FILE")]
    places: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter the places once and print the result
    Search {
        /// Reference point to measure distances from
        #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
        at: Option<GeoPoint>,

        /// Text to look for in names and categories
        #[arg(short, long, default_value = "")]
        query: String,

        /// Maximum distance in kilometers, 0 for no limit
        #[arg(short = 'd', long, value_name = "KM")]
        max_distance: Option<f64>,
    },
    /// Filter the places interactively, line by line from stdin
    Browse {
        /// Reference point to measure distances from
        #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
        at: Option<GeoPoint>,
    },
}

/// The reference point is either given on the command line
/// or taken from the configuration.
struct FixedLocation(Option<GeoPoint>);

impl LocationGateway for FixedLocation {
    fn reference_point(&self) -> Option<GeoPoint> {
        self.0
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    let places_file = args.places.unwrap_or(cfg.places.file);
    let repo = JsonFilePlaceRepo::new(places_file);

    match args.command {
        Command::Search {
            at,
            query,
            max_distance,
        } => {
            let location = FixedLocation(at.or(cfg.search.reference_point));
            let reference = usecases::reference_point(&location)?;
            let max_distance_km = max_distance.unwrap_or(cfg.search.max_distance_km);
            let criteria = FilterCriteria::new(&query, max_distance_km)?;
            let items = usecases::load_display_items(&repo, reference)?;
            log::info!("Search {} place(s) around {reference}", items.len());
            let filtered = usecases::filter_display_items(&items, &criteria);
            presenter::render(&mut io::stdout().lock(), max_distance_km, &filtered)?;
        }
        Command::Browse { at } => {
            let location = FixedLocation(at.or(cfg.search.reference_point));
            let reference = usecases::reference_point(&location)?;
            let items = usecases::load_display_items(&repo, reference)?;
            log::info!("Browse {} place(s) around {reference}", items.len());
            browse::browse(
                &items,
                cfg.search.max_distance_km,
                io::stdin().lock(),
                &mut io::stdout().lock(),
            )?;
        }
    }
    Ok(())
}
