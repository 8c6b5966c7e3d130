use crate::presenter;
use anyhow::Result;
use nearch_core::{
    usecases::{filter_display_items, FilterCriteria},
    util::validate::is_valid_max_distance_km,
};
use nearch_entities::display_item::DisplayItem;
use std::io::{BufRead, Write};
use thiserror::Error;

const CMD_DISTANCE: &str = ":d";
const CMD_QUIT: &str = ":q";

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Query(String),
    MaxDistance(f64),
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Invalid distance '{0}', expected kilometers >= 0")]
    Distance(String),
}

pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim() == CMD_QUIT {
        return Ok(Input::Quit);
    }
    let trimmed = line.trim();
    let (cmd, arg) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    if cmd == CMD_DISTANCE {
        let km = arg.trim();
        return km
            .parse::<f64>()
            .ok()
            .filter(|km| is_valid_max_distance_km(*km))
            .map(Input::MaxDistance)
            .ok_or_else(|| InputError::Distance(km.to_owned()));
    }
    Ok(Input::Query(line.to_owned()))
}

/// Interactive filtering: every input line is an event that
/// changes either the query or the distance limit.
pub fn browse<R, W>(
    items: &[DisplayItem],
    max_distance_km: f64,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut query = String::new();
    let mut max_distance_km = max_distance_km;
    let criteria = FilterCriteria::new(&query, max_distance_km)?;
    presenter::render(out, max_distance_km, &filter_display_items(items, &criteria))?;
    writeln!(
        out,
        "Type to search, '{CMD_DISTANCE} <km>' to limit the distance, '{CMD_QUIT}' to quit."
    )?;
    for line in input.lines() {
        match parse_input(&line?) {
            Ok(Input::Quit) => break,
            Ok(Input::Query(q)) => query = q,
            Ok(Input::MaxDistance(km)) => max_distance_km = km,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        }
        let criteria = FilterCriteria::new(&query, max_distance_km)?;
        let filtered = filter_display_items(items, &criteria);
        presenter::render(out, max_distance_km, &filtered)?;
    }
    Ok(())
}
