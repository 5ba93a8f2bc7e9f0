//! Source dataset loading.
//!
//! Reads the two delimited source tables into typed in-memory rows: the athlete event records
//! (one row per athlete-event entry) and the NOC to region mapping. The file paths are fixed at
//! startup and never request-configurable; a missing or malformed file is fatal, since the
//! dataset is foundational and the service must not start partially.

use crate::error::MedalistError;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;
use strum_macros::Display;

/// Medal outcome of an athlete event entry.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

/// Olympic games season.
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq)]
pub enum Season {
    Summer,
    Winter,
}

/// One row of the athlete event records table.
///
/// The numeric athlete attributes and the medal outcome may be absent, written as `NA` in the
/// source data.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct EventRecord {
    /// Numeric athlete identifier
    #[serde(rename = "ID")]
    pub id: u32,
    /// Athlete name
    #[serde(rename = "Name")]
    pub name: String,
    /// Athlete sex
    #[serde(rename = "Sex")]
    pub sex: String,
    /// Athlete age in years
    #[serde(rename = "Age", deserialize_with = "optional_f32")]
    pub age: Option<f32>,
    /// Athlete height in centimetres
    #[serde(rename = "Height", deserialize_with = "optional_f32")]
    pub height: Option<f32>,
    /// Athlete weight in kilograms
    #[serde(rename = "Weight", deserialize_with = "optional_f32")]
    pub weight: Option<f32>,
    /// Team name
    #[serde(rename = "Team")]
    pub team: String,
    /// National Olympic Committee code
    #[serde(rename = "NOC")]
    pub noc: String,
    /// Games label, e.g. "2000 Summer"
    #[serde(rename = "Games")]
    pub games: String,
    /// Edition year
    #[serde(rename = "Year")]
    pub year: i32,
    /// Games season
    #[serde(rename = "Season")]
    pub season: Season,
    /// Host city
    #[serde(rename = "City")]
    pub city: String,
    /// Sport
    #[serde(rename = "Sport")]
    pub sport: String,
    /// Event name within the sport
    #[serde(rename = "Event")]
    pub event: String,
    /// Medal outcome, if any
    #[serde(rename = "Medal", deserialize_with = "optional_medal")]
    pub medal: Option<Medal>,
}

/// One row of the NOC to region mapping table.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RegionRecord {
    /// National Olympic Committee code
    #[serde(rename = "NOC")]
    pub noc: String,
    /// Human-readable region name, if known
    #[serde(rename = "region", deserialize_with = "optional_string")]
    pub region: Option<String>,
    /// Free-form notes on the code
    #[serde(rename = "notes", deserialize_with = "optional_string")]
    pub notes: Option<String>,
}

/// Read the athlete event records table.
///
/// # Arguments
///
/// * `path`: Path to the events table
pub fn load_events(path: &Path) -> Result<Vec<EventRecord>, MedalistError> {
    read_table(path)
}

/// Read the NOC to region mapping table.
///
/// # Arguments
///
/// * `path`: Path to the mapping table
pub fn load_regions(path: &Path) -> Result<Vec<RegionRecord>, MedalistError> {
    read_table(path)
}

/// Read a delimited table into typed rows.
fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, MedalistError> {
    let dataset_read = |source| MedalistError::DatasetRead {
        path: path.to_owned(),
        source,
    };
    let reader = csv::Reader::from_path(path).map_err(dataset_read)?;
    collect_rows(reader).map_err(dataset_read)
}

/// Collect every row from a CSV reader, failing on the first malformed record.
fn collect_rows<T, R>(mut reader: csv::Reader<R>) -> Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    reader.deserialize().collect()
}

/// Deserialise a numeric field where absence is written as `NA`.
fn optional_f32<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.as_str() {
        "" | "NA" => Ok(None),
        value => value
            .parse::<f32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Deserialise a string field where absence is written as `NA`.
fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.as_str() {
        "" | "NA" => Ok(None),
        _ => Ok(Some(raw)),
    }
}

/// Deserialise a medal outcome where absence is written as `NA`.
fn optional_medal<'de, D>(deserializer: D) -> Result<Option<Medal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.as_str() {
        "" | "NA" => Ok(None),
        "Gold" => Ok(Some(Medal::Gold)),
        "Silver" => Ok(Some(Medal::Silver)),
        "Bronze" => Ok(Some(Medal::Bronze)),
        value => Err(serde::de::Error::unknown_variant(
            value,
            &["Gold", "Silver", "Bronze", "NA"],
        )),
    }
}
