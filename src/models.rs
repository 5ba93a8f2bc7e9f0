//! Data types and associated functions and methods

use crate::error::MedalistError;

use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// Sentinel year value selecting every Olympic edition.
pub const OVERALL: &str = "Overall";

/// Year selection for the medal tally query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum YearSelection {
    /// Every edition
    Overall,
    /// A single edition year
    Year(i32),
}

impl FromStr for YearSelection {
    type Err = ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == OVERALL {
            Ok(Self::Overall)
        } else {
            value.parse().map(Self::Year)
        }
    }
}

/// Query parameters for the medal tally endpoint
#[derive(Debug, Deserialize, PartialEq, Validate)]
pub struct TallyQuery {
    /// Year filter: the "Overall" sentinel or an integer year
    #[serde(default = "default_year")]
    #[validate(custom = "validate_year")]
    pub year: String,
}

impl TallyQuery {
    /// Returns the parsed year selection.
    pub fn selection(&self) -> Result<YearSelection, MedalistError> {
        self.year.parse().map_err(|_| MedalistError::InvalidYear {
            year: self.year.clone(),
        })
    }
}

/// Returns the default year filter.
fn default_year() -> String {
    OVERALL.to_string()
}

/// Validate a year filter value.
fn validate_year(year: &str) -> Result<(), ValidationError> {
    if year.parse::<YearSelection>().is_err() {
        let mut error = ValidationError::new("year must be \"Overall\" or an integer year");
        error.add_param("year".into(), &year);
        return Err(error);
    }
    Ok(())
}

/// Welcome record returned from the root endpoint.
#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Welcome {
    /// Human-readable greeting for the dashboard client
    pub message: String,
}

impl Welcome {
    /// Return a new Welcome record.
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Top-level dashboard summary counts.
#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Number of Olympic editions, excluding the most recent in the data
    pub editions: u64,
    /// Number of distinct host cities
    pub hosts: u64,
    /// Number of distinct sports
    pub sports: u64,
    /// Number of distinct events
    pub events: u64,
    /// Number of distinct athlete names
    pub athletes: u64,
    /// Number of distinct regions with a known NOC mapping
    pub nations: u64,
}

/// Medal counts for one region.
#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TallyRow {
    /// Region name
    pub region: String,
    /// Number of Gold medals
    #[serde(rename = "Gold")]
    pub gold: u64,
    /// Number of Silver medals
    #[serde(rename = "Silver")]
    pub silver: u64,
    /// Number of Bronze medals
    #[serde(rename = "Bronze")]
    pub bronze: u64,
    /// Sum of the three medal counts
    pub total: u64,
}

/// Number of participating nations in one year.
#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NationCount {
    /// Edition year
    #[serde(rename = "Year")]
    pub year: i32,
    /// Number of nations that participated
    pub count: u64,
}

/// One entry of the year filter list.
///
/// The list mixes the string sentinel with integer years, so the entry serialises untagged.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum YearEntry {
    /// The sentinel entry selecting every edition
    Sentinel(&'static str),
    /// A single edition year
    Year(i32),
}

impl YearEntry {
    /// Return the sentinel entry.
    pub fn overall() -> Self {
        Self::Sentinel(OVERALL)
    }
}
