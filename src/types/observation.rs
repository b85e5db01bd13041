//! Observation records supplied by the caller

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::{HeatmapError, Result};

/// A single `{date, count}` record.
/// Dates are not checked for uniqueness; the first match wins on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub count: u64,
}

impl Observation {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self { date, count }
    }
}

/// Count resolved for one day of the range (handed to click handlers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// Parse a calendar date from `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS`
/// timestamp, or RFC 3339. Timestamps keep the calendar date as written.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }

    Err(HeatmapError::Parse(format!("invalid date: {:?}", value)))
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

/// Parse a JSON array of observations
pub fn parse_observations(json: &str) -> Result<Vec<Observation>> {
    serde_json::from_str(json).map_err(|e| HeatmapError::Parse(e.to_string()))
}
