use crate::models::null_as_empty;
use crate::{CoreError, CoreResult, DEFAULT_STARTING_BALANCE};

use std::panic::Location;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub starting_balance: Option<f64>,
}

/// Body of `POST /api/competitions` (administrators only).
///
/// Competitions run for whole days: the start is pinned to midnight and the
/// end to the last second of its day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCompetition {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub starting_balance: f64,
}

impl NewCompetition {
    /// Build from calendar dates in `YYYY-MM-DD` form.
    #[track_caller]
    pub fn from_dates(
        name: &str,
        description: Option<&str>,
        start_date: &str,
        end_date: &str,
        starting_balance: Option<f64>,
    ) -> CoreResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation {
                message: "competition name is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let start_day = parse_date(start_date)?;
        let end_day = parse_date(end_date)?;
        if end_day < start_day {
            return Err(CoreError::Validation {
                message: format!("end date {end_day} is before start date {start_day}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let starting_balance = starting_balance.unwrap_or(DEFAULT_STARTING_BALANCE);
        if !starting_balance.is_finite() || starting_balance <= 0.0 {
            return Err(CoreError::Validation {
                message: format!("starting balance must be positive, got {starting_balance}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            name: name.to_string(),
            description: description.unwrap_or_default().to_string(),
            start_date: start_day.and_time(NaiveTime::MIN),
            end_date: end_day.and_hms_opt(23, 59, 59).unwrap_or(end_day.and_time(NaiveTime::MIN)),
            starting_balance,
        })
    }
}

#[track_caller]
fn parse_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| CoreError::InvalidDate {
        value: value.to_string(),
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}
