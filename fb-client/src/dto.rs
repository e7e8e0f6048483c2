//! Data transfer objects received from the remote catalogs
//!
//! These mirror the remote JSON representations and are owned by this
//! crate: unknown fields are ignored and every field may be missing.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Driver as served by drivers-api
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DriverDto {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub driver_number: Option<i32>,
    pub team_id: Option<i64>,
    pub bio: Option<String>,
    pub helmet_color: Option<String>,
}

/// Career statistics of one driver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DriverStats {
    pub driver_id: Option<i64>,
    pub seasons: Option<i32>,
    pub races: Option<i32>,
    pub wins: Option<i32>,
    pub podiums: Option<i32>,
    pub pole_positions: Option<i32>,
    pub fastest_laps: Option<i32>,
    pub points: Option<f64>,
    pub championships: Option<i32>,
}

/// Team as served by teams-api
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub founded_year: Option<i32>,
    pub team_principal: Option<String>,
    pub headquarters: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
}

/// Race weekend as served by events-api
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RaceWeekend {
    pub id: Option<i64>,
    pub race_id: Option<i64>,
    pub name: Option<String>,
    pub circuit: Option<String>,
    pub country: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// One session (practice, qualifying, sprint, race) of a weekend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub id: Option<i64>,
    pub race_id: Option<i64>,
    pub session_type: Option<String>,
    pub name: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub status: Option<String>,
}
