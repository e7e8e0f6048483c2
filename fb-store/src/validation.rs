//! Write-time validation rules
//!
//! Required attributes must be present and non-blank before a record is
//! stored. Races additionally need both calendar fields, since the
//! `(year, round)` uniqueness check depends on them.

use crate::entities::{Driver, Race, Team, Track};
use crate::error::{CatalogError, CatalogResult};

/// Fails when `value` is empty or whitespace only
pub fn require_text(entity: &str, field: &str, value: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::validation(format!(
            "{} {} must not be blank",
            entity, field
        )));
    }
    Ok(())
}

/// Fails when `value` is missing
pub fn require_present<T>(entity: &str, field: &str, value: Option<T>) -> CatalogResult<T> {
    value.ok_or_else(|| CatalogError::validation(format!("{} {} is required", entity, field)))
}

pub fn validate_driver(driver: &Driver) -> CatalogResult<()> {
    require_text("Driver", "firstName", &driver.first_name)?;
    require_text("Driver", "lastName", &driver.last_name)?;
    require_text("Driver", "nationality", &driver.nationality)
}

pub fn validate_team(team: &Team) -> CatalogResult<()> {
    require_text("Team", "name", &team.name)?;
    require_text("Team", "nationality", &team.nationality)
}

pub fn validate_track(track: &Track) -> CatalogResult<()> {
    require_text("Track", "name", &track.name)?;
    require_text("Track", "country", &track.country)?;
    require_text("Track", "city", &track.city)
}

/// Returns the race's `(year, round)` key when it validates
pub fn validate_race(race: &Race) -> CatalogResult<(i32, i32)> {
    let year = require_present("Race", "year", race.year)?;
    let round = require_present("Race", "round", race.round)?;
    Ok((year, round))
}
