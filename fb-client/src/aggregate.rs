//! Results aggregation over the remote catalogs
//!
//! Aggregates fail fast: the first remote failure fails the whole
//! composition, and no partial result is returned.

use serde::Serialize;

use crate::client::RemoteCatalog;
use crate::config::ClientConfig;
use crate::dto::{DriverDto, DriverStats, RaceWeekend, Session, TeamDto};
use crate::error::ClientResult;

/// A driver with the team it references
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverProfile {
    pub driver: DriverDto,
    /// `None` only when the driver has no team reference
    pub team: Option<TeamDto>,
}

/// A driver's profile and career statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverCareer {
    pub profile: DriverProfile,
    pub stats: DriverStats,
}

/// A team with its drivers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLineup {
    pub team: TeamDto,
    pub drivers: Vec<DriverDto>,
}

/// A race weekend with its sessions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendOverview {
    pub weekend: RaceWeekend,
    pub sessions: Vec<Session>,
}

/// Composes lookups across the drivers, teams and events services
#[derive(Debug, Clone)]
pub struct ResultsAggregator {
    remote: RemoteCatalog,
}

impl ResultsAggregator {
    pub fn new(remote: RemoteCatalog) -> Self {
        Self { remote }
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(RemoteCatalog::new(config)?))
    }

    pub fn remote(&self) -> &RemoteCatalog {
        &self.remote
    }

    /// Driver plus referenced team
    ///
    /// A dangling team reference surfaces as the teams service's
    /// `NotFound`, not as a missing team.
    pub async fn driver_profile(&self, driver_id: i64) -> ClientResult<DriverProfile> {
        let driver = self.remote.drivers.get_driver(driver_id).await?;

        let team = match driver.team_id {
            Some(team_id) => Some(self.remote.teams.get_team(team_id).await?),
            None => None,
        };

        Ok(DriverProfile { driver, team })
    }

    /// Profile plus career statistics
    pub async fn driver_career(&self, driver_id: i64) -> ClientResult<DriverCareer> {
        let profile = self.driver_profile(driver_id).await?;
        let stats = self.remote.drivers.get_driver_stats(driver_id).await?;
        Ok(DriverCareer { profile, stats })
    }

    pub async fn team_lineup(&self, team_id: i64) -> ClientResult<TeamLineup> {
        let team = self.remote.teams.get_team(team_id).await?;
        let drivers = self.remote.teams.get_team_drivers(team_id).await?;
        Ok(TeamLineup { team, drivers })
    }

    /// Weekend plus the sessions of its race; a weekend without a race
    /// reference has no sessions
    pub async fn weekend_overview(&self, weekend_id: i64) -> ClientResult<WeekendOverview> {
        let weekend = self.remote.events.get_race_weekend(weekend_id).await?;

        let sessions = match weekend.race_id {
            Some(race_id) => self.remote.events.get_race_sessions(race_id).await?,
            None => Vec::new(),
        };

        Ok(WeekendOverview { weekend, sessions })
    }
}
