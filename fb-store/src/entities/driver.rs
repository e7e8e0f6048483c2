//! Driver entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{contains_ignore_case, CatalogEntity};

/// Driver record
///
/// `team_id` is an advisory reference into the teams catalog and is never
/// checked against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Driver {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub date_of_birth: Option<NaiveDate>,
    pub driver_number: Option<i32>,
    pub team_id: Option<i64>,
    pub bio: Option<String>,
    pub helmet_color: Option<String>,
}

impl Driver {
    /// Create a driver with the required attributes only
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        nationality: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            nationality: nationality.into(),
            ..Default::default()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether either name contains `fragment`, ignoring case
    pub fn name_matches(&self, fragment: &str) -> bool {
        contains_ignore_case(&self.first_name, fragment)
            || contains_ignore_case(&self.last_name, fragment)
    }
}

impl CatalogEntity for Driver {
    const TABLE: &'static str = "drivers";
    const KIND: &'static str = "Driver";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn label(&self) -> String {
        self.full_name()
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Driver{{id={}, name='{}', nationality='{}'",
            display_id(self.id),
            self.full_name(),
            self.nationality
        )?;
        if let Some(number) = self.driver_number {
            write!(f, ", number={}", number)?;
        }
        write!(f, "}}")
    }
}

pub(crate) fn display_id(id: Option<i64>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "null".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_json_is_camel_case() {
        let mut driver = Driver::new("Max", "Verstappen", "Dutch");
        driver.date_of_birth = NaiveDate::from_ymd_opt(1997, 9, 30);
        driver.team_id = Some(3);

        let json = serde_json::to_value(&driver).unwrap();
        assert_eq!(json["firstName"], "Max");
        assert_eq!(json["dateOfBirth"], "1997-09-30");
        assert_eq!(json["teamId"], 3);
        assert!(json["id"].is_null());
    }

    #[test]
    fn test_driver_missing_fields_default() {
        let driver: Driver = serde_json::from_str(r#"{"lastName":"Norris"}"#).unwrap();
        assert_eq!(driver.last_name, "Norris");
        assert!(driver.first_name.is_empty());
        assert_eq!(driver.id, None);
    }

    #[test]
    fn test_driver_name_matches_either_name() {
        let driver = Driver::new("Lewis", "Hamilton", "British");
        assert!(driver.name_matches("lew"));
        assert!(driver.name_matches("TON"));
        assert!(!driver.name_matches("max"));
    }

    #[test]
    fn test_driver_display() {
        let driver = Driver::new("Max", "Verstappen", "Dutch").with_id(1);
        assert_eq!(
            driver.to_string(),
            "Driver{id=1, name='Max Verstappen', nationality='Dutch'}"
        );
    }
}
