//! Team entity

use serde::{Deserialize, Serialize};
use std::fmt;

use super::driver::display_id;
use super::{contains_ignore_case, CatalogEntity};

/// Team (constructor) record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub id: Option<i64>,
    pub name: String,
    pub nationality: String,
    pub founded_year: Option<i32>,
    pub team_principal: Option<String>,
    pub headquarters: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
}

impl Team {
    pub fn new(name: impl Into<String>, nationality: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nationality: nationality.into(),
            ..Default::default()
        }
    }

    pub fn name_matches(&self, fragment: &str) -> bool {
        contains_ignore_case(&self.name, fragment)
    }
}

impl CatalogEntity for Team {
    const TABLE: &'static str = "teams";
    const KIND: &'static str = "Team";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Team{{id={}, name='{}', nationality='{}'}}",
            display_id(self.id),
            self.name,
            self.nationality
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_json_fields() {
        let json = r##"{"name":"McLaren","nationality":"British","foundedYear":1963,"primaryColor":"#FF8000"}"##;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.founded_year, Some(1963));
        assert_eq!(team.primary_color.as_deref(), Some("#FF8000"));
        assert_eq!(team.label(), "McLaren");
    }
}
