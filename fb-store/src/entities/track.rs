//! Track entity

use serde::{Deserialize, Serialize};
use std::fmt;

use super::driver::display_id;
use super::{contains_ignore_case, CatalogEntity};

/// Circuit record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Track {
    pub id: Option<i64>,
    pub name: String,
    pub country: String,
    pub city: String,
    /// Lap length in kilometres
    pub length: Option<f64>,
    pub turns: Option<i32>,
    pub description: Option<String>,
    pub first_grand_prix: Option<i32>,
}

impl Track {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            city: city.into(),
            ..Default::default()
        }
    }

    pub fn name_matches(&self, fragment: &str) -> bool {
        contains_ignore_case(&self.name, fragment)
    }
}

impl CatalogEntity for Track {
    const TABLE: &'static str = "tracks";
    const KIND: &'static str = "Track";

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

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Track{{id={}, name='{}', city='{}', country='{}'}}",
            display_id(self.id),
            self.name,
            self.city,
            self.country
        )
    }
}
