//! Race entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::driver::display_id;
use super::CatalogEntity;

/// Race record
///
/// `(year, round)` identifies a race within the calendar and is unique
/// across the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Race {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub year: Option<i32>,
    pub round: Option<i32>,
    pub circuit: Option<String>,
    pub date: Option<NaiveDate>,
}

impl Race {
    pub fn new(name: impl Into<String>, year: i32, round: i32, date: NaiveDate) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            year: Some(year),
            round: Some(round),
            circuit: None,
            date: Some(date),
        }
    }

    pub fn with_circuit(mut self, circuit: impl Into<String>) -> Self {
        self.circuit = Some(circuit.into());
        self
    }

    /// The `(year, round)` calendar key, if both halves are set
    pub fn calendar_key(&self) -> Option<(i32, i32)> {
        Some((self.year?, self.round?))
    }
}

impl CatalogEntity for Race {
    const TABLE: &'static str = "races";
    const KIND: &'static str = "Race";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn label(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Race{{id={}, name='{}', circuit='{}', date={}}}",
            display_id(self.id),
            self.name.as_deref().unwrap_or_default(),
            self.circuit.as_deref().unwrap_or_default(),
            self.date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "null".to_string())
        )
    }
}
