//! Catalog entity definitions
//!
//! Each entity implements [`CatalogEntity`], which is all the in-memory
//! table needs to assign identities and render log lines.

mod driver;
mod race;
mod team;
mod track;

pub use driver::*;
pub use race::*;
pub use team::*;
pub use track::*;

/// Common contract for every catalog record
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    /// Table name of the backing store
    const TABLE: &'static str;
    /// Human-readable entity kind used in errors and logs
    const KIND: &'static str;

    /// Surrogate identity, `None` until the store assigns one
    fn id(&self) -> Option<i64>;

    /// Set the surrogate identity
    fn set_id(&mut self, id: i64);

    /// Primary name or label of the record
    fn label(&self) -> String;

    /// Return the entity carrying the given identity
    fn with_id(mut self, id: i64) -> Self {
        self.set_id(id);
        self
    }
}

/// Case-insensitive substring match used by the name searches
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Verstappen", "STAP"));
        assert!(contains_ignore_case("Monza", ""));
        assert!(!contains_ignore_case("Monza", "spa"));
    }
}
