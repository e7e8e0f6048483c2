//! formulaBlu catalog store
//!
//! Entities, repositories and services behind the drivers, teams, tracks
//! and races catalog services.
//!
//! # Layers
//!
//! - `entities` - plain records with camelCase JSON representations
//! - `repos` - one repository trait per entity plus the in-memory backend
//! - `services` - validation and the race `(year, round)` uniqueness rule
//!
//! # Usage Example
//!
//! ```ignore
//! use fb_store::{CatalogServices, Driver};
//!
//! async fn example() {
//!     let services = CatalogServices::in_memory();
//!     let max = services
//!         .drivers
//!         .create_driver(Driver::new("Max", "Verstappen", "Dutch"))
//!         .await
//!         .unwrap();
//!     assert_eq!(max.id, Some(1));
//! }
//! ```

pub mod entities;
pub mod error;
pub mod fixtures;
pub mod repos;
pub mod services;
pub mod validation;

// Re-export main types
pub use entities::*;
pub use error::*;
pub use repos::*;
pub use services::*;
