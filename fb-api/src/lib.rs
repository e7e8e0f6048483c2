//! formulaBlu Catalog API
//!
//! REST services for the drivers, teams, tracks and races catalogs. Each
//! catalog can run as its own service or all four can share one process.
//!
//! ## Endpoints
//!
//! ### Drivers (`drivers-api`)
//! - GET /api/drivers - List drivers
//! - GET /api/drivers/:id - Get driver
//! - GET /api/drivers/nationality/:nationality - Drivers by nationality
//! - GET /api/drivers/team/:team_id - Drivers by team reference
//! - GET /api/drivers/search?name= - Search first/last name
//! - POST /api/drivers - Create driver
//! - PUT /api/drivers/:id - Replace driver
//! - DELETE /api/drivers/:id - Delete driver
//!
//! ### Teams (`teams-api`)
//! - GET /api/teams, GET /api/teams/:id
//! - GET /api/teams/nationality/:nationality
//! - GET /api/teams/founded/:year
//! - GET /api/teams/search?name=
//! - POST /api/teams, PUT /api/teams/:id, DELETE /api/teams/:id
//!
//! ### Tracks (`tracks-api`)
//! - GET /api/tracks, GET /api/tracks/:id
//! - GET /api/tracks/country/:country
//! - GET /api/tracks/search?name=
//! - POST /api/tracks, PUT /api/tracks/:id, DELETE /api/tracks/:id
//!
//! ### Races (`races-api`)
//! - GET /api/v1/race - List races
//! - GET /api/v1/race/:id - Get race
//! - POST /api/v1/race - Create race (409 on a duplicate year/round)
//! - GET /api/v1/race/circuit/:circuit - Races by circuit
//! - GET /api/v1/race/year/:year - One season
//!
//! Drivers, teams and tracks allow cross-origin calls from any origin; the
//! races API does not.

pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::*;
pub use error::*;
pub use routes::*;
pub use server::*;
pub use state::*;

/// API version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
