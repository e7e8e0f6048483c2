//! formulaBlu remote catalog clients
//!
//! Typed HTTP clients the results service uses to read from the other
//! catalog services, plus the aggregation that composes their answers.
//!
//! | Client | Logical service | Lookups |
//! |---|---|---|
//! | [`DriversApiClient`] | `drivers-api` | driver, career stats |
//! | [`TeamsApiClient`] | `teams-api` | team, team drivers |
//! | [`EventsApiClient`] | `events-api` | race weekend, race sessions, session |
//!
//! Every lookup is exactly one request. There is no caching and no retry;
//! each call is bounded by the client's timeout. A 404, any other non-2xx
//! status, an unreachable service and an undecodable body are reported as
//! distinct [`ClientError`] variants.

pub mod aggregate;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;

pub use aggregate::*;
pub use client::*;
pub use config::*;
pub use dto::*;
pub use error::*;
