//! `dr-core`: foundational types for the `donroute` delivery-route planner.
//!
//! This crate is a dependency of every other `dr-*` crate.  It has no `dr-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `DistributionId`                             |
//! | [`kind`]   | `NodeKind` (officer / receiver)                        |
//! | [`geo`]    | `GeoPoint`, `haversine_km`                             |
//! | [`config`] | `RouteConfig` policy values                            |
//! | [`error`]  | `CoreError`, `CoreResult`                              |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RouteConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, haversine_km};
pub use ids::{DistributionId, NodeId};
pub use kind::NodeKind;
