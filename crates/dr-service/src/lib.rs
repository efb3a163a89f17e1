//! `dr-service`: one route-planning request, start to finish.
//!
//! ```text
//! LocationSource ──► GraphBuilder ──► Graph ──► optimize_route / BFS ──► RouteResponse
//!                                                                           │
//!                                              SegmentSink ◄── route_segments
//! ```
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`service`]  | `RouteService`                                              |
//! | [`dto`]      | `RouteRequest`, `RouteConstraints`, `RouteResponse`, `RoutePoint`, `GraphSummary` |
//! | [`segments`] | `route_segments`                                            |
//! | [`error`]    | `ServiceError`, `ServiceResult<T>`                          |

pub mod dto;
pub mod error;
pub mod segments;
pub mod service;

#[cfg(test)]
mod tests;

pub use dto::{GraphNodeSummary, GraphSummary, RouteConstraints, RoutePoint, RouteRequest, RouteResponse};
pub use error::{ServiceError, ServiceResult};
pub use segments::route_segments;
pub use service::RouteService;
