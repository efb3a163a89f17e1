//! `dr-graph`: the route-planning core.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`graph`]     | `Graph`, `LocationNode`, `Edge`                            |
//! | [`builder`]   | `GraphBuilder` (all-pairs threshold connectivity)          |
//! | [`router`]    | `Router` trait, `DijkstraRouter`, `ShortestPath`           |
//! | [`bfs`]       | `find_nearest_receivers`, `find_all_paths`                 |
//! | [`optimizer`] | `RouteOptimizer`, `optimize_route`, `total_distance_km`    |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                             |
//!
//! # Request lifecycle
//!
//! Every request builds its own `Graph`, runs the algorithms against it, and
//! drops it.  Nothing in this crate holds state between calls, and the
//! shortest-path bookkeeping lives in a table local to each call, so a graph
//! can be queried any number of times without a reset step.

pub mod bfs;
pub mod builder;
pub mod error;
pub mod graph;
pub mod optimizer;
pub mod router;


pub use bfs::{find_all_paths, find_nearest_receivers};
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, LocationNode};
pub use optimizer::{RouteOptimizer, optimize_route, total_distance_km};
pub use router::{DijkstraRouter, DistanceTable, Router, ShortestPath, shortest_path, shortest_path_tree};
