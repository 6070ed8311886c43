//! `pn-routing` — shortest-path routing over facility networks.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`graph`]    | `Graph` trait, `CompleteGeoGraph`                         |
//! | [`network`]  | `EdgeListGraph` (CSR), `EdgeListGraphBuilder`             |
//! | [`dijkstra`] | `shortest_path`, `SearchTree`, `SearchStats`              |
//! | [`path`]     | `reconstruct`, `Path`, `Hop`                              |
//! | [`router`]   | `Router` trait, `Route`, `DijkstraRouter`                 |
//! | [`error`]    | `RoutingError`, `RoutingResult<T>`                        |
//!
//! # Query pipeline
//!
//! ```text
//! Graph ──► shortest_path ──► SearchTree { dist, prev } ──► reconstruct ──► Path
//! ```
//!
//! The search only sees the [`Graph`] capability (neighbours and weights), so
//! it runs unchanged over the complete geodesic graph and over explicit
//! sparse edge lists.

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod network;
pub mod path;
pub mod router;


pub use dijkstra::{SearchStats, SearchTree, shortest_path};
pub use error::{RoutingError, RoutingResult};
pub use graph::{CompleteGeoGraph, Graph};
pub use network::{EdgeListGraph, EdgeListGraphBuilder};
pub use path::{Hop, Path, reconstruct};
pub use router::{DijkstraRouter, Route, Router};
