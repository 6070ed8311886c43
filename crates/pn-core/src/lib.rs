//! `pn-core` — foundational types for the `portnet` routing workspace.
//!
//! This crate is a dependency of every other `pn-*` crate.  It has no `pn-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `NodeId`                                          |
//! | [`geo`]   | `GeoPoint`, haversine distance in kilometres      |
//! | [`error`] | `PnError`, `PnResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.|

pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PnError, PnResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, haversine_km};
pub use ids::NodeId;
