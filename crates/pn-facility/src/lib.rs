//! `pn-facility` — the facility table that routing queries run against.
//!
//! The routing engine never owns facility identity; it only needs one
//! coordinate per node.  This crate holds everything else a caller knows
//! about a facility (name, capacity figures) and hands the engine a
//! `NodeId`-indexed slice of positions.
//!
//! # Crate layout
//!
//! | Module       | Contents                                           |
//! |--------------|----------------------------------------------------|
//! | [`facility`] | `Facility`, `FacilitySet`, `FacilitySetBuilder`    |
//! | [`loader`]   | `load_facilities_csv`, `load_facilities_reader`    |
//! | [`error`]    | `FacilityError`, `FacilityResult<T>`               |

pub mod error;
pub mod facility;
pub mod loader;


pub use error::{FacilityError, FacilityResult};
pub use facility::{Facility, FacilitySet, FacilitySetBuilder};
pub use loader::{load_facilities_csv, load_facilities_reader};
