//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `PnError` as one variant
//! via `#[from]` where they can produce it.

use thiserror::Error;

/// The base error type for `pn-core`.
#[derive(Debug, Error)]
pub enum PnError {
    #[error("coordinate ({lat}, {lon}) is out of range")]
    CoordinateInvalid { lat: f64, lon: f64 },
}

/// Shorthand result type for all `pn-*` crates.
pub type PnResult<T> = Result<T, PnError>;
