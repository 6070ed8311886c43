//! CSV facility loader.
//!
//! # CSV format
//!
//! One row per facility.  Row order defines `NodeId` assignment.
//!
//! ```csv
//! name,lat,lon,cargo_capacity_mt,container_capacity_teu
//! "Port of Shanghai, China",31.2304,121.4737,347.06,43.30
//! "Port of Singapore, Singapore",1.3521,103.8198,36.61,36.60
//! "Port of Paradip, Odisha, India",20.3167,86.6086,,
//! ```
//!
//! The two capacity columns may be left empty.  Names must be unique.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pn_core::GeoPoint;

use crate::facility::{Facility, FacilitySet, FacilitySetBuilder};
use crate::{FacilityError, FacilityResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FacilityRecord {
    name:                   String,
    lat:                    f64,
    lon:                    f64,
    cargo_capacity_mt:      Option<f64>,
    container_capacity_teu: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`FacilitySet`] from a CSV file.
pub fn load_facilities_csv(path: &Path) -> FacilityResult<FacilitySet> {
    let file = std::fs::File::open(path).map_err(FacilityError::Io)?;
    tracing::debug!(path = %path.display(), "loading facility table");
    load_facilities_reader(file)
}

/// Like [`load_facilities_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tables embedded in
/// the binary with `include_str!`.
pub fn load_facilities_reader<R: Read>(reader: R) -> FacilityResult<FacilitySet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut builder = FacilitySetBuilder::new();

    for (line, result) in csv_reader.deserialize::<FacilityRecord>().enumerate() {
        let row = result.map_err(|e| FacilityError::Parse(e.to_string()))?;
        let facility = Facility::new(row.name, GeoPoint::new(row.lat, row.lon))
            .with_capacities(row.cargo_capacity_mt, row.container_capacity_teu);

        builder.add(facility).map_err(|e| {
            // Row numbers are 1-based and skip the header.
            tracing::debug!(row = line + 1, error = %e, "rejected facility row");
            e
        })?;
    }

    builder.build()
}
