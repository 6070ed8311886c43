//! Geographic coordinate type and the great-circle distance model.
//!
//! `GeoPoint` uses `f64` latitude/longitude in decimal degrees.  Distances are
//! computed on a spherical earth of radius [`EARTH_RADIUS_KM`] with the
//! haversine formula, which is an exact geodesic on that sphere and therefore
//! symmetric, non-negative, and satisfies the triangle inequality.

use crate::{PnError, PnResult};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A geographic coordinate in decimal degrees.
///
/// Valid range: `lat ∈ [-90, 90]`, `lon ∈ [-180, 180]`.  [`GeoPoint::new`]
/// does not check the range; use [`GeoPoint::try_new`] where coordinates
/// enter the system.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a coordinate, rejecting out-of-range or non-finite values.
    pub fn try_new(lat: f64, lon: f64) -> PnResult<Self> {
        let p = Self { lat, lon };
        if p.is_valid() {
            Ok(p)
        } else {
            Err(PnError::CoordinateInvalid { lat, lon })
        }
    }

    /// `true` if both components are finite and within range.
    #[inline]
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let d_lat = lat2 - lat1;
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Rounding can push `a` a hair past 1.0 for antipodal points.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

/// Edge weight between two coordinates: great-circle distance in kilometres.
#[inline]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    a.distance_km(b)
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}
