// src/geo.rs
//
// Boundary contract for place resolution. The core never performs network
// I/O itself; a host supplies an implementation and feeds the resolved
// coordinates into the profile.

use crate::Result;
use serde::{Deserialize, Serialize};

/// Fallback when a timezone cannot be determined for a place.
pub const DEFAULT_TIMEZONE: &str = "UTC";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedPlace {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub display_name: String,
}

/// Resolves a free-text place name to coordinates and a timezone.
///
/// Implementations should treat a failed timezone lookup as non-fatal and
/// fall back to [`DEFAULT_TIMEZONE`]; a failed coordinate lookup is an
/// error surfaced to the caller.
pub trait Geocoder {
    fn resolve(&self, place: &str) -> Result<GeocodedPlace>;
}
