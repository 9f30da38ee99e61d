//! Planar geometry for drawing routes on the map.
//!
//! Everything here is pure: coordinates go in, coordinates come out. The math
//! treats latitude/longitude degrees as a flat plane, which is good enough for
//! drawing arcs and framing the camera but is not a geodesic model.
//!
//! - [`curve`]: quadratic Bézier arcs between two endpoints
//! - [`bounds`]: axis-aligned bounding regions for camera framing

pub mod bounds;
pub mod curve;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use bounds::{bounding_region, BoundsBuilder, GeoBounds};
pub use curve::{curve_midpoint, curve_points, CURVE_SAMPLES};

/// A geographic coordinate in floating point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate from latitude and longitude degrees.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planar distance to `other` in degrees.
    pub fn planar_distance(&self, other: &LatLng) -> f64 {
        ((self.lat - other.lat).powi(2) + (self.lng - other.lng).powi(2)).sqrt()
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
