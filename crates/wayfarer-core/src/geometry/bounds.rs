//! Axis-aligned bounding regions used to frame the camera.

use serde::{Deserialize, Serialize};

use super::LatLng;

/// Minimal rectangle covering a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Minimum latitude and longitude
    pub south_west: LatLng,
    /// Maximum latitude and longitude
    pub north_east: LatLng,
}

impl GeoBounds {
    /// Center of the region.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Whether the region collapsed to a single point. Such a region has no
    /// extent for a camera to fit.
    pub fn is_degenerate(&self) -> bool {
        self.south_west == self.north_east
    }

    /// Whether `point` lies inside the region, borders included.
    pub fn contains(&self, point: &LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }
}

/// Accumulates points into a [`GeoBounds`].
#[derive(Debug, Clone, Default)]
pub struct BoundsBuilder {
    bounds: Option<GeoBounds>,
}

impl BoundsBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows the region to cover `point`.
    pub fn include(&mut self, point: LatLng) -> &mut Self {
        self.bounds = Some(match self.bounds {
            None => GeoBounds {
                south_west: point,
                north_east: point,
            },
            Some(b) => GeoBounds {
                south_west: LatLng::new(b.south_west.lat.min(point.lat), b.south_west.lng.min(point.lng)),
                north_east: LatLng::new(b.north_east.lat.max(point.lat), b.north_east.lng.max(point.lng)),
            },
        });
        self
    }

    /// Returns the region, or `None` when no point was included.
    pub fn build(&self) -> Option<GeoBounds> {
        self.bounds
    }
}

/// Minimal region covering every point in `points`.
pub fn bounding_region<I>(points: I) -> Option<GeoBounds>
where
    I: IntoIterator<Item = LatLng>,
{
    let mut builder = BoundsBuilder::new();
    for point in points {
        builder.include(point);
    }
    builder.build()
}
