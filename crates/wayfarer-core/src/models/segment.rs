//! Segment model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::TransportMode;
use crate::geometry::LatLng;

/// A named location on the map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    /// Human readable place name
    pub name: String,

    /// Coordinate of the place
    pub position: LatLng,
}

impl Waypoint {
    /// Creates a waypoint from a name and coordinate.
    pub fn new(name: impl Into<String>, position: LatLng) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// One leg of a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    /// Unique identifier for the segment. Segments of a trip are ordered by
    /// this id.
    pub id: u64,

    /// ID of the owning trip
    pub trip_id: u64,

    /// Where the leg starts
    pub start: Waypoint,

    /// Where the leg ends
    pub end: Waypoint,

    /// How the leg is travelled
    pub transport: TransportMode,

    /// Price as entered by the user
    pub price: String,
}

impl Segment {
    /// Price as a number. Text that does not parse counts as zero.
    pub fn price_amount(&self) -> f64 {
        parse_price(&self.price)
    }
}

/// Parses a user-entered price, falling back to zero.
pub(crate) fn parse_price(price: &str) -> f64 {
    price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
}

/// Total price of `segments`.
pub fn total_cost(segments: &[Segment]) -> f64 {
    segments.iter().map(Segment::price_amount).sum()
}
