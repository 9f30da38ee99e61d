//! Data models for trips and segments.
//!
//! This module contains the core domain models of the Wayfarer itinerary
//! planner. Display implementations live in [`crate::display::models`] so that
//! the data structures stay free of presentation logic.
//!
//! - [`Trip`]: a named, optionally favorited collection of segments
//! - [`Segment`]: one leg of a trip between two [`Waypoint`]s
//! - [`TransportMode`]: how a segment is travelled
//! - [`NewSegment`]: the validated payload for inserting a segment
//!
//! # Examples
//!
//! ```rust
//! use wayfarer_core::models::{Segment, TransportMode, Waypoint};
//! use wayfarer_core::geometry::LatLng;
//!
//! let segment = Segment {
//!     id: 1,
//!     trip_id: 1,
//!     start: Waypoint::new("Beijing", LatLng::new(39.9, 116.4)),
//!     end: Waypoint::new("Shanghai", LatLng::new(31.2, 121.5)),
//!     transport: "飞机".parse().unwrap(),
//!     price: "680".to_string(),
//! };
//! assert_eq!(segment.transport, TransportMode::Plane);
//! assert_eq!(segment.price_amount(), 680.0);
//! ```

pub mod requests;
pub mod segment;
pub mod transport;
pub mod trip;

#[cfg(test)]
mod tests;

pub use requests::NewSegment;
pub use segment::{total_cost, Segment, Waypoint};
pub use transport::TransportMode;
pub use trip::{Trip, DEFAULT_TRIP_NAME};
