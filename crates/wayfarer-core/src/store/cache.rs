//! Read-mostly snapshot of all trips and their segments.

use std::collections::HashMap;

use crate::models::{Segment, Trip};

/// In-memory copy of the store used to drive the sidebar and the map.
///
/// The cache is never patched in place after a mutation. It is thrown away
/// and rebuilt from the store with [`Itinerary::load_all`](super::Itinerary::load_all).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripCache {
    trips: Vec<Trip>,
    segments: HashMap<u64, Vec<Segment>>,
}

impl TripCache {
    /// Appends a trip and its segments, keeping store order.
    pub fn insert(&mut self, trip: Trip, segments: Vec<Segment>) {
        self.segments.insert(trip.id, segments);
        self.trips.push(trip);
    }

    /// Trips in store order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Segments keyed by trip ID.
    pub fn segments_by_trip(&self) -> &HashMap<u64, Vec<Segment>> {
        &self.segments
    }

    /// Segments of one trip, empty when the trip is unknown.
    pub fn segments_of(&self, trip_id: u64) -> &[Segment] {
        self.segments.get(&trip_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Looks up a cached trip.
    pub fn trip(&self, trip_id: u64) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == trip_id)
    }

    /// Whether the cache knows the trip.
    pub fn contains(&self, trip_id: u64) -> bool {
        self.trip(trip_id).is_some()
    }

    /// Flips the sidebar expansion of a trip. Returns the new state, or
    /// `None` when the trip is not cached.
    pub fn toggle_expanded(&mut self, trip_id: u64) -> Option<bool> {
        let trip = self.trips.iter_mut().find(|t| t.id == trip_id)?;
        trip.expanded = !trip.expanded;
        Some(trip.expanded)
    }

    /// Takes over the expansion state of trips that were already shown
    /// before this snapshot was loaded.
    pub fn carry_expanded_from(mut self, previous: &TripCache) -> Self {
        self.trips = self
            .trips
            .into_iter()
            .map(|t| t.carry_expanded(&previous.trips))
            .collect();
        self
    }

    /// Number of cached trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether there are no cached trips.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
