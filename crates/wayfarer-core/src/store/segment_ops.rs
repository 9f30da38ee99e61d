//! Segment operations for the Itinerary.

use super::{cache::TripCache, Itinerary};
use crate::{
    error::Result,
    models::Segment,
    params::{AddSegment, Id},
};

impl Itinerary {
    /// Appends a segment to an existing trip.
    pub async fn add_segment(&self, params: &AddSegment) -> Result<Segment> {
        let trip_id = params.trip_id;
        let segment = params.segment.clone();
        self.write(move |db| db.add_segment(trip_id, &segment)).await
    }

    /// Segments of a trip in insertion order. Unknown trips have none.
    pub async fn segments_of(&self, params: &Id) -> Result<Vec<Segment>> {
        let trip_id = params.id;
        self.read(move |db| db.get_segments(trip_id)).await
    }

    /// Deletes all segments of a trip, keeping the trip itself.
    pub async fn clear_segments(&self, params: &Id) -> Result<usize> {
        let trip_id = params.id;
        self.write(move |db| db.clear_segments(trip_id)).await
    }

    /// Reads every trip and every trip's segments as one snapshot.
    ///
    /// Runs behind the write lock so no mutation can interleave with the
    /// reads and leave the snapshot half old and half new.
    pub async fn load_all(&self) -> Result<TripCache> {
        self.write(|db| {
            let trips = db.list_trips()?;
            let mut cache = TripCache::default();
            for trip in trips {
                let segments = db.get_segments(trip.id)?;
                cache.insert(trip, segments);
            }
            Ok(cache)
        })
        .await
    }
}
