//! Segment CRUD operations and queries.

use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    geometry::LatLng,
    models::{NewSegment, Segment, TransportMode, Waypoint},
};

const CHECK_TRIP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM trips WHERE id = ?1)";
const INSERT_SEGMENT_SQL: &str = "INSERT INTO segments (trip_id, start_name, start_lat, start_lng, end_name, end_lat, end_lng, transport, price) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_SEGMENTS_BY_TRIP_SQL: &str = "SELECT id, trip_id, start_name, start_lat, start_lng, end_name, end_lat, end_lng, transport, price FROM segments WHERE trip_id = ?1 ORDER BY id";
const DELETE_SEGMENTS_BY_TRIP_SQL: &str = "DELETE FROM segments WHERE trip_id = ?1";

impl super::Database {
    /// Helper function to construct a Segment from a database row
    fn build_segment_from_row(row: &rusqlite::Row) -> rusqlite::Result<Segment> {
        Ok(Segment {
            id: row.get::<_, i64>(0)? as u64,
            trip_id: row.get::<_, i64>(1)? as u64,
            start: Waypoint {
                name: row.get(2)?,
                position: LatLng::new(row.get(3)?, row.get(4)?),
            },
            end: Waypoint {
                name: row.get(5)?,
                position: LatLng::new(row.get(6)?, row.get(7)?),
            },
            transport: TransportMode::from(row.get::<_, String>(8)?),
            price: row.get(9)?,
        })
    }

    /// Appends a segment to the given trip.
    pub fn add_segment(&mut self, trip_id: u64, segment: &NewSegment) -> Result<Segment> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let trip_exists: bool = tx
            .query_row(CHECK_TRIP_EXISTS_SQL, params![trip_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check trip existence")?;

        if !trip_exists {
            return Err(ItineraryError::TripNotFound { id: trip_id });
        }

        tx.execute(
            INSERT_SEGMENT_SQL,
            params![
                trip_id as i64,
                segment.start.name,
                segment.start.position.lat,
                segment.start.position.lng,
                segment.end.name,
                segment.end.position.lat,
                segment.end.position.lng,
                segment.transport.as_str(),
                segment.price,
            ],
        )
        .db_context("Failed to insert segment")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Segment {
            id,
            trip_id,
            start: segment.start.clone(),
            end: segment.end.clone(),
            transport: segment.transport.clone(),
            price: segment.price.clone(),
        })
    }

    /// Gets all segments of a trip in insertion order. An unknown trip simply
    /// has no segments.
    pub fn get_segments(&self, trip_id: u64) -> Result<Vec<Segment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SEGMENTS_BY_TRIP_SQL)
            .db_context("Failed to prepare query")?;

        let segments = stmt
            .query_map(params![trip_id as i64], Self::build_segment_from_row)
            .db_context("Failed to query segments")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch segments")?;

        Ok(segments)
    }

    /// Deletes every segment of a trip while keeping the trip. Returns the
    /// number of removed segments.
    pub fn clear_segments(&mut self, trip_id: u64) -> Result<usize> {
        self.connection
            .execute(DELETE_SEGMENTS_BY_TRIP_SQL, params![trip_id as i64])
            .db_context("Failed to clear segments")
    }
}
