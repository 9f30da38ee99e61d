//! Trip CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    models::Trip,
};

const INSERT_TRIP_SQL: &str = "INSERT INTO trips (name, is_favorite, created_at) VALUES (?1, 0, ?2)";
const SELECT_TRIP_SQL: &str = "SELECT id, name, is_favorite, created_at FROM trips WHERE id = ?1";
const SELECT_ALL_TRIPS_SQL: &str =
    "SELECT id, name, is_favorite, created_at FROM trips ORDER BY is_favorite DESC, id DESC";
const CHECK_TRIP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM trips WHERE id = ?1)";
const UPDATE_TRIP_NAME_SQL: &str = "UPDATE trips SET name = ?1 WHERE id = ?2";
const TOGGLE_TRIP_FAVORITE_SQL: &str =
    "UPDATE trips SET is_favorite = CASE is_favorite WHEN 0 THEN 1 ELSE 0 END WHERE id = ?1";
const DELETE_TRIP_SEGMENTS_SQL: &str = "DELETE FROM segments WHERE trip_id = ?1";
const DELETE_TRIP_SQL: &str = "DELETE FROM trips WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Trip from a database row
    fn build_trip_from_row(row: &rusqlite::Row) -> rusqlite::Result<Trip> {
        Ok(Trip {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            favorite: row.get::<_, i64>(2)? != 0,
            created_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?,
            expanded: false,
        })
    }

    /// Creates a new, non-favorite trip with the given name.
    pub fn create_trip(&mut self, name: &str) -> Result<Trip> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(INSERT_TRIP_SQL, params![name, now.to_string()])
            .db_context("Failed to insert trip")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Trip {
            id,
            name: name.into(),
            favorite: false,
            created_at: now,
            expanded: false,
        })
    }

    /// Retrieves a trip by its ID.
    pub fn get_trip(&self, id: u64) -> Result<Option<Trip>> {
        self.connection
            .query_row(SELECT_TRIP_SQL, params![id as i64], Self::build_trip_from_row)
            .optional()
            .db_context("Failed to query trip")
    }

    /// Lists all trips, favorites first, then newest first.
    pub fn list_trips(&self) -> Result<Vec<Trip>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_TRIPS_SQL)
            .db_context("Failed to prepare query")?;

        let trips = stmt
            .query_map([], Self::build_trip_from_row)
            .db_context("Failed to query trips")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch trips")?;

        Ok(trips)
    }

    /// Renames a trip. The name is trimmed first; a blank name leaves the trip
    /// untouched and returns it as stored.
    pub fn rename_trip(&mut self, id: u64, name: &str) -> Result<Trip> {
        let name = name.trim();
        if name.is_empty() {
            log::debug!("Ignoring blank rename of trip {id}");
            return self
                .get_trip(id)?
                .ok_or(ItineraryError::TripNotFound { id });
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(UPDATE_TRIP_NAME_SQL, params![name, id as i64])
            .db_context("Failed to rename trip")?;

        if rows_affected == 0 {
            return Err(ItineraryError::TripNotFound { id });
        }

        let trip = tx
            .query_row(SELECT_TRIP_SQL, params![id as i64], Self::build_trip_from_row)
            .db_context("Failed to query renamed trip")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(trip)
    }

    /// Flips the favorite flag of a trip and returns the updated trip.
    pub fn toggle_favorite(&mut self, id: u64) -> Result<Trip> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(TOGGLE_TRIP_FAVORITE_SQL, params![id as i64])
            .db_context("Failed to toggle favorite")?;

        if rows_affected == 0 {
            return Err(ItineraryError::TripNotFound { id });
        }

        let trip = tx
            .query_row(SELECT_TRIP_SQL, params![id as i64], Self::build_trip_from_row)
            .db_context("Failed to query updated trip")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(trip)
    }

    /// Permanently deletes a trip and all of its segments.
    ///
    /// Segments are removed before the trip inside one transaction, so no
    /// orphaned segment is ever visible.
    pub fn delete_trip(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_TRIP_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check trip existence")?;

        if !exists {
            return Err(ItineraryError::TripNotFound { id });
        }

        let removed = tx
            .execute(DELETE_TRIP_SEGMENTS_SQL, params![id as i64])
            .db_context("Failed to delete trip segments")?;

        tx.execute(DELETE_TRIP_SQL, params![id as i64])
            .db_context("Failed to delete trip")?;

        tx.commit().db_context("Failed to commit transaction")?;

        log::debug!("Deleted trip {id} with {removed} segments");
        Ok(())
    }
}
