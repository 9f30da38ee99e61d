//! Trip operations for the Itinerary.

use super::Itinerary;
use crate::{
    error::Result,
    models::Trip,
    params::{CreateTrip, Id, RenameTrip},
};

impl Itinerary {
    /// Creates a new, non-favorite trip and returns it with its assigned ID.
    pub async fn create_trip(&self, params: &CreateTrip) -> Result<Trip> {
        let name = params.name.clone();
        self.write(move |db| db.create_trip(&name)).await
    }

    /// Retrieves a trip by its ID.
    pub async fn get_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let trip_id = params.id;
        self.read(move |db| db.get_trip(trip_id)).await
    }

    /// Lists all trips: favorites first, then by descending ID.
    pub async fn list_trips(&self) -> Result<Vec<Trip>> {
        self.read(|db| db.list_trips()).await
    }

    /// Renames a trip. A name that trims to nothing is ignored and the
    /// stored trip is returned unchanged.
    pub async fn rename_trip(&self, params: &RenameTrip) -> Result<Trip> {
        let trip_id = params.id;
        let name = params.name.clone();
        self.write(move |db| db.rename_trip(trip_id, &name)).await
    }

    /// Flips the favorite flag of a trip.
    pub async fn toggle_favorite(&self, params: &Id) -> Result<Trip> {
        let trip_id = params.id;
        self.write(move |db| db.toggle_favorite(trip_id)).await
    }

    /// Permanently deletes a trip together with all of its segments.
    pub async fn delete_trip(&self, params: &Id) -> Result<()> {
        let trip_id = params.id;
        self.write(move |db| db.delete_trip(trip_id)).await
    }
}
