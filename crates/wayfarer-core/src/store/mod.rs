//! Async itinerary store for trips and segments.
//!
//! [`Itinerary`] is the canonical owner of every trip and segment record. It
//! wraps the synchronous [`Database`](crate::db::Database) and runs each
//! operation on a blocking worker, so callers on the async side never wait on
//! disk I/O directly.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   App / CLI     │    │   Itinerary     │    │    Database     │
//! │ (app, wf)       │───▶│ (trip_ops,      │───▶│   (via db/)     │
//! │                 │    │  segment_ops)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Interaction           Async Store           Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Itinerary`] instances
//! - [`trip_ops`]: Trip operations (create, list, rename, favorite, delete)
//! - [`segment_ops`]: Segment operations (add, list, clear)
//! - [`cache`]: The reloadable [`TripCache`] snapshot
//!
//! Writes are serialized: two mutations never run at the same time, so rapid
//! user actions are applied in the order they were issued. Reads run freely.
//!
//! # Usage
//!
//! ```rust
//! use wayfarer_core::{ItineraryBuilder, params::CreateTrip};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let itinerary = ItineraryBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! let trip = itinerary
//!     .create_trip(&CreateTrip { name: "Summer".to_string() })
//!     .await?;
//! println!("Created trip {}", trip.id);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::{sync::Mutex, task};

use crate::{
    db::Database,
    error::{ItineraryError, Result},
};

pub mod builder;
pub mod cache;
pub mod segment_ops;
pub mod trip_ops;


pub use builder::ItineraryBuilder;
pub use cache::TripCache;

/// Main store interface for managing trips and segments.
pub struct Itinerary {
    pub(crate) db_path: PathBuf,
    write_lock: Mutex<()>,
}

impl Itinerary {
    /// Creates a new store with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self {
            db_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing SQLite file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs a read-only query on a blocking worker.
    pub(crate) async fn read<T, F>(&self, query: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            query(&db)
        })
        .await
        .map_err(ItineraryError::join)?
    }

    /// Runs a mutation on a blocking worker, after every earlier mutation has
    /// finished.
    pub(crate) async fn write<T, F>(&self, mutation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let _guard = self.write_lock.lock().await;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            mutation(&mut db)
        })
        .await
        .map_err(ItineraryError::join)?
    }
}
