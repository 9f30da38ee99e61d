//! Builder for creating and configuring Itinerary instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Itinerary;
use crate::{
    db::Database,
    error::{ItineraryError, Result},
};

/// Builder for creating and configuring Itinerary instances.
#[derive(Debug, Clone, Default)]
pub struct ItineraryBuilder {
    database_path: Option<PathBuf>,
}

impl ItineraryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wayfarer/wayfarer.db` or
    /// `~/.local/share/wayfarer/wayfarer.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store, creating the database file and schema if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::FileSystem` if the database directory cannot
    /// be created, `ItineraryError::XdgDirectory` if no default location can
    /// be determined, and `ItineraryError::Database` if initialization fails.
    pub async fn build(self) -> Result<Itinerary> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ItineraryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), ItineraryError>(())
        })
        .await
        .map_err(ItineraryError::join)??;

        log::debug!("Itinerary store ready at {}", db_path.display());
        Ok(Itinerary::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfarer")
            .place_data_file("wayfarer.db")
            .map_err(|e| ItineraryError::XdgDirectory(e.to_string()))
    }
}
