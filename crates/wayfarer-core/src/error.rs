//! Error types for the itinerary library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all itinerary operations.
#[derive(Error, Debug)]
pub enum ItineraryError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Trip not found for the given ID
    #[error("Trip with ID {id} not found")]
    TripNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// A segment was finalized before both of its endpoints were picked
    #[error("Please choose a {endpoint} location first")]
    MissingSelection { endpoint: &'static str },
    /// Configuration and runtime plumbing errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> ItineraryError {
        ItineraryError::Database {
            message: self.message,
            source,
        }
    }
}

impl ItineraryError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Wraps a blocking-task join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }

    /// Whether this error is a user-facing validation problem rather than a
    /// storage failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingSelection { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ItineraryError::database(message).with_source(e))
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, ItineraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_selection_message() {
        let err = ItineraryError::MissingSelection { endpoint: "start" };
        assert_eq!(err.to_string(), "Please choose a start location first");
        assert!(err.is_validation());
    }

    #[test]
    fn test_storage_errors_are_not_validation() {
        assert!(!ItineraryError::TripNotFound { id: 3 }.is_validation());
        let err = ItineraryError::database("Failed to query trip")
            .with_source(rusqlite::Error::QueryReturnedNoRows);
        assert!(!err.is_validation());
        assert!(err.to_string().starts_with("Database error: Failed to query trip"));
    }
}
