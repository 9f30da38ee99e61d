//! Parameter structures for Wayfarer operations
//!
//! Shared parameter structures passed from interface layers (the CLI, the app
//! controller) into the store. They carry no framework-specific derives so the
//! core stays independent of any particular front-end.
//!
//! Interface layers define their own argument types and convert into these:
//!
//! ```ignore
//! #[derive(clap::Args)]
//! pub struct CreateTripArgs {
//!     pub name: String,
//! }
//!
//! impl From<CreateTripArgs> for CreateTrip {
//!     fn from(val: CreateTripArgs) -> Self {
//!         CreateTrip { name: val.name }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::NewSegment;

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like get_trip, toggle_favorite, delete_trip,
/// segments_of and clear_segments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTrip {
    /// Display name of the trip
    pub name: String,
}

/// Parameters for renaming a trip.
///
/// A name that is empty after trimming leaves the trip unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameTrip {
    /// ID of the trip to rename
    pub id: u64,
    /// New display name
    pub name: String,
}

/// Parameters for appending a segment to a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSegment {
    /// ID of the trip to add the segment to
    pub trip_id: u64,
    /// The resolved segment
    #[serde(flatten)]
    pub segment: NewSegment,
}
