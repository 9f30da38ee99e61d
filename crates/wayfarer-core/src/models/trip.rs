//! Trip model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Name given to a trip that is created implicitly by saving its first
/// segment.
pub const DEFAULT_TRIP_NAME: &str = "新旅程";

/// A named collection of travel segments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Display name of the trip
    pub name: String,

    /// Favorited trips are pinned to the top of listings
    #[serde(default)]
    pub favorite: bool,

    /// Timestamp when the trip was created (UTC)
    pub created_at: Timestamp,

    /// Whether the sidebar shows this trip's segments. Never persisted.
    #[serde(skip)]
    pub expanded: bool,
}

impl Trip {
    /// Returns the trip with its expanded flag taken from `previous`, if the
    /// same trip was known before a reload.
    pub fn carry_expanded(mut self, previous: &[Trip]) -> Self {
        self.expanded = previous
            .iter()
            .find(|t| t.id == self.id)
            .is_some_and(|t| t.expanded);
        self
    }
}
