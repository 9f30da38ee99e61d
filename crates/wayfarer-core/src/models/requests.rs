//! Request types for creating models.

use serde::{Deserialize, Serialize};

use super::{TransportMode, Waypoint};

/// A fully resolved segment that is ready to be inserted.
///
/// Produced by finalizing a segment draft once both endpoints have a
/// coordinate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewSegment {
    pub start: Waypoint,
    pub end: Waypoint,
    pub transport: TransportMode,
    #[serde(default)]
    pub price: String,
}
