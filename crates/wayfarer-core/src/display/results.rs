//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Segment, Trip};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::{display::CreateResult, geometry::LatLng, models::{Segment, Waypoint}};
///
/// let segment = Segment {
///     id: 3,
///     trip_id: 1,
///     start: Waypoint::new("Beijing", LatLng::new(39.9, 116.4)),
///     end: Waypoint::new("Tianjin", LatLng::new(39.1, 117.2)),
///     transport: "高铁".parse().unwrap(),
///     price: "55".to_string(),
/// };
///
/// let output = CreateResult::new(segment).to_string();
/// assert!(output.contains("Added segment with ID: 3 to trip 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created trip with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Segment> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added segment with ID: {} to trip {}",
            self.resource.id, self.resource.trip_id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes that were applied.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated trip with ID: {}", self.resource.id)?;

        if self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Nothing changed.")?;
        } else {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying a deleted trip together with the number of
/// segments that went with it.
pub struct DeleteResult<T> {
    pub resource: T,
    pub removed_segments: usize,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T, removed_segments: usize) -> Self {
        Self {
            resource,
            removed_segments,
        }
    }
}

impl fmt::Display for DeleteResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted trip '{}' (ID: {}) and {} segment(s)",
            self.resource.name, self.resource.id, self.removed_segments
        )
    }
}

/// Outcome of clearing the segments of a trip.
pub struct ClearResult {
    pub trip_id: u64,
    pub removed: usize,
}

impl fmt::Display for ClearResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed {} segment(s) from trip {}",
            self.removed, self.trip_id
        )
    }
}
