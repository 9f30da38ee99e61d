//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper prints its items one after another and has its own message
//! for an empty collection.

use std::fmt;

use crate::{
    map::{CameraTarget, MapCommand, MarkerIcon},
    models::{total_cost, Segment, Trip},
    sidebar::SidebarItem,
};

/// Newtype wrapper for displaying a list of trips.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use wayfarer_core::{display::Trips, models::Trip};
///
/// let trips = Trips(vec![Trip {
///     id: 1,
///     name: "Summer".to_string(),
///     favorite: true,
///     created_at: Timestamp::now(),
///     expanded: false,
/// }]);
/// assert!(trips.to_string().contains("Summer"));
/// assert_eq!(Trips(vec![]).to_string(), "No trips found.\n");
/// ```
pub struct Trips(pub Vec<Trip>);

impl Trips {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Trips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No trips found.");
        }
        for trip in &self.0 {
            write!(f, "{trip}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the segments of one trip, followed by their
/// total cost.
pub struct Segments(pub Vec<Segment>);

impl Segments {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Segments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No segments in this trip.");
        }
        for segment in &self.0 {
            write!(f, "{segment}")?;
        }
        writeln!(f, "**Total**: ¥{:.2}", total_cost(&self.0))
    }
}

/// Borrowing wrapper for displaying sidebar rows as a nested markdown list.
pub struct SidebarRows<'a>(pub &'a [SidebarItem]);

impl fmt::Display for SidebarRows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No trips yet. Save a segment to start one.");
        }
        for item in self.0 {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Borrowing wrapper for displaying recorded map commands as a numbered
/// draw plan.
///
/// Consecutive point updates of the same line are folded into one step.
pub struct DrawPlan<'a>(pub &'a [MapCommand]);

impl DrawPlan<'_> {
    /// Commands with every point update but the last of each run removed.
    fn folded(&self) -> Vec<&MapCommand> {
        let mut steps: Vec<&MapCommand> = Vec::with_capacity(self.0.len());
        for command in self.0 {
            let repeats = matches!(
                (steps.last(), command),
                (
                    Some(MapCommand::SetPolylinePoints { id: previous, .. }),
                    MapCommand::SetPolylinePoints { id, .. },
                ) if previous == id
            );
            if repeats {
                steps.pop();
            }
            steps.push(command);
        }
        steps
    }
}

impl fmt::Display for DrawPlan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.folded().into_iter().enumerate() {
            write!(f, "{}. ", i + 1)?;
            match command {
                MapCommand::ClearOverlays => writeln!(f, "Clear map")?,
                MapCommand::AddPolyline { id, style } => writeln!(
                    f,
                    "Add line #{} ({}px {})",
                    id.0, style.width, style.color
                )?,
                MapCommand::SetPolylinePoints { id, points } => {
                    let first = points.first().map(ToString::to_string).unwrap_or_default();
                    let last = points.last().map(ToString::to_string).unwrap_or_default();
                    writeln!(
                        f,
                        "Draw line #{} with {} points from {first} to {last}",
                        id.0,
                        points.len()
                    )?;
                }
                MapCommand::AddMarker { marker } => {
                    let kind = match &marker.icon {
                        MarkerIcon::Transport(mode) => format!("{} {mode}", mode.icon()),
                        MarkerIcon::StartPin => "start pin".to_string(),
                        MarkerIcon::EndPin => "end pin".to_string(),
                        MarkerIcon::SearchResult => "search pin".to_string(),
                    };
                    writeln!(f, "Marker {kind} \"{}\" at {}", marker.title, marker.position)?;
                }
                MapCommand::AnimateCamera { target, padding } => match target {
                    CameraTarget::Bounds(bounds) => writeln!(
                        f,
                        "Fit camera to {} .. {} (padding {padding})",
                        bounds.south_west, bounds.north_east
                    )?,
                    CameraTarget::Point { position, zoom } => {
                        writeln!(f, "Center camera on {position} at zoom {zoom}")?;
                    }
                },
            }
        }
        Ok(())
    }
}
