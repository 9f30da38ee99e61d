//! The map surface the route renderer draws on.
//!
//! [`MapSurface`] is the narrow slice of a map SDK that the application
//! needs: overlays, one camera and the device location. Implementations are
//! expected to behave like an SDK handle, with `&self` methods and interior
//! mutability, so the same surface can be shared with animation tasks.
//!
//! [`RecordingMap`] implements the trait by recording every call. The CLI uses
//! it to print a draw plan and the tests use it to assert on what was drawn.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex, MutexGuard, PoisonError,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    geometry::{GeoBounds, LatLng},
    models::TransportMode,
};

/// Errors reported by a map surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// The camera could not be moved to the requested target
    #[error("Camera cannot move: {reason}")]
    Camera { reason: String },
    /// The map is not ready to take commands
    #[error("Map is not ready")]
    NotReady,
}

/// Handle of a polyline overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolylineId(pub u64);

/// How the corners of a polyline are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    Miter,
    Bevel,
    #[default]
    Round,
}

/// Stroke of a route polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolylineStyle {
    /// Stroke width in pixels
    pub width: f32,
    /// Stroke color as `#RRGGBB`
    pub color: String,
    /// Corner style
    pub join: LineJoin,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            width: 18.0,
            color: "#2196F3".to_string(),
            join: LineJoin::Round,
        }
    }
}

/// Icon of a map marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerIcon {
    /// Badge showing how a segment is travelled, drawn on the route
    Transport(TransportMode),
    /// Azure pin at a segment start
    StartPin,
    /// Red pin at a segment end
    EndPin,
    /// Violet pin for a place found by search
    SearchResult,
}

impl MarkerIcon {
    /// Hue of the default pin, in degrees. Transport badges are custom
    /// drawn and have none.
    pub fn hue(&self) -> Option<f32> {
        match self {
            MarkerIcon::Transport(_) => None,
            MarkerIcon::StartPin => Some(210.0),
            MarkerIcon::EndPin => Some(0.0),
            MarkerIcon::SearchResult => Some(270.0),
        }
    }
}

/// A marker overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: LatLng,
    pub icon: MarkerIcon,
    pub title: String,
}

/// Where the camera should go.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraTarget {
    /// Fit a region
    Bounds(GeoBounds),
    /// Center on a point at a zoom level
    Point { position: LatLng, zoom: f32 },
}

/// Operations the renderer needs from a map SDK.
pub trait MapSurface: Send + Sync {
    /// Removes every marker and polyline.
    fn clear_overlays(&self);

    /// Adds a marker overlay.
    fn add_marker(&self, marker: Marker);

    /// Adds an empty polyline and returns its handle.
    fn add_polyline(&self, style: &PolylineStyle) -> PolylineId;

    /// Replaces the points of a polyline. Unknown handles are ignored.
    fn set_polyline_points(&self, id: PolylineId, points: &[LatLng]);

    /// Moves the camera.
    ///
    /// `padding` is the screen margin, in pixels, kept around a
    /// [`CameraTarget::Bounds`] target.
    fn animate_camera(&self, target: CameraTarget, padding: u32) -> Result<(), MapError>;

    /// Last known device location, if any.
    fn user_location(&self) -> Option<LatLng>;
}

/// A call made on a [`RecordingMap`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum MapCommand {
    ClearOverlays,
    AddMarker {
        marker: Marker,
    },
    AddPolyline {
        id: PolylineId,
        style: PolylineStyle,
    },
    SetPolylinePoints {
        id: PolylineId,
        points: Vec<LatLng>,
    },
    AnimateCamera {
        target: CameraTarget,
        padding: u32,
    },
}

/// A [`MapSurface`] that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingMap {
    commands: Mutex<Vec<MapCommand>>,
    next_polyline: AtomicU64,
    location: Option<LatLng>,
    camera_error: Option<MapError>,
}

impl RecordingMap {
    /// Creates a map with no device location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports `location` as the device location.
    pub fn with_location(mut self, location: LatLng) -> Self {
        self.location = Some(location);
        self
    }

    /// Makes every camera move fail with `error`.
    pub fn with_camera_error(mut self, error: MapError) -> Self {
        self.camera_error = Some(error);
        self
    }

    /// Copy of everything recorded so far.
    pub fn commands(&self) -> Vec<MapCommand> {
        self.lock().clone()
    }

    /// Drains the recorded commands.
    pub fn take_commands(&self) -> Vec<MapCommand> {
        std::mem::take(&mut *self.lock())
    }

    /// Markers added since the last clear.
    pub fn markers(&self) -> Vec<Marker> {
        self.since_last_clear()
            .into_iter()
            .filter_map(|command| match command {
                MapCommand::AddMarker { marker } => Some(marker),
                _ => None,
            })
            .collect()
    }

    /// Points most recently set on a polyline.
    pub fn polyline_points(&self, id: PolylineId) -> Option<Vec<LatLng>> {
        self.lock().iter().rev().find_map(|command| match command {
            MapCommand::SetPolylinePoints { id: set, points } if *set == id => {
                Some(points.clone())
            }
            _ => None,
        })
    }

    /// Camera targets in the order they were requested.
    pub fn camera_moves(&self) -> Vec<CameraTarget> {
        self.lock()
            .iter()
            .filter_map(|command| match command {
                MapCommand::AnimateCamera { target, .. } => Some(*target),
                _ => None,
            })
            .collect()
    }

    fn since_last_clear(&self) -> Vec<MapCommand> {
        let commands = self.lock();
        let start = commands
            .iter()
            .rposition(|c| matches!(c, MapCommand::ClearOverlays))
            .map_or(0, |i| i + 1);
        commands[start..].to_vec()
    }

    fn record(&self, command: MapCommand) {
        self.lock().push(command);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<MapCommand>> {
        self.commands.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MapSurface for RecordingMap {
    fn clear_overlays(&self) {
        self.record(MapCommand::ClearOverlays);
    }

    fn add_marker(&self, marker: Marker) {
        self.record(MapCommand::AddMarker { marker });
    }

    fn add_polyline(&self, style: &PolylineStyle) -> PolylineId {
        let id = PolylineId(self.next_polyline.fetch_add(1, Ordering::Relaxed) + 1);
        self.record(MapCommand::AddPolyline {
            id,
            style: style.clone(),
        });
        id
    }

    fn set_polyline_points(&self, id: PolylineId, points: &[LatLng]) {
        self.record(MapCommand::SetPolylinePoints {
            id,
            points: points.to_vec(),
        });
    }

    fn animate_camera(&self, target: CameraTarget, padding: u32) -> Result<(), MapError> {
        if let Some(error) = &self.camera_error {
            return Err(error.clone());
        }
        self.record(MapCommand::AnimateCamera { target, padding });
        Ok(())
    }

    fn user_location(&self) -> Option<LatLng> {
        self.location
    }
}
