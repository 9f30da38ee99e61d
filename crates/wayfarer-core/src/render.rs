//! Draws the active trip on a [`MapSurface`].
//!
//! Each render replaces the whole overlay set: one curved, progressively
//! revealed polyline per segment, a transport badge at the middle of the curve,
//! a start pin and an end pin. Afterwards the camera is fitted to every
//! endpoint.
//!
//! Line reveals run as tokio tasks. Every render bumps a generation counter and
//! a reveal task stops as soon as it sees that a newer render has started, so
//! reveals of a previous trip never draw over the current one.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tokio::{runtime::Handle, task::JoinHandle};

use crate::{
    geometry::{curve_midpoint, curve_points, BoundsBuilder, GeoBounds, LatLng},
    map::{CameraTarget, MapSurface, Marker, MarkerIcon, PolylineId, PolylineStyle},
    models::Segment,
};

/// Tunables of the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Delay between two revealed points, in milliseconds. Zero draws each
    /// line at once.
    pub frame_delay_ms: u64,
    /// Stroke of route lines
    pub line: PolylineStyle,
    /// Screen margin kept around the fitted route, in pixels
    pub camera_padding: u32,
    /// Zoom used when showing a search result
    pub search_zoom: f32,
    /// Zoom used when centering on the device location
    pub locate_zoom: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: 12,
            line: PolylineStyle::default(),
            camera_padding: 250,
            search_zoom: 15.0,
            locate_zoom: 16.0,
        }
    }
}

impl RenderConfig {
    /// Configuration that draws every line in one step.
    pub fn instant() -> Self {
        Self {
            frame_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Delay between two revealed points.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

/// How a line reveal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Every point was drawn
    Completed,
    /// A newer render started after `drawn` points
    Superseded { drawn: usize },
    /// The reveal task panicked or was cancelled
    Failed,
}

/// What a call to [`RouteRenderer::render`] did.
#[derive(Debug)]
pub struct RenderReport {
    /// Generation of this render
    pub generation: u64,
    /// One polyline per segment, in segment order
    pub polylines: Vec<PolylineId>,
    /// Region covering every segment endpoint
    pub bounds: Option<GeoBounds>,
    /// Whether the camera accepted the fit
    pub camera_fitted: bool,
    /// One entry per polyline; `None` when the line was drawn at once
    reveals: Vec<Option<JoinHandle<RevealOutcome>>>,
}

impl RenderReport {
    /// Whether any line is still being revealed in the background.
    pub fn is_animating(&self) -> bool {
        self.reveals.iter().flatten().any(|h| !h.is_finished())
    }

    /// Waits for every reveal task and returns how each one ended, in
    /// polyline order.
    ///
    /// Lines drawn without animation are reported as completed.
    pub async fn finish(self) -> Vec<RevealOutcome> {
        let mut outcomes = Vec::with_capacity(self.reveals.len());
        for reveal in self.reveals {
            let outcome = match reveal {
                None => RevealOutcome::Completed,
                Some(handle) => handle.await.unwrap_or_else(|e| {
                    log::warn!("Route reveal task failed: {e}");
                    RevealOutcome::Failed
                }),
            };
            outcomes.push(outcome);
        }
        outcomes
    }
}

/// Draws segments and camera moves on a shared map surface.
pub struct RouteRenderer<M> {
    map: Arc<M>,
    config: RenderConfig,
    generation: Arc<AtomicU64>,
}

impl<M: MapSurface + 'static> RouteRenderer<M> {
    /// Creates a renderer drawing on `map`.
    pub fn new(map: Arc<M>, config: RenderConfig) -> Self {
        Self {
            map,
            config,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The map being drawn on.
    pub fn map(&self) -> &Arc<M> {
        &self.map
    }

    /// Active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Current render generation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Replaces every overlay with the route of `segments` and fits the
    /// camera to it.
    ///
    /// An empty slice only clears the map. Routes whose endpoints all
    /// coincide leave the camera where it is. A camera that refuses the fit
    /// is logged and otherwise ignored.
    pub fn render(&self, segments: &[Segment]) -> RenderReport {
        let generation = self.begin();
        let mut bounds = BoundsBuilder::new();
        let mut polylines = Vec::with_capacity(segments.len());
        let mut reveals = Vec::with_capacity(segments.len());

        for segment in segments {
            let start = segment.start.position;
            let end = segment.end.position;
            let points = curve_points(start, end);

            let id = self.map.add_polyline(&self.config.line);
            polylines.push(id);

            if let Some(midpoint) = curve_midpoint(&points) {
                self.map.add_marker(Marker {
                    position: midpoint,
                    icon: MarkerIcon::Transport(segment.transport.clone()),
                    title: format!("¥{}", segment.price),
                });
            }
            self.map.add_marker(Marker {
                position: start,
                icon: MarkerIcon::StartPin,
                title: segment.start.name.clone(),
            });
            self.map.add_marker(Marker {
                position: end,
                icon: MarkerIcon::EndPin,
                title: segment.end.name.clone(),
            });

            match self.spawn_reveal(id, points, generation) {
                Ok(handle) => reveals.push(Some(handle)),
                Err(points) => {
                    self.map.set_polyline_points(id, &points);
                    reveals.push(None);
                }
            }

            bounds.include(start).include(end);
        }

        let bounds = bounds.build();
        let camera_fitted = match bounds {
            Some(region) if region.is_degenerate() => {
                log::debug!("Not fitting the camera to a single point {}", region.south_west);
                false
            }
            Some(region) => self.move_camera(CameraTarget::Bounds(region)),
            None => false,
        };

        log::debug!(
            "Rendered {} segment(s) in generation {generation}",
            segments.len()
        );

        RenderReport {
            generation,
            polylines,
            bounds,
            camera_fitted,
            reveals,
        }
    }

    /// Clears the map and pins a place found by search, then zooms onto it.
    pub fn show_place(&self, position: LatLng, title: &str) -> bool {
        self.begin();
        self.map.add_marker(Marker {
            position,
            icon: MarkerIcon::SearchResult,
            title: title.to_string(),
        });
        self.focus_point(position, self.config.search_zoom)
    }

    /// Centers on the device location. Returns the location when there is
    /// one.
    pub fn locate_me(&self) -> Option<LatLng> {
        let location = self.map.user_location()?;
        self.focus_point(location, self.config.locate_zoom);
        Some(location)
    }

    /// Centers the camera on `position` at `zoom`. Returns whether the camera
    /// accepted the move.
    pub fn focus_point(&self, position: LatLng, zoom: f32) -> bool {
        self.move_camera(CameraTarget::Point { position, zoom })
    }

    /// Starts a new generation and clears the map.
    fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.map.clear_overlays();
        generation
    }

    fn move_camera(&self, target: CameraTarget) -> bool {
        match self.map.animate_camera(target, self.config.camera_padding) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Ignoring camera failure: {e}");
                false
            }
        }
    }

    /// Spawns the reveal of one line, or hands the points back when the line
    /// has to be drawn synchronously.
    fn spawn_reveal(
        &self,
        id: PolylineId,
        points: Vec<LatLng>,
        generation: u64,
    ) -> Result<JoinHandle<RevealOutcome>, Vec<LatLng>> {
        let delay = self.config.frame_delay();
        if delay.is_zero() {
            return Err(points);
        }
        let Ok(runtime) = Handle::try_current() else {
            return Err(points);
        };

        let map = Arc::clone(&self.map);
        let current = Arc::clone(&self.generation);
        Ok(runtime.spawn(async move {
            for drawn in 1..=points.len() {
                if current.load(Ordering::SeqCst) != generation {
                    return RevealOutcome::Superseded { drawn: drawn - 1 };
                }
                map.set_polyline_points(id, &points[..drawn]);
                if drawn < points.len() {
                    tokio::time::sleep(delay).await;
                }
            }
            RevealOutcome::Completed
        }))
    }
}
