//! Core library for the Wayfarer itinerary planner.
//!
//! Trips are named, ordered lists of travel segments. This crate stores them
//! in SQLite, projects them into a sidebar list, draws the active trip on a
//! map as animated curved routes and coordinates autocomplete place search.
//!
//! ```text
//!             ┌──────────────┐
//!             │  TravelApp   │  app: action → store → reload → sidebar → render
//!             └──────┬───────┘
//!    ┌────────────┬──┴─────────┬──────────────┬──────────────┐
//!    ▼            ▼            ▼              ▼              ▼
//! Itinerary    sidebar    RouteRenderer  SearchCoordinator SessionState
//! (store, db)             (render, map)  (search)          (session)
//!    │                         │
//!    ▼                         ▼
//!  SQLite                   geometry
//! ```
//!
//! The map SDK and the place search provider are collaborators behind the
//! [`map::MapSurface`] and [`search::PlaceSearch`] traits.
//!
//! # Quick Start
//!
//! ```rust
//! use wayfarer_core::{
//!     geometry::LatLng,
//!     models::{NewSegment, Waypoint},
//!     params::{AddSegment, CreateTrip, Id},
//!     ItineraryBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let itinerary = ItineraryBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! let trip = itinerary
//!     .create_trip(&CreateTrip { name: "Weekend".to_string() })
//!     .await?;
//!
//! itinerary
//!     .add_segment(&AddSegment {
//!         trip_id: trip.id,
//!         segment: NewSegment {
//!             start: Waypoint::new("Beijing", LatLng::new(39.9, 116.4)),
//!             end: Waypoint::new("Tianjin", LatLng::new(39.1, 117.2)),
//!             transport: "高铁".parse()?,
//!             price: "55".to_string(),
//!         },
//!     })
//!     .await?;
//!
//! for segment in itinerary.segments_of(&Id { id: trip.id }).await? {
//!     println!("{segment}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod db;
pub mod display;
pub mod error;
pub mod geometry;
pub mod map;
pub mod models;
pub mod params;
pub mod render;
pub mod search;
pub mod session;
pub mod sidebar;
pub mod store;

// Re-export commonly used types
pub use app::TravelApp;
pub use db::Database;
pub use display::{
    ClearResult, CreateResult, DeleteResult, DrawPlan, LocalDateTime, Segments, SidebarRows,
    Trips, UpdateResult,
};
pub use error::{ItineraryError, Result};
pub use geometry::{GeoBounds, LatLng};
pub use map::{MapSurface, RecordingMap};
pub use models::{NewSegment, Segment, TransportMode, Trip, Waypoint, DEFAULT_TRIP_NAME};
pub use params::{AddSegment, CreateTrip, Id, RenameTrip};
pub use render::{RenderConfig, RouteRenderer};
pub use search::{Place, PlaceSearch, SearchCoordinator, SearchMode};
pub use session::{SegmentDraft, SessionState};
pub use sidebar::SidebarItem;
pub use store::{Itinerary, ItineraryBuilder, TripCache};
