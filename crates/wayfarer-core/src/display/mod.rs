//! Display formatting for trips, segments and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and operation results get thin wrapper types so the same data
//! can be printed differently depending on context.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Trip, Segment) │───▶│ (Trips, Create- │───▶│    Output       │
//! │                 │    │  Result, ...)   │    │   (Markdown)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Everything produces markdown, which the CLI renders for the terminal.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (Trips, Segments, SidebarRows, DrawPlan)
//! - [`results`]: Operation results (CreateResult, UpdateResult, DeleteResult)
//! - [`datetime`]: Local time formatting
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use wayfarer_core::{display::CreateResult, models::Trip};
//!
//! let trip = Trip {
//!     id: 1,
//!     name: "Summer".to_string(),
//!     favorite: false,
//!     created_at: Timestamp::now(),
//!     expanded: false,
//! };
//!
//! let output = CreateResult::new(trip).to_string();
//! assert!(output.contains("Created trip with ID: 1"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{DrawPlan, Segments, SidebarRows, Trips};
pub use datetime::LocalDateTime;
pub use results::{ClearResult, CreateResult, DeleteResult, UpdateResult};
