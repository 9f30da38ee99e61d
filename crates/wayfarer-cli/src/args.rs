//! Command-line argument definitions.
//!
//! Arguments are parsed into clap structs and then converted into the core
//! parameter types, so nothing in `wayfarer-core` depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Itinerary
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use wayfarer_core::{
    geometry::LatLng,
    models::{NewSegment, Waypoint, DEFAULT_TRIP_NAME},
    params::{AddSegment, CreateTrip, Id, RenameTrip},
};

/// Plan trips as ordered legs between places and preview their routes.
#[derive(Parser)]
#[command(version, about, name = "wf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/wayfarer/wayfarer.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Manage the segments of a trip
    #[command(alias = "s")]
    Segment {
        #[command(subcommand)]
        command: SegmentCommands,
    },
    /// Print the trip sidebar
    Sidebar(SidebarArgs),
    /// Print the map draw plan of a trip's route
    Route(RouteArgs),
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Create a new trip
    #[command(alias = "c")]
    Create(CreateTripArgs),
    /// List trips, favorites first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a trip and its segments
    #[command(alias = "s")]
    Show(TripIdArgs),
    /// Rename a trip
    #[command(alias = "r")]
    Rename(RenameTripArgs),
    /// Toggle the favorite flag of a trip
    #[command(alias = "f")]
    Favorite(TripIdArgs),
    /// Delete a trip and all of its segments
    #[command(aliases = ["d", "rm"])]
    Delete(ConfirmedTripArgs),
}

#[derive(Subcommand)]
pub enum SegmentCommands {
    /// Append a segment to a trip
    #[command(alias = "a")]
    Add(AddSegmentArgs),
    /// List the segments of a trip
    #[command(aliases = ["l", "ls"])]
    List(TripIdArgs),
    /// Remove every segment of a trip, keeping the trip
    Clear(ConfirmedTripArgs),
}

/// Create a new trip
#[derive(ClapArgs)]
pub struct CreateTripArgs {
    /// Name of the trip
    #[arg(default_value = DEFAULT_TRIP_NAME)]
    pub name: String,
}

impl From<CreateTripArgs> for CreateTrip {
    fn from(val: CreateTripArgs) -> Self {
        CreateTrip { name: val.name }
    }
}

#[derive(ClapArgs)]
pub struct TripIdArgs {
    #[arg(help = "Unique identifier of the trip")]
    pub id: u64,
}

impl From<TripIdArgs> for Id {
    fn from(val: TripIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// A destructive trip operation
#[derive(ClapArgs)]
pub struct ConfirmedTripArgs {
    #[arg(help = "Unique identifier of the trip")]
    pub id: u64,
    /// Confirm the operation (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}

impl From<&ConfirmedTripArgs> for Id {
    fn from(val: &ConfirmedTripArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(ClapArgs)]
pub struct RenameTripArgs {
    #[arg(help = "Unique identifier of the trip")]
    pub id: u64,
    /// New name. Blank names are ignored.
    pub name: String,
}

impl From<RenameTripArgs> for RenameTrip {
    fn from(val: RenameTripArgs) -> Self {
        RenameTrip {
            id: val.id,
            name: val.name,
        }
    }
}

/// Append a segment to a trip
#[derive(ClapArgs)]
pub struct AddSegmentArgs {
    #[arg(help = "Unique identifier of the trip to extend")]
    pub trip_id: u64,
    /// Name of the start place
    #[arg(long)]
    pub from: String,
    /// Coordinate of the start place as LAT,LNG
    #[arg(long, value_parser = parse_lat_lng, allow_hyphen_values = true)]
    pub from_at: LatLng,
    /// Name of the end place
    #[arg(long)]
    pub to: String,
    /// Coordinate of the end place as LAT,LNG
    #[arg(long, value_parser = parse_lat_lng, allow_hyphen_values = true)]
    pub to_at: LatLng,
    /// Transport mode, e.g. 飞机, 高铁, train, bike. Unknown labels are kept
    /// as entered.
    #[arg(short, long, default_value = "汽车")]
    pub transport: String,
    /// Price of the leg
    #[arg(short, long, default_value = "")]
    pub price: String,
}

impl From<AddSegmentArgs> for AddSegment {
    fn from(val: AddSegmentArgs) -> Self {
        AddSegment {
            trip_id: val.trip_id,
            segment: NewSegment {
                start: Waypoint::new(val.from, val.from_at),
                end: Waypoint::new(val.to, val.to_at),
                transport: val.transport.into(),
                price: val.price,
            },
        }
    }
}

#[derive(ClapArgs)]
pub struct SidebarArgs {
    /// Trips to expand, as a comma-separated list of IDs
    #[arg(long, value_delimiter = ',')]
    pub expand: Vec<u64>,
    /// Expand every trip
    #[arg(long, conflicts_with = "expand")]
    pub all: bool,
}

#[derive(ClapArgs)]
pub struct RouteArgs {
    #[arg(help = "Unique identifier of the trip to draw")]
    pub trip_id: u64,
}

/// Parses `LAT,LNG` in degrees.
pub fn parse_lat_lng(value: &str) -> Result<LatLng, String> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG but got '{value}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("invalid latitude '{lat}': {e}"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|e| format!("invalid longitude '{lng}': {e}"))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("latitude {lat} is out of range"));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(format!("longitude {lng} is out of range"));
    }
    Ok(LatLng::new(lat, lng))
}
