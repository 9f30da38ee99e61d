//! Command handlers.
//!
//! Each handler converts its clap arguments into core parameters, calls the
//! itinerary and prints the result either as markdown or, with `--json`, as
//! JSON.

use std::{fmt::Display, sync::Arc};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;
use wayfarer_core::{
    display::{ClearResult, CreateResult, DeleteResult, DrawPlan, Segments, SidebarRows, Trips, UpdateResult},
    map::RecordingMap,
    params::{AddSegment, CreateTrip, Id, RenameTrip},
    render::RenderConfig,
    Itinerary, ItineraryError, TransportMode, TravelApp, Trip,
};

use crate::{
    args::{ConfirmedTripArgs, RouteArgs, SegmentCommands, SidebarArgs, TripCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    itinerary: Itinerary,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(itinerary: Itinerary, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            itinerary,
            renderer,
            json,
        }
    }

    pub async fn handle_trip_command(self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Create(args) => {
                let trip = self
                    .itinerary
                    .create_trip(&CreateTrip::from(args))
                    .await
                    .context("Failed to create trip")?;
                self.emit(&trip, CreateResult::new(trip.clone()))
            }
            TripCommands::List => self.list_trips().await,
            TripCommands::Show(args) => {
                let id = Id::from(args);
                let trip = self.require_trip(&id).await?;
                let segments = self.itinerary.segments_of(&id).await?;
                if self.json {
                    return self.renderer.render_json(&TripDetails {
                        trip: &trip,
                        segments: &segments,
                    });
                }
                self.renderer
                    .render(&format!("{trip}\n## Segments\n\n{}", Segments(segments)))
            }
            TripCommands::Rename(args) => {
                let params = RenameTrip::from(args);
                let before = self.require_trip(&Id { id: params.id }).await?;
                let trip = self
                    .itinerary
                    .rename_trip(&params)
                    .await
                    .context("Failed to rename trip")?;
                let changes = if before.name == trip.name {
                    Vec::new()
                } else {
                    vec![format!("Renamed from '{}' to '{}'", before.name, trip.name)]
                };
                self.emit(&trip, UpdateResult::with_changes(trip.clone(), changes))
            }
            TripCommands::Favorite(args) => {
                let trip = self
                    .itinerary
                    .toggle_favorite(&Id::from(args))
                    .await
                    .context("Failed to toggle favorite")?;
                let change = if trip.favorite {
                    "Added to favorites"
                } else {
                    "Removed from favorites"
                };
                self.emit(
                    &trip,
                    UpdateResult::with_changes(trip.clone(), vec![change.to_string()]),
                )
            }
            TripCommands::Delete(args) => self.delete_trip(&args).await,
        }
    }

    pub async fn handle_segment_command(self, command: SegmentCommands) -> Result<()> {
        match command {
            SegmentCommands::Add(args) => {
                let params = AddSegment::from(args);
                if !params.segment.transport.is_known() {
                    warn!(
                        "Unknown transport '{}' is kept as entered. Known modes: {}",
                        params.segment.transport,
                        TransportMode::OPTIONS.map(|m| m.to_string()).join(", ")
                    );
                }
                let segment = self
                    .itinerary
                    .add_segment(&params)
                    .await
                    .context("Failed to add segment")?;
                self.emit(&segment, CreateResult::new(segment.clone()))
            }
            SegmentCommands::List(args) => {
                let id = Id::from(args);
                self.require_trip(&id).await?;
                let segments = self.itinerary.segments_of(&id).await?;
                if self.json {
                    return self.renderer.render_json(&segments);
                }
                self.renderer.render(&Segments(segments).to_string())
            }
            SegmentCommands::Clear(args) => {
                if !args.confirm {
                    return self.refuse("clear", &args);
                }
                let id = Id::from(&args);
                self.require_trip(&id).await?;
                let removed = self.itinerary.clear_segments(&id).await?;
                let result = ClearResult {
                    trip_id: id.id,
                    removed,
                };
                if self.json {
                    return self.renderer.render_json(&serde_json::json!({
                        "trip_id": id.id,
                        "removed": removed,
                    }));
                }
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn list_trips(&self) -> Result<()> {
        let trips = self
            .itinerary
            .list_trips()
            .await
            .context("Failed to list trips")?;
        if self.json {
            return self.renderer.render_json(&trips);
        }
        self.renderer.render(&Trips(trips).to_string())
    }

    /// Prints the sidebar with the requested trips expanded.
    pub async fn sidebar(self, args: SidebarArgs) -> Result<()> {
        let Self {
            itinerary,
            renderer,
            json,
        } = self;
        let mut app = open_app(itinerary).await?;

        let expand: Vec<u64> = if args.all {
            app.cache().trips().iter().map(|t| t.id).collect()
        } else {
            args.expand
        };
        for id in expand {
            app.tap_trip_header(id)?;
        }

        if json {
            return renderer.render_json(app.sidebar());
        }
        renderer.render(&SidebarRows(app.sidebar()).to_string())
    }

    /// Draws a trip on a recording map and prints what was drawn.
    pub async fn route(self, args: RouteArgs) -> Result<()> {
        let Self {
            itinerary,
            renderer,
            json,
        } = self;
        let mut app = open_app(itinerary).await?;
        app.renderer().map().take_commands();

        app.tap_trip_header(args.trip_id)?;
        let commands = app.renderer().map().take_commands();
        debug!("Route of trip {} took {} map commands", args.trip_id, commands.len());

        if json {
            return renderer.render_json(&commands);
        }
        renderer.render(&DrawPlan(&commands).to_string())
    }

    async fn delete_trip(&self, args: &ConfirmedTripArgs) -> Result<()> {
        if !args.confirm {
            return self.refuse("delete", args);
        }
        let id = Id::from(args);
        let trip = self.require_trip(&id).await?;
        let removed = self.itinerary.segments_of(&id).await?.len();
        self.itinerary
            .delete_trip(&id)
            .await
            .context("Failed to delete trip")?;
        self.emit(&trip, DeleteResult::new(trip.clone(), removed))
    }

    async fn require_trip(&self, id: &Id) -> Result<Trip> {
        self.itinerary
            .get_trip(id)
            .await?
            .ok_or_else(|| ItineraryError::TripNotFound { id: id.id }.into())
    }

    fn refuse(&self, action: &str, args: &ConfirmedTripArgs) -> Result<()> {
        self.renderer.render(&format!(
            "Refusing to {action} trip {} without --confirm.\n",
            args.id
        ))
    }

    fn emit<T: Serialize>(&self, value: &T, markdown: impl Display) -> Result<()> {
        if self.json {
            self.renderer.render_json(value)
        } else {
            self.renderer.render(&markdown.to_string())
        }
    }
}

#[derive(Serialize)]
struct TripDetails<'a> {
    #[serde(flatten)]
    trip: &'a Trip,
    segments: &'a [wayfarer_core::Segment],
}

async fn open_app(itinerary: Itinerary) -> Result<TravelApp<RecordingMap>> {
    let mut app = TravelApp::new(
        itinerary,
        Arc::new(RecordingMap::new()),
        RenderConfig::instant(),
    );
    app.reload().await.context("Failed to load trips")?;
    Ok(app)
}
