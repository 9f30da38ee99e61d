//! Application controller.
//!
//! [`TravelApp`] wires the store, the trip cache, the sidebar, the route
//! renderer and the search coordinator together. Every mutation follows the
//! same cycle:
//!
//! ```text
//! user action ──▶ store write ──▶ load_all ──▶ swap cache ──▶ sidebar ──▶ render
//! ```
//!
//! The cache is only replaced once the new snapshot is complete, so a failed
//! write or a failed read leaves the previous state on screen.

use std::sync::Arc;

use crate::{
    error::{ItineraryError, Result},
    geometry::LatLng,
    map::MapSurface,
    models::{NewSegment, Segment, TransportMode, Trip, DEFAULT_TRIP_NAME},
    params::{AddSegment, CreateTrip, Id, RenameTrip},
    render::{RenderConfig, RenderReport, RouteRenderer},
    search::{Place, PlaceSearch, SearchCoordinator, SearchMode, SearchOutcome, SearchTicket},
    session::{SessionAction, SessionState},
    sidebar::{is_last_in_trip, project, SidebarItem},
    store::{Itinerary, TripCache},
};


/// The interactive itinerary planner.
pub struct TravelApp<M> {
    itinerary: Itinerary,
    cache: TripCache,
    sidebar: Vec<SidebarItem>,
    session: SessionState,
    renderer: RouteRenderer<M>,
    search: SearchCoordinator,
    last_render: Option<RenderReport>,
}

impl<M: MapSurface + 'static> TravelApp<M> {
    /// Creates an app over `itinerary` drawing on `map`. Call
    /// [`reload`](Self::reload) to show the stored trips.
    pub fn new(itinerary: Itinerary, map: Arc<M>, config: RenderConfig) -> Self {
        Self {
            itinerary,
            cache: TripCache::default(),
            sidebar: Vec::new(),
            session: SessionState::default(),
            renderer: RouteRenderer::new(map, config),
            search: SearchCoordinator::new(),
            last_render: None,
        }
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn cache(&self) -> &TripCache {
        &self.cache
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn renderer(&self) -> &RouteRenderer<M> {
        &self.renderer
    }

    /// Current sidebar rows.
    pub fn sidebar(&self) -> &[SidebarItem] {
        &self.sidebar
    }

    /// Hands out the report of the latest route render.
    pub fn take_render_report(&mut self) -> Option<RenderReport> {
        self.last_render.take()
    }

    /// Reloads every trip from the store and redraws.
    ///
    /// Expanded trips stay expanded. An active trip that no longer exists is
    /// dropped, so the next save starts a new one. On failure nothing on
    /// screen changes.
    pub async fn reload(&mut self) -> Result<()> {
        let snapshot = self.itinerary.load_all().await?;
        self.cache = snapshot.carry_expanded_from(&self.cache);
        log::debug!("Reloaded {} trip(s)", self.cache.len());

        if let Some(trip_id) = self.session.active_trip.filter(|id| !self.cache.contains(*id)) {
            log::info!("Active trip {trip_id} is gone from the store");
            self.dispatch(SessionAction::TripDeleted(trip_id));
        }
        self.refresh();
        Ok(())
    }

    /// Expands or collapses a trip and makes it the active one.
    pub fn tap_trip_header(&mut self, trip_id: u64) -> Result<()> {
        self.cache
            .toggle_expanded(trip_id)
            .ok_or(ItineraryError::TripNotFound { id: trip_id })?;
        self.dispatch(SessionAction::SelectTrip(trip_id));
        self.refresh();
        Ok(())
    }

    /// Handles a tap on a sidebar row.
    ///
    /// Tapping the last segment of a trip continues the journey from its end.
    /// Returns whether that happened.
    pub fn tap_segment(&mut self, index: usize) -> bool {
        if !is_last_in_trip(&self.sidebar, index) {
            return false;
        }
        let Some(SidebarItem::Segment { segment, .. }) = self.sidebar.get(index).cloned() else {
            return false;
        };
        self.dispatch(SessionAction::ContinueFrom(segment));
        self.refresh();
        true
    }

    /// Clears the editor and drops the active trip so the next save starts a
    /// new one.
    pub fn new_trip(&mut self) {
        self.dispatch(SessionAction::NewTrip);
    }

    pub fn set_transport(&mut self, transport: TransportMode) {
        self.dispatch(SessionAction::SetTransport(transport));
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.dispatch(SessionAction::SetPrice(price.into()));
    }

    /// Stores the edited segment.
    ///
    /// Without an active trip a new trip named [`DEFAULT_TRIP_NAME`] is
    /// created first and becomes active.
    ///
    /// # Errors
    ///
    /// `ItineraryError::MissingSelection` when an endpoint was not picked, in
    /// which case nothing is written. Store errors are passed through after
    /// a reload, and the draft is kept so the save can be retried.
    pub async fn save_segment(&mut self) -> Result<Segment> {
        let segment = self.session.draft.finalize()?;
        let written = self.store_segment(segment).await;
        let saved = self.settle(written).await?;
        self.dispatch(SessionAction::SegmentSaved {
            trip_id: saved.trip_id,
        });
        self.reload().await?;
        Ok(saved)
    }

    /// Inserts `segment` into the active trip, creating and selecting a trip
    /// first when none is active.
    async fn store_segment(&mut self, segment: NewSegment) -> Result<Segment> {
        let trip_id = match self.session.active_trip {
            Some(trip_id) => trip_id,
            None => {
                let trip = self
                    .itinerary
                    .create_trip(&CreateTrip {
                        name: DEFAULT_TRIP_NAME.to_string(),
                    })
                    .await?;
                log::info!("Created trip {} for the first segment", trip.id);
                self.dispatch(SessionAction::SelectTrip(trip.id));
                trip.id
            }
        };

        self.itinerary
            .add_segment(&AddSegment { trip_id, segment })
            .await
    }

    pub async fn rename_trip(&mut self, trip_id: u64, name: &str) -> Result<Trip> {
        let written = self
            .itinerary
            .rename_trip(&RenameTrip {
                id: trip_id,
                name: name.to_string(),
            })
            .await;
        let trip = self.settle(written).await?;
        self.reload().await?;
        Ok(trip)
    }

    pub async fn toggle_favorite(&mut self, trip_id: u64) -> Result<Trip> {
        let written = self.itinerary.toggle_favorite(&Id { id: trip_id }).await;
        let trip = self.settle(written).await?;
        self.reload().await?;
        Ok(trip)
    }

    /// Deletes a trip and its segments. Deleting the active trip leaves no
    /// trip active.
    pub async fn delete_trip(&mut self, trip_id: u64) -> Result<()> {
        let written = self.itinerary.delete_trip(&Id { id: trip_id }).await;
        self.settle(written).await?;
        self.dispatch(SessionAction::TripDeleted(trip_id));
        self.reload().await
    }

    /// Handles a text change in a search field and returns the lookup to run,
    /// if any.
    ///
    /// Only focused input counts as typing. Text set by the app itself still
    /// invalidates running lookups but leaves the editor alone.
    pub fn search_input(&mut self, mode: SearchMode, text: &str, has_focus: bool) -> Option<SearchTicket> {
        if has_focus || text.is_empty() {
            self.dispatch(SessionAction::SearchInput {
                mode,
                text: text.to_string(),
            });
        }
        self.search.on_input(mode, text, has_focus)
    }

    /// Shared handle for running lookups outside the app.
    pub fn search_coordinator(&self) -> SearchCoordinator {
        self.search.clone()
    }

    /// Shows the answer of a lookup. Stale answers are ignored.
    pub fn suggestions_arrived(&mut self, outcome: SearchOutcome) {
        if let SearchOutcome::Suggestions { mode, places } = outcome {
            self.dispatch(SessionAction::SuggestionsArrived { mode, places });
        }
    }

    /// Types `text` and waits for its suggestions.
    pub async fn search<P>(&mut self, provider: &P, mode: SearchMode, text: &str) -> Vec<Place>
    where
        P: PlaceSearch + ?Sized,
    {
        let Some(ticket) = self.search_input(mode, text, true) else {
            return Vec::new();
        };
        let outcome = self.search.run(provider, ticket).await;
        self.suggestions_arrived(outcome);
        self.session.suggestions.clone()
    }

    /// Picks a suggestion for the current search field.
    ///
    /// In explore mode the place is pinned and zoomed to. Places without a
    /// coordinate are ignored.
    pub fn pick_suggestion(&mut self, place: Place) {
        let explore = self.session.search_mode == SearchMode::Explore;
        if let (true, Some(position)) = (explore, place.position) {
            self.renderer.show_place(position, &place.name);
        }
        self.dispatch(SessionAction::PickSuggestion(place));
    }

    pub fn dismiss_result(&mut self) {
        self.dispatch(SessionAction::DismissResult);
    }

    /// Starts a new plan heading to the explore result. Returns false when no
    /// result is shown.
    pub fn plan_to_result(&mut self) -> bool {
        let Some(place) = self.session.result.clone() else {
            return false;
        };
        self.dispatch(SessionAction::PlanTo(place));
        true
    }

    /// Centers the map on the device location.
    pub fn locate_me(&mut self) -> Option<LatLng> {
        self.renderer.locate_me()
    }

    /// Starts a new plan at the device location. Returns false when the
    /// location is unknown.
    pub fn plan_from_here(&mut self) -> bool {
        let Some(location) = self.renderer.map().user_location() else {
            return false;
        };
        self.dispatch(SessionAction::StartFromLocation(location));
        true
    }

    /// Passes a store write result through. A failed write reloads first so
    /// the screen matches the store again and the action can be retried.
    async fn settle<T>(&mut self, written: Result<T>) -> Result<T> {
        if let Err(e) = &written {
            log::warn!("Store write failed, reloading: {e}");
            if let Err(reload) = self.reload().await {
                log::warn!("Reload after failed write failed too: {reload}");
            }
        }
        written
    }

    fn dispatch(&mut self, action: SessionAction) {
        let state = std::mem::take(&mut self.session);
        self.session = state.apply(action);
    }

    /// Rebuilds the sidebar and redraws the active trip.
    fn refresh(&mut self) {
        self.sidebar = project(self.cache.trips(), self.cache.segments_by_trip());
        let segments = self
            .session
            .active_trip
            .map_or(&[][..], |id| self.cache.segments_of(id));
        self.last_render = Some(self.renderer.render(segments));
    }
}
