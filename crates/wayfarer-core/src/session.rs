//! UI session state and its transitions.
//!
//! [`SessionState`] holds everything the interface remembers between two user
//! actions: the active trip, the search field in use, the segment being
//! edited, the suggestion list and the explore result card. It is a plain
//! value. Handlers never mutate it in place; they feed a [`SessionAction`] to
//! [`SessionState::apply`] and keep the state it returns.

use serde::{Deserialize, Serialize};

use crate::{
    error::{ItineraryError, Result},
    geometry::LatLng,
    models::{NewSegment, Segment, TransportMode, Waypoint},
    search::{Place, SearchMode},
};

/// Name of the start field when a plan begins at the device location.
pub const MY_LOCATION: &str = "我的位置";

/// The segment being edited.
///
/// A field name without a coordinate means the user typed text but has not
/// picked a place yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentDraft {
    pub start_name: String,
    pub start: Option<LatLng>,
    pub end_name: String,
    pub end: Option<LatLng>,
    pub transport: TransportMode,
    pub price: String,
}

impl SegmentDraft {
    /// Whether both endpoints have a coordinate.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Turns the draft into an insertable segment.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::MissingSelection` naming the first endpoint
    /// that has no coordinate.
    pub fn finalize(&self) -> Result<NewSegment> {
        let start = self
            .start
            .ok_or(ItineraryError::MissingSelection { endpoint: "start" })?;
        let end = self
            .end
            .ok_or(ItineraryError::MissingSelection { endpoint: "end" })?;

        Ok(NewSegment {
            start: Waypoint::new(self.start_name.clone(), start),
            end: Waypoint::new(self.end_name.clone(), end),
            transport: self.transport.clone(),
            price: self.price.clone(),
        })
    }

    /// Empties the place and price fields. The transport choice is kept.
    fn cleared(self) -> Self {
        Self {
            transport: self.transport,
            ..Self::default()
        }
    }
}

/// Everything the interface remembers between actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Trip shown on the map and extended by the next save
    pub active_trip: Option<u64>,
    /// Field the last search was typed into
    pub search_mode: SearchMode,
    pub draft: SegmentDraft,
    pub suggestions: Vec<Place>,
    pub suggestions_visible: bool,
    /// Place shown on the explore result card
    pub result: Option<Place>,
}

/// A user or system event that changes the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Start planning a new trip from scratch
    NewTrip,
    /// A trip header was tapped
    SelectTrip(u64),
    /// Continue the journey from the end of a trip's last segment
    ContinueFrom(Segment),
    /// Start a new plan at the device location
    StartFromLocation(LatLng),
    /// Start a new plan heading to the explore result
    PlanTo(Place),
    /// Text typed into a search field
    SearchInput { mode: SearchMode, text: String },
    /// Suggestions arrived for a search field
    SuggestionsArrived { mode: SearchMode, places: Vec<Place> },
    /// A suggestion was picked
    PickSuggestion(Place),
    SetTransport(TransportMode),
    SetPrice(String),
    /// A segment was stored in the given trip
    SegmentSaved { trip_id: u64 },
    /// A trip was deleted
    TripDeleted(u64),
    /// The explore result card was closed
    DismissResult,
}

impl SessionState {
    /// Returns the state that follows `action`.
    pub fn apply(self, action: SessionAction) -> Self {
        match action {
            SessionAction::NewTrip => self.start_plan(),
            SessionAction::SelectTrip(trip_id) => Self {
                active_trip: Some(trip_id),
                ..self
            },
            SessionAction::ContinueFrom(segment) => Self {
                active_trip: Some(segment.trip_id),
                draft: SegmentDraft {
                    start_name: segment.end.name,
                    start: Some(segment.end.position),
                    ..self.draft
                },
                ..self
            },
            SessionAction::StartFromLocation(location) => {
                let state = self.start_plan();
                Self {
                    draft: SegmentDraft {
                        start_name: MY_LOCATION.to_string(),
                        start: Some(location),
                        ..state.draft
                    },
                    ..state
                }
            }
            SessionAction::PlanTo(place) => {
                let state = self.start_plan();
                Self {
                    draft: SegmentDraft {
                        end_name: place.name,
                        end: place.position,
                        ..state.draft
                    },
                    result: None,
                    ..state
                }
            }
            SessionAction::SearchInput { mode, text } => self.typed(mode, text),
            SessionAction::SuggestionsArrived { mode, places } => Self {
                search_mode: mode,
                suggestions: places,
                suggestions_visible: true,
                ..self
            },
            SessionAction::PickSuggestion(place) => self.pick(place),
            SessionAction::SetTransport(transport) => Self {
                draft: SegmentDraft {
                    transport,
                    ..self.draft
                },
                ..self
            },
            SessionAction::SetPrice(price) => Self {
                draft: SegmentDraft { price, ..self.draft },
                ..self
            },
            SessionAction::SegmentSaved { trip_id } => Self {
                active_trip: Some(trip_id),
                draft: self.draft.cleared(),
                suggestions_visible: false,
                ..self
            },
            SessionAction::TripDeleted(trip_id) => Self {
                active_trip: self.active_trip.filter(|id| *id != trip_id),
                ..self
            },
            SessionAction::DismissResult => Self {
                result: None,
                ..self
            },
        }
    }

    /// Drops the active trip and empties the editor.
    fn start_plan(self) -> Self {
        Self {
            active_trip: None,
            draft: self.draft.cleared(),
            suggestions_visible: false,
            ..self
        }
    }

    /// Typing in an editor field replaces the name and forgets the picked
    /// coordinate. An empty explore bar hides its suggestions.
    fn typed(self, mode: SearchMode, text: String) -> Self {
        match mode {
            SearchMode::Explore => Self {
                suggestions_visible: self.suggestions_visible && !text.is_empty(),
                ..self
            },
            SearchMode::SegmentStart => Self {
                draft: SegmentDraft {
                    start_name: text,
                    start: None,
                    ..self.draft
                },
                ..self
            },
            SearchMode::SegmentEnd => Self {
                draft: SegmentDraft {
                    end_name: text,
                    end: None,
                    ..self.draft
                },
                ..self
            },
        }
    }

    /// Places a picked suggestion according to the current search mode.
    /// Candidates without a coordinate are ignored.
    fn pick(self, place: Place) -> Self {
        let Some(position) = place.position else {
            return self;
        };

        let state = Self {
            suggestions_visible: false,
            ..self
        };
        match state.search_mode {
            SearchMode::Explore => Self {
                result: Some(place),
                ..state
            },
            SearchMode::SegmentStart => Self {
                draft: SegmentDraft {
                    start_name: place.name,
                    start: Some(position),
                    ..state.draft
                },
                ..state
            },
            SearchMode::SegmentEnd => Self {
                draft: SegmentDraft {
                    end_name: place.name,
                    end: Some(position),
                    ..state.draft
                },
                ..state
            },
        }
    }
}
