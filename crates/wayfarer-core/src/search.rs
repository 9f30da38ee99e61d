//! Place search with autocomplete suggestions.
//!
//! There are three search fields: the global explore bar and the start and end
//! fields of the segment editor. Typing into a focused field issues a
//! [`SearchTicket`]; the lookup runs against a [`PlaceSearch`] provider and its
//! answer is only shown if no newer ticket has been issued in the meantime.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::LatLng;

/// Shown for a place whose provider gave no address.
pub const NO_ADDRESS: &str = "暂无详细地址";

/// Which field a search belongs to, and so where a picked place goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SearchMode {
    /// Global search bar. A pick shows a result card.
    #[default]
    Explore = 0,
    /// Start field of the segment editor
    SegmentStart = 1,
    /// End field of the segment editor
    SegmentEnd = 2,
}

impl SearchMode {
    /// Numeric code of the mode.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// A candidate returned by a place search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    /// Providers sometimes return candidates without a coordinate. Those
    /// cannot be picked.
    #[serde(default)]
    pub position: Option<LatLng>,
}

impl Place {
    /// Creates a place with a coordinate and no address.
    pub fn new(name: impl Into<String>, position: LatLng) -> Self {
        Self {
            name: name.into(),
            address: None,
            position: Some(position),
        }
    }

    /// Sets the address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Address to display, with a placeholder when there is none.
    pub fn display_address(&self) -> &str {
        self.address.as_deref().unwrap_or(NO_ADDRESS)
    }
}

/// Errors reported by a place search provider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The provider answered with a failure status
    #[error("Place search failed with status {code}")]
    Status { code: i32 },
    /// The provider could not be reached
    #[error("Place search unavailable: {message}")]
    Unavailable { message: String },
}

/// An autocomplete provider.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Looks up candidates for a partial query.
    async fn lookup(&self, query: &str) -> Result<Vec<Place>, SearchError>;
}

/// A provider over a fixed list of places, matching on name.
#[derive(Debug, Clone, Default)]
pub struct StaticPlaces {
    places: Vec<Place>,
}

impl StaticPlaces {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }
}

#[async_trait]
impl PlaceSearch for StaticPlaces {
    async fn lookup(&self, query: &str) -> Result<Vec<Place>, SearchError> {
        let query = query.trim().to_lowercase();
        Ok(self
            .places
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .cloned()
            .collect())
    }
}

/// A search that was issued and may still be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub sequence: u64,
    pub mode: SearchMode,
    pub query: String,
}

/// Result of running a ticket.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Suggestions to show for the field the ticket came from
    Suggestions { mode: SearchMode, places: Vec<Place> },
    /// A newer input arrived while the lookup ran
    Stale,
}

/// Issues search tickets and drops answers that arrive out of date.
#[derive(Debug, Clone, Default)]
pub struct SearchCoordinator {
    latest: Arc<AtomicU64>,
}

impl SearchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a text change in one of the search fields.
    ///
    /// Every change invalidates the lookups that are still running. A new
    /// lookup is only issued for non-empty text in a focused field, so text
    /// set programmatically never opens suggestions.
    pub fn on_input(&self, mode: SearchMode, text: &str, has_focus: bool) -> Option<SearchTicket> {
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        if text.is_empty() || !has_focus {
            return None;
        }
        log::trace!("Search ticket {sequence} for {mode:?}: {text}");
        Some(SearchTicket {
            sequence,
            mode,
            query: text.to_string(),
        })
    }

    /// Sequence number of the newest input.
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Whether no newer input was seen since `ticket` was issued.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.sequence == self.latest()
    }

    /// Turns a provider answer into suggestions, or `None` if the ticket is
    /// out of date. Failures become an empty list.
    pub fn accept(
        &self,
        ticket: &SearchTicket,
        result: Result<Vec<Place>, SearchError>,
    ) -> Option<Vec<Place>> {
        if !self.is_current(ticket) {
            log::debug!(
                "Dropping stale search response {} (latest {})",
                ticket.sequence,
                self.latest()
            );
            return None;
        }
        match result {
            Ok(places) => Some(places),
            Err(e) => {
                log::warn!("Place search for '{}' failed: {e}", ticket.query);
                Some(Vec::new())
            }
        }
    }

    /// Runs the lookup for `ticket` and accepts its answer.
    pub async fn run<P>(&self, provider: &P, ticket: SearchTicket) -> SearchOutcome
    where
        P: PlaceSearch + ?Sized,
    {
        let result = provider.lookup(&ticket.query).await;
        match self.accept(&ticket, result) {
            Some(places) => SearchOutcome::Suggestions {
                mode: ticket.mode,
                places,
            },
            None => SearchOutcome::Stale,
        }
    }
}
