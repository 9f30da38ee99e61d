//! Flattened sidebar rows for the trip list.
//!
//! The sidebar shows every trip as a header row. An expanded trip is followed
//! by one row per segment, in segment order. The list is rebuilt from scratch
//! whenever the cache changes; it is never patched.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{total_cost, Segment, Trip};

/// One row of the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SidebarItem {
    /// A trip header together with the summed price of its segments
    Trip { trip: Trip, total_cost: f64 },
    /// A segment row shown under its expanded trip
    Segment { segment: Segment, is_last: bool },
}

impl SidebarItem {
    /// Whether this row is a trip header.
    pub fn is_trip(&self) -> bool {
        matches!(self, SidebarItem::Trip { .. })
    }

    /// ID of the trip the row belongs to.
    pub fn trip_id(&self) -> u64 {
        match self {
            SidebarItem::Trip { trip, .. } => trip.id,
            SidebarItem::Segment { segment, .. } => segment.trip_id,
        }
    }
}

/// Builds the sidebar rows for `trips`.
///
/// Trips appear in the given order. Segments of a trip are listed only when
/// the trip is expanded, and the final segment row of each trip is marked
/// with `is_last`.
pub fn project(trips: &[Trip], segments_by_trip: &HashMap<u64, Vec<Segment>>) -> Vec<SidebarItem> {
    let mut items = Vec::with_capacity(trips.len());

    for trip in trips {
        let segments = segments_by_trip
            .get(&trip.id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        items.push(SidebarItem::Trip {
            trip: trip.clone(),
            total_cost: total_cost(segments),
        });

        if trip.expanded {
            let count = segments.len();
            items.extend(segments.iter().enumerate().map(|(i, segment)| {
                SidebarItem::Segment {
                    segment: segment.clone(),
                    is_last: i + 1 == count,
                }
            }));
        }
    }

    items
}

/// Whether the row at `index` is the last segment row of its trip.
///
/// True when the next row is missing or is a trip header. Trip header rows
/// and out of range indices are never "last".
pub fn is_last_in_trip(items: &[SidebarItem], index: usize) -> bool {
    match items.get(index) {
        Some(SidebarItem::Segment { .. }) => items.get(index + 1).map_or(true, SidebarItem::is_trip),
        _ => false,
    }
}
