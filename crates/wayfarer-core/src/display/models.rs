//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data types carry no
//! presentation logic.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{TransportMode, Trip, Segment},
    search::Place,
    sidebar::SidebarItem,
};

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Trip {
    fn star(&self) -> &'static str {
        if self.favorite {
            "★"
        } else {
            "☆"
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {} {}", self.id, self.name, self.star())?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", LocalDateTime::new(&self.created_at))?;
        Ok(())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} → {}",
            self.id, self.start.name, self.end.name
        )?;
        writeln!(f)?;
        writeln!(f, "- Transport: {} {}", self.transport.icon(), self.transport)?;
        writeln!(f, "- Price: ¥{}", self.price)?;
        writeln!(f, "- From: {}", self.start.position)?;
        writeln!(f, "- To: {}", self.end.position)?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for SidebarItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SidebarItem::Trip { trip, total_cost } => {
                let arrow = if trip.expanded { "▾" } else { "▸" };
                writeln!(
                    f,
                    "- {arrow} **{}** {} (ID: {}, {}) ¥{total_cost:.2}",
                    trip.name,
                    trip.star(),
                    trip.id,
                    LocalDateTime::date_only(&trip.created_at)
                )
            }
            SidebarItem::Segment { segment, is_last } => {
                write!(
                    f,
                    "    - {} {} → {} ¥{}",
                    segment.transport.icon(),
                    segment.start.name,
                    segment.end.name,
                    segment.price
                )?;
                if *is_last {
                    write!(f, " *(continue from here)*")?;
                }
                writeln!(f)
            }
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}**: {}", self.name, self.display_address())?;
        if let Some(position) = &self.position {
            write!(f, " {position}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::{geometry::LatLng, models::Waypoint};

    fn trip(favorite: bool, expanded: bool) -> Trip {
        Trip {
            id: 4,
            name: "Spring".to_string(),
            favorite,
            created_at: Timestamp::UNIX_EPOCH,
            expanded,
        }
    }

    fn segment() -> Segment {
        Segment {
            id: 9,
            trip_id: 4,
            start: Waypoint::new("Beijing", LatLng::new(39.9, 116.4)),
            end: Waypoint::new("Shanghai", LatLng::new(31.2, 121.5)),
            transport: TransportMode::Plane,
            price: "680".to_string(),
        }
    }

    #[test]
    fn test_trip_display() {
        let output = trip(true, false).to_string();
        assert!(output.starts_with("# 4. Spring ★"));
        assert!(output.contains("- Created: "));
        assert!(trip(false, false).to_string().contains("☆"));
    }

    #[test]
    fn test_segment_display() {
        let output = segment().to_string();
        assert!(output.contains("### 9. Beijing → Shanghai"));
        assert!(output.contains("- Transport: ✈ 飞机"));
        assert!(output.contains("- Price: ¥680"));
        assert!(output.contains("(39.900000, 116.400000)"));
    }

    #[test]
    fn test_sidebar_rows() {
        let header = SidebarItem::Trip {
            trip: trip(false, true),
            total_cost: 680.0,
        };
        let output = header.to_string();
        assert!(output.contains("▾ **Spring**"));
        assert!(output.contains("¥680.00"));

        let last = SidebarItem::Segment {
            segment: segment(),
            is_last: true,
        };
        assert!(last.to_string().contains("continue from here"));

        let middle = SidebarItem::Segment {
            segment: segment(),
            is_last: false,
        };
        assert!(!middle.to_string().contains("continue from here"));
    }

    #[test]
    fn test_place_without_address() {
        let place = Place::new("West Lake", LatLng::new(30.25, 120.14));
        assert!(place.to_string().contains("暂无详细地址"));
    }
}
