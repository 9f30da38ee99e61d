//! Timestamp display in the system time zone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp as `YYYY-MM-DD HH:MM` in the system time zone, or
/// as a date alone with [`LocalDateTime::date_only`].
pub struct LocalDateTime<'a> {
    timestamp: &'a Timestamp,
    with_time: bool,
}

impl<'a> LocalDateTime<'a> {
    pub fn new(timestamp: &'a Timestamp) -> Self {
        Self {
            timestamp,
            with_time: true,
        }
    }

    pub fn date_only(timestamp: &'a Timestamp) -> Self {
        Self {
            timestamp,
            with_time: false,
        }
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.timestamp.to_zoned(TimeZone::system());
        let pattern = if self.with_time { "%Y-%m-%d %H:%M" } else { "%Y-%m-%d" };
        write!(f, "{}", zoned.strftime(pattern))
    }
}
