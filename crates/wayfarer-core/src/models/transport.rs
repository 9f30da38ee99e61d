//! Transport mode enumeration.

use std::{convert::Infallible, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the ways a segment can be travelled.
///
/// Known modes are stored by their canonical label. Anything else is kept
/// verbatim in [`TransportMode::Other`], so free text round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransportMode {
    /// Car or coach
    #[default]
    Car,
    /// Flight
    Plane,
    /// High-speed rail
    HighSpeedRail,
    /// Conventional train
    Train,
    /// Bicycle
    Bicycle,
    /// Metro / subway
    Metro,
    /// Unrecognized label, kept as entered
    Other(String),
}

impl TransportMode {
    /// The selectable modes, in menu order. The first one is the default.
    pub const OPTIONS: [TransportMode; 6] = [
        TransportMode::Car,
        TransportMode::Plane,
        TransportMode::HighSpeedRail,
        TransportMode::Train,
        TransportMode::Bicycle,
        TransportMode::Metro,
    ];

    /// Canonical label, as stored in the database.
    pub fn as_str(&self) -> &str {
        match self {
            TransportMode::Car => "汽车",
            TransportMode::Plane => "飞机",
            TransportMode::HighSpeedRail => "高铁",
            TransportMode::Train => "火车",
            TransportMode::Bicycle => "自行车",
            TransportMode::Metro => "地铁",
            TransportMode::Other(label) => label,
        }
    }

    /// Icon shown next to the mode in listings and on map markers.
    pub fn icon(&self) -> &'static str {
        match self {
            TransportMode::Car => "🚗",
            TransportMode::Plane => "✈",
            TransportMode::HighSpeedRail => "🚄",
            TransportMode::Train => "🚆",
            TransportMode::Bicycle => "🚲",
            TransportMode::Metro => "🚇",
            TransportMode::Other(_) => "➔",
        }
    }

    /// Whether the label matched one of the known modes.
    pub fn is_known(&self) -> bool {
        !matches!(self, TransportMode::Other(_))
    }
}

impl FromStr for TransportMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mode = match trimmed {
            "汽车" => TransportMode::Car,
            "飞机" => TransportMode::Plane,
            "高铁" => TransportMode::HighSpeedRail,
            "火车" => TransportMode::Train,
            "自行车" => TransportMode::Bicycle,
            "地铁" => TransportMode::Metro,
            _ => match trimmed.to_lowercase().as_str() {
                "car" => TransportMode::Car,
                "plane" | "flight" => TransportMode::Plane,
                "high-speed-rail" | "high-speed rail" | "hsr" => TransportMode::HighSpeedRail,
                "train" => TransportMode::Train,
                "bicycle" | "bike" => TransportMode::Bicycle,
                "metro" | "subway" => TransportMode::Metro,
                _ => TransportMode::Other(s.to_string()),
            },
        };
        Ok(mode)
    }
}

impl From<String> for TransportMode {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(mode) => mode,
            Err(never) => match never {},
        }
    }
}

impl From<TransportMode> for String {
    fn from(value: TransportMode) -> Self {
        match value {
            TransportMode::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}
