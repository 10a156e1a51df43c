//! The five NYC boroughs and their fixed map geometry.
//!
//! Everything here is compile-time data: the borough set never changes, and
//! each borough carries one centroid coordinate used both for map markers and
//! for heatmap point accumulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of boroughs. Every probability vector in the crate has this length.
pub const BOROUGH_COUNT: usize = 5;

/// Map center for the whole city (lat, lon).
pub const NYC_CENTER: (f64, f64) = (40.7128, -74.0060);

/// Initial zoom level for the city-wide base map.
pub const NYC_ZOOM: u8 = 10;

/// Canned complaint texts offered as quick examples.
pub const EXAMPLE_COMPLAINTS: [&str; 5] = [
    "Illegal parking blocking the driveway",
    "Noise complaint from construction site",
    "Street light not working",
    "Water leak in public street",
    "Overflowing trash on sidewalk",
];

/// One of the five NYC boroughs.
///
/// Variant order is the canonical label/probability-vector order everywhere:
/// model manifests, chart bars, and prediction vectors all index boroughs by
/// position in [`Borough::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Borough {
    Manhattan,
    Brooklyn,
    Queens,
    Bronx,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl Borough {
    /// All boroughs in canonical order.
    pub const ALL: [Borough; BOROUGH_COUNT] = [
        Borough::Manhattan,
        Borough::Brooklyn,
        Borough::Queens,
        Borough::Bronx,
        Borough::StatenIsland,
    ];

    /// Display label, matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Borough::Manhattan => "Manhattan",
            Borough::Brooklyn => "Brooklyn",
            Borough::Queens => "Queens",
            Borough::Bronx => "Bronx",
            Borough::StatenIsland => "Staten Island",
        }
    }

    /// Short label for narrow chart axes.
    pub fn short_label(self) -> &'static str {
        match self {
            Borough::Manhattan => "MAN",
            Borough::Brooklyn => "BKN",
            Borough::Queens => "QNS",
            Borough::Bronx => "BRX",
            Borough::StatenIsland => "SI",
        }
    }

    /// Fixed centroid coordinate (lat, lon).
    pub fn centroid(self) -> (f64, f64) {
        match self {
            Borough::Manhattan => (40.7831, -73.9712),
            Borough::Brooklyn => (40.6782, -73.9442),
            Borough::Queens => (40.7282, -73.7949),
            Borough::Bronx => (40.8448, -73.8648),
            Borough::StatenIsland => (40.5795, -74.1502),
        }
    }

    /// Position in [`Borough::ALL`].
    pub fn index(self) -> usize {
        match self {
            Borough::Manhattan => 0,
            Borough::Brooklyn => 1,
            Borough::Queens => 2,
            Borough::Bronx => 3,
            Borough::StatenIsland => 4,
        }
    }

    /// Borough at a canonical-order index.
    pub fn from_index(index: usize) -> Option<Borough> {
        Borough::ALL.get(index).copied()
    }

    /// Parse a display label back into a borough.
    pub fn from_label(label: &str) -> Option<Borough> {
        Borough::ALL.into_iter().find(|b| b.label() == label)
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
