//! Board configuration as it comes out of the lobby
//!
//! A lobby picks one of the [MapSize] tiers, which fixes both the board
//! dimensions and how many players may join. Custom maps can instead give
//! explicit `rows` and `cols`.
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Dimensions, InvalidDimensions};

/// The lobby size tiers
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MapSize {
    #[allow(missing_docs)]
    Small,
    #[allow(missing_docs)]
    Medium,
    #[allow(missing_docs)]
    Large,
}

impl MapSize {
    /// returns every tier, smallest first
    pub fn all() -> Vec<MapSize> {
        vec![MapSize::Small, MapSize::Medium, MapSize::Large]
    }

    /// the (rows, cols) of the board for this tier
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            MapSize::Small => (2, 2),
            MapSize::Medium => (3, 3),
            MapSize::Large => (4, 4),
        }
    }

    /// the most players a lobby of this tier accepts. Always fits on the board.
    pub fn max_players(self) -> usize {
        match self {
            MapSize::Small => 2,
            MapSize::Medium => 4,
            MapSize::Large => 6,
        }
    }
}

impl fmt::Display for MapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapSize::Small => write!(f, "small"),
            MapSize::Medium => write!(f, "medium"),
            MapSize::Large => write!(f, "large"),
        }
    }
}

/// How a board should be sized, either `{"size": "medium"}` or `{"rows": 3, "cols": 5}`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum BoardConfig {
    /// sized from a lobby tier
    Tier {
        #[allow(missing_docs)]
        size: MapSize,
    },
    /// explicitly sized
    Explicit {
        #[allow(missing_docs)]
        rows: usize,
        #[allow(missing_docs)]
        cols: usize,
    },
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig::Tier {
            size: MapSize::Medium,
        }
    }
}

impl From<MapSize> for BoardConfig {
    fn from(size: MapSize) -> Self {
        BoardConfig::Tier { size }
    }
}

impl BoardConfig {
    /// parse a config from json, checking the dimensions are usable
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.dimensions()?;
        Ok(config)
    }

    /// the validated dimensions for this config
    pub fn dimensions(&self) -> Result<Dimensions, InvalidDimensions> {
        let (rows, cols) = match *self {
            BoardConfig::Tier { size } => size.dimensions(),
            BoardConfig::Explicit { rows, cols } => (rows, cols),
        };
        Dimensions::new(rows, cols)
    }
}
