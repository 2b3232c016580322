#![allow(missing_docs)]
//! types to match the Road to Glory wire representation of characters
use serde::{Deserialize, Serialize};
use std::fmt;

/// Struct that matches the `position` object from the wire representation.
/// Both coordinates are zero based.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four numeric stats every character carries
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub movement: i32,
}

/// Struct that matches the `character` object from the wire representation.
///
/// The board never looks inside a character, this is only the shape the
/// session layer hands over for placement.
/// ```
/// # use road_to_glory_board::wire_representation::Character;
/// let body = b"{\"name\":\"Aria\",\"image\":\"aria.png\",\"icon\":\"aria-icon.png\",\"stats\":{\"hp\":10,\"attack\":3,\"defense\":2,\"movement\":4},\"dice\":\"d6\",\"victories\":0,\"currentPosition\":null,\"initialPosition\":null}";
/// let c: Result<Character, _> = serde_json::from_slice(body);
/// assert!(c.is_ok());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub image: String,
    pub icon: String,
    pub stats: Stats,
    pub dice: String,
    #[serde(default)]
    pub victories: u32,
    #[serde(default)]
    pub current_position: Option<Position>,
    #[serde(default)]
    pub initial_position: Option<Position>,
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
