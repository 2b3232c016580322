#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for placing the characters of a Road to Glory game on its board.
//!
//! The session layer owns the characters and picks the board size from the
//! lobby's [config::MapSize]; this crate takes it from there. You will likely
//! be most interested in [board::Board], which places an ordered list of
//! entities in row-major order and hands back a read only view of the result.
//! ```
//! # use road_to_glory_board::{board::Board, config::{BoardConfig, MapSize}};
//! let mut board = Board::from_config(&BoardConfig::from(MapSize::Small)).unwrap();
//! board.place_all(&["first", "second", "third"]);
//! assert_eq!(board.get(1, 0), Some(&"third"));
//! assert_eq!(board.get(1, 1), None);
//! ```

use config::BoardConfig;
use wire_representation::Character;

pub mod board;
pub mod config;
pub mod types;
pub mod wire_representation;

/// Loads a list of characters from a json fixture
pub fn character_fixture(character_fixture: &str) -> Vec<Character> {
    let c: Result<Vec<Character>, _> = serde_json::from_str(character_fixture);
    c.expect("the json literal is valid")
}

/// Loads a board config from a json fixture
pub fn board_config_fixture(board_config_fixture: &str) -> BoardConfig {
    let c: Result<BoardConfig, _> = BoardConfig::from_json(board_config_fixture);
    c.expect("the json literal is a valid board config")
}
