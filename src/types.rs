//! traits that are useful for code generic over Road to Glory boards
use crate::board::Board;
use crate::wire_representation::Position;

/// a board for which the size can be determined
pub trait SizeDeterminableBoard {
    #[allow(missing_docs)]
    fn get_rows(&self) -> usize;
    #[allow(missing_docs)]
    fn get_cols(&self) -> usize;
}

/// A board that can tell whether a coordinate lies on it
pub trait PositionValidatableBoard {
    /// true iff `0 <= row < rows` and `0 <= col < cols`
    fn is_valid_position(&self, row: i64, col: i64) -> bool;

    /// checks a wire position against the board
    fn off_board(&self, pos: Position) -> bool {
        !self.is_valid_position(pos.row as i64, pos.col as i64)
    }
}

/// A board for which the entity in a given cell can be got
pub trait EntityGettableBoard: SizeDeterminableBoard {
    /// the entity type placed on this board
    type Entity;

    /// get the entity at a position, None for empty cells and positions off the board
    fn get_entity(&self, pos: Position) -> Option<&Self::Entity>;
}

impl<E> SizeDeterminableBoard for Board<E> {
    fn get_rows(&self) -> usize {
        self.rows()
    }

    fn get_cols(&self) -> usize {
        self.cols()
    }
}

impl<E> PositionValidatableBoard for Board<E> {
    fn is_valid_position(&self, row: i64, col: i64) -> bool {
        Board::is_valid_position(self, row, col)
    }
}

impl<E> EntityGettableBoard for Board<E> {
    type Entity = E;

    fn get_entity(&self, pos: Position) -> Option<&E> {
        if !Board::is_valid_position(self, pos.row as i64, pos.col as i64) {
            return None;
        }
        self.get(pos.row as usize, pos.col as usize)
    }
}
