//! The fixed size of a board and row-major indexing into it

use std::error::Error;
use std::fmt;

use crate::wire_representation::Position;

/// Returned when a board is asked for with a zero row or column count
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct InvalidDimensions {
    /// the requested row count
    pub rows: usize,
    /// the requested column count
    pub cols: usize,
}

impl fmt::Display for InvalidDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid board dimensions {}x{}, rows and cols must be positive, at most i32::MAX, and their product must fit in a usize",
            self.rows, self.cols
        )
    }
}

impl Error for InvalidDimensions {}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Rows and columns of a board. Both are always in `1..=i32::MAX` and
/// `rows * cols` never overflows.
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Checked constructor, fails if either side is zero, too large for a
    /// [Position], or the cell count overflows
    pub fn new(rows: usize, cols: usize) -> Result<Self, InvalidDimensions> {
        let max_side = i32::MAX as usize;
        if rows == 0 || cols == 0 || rows > max_side || cols > max_side {
            return Err(InvalidDimensions { rows, cols });
        }
        if rows.checked_mul(cols).is_none() {
            return Err(InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Get the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// total number of cells
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// true iff `0 <= row < rows` and `0 <= col < cols`
    pub fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as u64) < self.rows as u64 && (col as u64) < self.cols as u64
    }
}

/// wrapper type for a row-major index in to the board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct CellIndex(pub usize);

impl CellIndex {
    /// makes a new cell index from a row and column, needs to know the width of the board
    pub fn new(row: usize, col: usize, cols: usize) -> Self {
        Self(row * cols + col)
    }

    /// get a usize from a CellIndex
    pub fn as_usize(&self) -> usize {
        self.0
    }

    /// converts a cellindex to a position. Lossless for any index on a board
    /// built from [Dimensions], whose sides never exceed `i32::MAX`.
    pub fn into_position(self, cols: usize) -> Position {
        let row = (self.0 / cols) as i32;
        let col = (self.0 % cols) as i32;
        Position { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions() {
        assert_eq!(
            Dimensions::new(0, 3),
            Err(InvalidDimensions { rows: 0, cols: 3 })
        );
        assert!(Dimensions::new(3, 0).is_err());
        assert!(Dimensions::new(1, 1).is_ok());
    }

    #[test]
    fn test_oversized_dimensions() {
        assert_eq!(
            Dimensions::new(usize::MAX, 2),
            Err(InvalidDimensions {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert!(Dimensions::new(2, i32::MAX as usize + 1).is_err());
        assert!(Dimensions::new(i32::MAX as usize, 1).is_ok());
        assert_eq!(
            Dimensions::new(i32::MAX as usize, 1).unwrap().capacity(),
            i32::MAX as usize
        );
    }

    #[test]
    fn test_last_cell_of_widest_board() {
        let d = Dimensions::new(1, i32::MAX as usize).unwrap();
        let last = CellIndex(d.capacity() - 1);
        assert_eq!(last.into_position(d.cols()), Position::new(0, i32::MAX - 1));
    }

    #[test]
    fn test_contains_bounds() {
        let d = Dimensions::new(2, 3).unwrap();
        assert!(d.contains(0, 0));
        assert!(d.contains(1, 2));
        assert!(!d.contains(-1, 0));
        assert!(!d.contains(0, -1));
        assert!(!d.contains(2, 0));
        assert!(!d.contains(0, 3));
        assert!(!d.contains(2, 3));
        assert!(!d.contains(i64::MIN, i64::MAX));
    }

    #[test]
    fn test_cell_index_is_row_major() {
        let cols = 3;
        assert_eq!(CellIndex::new(0, 2, cols).as_usize(), 2);
        assert_eq!(CellIndex::new(1, 0, cols).as_usize(), 3);
        assert_eq!(CellIndex(4).into_position(cols), Position::new(1, 1));
    }
}
