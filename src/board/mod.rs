//! The board the characters of a game are placed on
//!
//! A [Board] is a fixed size grid of cells, each of which is either empty or
//! holds exactly one entity. The board never interprets its entities, it is
//! generic over whatever the session layer wants placed, which in a real game
//! is a [crate::wire_representation::Character].
//!
//! ```
//! # use road_to_glory_board::board::Board;
//! let mut board = Board::new(2, 3).unwrap();
//! board.place_all(&["C1", "C2", "C3", "C4"]);
//! assert_eq!(
//!     board.grid().to_vec(),
//!     vec![
//!         vec![Some("C1"), Some("C2"), Some("C3")],
//!         vec![Some("C4"), None, None],
//!     ]
//! );
//! ```
mod dimensions;
mod view;

use std::fmt;

use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::config::BoardConfig;
use crate::wire_representation::Position;

pub use dimensions::{CellIndex, Dimensions, InvalidDimensions};
pub use view::GridView;

/// A fixed size grid of optional entities, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board<E> {
    cells: Vec<Option<E>>,
    dimensions: Dimensions,
}

impl<E> Board<E> {
    /// makes an empty board, fails if either `rows` or `cols` is zero
    pub fn new(rows: usize, cols: usize) -> Result<Self, InvalidDimensions> {
        Ok(Self::with_dimensions(Dimensions::new(rows, cols)?))
    }

    /// makes an empty board from already validated dimensions
    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        let cells = (0..dimensions.capacity()).map(|_| None).collect_vec();
        Self { cells, dimensions }
    }

    /// makes an empty board sized from a lobby config
    pub fn from_config(config: &BoardConfig) -> Result<Self, InvalidDimensions> {
        Ok(Self::with_dimensions(config.dimensions()?))
    }

    #[allow(missing_docs)]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[allow(missing_docs)]
    pub fn rows(&self) -> usize {
        self.dimensions.rows()
    }

    #[allow(missing_docs)]
    pub fn cols(&self) -> usize {
        self.dimensions.cols()
    }

    /// how many entities fit on this board
    pub fn capacity(&self) -> usize {
        self.dimensions.capacity()
    }

    /// true iff `0 <= row < rows` and `0 <= col < cols`
    pub fn is_valid_position(&self, row: i64, col: i64) -> bool {
        self.dimensions.contains(row, col)
    }

    /// a read only view of every cell
    pub fn grid(&self) -> GridView<'_, E> {
        GridView::new(&self.cells, self.dimensions)
    }

    /// the entity at a cell, None when the cell is empty or off the board
    pub fn get(&self, row: usize, col: usize) -> Option<&E> {
        self.grid().get(row, col)
    }

    /// number of cells currently holding an entity
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// every placed entity with its position, in row-major order
    pub fn iter_occupied(&self) -> impl Iterator<Item = (Position, &E)> + '_ {
        let cols = self.cols();
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|entity| (CellIndex(i).into_position(cols), entity))
        })
    }

    /// the position of the first entity, in row-major order, matching `predicate`
    pub fn position_of<P>(&self, mut predicate: P) -> Option<Position>
    where
        P: FnMut(&E) -> bool,
    {
        self.iter_occupied()
            .find(|(_, entity)| predicate(*entity))
            .map(|(pos, _)| pos)
    }

    /// puts an entity in a single cell. Writes off the board are dropped.
    pub(crate) fn place(&mut self, row: i64, col: i64, entity: E) {
        if !self.is_valid_position(row, col) {
            trace!(row, col, "ignoring placement off the board");
            return;
        }
        let index = CellIndex::new(row as usize, col as usize, self.cols());
        self.cells[index.as_usize()] = Some(entity);
    }

    fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }
}

impl<E: Clone> Board<E> {
    /// Places `entities` in input order, filling row 0 left to right, then row 1, and so on.
    ///
    /// Anything already on the board is removed first. Entities past the
    /// board's capacity are not placed and not reported; callers that care
    /// should compare `entities.len()` with [Board::capacity].
    #[instrument(level = "trace", skip_all)]
    pub fn place_all(&mut self, entities: &[E]) {
        self.clear();

        let mut remaining = entities.iter();
        for (row, col) in (0..self.rows()).cartesian_product(0..self.cols()) {
            match remaining.next() {
                Some(entity) => self.place(row as i64, col as i64, entity.clone()),
                None => break,
            }
        }

        let discarded = entities.len().saturating_sub(self.capacity());
        if discarded > 0 {
            debug!(
                discarded,
                capacity = self.capacity(),
                "board is full, leaving entities unplaced"
            );
        }
    }
}

impl<E: fmt::Display> fmt::Display for Board<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid().iter_rows() {
            let line = row
                .iter()
                .map(|cell| match cell {
                    Some(entity) => entity.to_string(),
                    None => ".".to_string(),
                })
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
