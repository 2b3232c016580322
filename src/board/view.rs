use std::fmt;

use itertools::Itertools;

use super::dimensions::{CellIndex, Dimensions};

/// A read only view over the cells of a [super::Board].
///
/// Nothing reachable from a view can write to the board, so placement
/// only ever happens through the board itself. Use [GridView::to_vec] to
/// take an owned copy.
pub struct GridView<'a, E> {
    cells: &'a [Option<E>],
    dimensions: Dimensions,
}

impl<'a, E> Clone for GridView<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for GridView<'a, E> {}

impl<'a, E: fmt::Debug> fmt::Debug for GridView<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_rows()).finish()
    }
}

impl<'a, E> GridView<'a, E> {
    pub(crate) fn new(cells: &'a [Option<E>], dimensions: Dimensions) -> Self {
        debug_assert_eq!(cells.len(), dimensions.capacity());
        Self { cells, dimensions }
    }

    /// number of rows in the grid
    pub fn rows(&self) -> usize {
        self.dimensions.rows()
    }

    /// number of columns in every row
    pub fn cols(&self) -> usize {
        self.dimensions.cols()
    }

    /// the entity at a cell, None when the cell is empty or off the board
    pub fn get(&self, row: usize, col: usize) -> Option<&'a E> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.cells[CellIndex::new(row, col, self.cols()).as_usize()].as_ref()
    }

    /// a single row, None past the last row
    pub fn row(&self, row: usize) -> Option<&'a [Option<E>]> {
        if row >= self.rows() {
            return None;
        }
        let start = CellIndex::new(row, 0, self.cols()).as_usize();
        Some(&self.cells[start..start + self.cols()])
    }

    /// iterates the rows from row 0 downwards
    pub fn iter_rows(&self) -> impl Iterator<Item = &'a [Option<E>]> + 'a {
        self.cells.chunks(self.dimensions.cols())
    }

    /// every cell in row-major order
    pub fn cells(&self) -> &'a [Option<E>] {
        self.cells
    }
}

impl<'a, E: Clone> GridView<'a, E> {
    /// an owned copy of the grid, detached from the board
    pub fn to_vec(&self) -> Vec<Vec<Option<E>>> {
        self.iter_rows().map(|row| row.to_vec()).collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells() -> Vec<Option<char>> {
        vec![Some('a'), Some('b'), None, Some('d'), None, None]
    }

    #[test]
    fn test_rows_and_cols() {
        let cells = cells();
        let view = GridView::new(&cells, Dimensions::new(2, 3).unwrap());
        assert_eq!(view.rows(), 2);
        assert_eq!(view.cols(), 3);
        assert_eq!(view.iter_rows().count(), 2);
        assert!(view.iter_rows().all(|r| r.len() == 3));
    }

    #[test]
    fn test_get_and_row() {
        let cells = cells();
        let view = GridView::new(&cells, Dimensions::new(2, 3).unwrap());
        assert_eq!(view.get(0, 1), Some(&'b'));
        assert_eq!(view.get(1, 0), Some(&'d'));
        assert_eq!(view.get(0, 2), None);
        assert_eq!(view.get(2, 0), None);
        assert_eq!(view.get(0, 3), None);
        assert_eq!(view.row(1), Some(&[Some('d'), None, None][..]));
        assert_eq!(view.row(2), None);
    }

    #[test]
    fn test_to_vec_is_detached() {
        let mut cells = cells();
        let copy = GridView::new(&cells, Dimensions::new(3, 2).unwrap()).to_vec();
        cells[0] = None;
        assert_eq!(
            copy,
            vec![
                vec![Some('a'), Some('b')],
                vec![None, Some('d')],
                vec![None, None]
            ]
        );
    }
}
