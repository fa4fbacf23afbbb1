//! The game board: a fixed-size rectangular grid of cells

use crate::core::{Cell, PlayerColor};
use crate::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rows x cols grid of cells, stored row-major.
///
/// Column count must be odd (>= 3) so a center column exists. At
/// construction, column 0 holds one red pawn per row and the last column one
/// blue pawn per row; interior cells start empty.
///
/// `Clone` is an independent deep copy; read-only accessors on the engine
/// hand out clones so callers never observe engine-internal mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a starting board, validating the dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 1 || cols < 3 || cols % 2 == 0 {
            return Err(EngineError::InvalidBoard { rows, cols });
        }
        let mut cells = vec![Cell::new(); rows * cols];
        for row in 0..rows {
            // count 1 is always in range
            cells[row * cols].init_pawns(PlayerColor::Red, 1)?;
            cells[row * cols + cols - 1].init_pawns(PlayerColor::Blue, 1)?;
        }
        Ok(Board { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Is (row, col) on the board?
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// The cell at (row, col), or `OutOfBounds`.
    pub fn get(&self, row: usize, col: usize) -> Result<&Cell> {
        if !self.in_bounds(row, col) {
            return Err(EngineError::OutOfBounds { row, col });
        }
        Ok(&self.cells[row * self.cols + col])
    }

    /// Mutable access to the cell at (row, col), or `OutOfBounds`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell> {
        if !self.in_bounds(row, col) {
            return Err(EngineError::OutOfBounds { row, col });
        }
        Ok(&mut self.cells[row * self.cols + col])
    }

    /// All cells of one row, left to right.
    ///
    /// Panics if `row` is out of range; row indices come from iterating
    /// `0..rows()`, so a bad index is a programmer error.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for cell in self.row(row) {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellContent;

    #[test]
    fn test_starting_layout() {
        let board = Board::new(3, 5).unwrap();
        for row in 0..3 {
            let left = board.get(row, 0).unwrap();
            assert_eq!(left.owner(), Some(PlayerColor::Red));
            assert_eq!(left.pawn_count(), 1);

            let right = board.get(row, 4).unwrap();
            assert_eq!(right.owner(), Some(PlayerColor::Blue));
            assert_eq!(right.pawn_count(), 1);

            for col in 1..4 {
                assert_eq!(board.get(row, col).unwrap().content(), CellContent::Empty);
            }
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Board::new(0, 5).is_err());
        assert!(Board::new(3, 4).is_err()); // even
        assert!(Board::new(3, 1).is_err()); // no room for both sides
        assert!(Board::new(1, 3).is_ok());
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::new(2, 3).unwrap();
        assert!(board.get(2, 0).is_err());
        assert!(board.get(0, 3).is_err());
        assert!(board.get(1, 2).is_ok());
    }

    #[test]
    fn test_deep_copy_independence() {
        let board = Board::new(2, 3).unwrap();
        let mut copy = board.clone();
        copy.get_mut(0, 1)
            .unwrap()
            .init_pawns(PlayerColor::Blue, 2)
            .unwrap();

        assert_eq!(board.get(0, 1).unwrap().content(), CellContent::Empty);
        assert_eq!(copy.get(0, 1).unwrap().pawn_count(), 2);
    }

    #[test]
    fn test_display() {
        let board = Board::new(2, 3).unwrap();
        assert_eq!(board.to_string(), "1_1\n1_1\n");
    }
}
