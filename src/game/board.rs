#![allow(dead_code)]
//! The 7x7 letter grid and its per-cell multiplier levels

use super::catalog::Letter;
use super::GRID_SIZE;

/// Highest multiplier level a cell can reach (x3).
pub const MAX_LEVEL: u8 = 2;

/// A single grid position. Empty cells always sit at level 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardCell {
    letter: Option<Letter>,
    level: u8,
}

impl BoardCell {
    pub fn letter(&self) -> Option<Letter> {
        self.letter
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Score multiplier for this position: x1, x2 or x3.
    pub fn multiplier(&self) -> u32 {
        u32::from(self.level) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[BoardCell; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at `(row, col)`, or None when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&BoardCell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE
    }

    pub fn rows(&self) -> &[[BoardCell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Number of cells holding a letter.
    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: Letter) {
        self.cells[row][col] = BoardCell {
            letter: Some(letter),
            level: 0,
        };
    }

    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = BoardCell::default();
    }

    pub(crate) fn raise_level(&mut self, row: usize, col: usize) {
        let cell = &mut self.cells[row][col];
        cell.level = (cell.level + 1).min(MAX_LEVEL);
    }

    pub(crate) fn set_level(&mut self, row: usize, col: usize, level: u8) {
        self.cells[row][col].level = level.min(MAX_LEVEL);
    }

    /// Place a row of letters starting at `(row, col)`. Test helper.
    #[cfg(test)]
    pub(crate) fn write_across(&mut self, row: usize, col: usize, word: &str) {
        for (i, c) in word.chars().enumerate() {
            self.set_letter(row, col + i, Letter::from_char(c).unwrap());
        }
    }

    /// Place a column of letters starting at `(row, col)`. Test helper.
    #[cfg(test)]
    pub(crate) fn write_down(&mut self, row: usize, col: usize, word: &str) {
        for (i, c) in word.chars().enumerate() {
            self.set_letter(row + i, col, Letter::from_char(c).unwrap());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled(), 0);
        for cell in board.rows().iter().flatten() {
            assert!(cell.is_empty());
            assert_eq!(cell.level(), 0);
        }
    }

    #[test]
    fn test_level_caps_at_max() {
        let mut board = Board::new();
        board.write_across(0, 0, "A");
        for _ in 0..5 {
            board.raise_level(0, 0);
        }
        let cell = board.cell(0, 0).unwrap();
        assert_eq!(cell.level(), MAX_LEVEL);
        assert_eq!(cell.multiplier(), 3);
    }

    #[test]
    fn test_clear_resets_level() {
        let mut board = Board::new();
        board.write_across(2, 2, "Q");
        board.raise_level(2, 2);
        board.clear(2, 2);
        assert_eq!(board.cell(2, 2), Some(&BoardCell::default()));
    }

    #[test]
    fn test_out_of_range_cell() {
        let board = Board::new();
        assert!(board.cell(GRID_SIZE, 0).is_none());
        assert!(board.cell(0, GRID_SIZE).is_none());
        assert!(!Board::in_bounds(7, 3));
        assert!(Board::in_bounds(6, 6));
    }
}
