//! The clock face wording as a fixed grid of characters.

use crate::error::{ConfigError, Result};
use std::collections::BTreeSet;

/// Rows of characters with equal length.
///
/// Lengths are counted in `char`s, so umlauts occupy one cell just like
/// ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    cells: Vec<Vec<char>>,
}

impl TextGrid {
    /// Build a grid, rejecting fewer than two rows or columns and ragged rows.
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let cells: Vec<Vec<char>> = lines.iter().map(|l| l.as_ref().chars().collect()).collect();

        if cells.len() < 2 {
            return Err(ConfigError::TooFewRows { rows: cells.len() }.into());
        }

        let expected = cells[0].len();
        if expected < 2 {
            return Err(ConfigError::TooFewColumns { columns: expected }.into());
        }

        for (row, line) in cells.iter().enumerate() {
            if line.len() != expected {
                return Err(ConfigError::RaggedRow {
                    row,
                    expected,
                    found: line.len(),
                }
                .into());
            }
        }

        Ok(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells[0].len()
    }

    /// Character at `row`, `column`, or `None` outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// First character of every row, top to bottom.
    pub fn first_column(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().map(|r| r[0])
    }

    /// Last character of every row, top to bottom.
    pub fn last_column(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().map(|r| r[r.len() - 1])
    }

    /// Every cell as `(row, column, character)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(i, r)| r.iter().enumerate().map(move |(j, &c)| (i, j, c)))
    }

    /// Distinct characters, sorted.
    pub fn distinct_chars(&self) -> BTreeSet<char> {
        self.cells.iter().flatten().copied().collect()
    }
}
