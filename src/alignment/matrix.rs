//! Dense row-major DP table
//!
//! Row `i` and column `j` index prefixes of length `i` and `j`, so a table
//! for sequences of lengths `m` and `n` has `(m + 1) x (n + 1)` cells.

use std::ops::{Index, IndexMut};

/// A dense 2-D table stored in a single row-major buffer
#[derive(Debug, Clone, PartialEq)]
pub struct DpMatrix<V> {
    rows: usize,
    cols: usize,
    cells: Vec<V>,
}

impl<V: Copy + Default> DpMatrix<V> {
    /// Allocate a table filled with `V::default()`
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![V::default(); rows * cols],
        }
    }

    /// Allocate a table sized for two sequences of the given lengths
    pub fn for_lengths(first_len: usize, second_len: usize) -> Self {
        Self::new(first_len + 1, second_len + 1)
    }
}

impl<V> DpMatrix<V> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&V> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Borrow a full row
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`. Use [`get`](Self::get) for checked access.
    pub fn row(&self, row: usize) -> &[V] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// The bottom-right cell, which holds the answer for the full sequences
    pub fn last(&self) -> Option<&V> {
        self.cells.last()
    }
}

impl<V> Index<(usize, usize)> for DpMatrix<V> {
    type Output = V;

    fn index(&self, (row, col): (usize, usize)) -> &V {
        debug_assert!(row < self.rows && col < self.cols);
        &self.cells[row * self.cols + col]
    }
}

impl<V> IndexMut<(usize, usize)> for DpMatrix<V> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut V {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.cells[row * self.cols + col]
    }
}
