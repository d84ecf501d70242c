//! Weighted edit distance
//!
//! A generalized Levenshtein distance over token sequences. Deleting or
//! inserting a token costs 1; substituting one token for another costs
//! whatever the [`TokenDistance`] oracle says, and 0 when the tokens are
//! equal. The oracle is consulted exactly once per cell where the two tokens
//! differ and never for equal tokens.
//!
//! Recurrence for `i, j >= 1`:
//!
//! ```text
//! d[i][j] = min(d[i-1][j] + 1, d[i][j-1] + 1, d[i-1][j-1] + subst(a[i-1], b[j-1]))
//! ```

use crate::alignment::matrix::DpMatrix;
use crate::errors::{require, Result};
use crate::oracle::TokenDistance;
use crate::types::MatrixStrategy;

/// Stateless edit-distance engine bound to an oracle
#[derive(Debug, Clone, Default)]
pub struct WeightedEditDistance<O> {
    oracle: O,
    strategy: MatrixStrategy,
}

impl<O> WeightedEditDistance<O> {
    /// Create an engine using the dense table
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            strategy: MatrixStrategy::Dense,
        }
    }

    /// Choose how the table is held in memory
    pub fn with_strategy(mut self, strategy: MatrixStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn strategy(&self) -> MatrixStrategy {
        self.strategy
    }

    /// Minimum cost of transforming `first` into `second`
    pub fn distance<T>(&self, first: &[T], second: &[T]) -> f64
    where
        T: PartialEq,
        O: TokenDistance<T>,
    {
        match self.strategy {
            MatrixStrategy::Dense => distance_matrix(first, second, &self.oracle)
                .last()
                .copied()
                .unwrap_or(0.0),
            MatrixStrategy::TwoRow => two_row_distance(first, second, &self.oracle),
        }
    }

    /// Like [`distance`](Self::distance), but rejects absent sequences
    pub fn try_distance<T>(&self, first: Option<&[T]>, second: Option<&[T]>) -> Result<f64>
    where
        T: PartialEq,
        O: TokenDistance<T>,
    {
        let first = require(first, "first")?;
        let second = require(second, "second")?;
        Ok(self.distance(first, second))
    }

    /// The full `(len(first)+1) x (len(second)+1)` table, regardless of strategy
    pub fn distance_matrix<T>(&self, first: &[T], second: &[T]) -> DpMatrix<f64>
    where
        T: PartialEq,
        O: TokenDistance<T>,
    {
        distance_matrix(first, second, &self.oracle)
    }
}

/// Weighted edit distance between two documents using the dense table
pub fn weighted_edit_distance<T, O>(first: &[T], second: &[T], oracle: &O) -> f64
where
    T: PartialEq,
    O: TokenDistance<T> + ?Sized,
{
    distance_matrix(first, second, oracle)
        .last()
        .copied()
        .unwrap_or(0.0)
}

/// Weighted edit distance that fails with `InvalidArgument` on absent input
pub fn try_weighted_edit_distance<T, O>(
    first: Option<&[T]>,
    second: Option<&[T]>,
    oracle: &O,
) -> Result<f64>
where
    T: PartialEq,
    O: TokenDistance<T> + ?Sized,
{
    let first = require(first, "first")?;
    let second = require(second, "second")?;
    Ok(weighted_edit_distance(first, second, oracle))
}

#[inline]
fn substitution_cost<T, O>(a: &T, b: &T, oracle: &O) -> f64
where
    T: PartialEq,
    O: TokenDistance<T> + ?Sized,
{
    if a == b {
        0.0
    } else {
        oracle.distance(a, b)
    }
}

fn distance_matrix<T, O>(first: &[T], second: &[T], oracle: &O) -> DpMatrix<f64>
where
    T: PartialEq,
    O: TokenDistance<T> + ?Sized,
{
    let rows = first.len();
    let cols = second.len();
    let mut matrix: DpMatrix<f64> = DpMatrix::for_lengths(rows, cols);

    for i in 0..=rows {
        matrix[(i, 0)] = i as f64;
    }
    for j in 0..=cols {
        matrix[(0, j)] = j as f64;
    }

    for i in 1..=rows {
        for j in 1..=cols {
            let cost = substitution_cost(&first[i - 1], &second[j - 1], oracle);
            let delete = matrix[(i - 1, j)] + 1.0;
            let insert = matrix[(i, j - 1)] + 1.0;
            let substitute = matrix[(i - 1, j - 1)] + cost;
            matrix[(i, j)] = delete.min(insert).min(substitute);
        }
    }

    matrix
}

fn two_row_distance<T, O>(first: &[T], second: &[T], oracle: &O) -> f64
where
    T: PartialEq,
    O: TokenDistance<T> + ?Sized,
{
    let cols = second.len();
    let mut prev: Vec<f64> = (0..=cols).map(|j| j as f64).collect();
    let mut curr = vec![0.0; cols + 1];

    for (i, a) in first.iter().enumerate() {
        curr[0] = (i + 1) as f64;
        for (j, b) in second.iter().enumerate() {
            let cost = substitution_cost(a, b, oracle);
            curr[j + 1] = (prev[j + 1] + 1.0)
                .min(curr[j] + 1.0)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[cols]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{NormalizedLevenshtein, UnitDistance};
    use std::cell::Cell;

    #[test]
    fn test_single_substitution() {
        let a = ["a", "b", "c"];
        let b = ["a", "x", "c"];
        assert_eq!(weighted_edit_distance(&a, &b, &UnitDistance), 1.0);
    }

    #[test]
    fn test_against_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(weighted_edit_distance(&["a"], &empty, &UnitDistance), 1.0);
        assert_eq!(weighted_edit_distance(&empty, &["a", "b"], &UnitDistance), 2.0);
        assert_eq!(weighted_edit_distance(&empty, &empty, &UnitDistance), 0.0);
    }

    #[test]
    fn test_boundary_rows() {
        let engine = WeightedEditDistance::new(UnitDistance);
        let m = engine.distance_matrix(&["a", "b", "c"], &["x", "y"]);
        assert_eq!(m.rows(), 4);
        assert_eq!(m.cols(), 3);
        for i in 0..m.rows() {
            assert_eq!(m[(i, 0)], i as f64);
        }
        for j in 0..m.cols() {
            assert_eq!(m[(0, j)], j as f64);
        }
    }

    #[test]
    fn test_graded_substitution() {
        let a = ["colour", "scheme"];
        let b = ["color", "scheme"];
        let d = weighted_edit_distance(&a, &b, &NormalizedLevenshtein);
        assert!((d - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_expensive_substitution_falls_back_to_indel() {
        let oracle = |_: &&str, _: &&str| 5.0;
        assert_eq!(weighted_edit_distance(&["a"], &["b"], &oracle), 2.0);
    }

    #[test]
    fn test_oracle_never_called_for_equal_tokens() {
        let calls = Cell::new(0usize);
        let oracle = |a: &&str, b: &&str| {
            assert_ne!(a, b);
            calls.set(calls.get() + 1);
            1.0
        };
        let a = ["a", "b", "a"];
        let b = ["a", "c"];
        weighted_edit_distance(&a, &b, &oracle);
        // 6 cells, 2 of them compare "a" with "a"
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_two_row_oracle_call_pattern() {
        let calls = Cell::new(0usize);
        let oracle = |a: &&str, b: &&str| {
            assert_ne!(a, b);
            calls.set(calls.get() + 1);
            1.0
        };
        let engine = WeightedEditDistance::new(&oracle).with_strategy(MatrixStrategy::TwoRow);
        let d = engine.distance(&["a", "b", "a"], &["a", "c"]);
        assert_eq!(d, 2.0);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_equal_tokens_cost_zero_even_if_oracle_disagrees() {
        let oracle = |_: &&str, _: &&str| 0.7;
        let doc = ["x", "y", "z"];
        assert_eq!(weighted_edit_distance(&doc, &doc, &oracle), 0.0);
    }

    #[test]
    fn test_two_row_matches_dense() {
        let a = ["the", "quick", "brown", "fox", "jumps"];
        let b = ["a", "quick", "browne", "dog", "jumped", "high"];
        let dense = WeightedEditDistance::new(NormalizedLevenshtein);
        let rolling = dense.clone().with_strategy(MatrixStrategy::TwoRow);
        let d1 = dense.distance(&a, &b);
        let d2 = rolling.distance(&a, &b);
        assert!((d1 - d2).abs() < 1e-12);
    }

    #[test]
    fn test_try_distance_rejects_missing() {
        let engine = WeightedEditDistance::new(UnitDistance);
        let doc = ["a"];
        let err = engine.try_distance(None, Some(&doc[..])).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("first"));

        let err = try_weighted_edit_distance(Some(&doc[..]), None, &UnitDistance).unwrap_err();
        assert!(err.to_string().contains("second"));

        let empty: [&str; 0] = [];
        assert_eq!(
            engine.try_distance(Some(&empty[..]), Some(&empty[..])).unwrap(),
            0.0
        );
    }
}
