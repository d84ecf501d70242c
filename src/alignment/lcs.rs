//! Longest common subsequence
//!
//! Tokens are compared with exact equality; the distance oracle plays no
//! part here. The optimization table holds `t[i][j] = |LCS(a[..i], b[..j])|`
//! and is non-decreasing along every row and column.
//!
//! # Reconstruction tie-break
//!
//! Backtracking starts at `(len(a), len(b))`. On a mismatch it moves up
//! (consumes `a`) only when `t[i-1][j] > t[i][j-1]`; on equal values it moves
//! left (consumes `b`). This choice is pinned: callers may depend on the exact
//! subsequence returned, not just its length.

use crate::alignment::matrix::DpMatrix;
use crate::errors::{require, Result};

/// Build the `(len(first)+1) x (len(second)+1)` LCS length table
pub fn optimization_table<T: PartialEq>(first: &[T], second: &[T]) -> DpMatrix<usize> {
    let rows = first.len();
    let cols = second.len();
    let mut table: DpMatrix<usize> = DpMatrix::for_lengths(rows, cols);

    for i in 1..=rows {
        for j in 1..=cols {
            table[(i, j)] = if first[i - 1] == second[j - 1] {
                table[(i - 1, j - 1)] + 1
            } else {
                table[(i, j - 1)].max(table[(i - 1, j)])
            };
        }
    }

    table
}

/// Length of the LCS, computed with two rolling rows
pub fn lcs_length<T: PartialEq>(first: &[T], second: &[T]) -> usize {
    last_row(first.iter(), second.iter().collect::<Vec<_>>().as_slice())
        .last()
        .copied()
        .unwrap_or(0)
}

/// The longest common subsequence of `first` and `second`
///
/// ```
/// use rapid_similarity::longest_common_subsequence;
///
/// let lcs = longest_common_subsequence(&["a", "b", "c", "d"], &["b", "d"]);
/// assert_eq!(lcs, vec!["b", "d"]);
/// ```
pub fn longest_common_subsequence<T: PartialEq + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let table = optimization_table(first, second);
    restore(&table, first, second)
}

/// Like [`longest_common_subsequence`], but rejects absent sequences
pub fn try_longest_common_subsequence<T: PartialEq + Clone>(
    first: Option<&[T]>,
    second: Option<&[T]>,
) -> Result<Vec<T>> {
    let first = require(first, "first")?;
    let second = require(second, "second")?;
    Ok(longest_common_subsequence(first, second))
}

fn restore<T: PartialEq + Clone>(table: &DpMatrix<usize>, first: &[T], second: &[T]) -> Vec<T> {
    let mut i = first.len();
    let mut j = second.len();
    let mut lcs = Vec::with_capacity(table[(i, j)]);

    while i > 0 && j > 0 {
        if first[i - 1] == second[j - 1] {
            lcs.push(first[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if table[(i - 1, j)] > table[(i, j - 1)] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    lcs.reverse();
    lcs
}

/// Hirschberg's divide-and-conquer LCS.
///
/// Returns a subsequence of the same length as [`longest_common_subsequence`]
/// while holding only O(len(second)) cells per recursion level. The
/// particular subsequence may differ from the table-backtracking one when
/// several LCSs exist.
pub fn longest_common_subsequence_linear_space<T: PartialEq + Clone>(
    first: &[T],
    second: &[T],
) -> Vec<T> {
    let mut lcs = Vec::new();
    hirschberg(first, second, &mut lcs);
    lcs
}

fn hirschberg<T: PartialEq + Clone>(first: &[T], second: &[T], out: &mut Vec<T>) {
    if first.is_empty() || second.is_empty() {
        return;
    }
    if first.len() == 1 {
        if second.contains(&first[0]) {
            out.push(first[0].clone());
        }
        return;
    }

    let mid = first.len() / 2;
    let (head, tail) = first.split_at(mid);

    let second_refs: Vec<&T> = second.iter().collect();
    let forward = last_row(head.iter(), &second_refs);
    let reversed: Vec<&T> = second.iter().rev().collect();
    let backward = last_row(tail.iter().rev(), &reversed);

    // forward[k] = |LCS(head, second[..k])|, backward[n-k] = |LCS(tail, second[k..])|
    let n = second.len();
    let split = (0..=n)
        .max_by_key(|&k| (forward[k] + backward[n - k], std::cmp::Reverse(k)))
        .unwrap_or(0);

    hirschberg(head, &second[..split], out);
    hirschberg(tail, &second[split..], out);
}

/// Final row of the LCS table for `first` against `second`
fn last_row<'a, T, I>(first: I, second: &[&T]) -> Vec<usize>
where
    T: PartialEq + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut prev = vec![0usize; second.len() + 1];
    let mut curr = vec![0usize; second.len() + 1];
    for a in first {
        for (j, b) in second.iter().enumerate() {
            curr[j + 1] = if a == *b {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
        let mut it = haystack.iter();
        needle.iter().all(|t| it.any(|h| h == t))
    }

    #[test]
    fn test_lcs_with_substitution() {
        let lcs = longest_common_subsequence(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(lcs, vec!["a", "c"]);
    }

    #[test]
    fn test_lcs_subset() {
        let lcs = longest_common_subsequence(&["a", "b", "c", "d"], &["b", "d"]);
        assert_eq!(lcs, vec!["b", "d"]);
    }

    #[test]
    fn test_lcs_empty() {
        let empty: [&str; 0] = [];
        assert!(longest_common_subsequence(&empty, &empty).is_empty());
        assert!(longest_common_subsequence(&["a"], &empty).is_empty());
        assert_eq!(lcs_length(&empty, &["a"]), 0);
    }

    #[test]
    fn test_lcs_identity_on_distinct_tokens() {
        let doc = ["one", "two", "three", "four"];
        assert_eq!(longest_common_subsequence(&doc, &doc), doc.to_vec());
    }

    #[test]
    fn test_tie_break_prefers_consuming_second() {
        // Both "a" and "b" are length-1 answers. Moving left on the tie drops
        // the last token of the second sequence before matching.
        assert_eq!(longest_common_subsequence(&["a", "b"], &["b", "a"]), vec!["b"]);
        assert_eq!(longest_common_subsequence(&["b", "a"], &["a", "b"]), vec!["a"]);
    }

    #[test]
    fn test_tie_break_on_interleaved_tokens() {
        let lcs = longest_common_subsequence(&["x", "a", "y", "b"], &["a", "x", "b", "y"]);
        assert_eq!(lcs, vec!["a", "b"]);
        let table = optimization_table(&["x", "a", "y", "b"], &["a", "x", "b", "y"]);
        assert_eq!(table.last().copied(), Some(2));
    }

    #[test]
    fn test_table_monotonic() {
        let a = ["x", "a", "y", "b", "a"];
        let b = ["a", "b", "x", "a"];
        let t = optimization_table(&a, &b);
        for i in 0..t.rows() {
            for j in 0..t.cols() {
                if i > 0 {
                    assert!(t[(i, j)] >= t[(i - 1, j)]);
                }
                if j > 0 {
                    assert!(t[(i, j)] >= t[(i, j - 1)]);
                }
            }
        }
        assert_eq!(t.last().copied(), Some(lcs_length(&a, &b)));
    }

    #[test]
    fn test_linear_space_agrees_on_length() {
        let a = ["the", "cat", "sat", "on", "the", "mat", "today"];
        let b = ["a", "cat", "sat", "by", "the", "old", "mat"];
        let full = longest_common_subsequence(&a, &b);
        let linear = longest_common_subsequence_linear_space(&a, &b);
        assert_eq!(full.len(), linear.len());
        assert_eq!(linear, vec!["cat", "sat", "the", "mat"]);
        assert!(is_subsequence(&linear, &a));
        assert!(is_subsequence(&linear, &b));
    }

    #[test]
    fn test_try_lcs_rejects_missing() {
        let doc = ["a"];
        let err = try_longest_common_subsequence::<&str>(None, Some(&doc[..])).unwrap_err();
        assert!(err.is_invalid_argument());
        let empty: [&str; 0] = [];
        assert!(try_longest_common_subsequence(Some(&empty[..]), Some(&empty[..]))
            .unwrap()
            .is_empty());
    }
}
