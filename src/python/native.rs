//! Native Python interface
//!
//! Documents arrive as `list[str]`. A `None` where a document is expected
//! raises `ValueError`, matching the Rust `InvalidArgument` error.

use crate::alignment::edit_distance::try_weighted_edit_distance;
use crate::alignment::lcs::try_longest_common_subsequence;
use crate::comparator::PairwiseComparator;
use crate::errors::SimilarityError;
use crate::oracle::OracleKind;
use crate::types::{CompareConfig, MatrixStrategy};
use pyo3::prelude::*;

fn to_py_err(err: SimilarityError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

fn parse_oracle(oracle: &str) -> PyResult<OracleKind> {
    oracle.parse::<OracleKind>().map_err(to_py_err)
}

/// Weighted edit distance between two token lists.
#[pyfunction]
#[pyo3(signature = (first, second, oracle = "normalized_levenshtein"))]
pub fn weighted_edit_distance(
    first: Option<Vec<String>>,
    second: Option<Vec<String>>,
    oracle: &str,
) -> PyResult<f64> {
    let oracle = parse_oracle(oracle)?;
    try_weighted_edit_distance(first.as_deref(), second.as_deref(), &oracle).map_err(to_py_err)
}

/// Longest common subsequence of two token lists.
#[pyfunction]
#[pyo3(signature = (first, second))]
pub fn longest_common_subsequence(
    first: Option<Vec<String>>,
    second: Option<Vec<String>>,
) -> PyResult<Vec<String>> {
    try_longest_common_subsequence(first.as_deref(), second.as_deref()).map_err(to_py_err)
}

/// Score every pair of documents.
///
/// Returns `(first_index, second_index, distance)` tuples in pair order.
#[pyfunction]
#[pyo3(signature = (
    documents,
    oracle = "normalized_levenshtein",
    parallel = true,
    max_threads = None,
    strategy = "dense",
    single_thread = false
))]
pub fn compare_all(
    py: Python<'_>,
    documents: Option<Vec<Option<Vec<String>>>>,
    oracle: &str,
    parallel: bool,
    max_threads: Option<usize>,
    strategy: &str,
    single_thread: bool,
) -> PyResult<Vec<(usize, usize, f64)>> {
    let oracle = parse_oracle(oracle)?;
    let strategy = strategy.parse::<MatrixStrategy>().map_err(to_py_err)?;
    let mut config = CompareConfig::new()
        .with_parallel(parallel)
        .with_strategy(strategy)
        .with_single_thread(single_thread);
    config.max_threads = max_threads;
    let comparator = PairwiseComparator::with_config(oracle, config);

    py.allow_threads(|| {
        comparator
            .try_compare_all::<String, Vec<String>>(documents.as_deref())
            .map(|results| {
                results
                    .iter()
                    .map(|r| (r.first_index(), r.second_index(), r.distance()))
                    .collect()
            })
    })
    .map_err(to_py_err)
}

/// JSON batch interface; see [`crate::json::compare_from_json`].
#[pyfunction]
pub fn compare_from_json(py: Python<'_>, json: &str) -> PyResult<String> {
    let json = json.to_owned();
    py.allow_threads(move || crate::json::compare_from_json(&json))
        .map_err(to_py_err)
}

/// JSON LCS interface; see [`crate::json::lcs_from_json`].
#[pyfunction]
pub fn lcs_from_json(json: &str) -> PyResult<String> {
    crate::json::lcs_from_json(json).map_err(to_py_err)
}
