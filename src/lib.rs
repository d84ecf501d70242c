//! # rapid_similarity
//!
//! Pairwise similarity between tokenized documents, with Python bindings.
//!
//! The library scores every unordered pair of documents with a weighted
//! edit distance: a generalized Levenshtein distance over tokens where
//! insertions and deletions cost 1 and a substitution costs whatever a
//! pluggable token-distance oracle reports. A longest-common-subsequence
//! engine over the same token model is available as a standalone utility.
//!
//! ## Features
//!
//! - **Graded substitutions**: plug in any [`TokenDistance`], or use
//!   [`UnitDistance`] / [`NormalizedLevenshtein`]
//! - **Deterministic**: pair order and LCS reconstruction are fixed
//! - **Parallel**: pairs are scored on a Rayon pool without changing order
//! - **Python bindings**: via PyO3 behind the `python` feature
//!
//! ```
//! use rapid_similarity::{longest_common_subsequence, weighted_edit_distance, UnitDistance};
//!
//! let a = ["a", "b", "c"];
//! let b = ["a", "x", "c"];
//! assert_eq!(weighted_edit_distance(&a, &b, &UnitDistance), 1.0);
//! assert_eq!(longest_common_subsequence(&a, &b), vec!["a", "c"]);
//! ```

pub mod alignment;
pub mod comparator;
pub mod errors;
pub mod json;
pub mod nlp;
pub mod oracle;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, SimilarityError};
pub use types::{CompareConfig, ComparisonResult, MatrixStrategy, PairScore};

// Re-export main functionality
pub use alignment::{
    lcs_length, longest_common_subsequence, longest_common_subsequence_linear_space,
    optimization_table, try_longest_common_subsequence, try_weighted_edit_distance,
    weighted_edit_distance, DpMatrix, WeightedEditDistance,
};
pub use comparator::{pair_count, pair_indices, PairwiseComparator};
pub use nlp::tokenizer::Tokenizer;
pub use oracle::{NormalizedLevenshtein, OracleKind, TokenDistance, UnitDistance};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
