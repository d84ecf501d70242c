//! Dynamic-programming alignment over token sequences
//!
//! - [`edit_distance`]: weighted edit distance with oracle-priced substitutions
//! - [`lcs`]: longest common subsequence with deterministic reconstruction
//! - [`matrix`]: the dense table both engines fill

pub mod edit_distance;
pub mod lcs;
pub mod matrix;

pub use edit_distance::{try_weighted_edit_distance, weighted_edit_distance, WeightedEditDistance};
pub use lcs::{
    lcs_length, longest_common_subsequence, longest_common_subsequence_linear_space,
    optimization_table, try_longest_common_subsequence,
};
pub use matrix::DpMatrix;
