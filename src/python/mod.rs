//! Python bindings via PyO3
//!
//! This module provides the Python interface for rapid_similarity.

pub mod native;

use pyo3::prelude::*;

/// Register all Python functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_function(wrap_pyfunction!(native::weighted_edit_distance, m)?)?;
    m.add_function(wrap_pyfunction!(native::longest_common_subsequence, m)?)?;
    m.add_function(wrap_pyfunction!(native::compare_all, m)?)?;
    m.add_function(wrap_pyfunction!(native::compare_from_json, m)?)?;
    m.add_function(wrap_pyfunction!(native::lcs_from_json, m)?)?;

    Ok(())
}
