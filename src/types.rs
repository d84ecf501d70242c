//! Core types for rapid_similarity
//!
//! This module defines comparison results and the runtime configuration
//! shared by the engines and the pairwise comparator.

use crate::errors::{Result, SimilarityError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Comparison results
// ============================================================================

/// The outcome of comparing one unordered pair of documents.
///
/// Both documents are borrowed from the caller's collection, never copied.
/// Fields are private so a result cannot be altered after the comparator
/// creates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult<'a, T> {
    first_index: usize,
    second_index: usize,
    first: &'a [T],
    second: &'a [T],
    distance: f64,
}

impl<'a, T> ComparisonResult<'a, T> {
    /// Create a result for documents `first_index < second_index`
    pub fn new(
        first_index: usize,
        second_index: usize,
        first: &'a [T],
        second: &'a [T],
        distance: f64,
    ) -> Self {
        Self {
            first_index,
            second_index,
            first,
            second,
            distance,
        }
    }

    /// Position of the first document in the input collection
    pub fn first_index(&self) -> usize {
        self.first_index
    }

    /// Position of the second document in the input collection
    pub fn second_index(&self) -> usize {
        self.second_index
    }

    /// The first compared document
    pub fn first(&self) -> &'a [T] {
        self.first
    }

    /// The second compared document
    pub fn second(&self) -> &'a [T] {
        self.second
    }

    /// Weighted edit distance between the two documents
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Distance divided by the longer document's length.
    ///
    /// Two empty documents have a normalized distance of 0.
    pub fn normalized_distance(&self) -> f64 {
        let longest = self.first.len().max(self.second.len());
        if longest == 0 {
            0.0
        } else {
            self.distance / longest as f64
        }
    }

    /// Detach the scores from the borrowed documents
    pub fn to_pair_score(&self) -> PairScore {
        PairScore {
            first: self.first_index,
            second: self.second_index,
            distance: self.distance,
            normalized_distance: self.normalized_distance(),
        }
    }
}

/// An owned, index-based view of a [`ComparisonResult`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    pub first: usize,
    pub second: usize,
    pub distance: f64,
    pub normalized_distance: f64,
}

// ============================================================================
// Configuration
// ============================================================================

/// How the edit-distance table is held in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixStrategy {
    /// Full `(m+1) x (n+1)` table
    #[default]
    Dense,
    /// Two rolling rows; yields the same scalar in O(n) memory
    TwoRow,
}

impl std::str::FromStr for MatrixStrategy {
    type Err = SimilarityError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "dense" | "full" | "matrix" => Ok(Self::Dense),
            "two_row" | "tworow" | "rolling" => Ok(Self::TwoRow),
            other => Err(SimilarityError::invalid_config(format!(
                "unknown matrix strategy '{}'",
                other
            ))),
        }
    }
}

/// Configuration for pairwise comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Edit-distance table layout
    pub strategy: MatrixStrategy,
    /// Dispatch pairs to the Rayon pool
    pub parallel: bool,
    /// Minimum number of pairs before parallel dispatch kicks in
    pub parallel_min_pairs: usize,
    /// Upper bound on worker threads (`None` uses the global pool)
    pub max_threads: Option<usize>,
    /// Disable parallelism entirely. Overrides `max_threads`.
    pub single_thread: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            strategy: MatrixStrategy::Dense,
            parallel: true,
            parallel_min_pairs: 64,
            max_threads: None,
            single_thread: false,
        }
    }
}

impl CompareConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_threads == Some(0) {
            return Err(SimilarityError::invalid_config(
                "max_threads must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn with_strategy(mut self, strategy: MatrixStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_parallel_min_pairs(mut self, min_pairs: usize) -> Self {
        self.parallel_min_pairs = min_pairs;
        self
    }

    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = Some(max_threads);
        self
    }

    pub fn with_single_thread(mut self, single_thread: bool) -> Self {
        self.single_thread = single_thread;
        self
    }

    /// Whether `pair_count` pairs should be dispatched in parallel
    pub fn runs_parallel(&self, pair_count: usize) -> bool {
        self.parallel && !self.single_thread && pair_count >= self.parallel_min_pairs.max(2)
    }

    /// Resolve the effective thread count.
    ///
    /// - `single_thread == true` → `Some(1)`
    /// - `max_threads == Some(n)` → `Some(n)`
    /// - otherwise → `None` (use Rayon default)
    pub fn effective_threads(&self) -> Option<usize> {
        if self.single_thread {
            Some(1)
        } else {
            self.max_threads
        }
    }

    /// Execute `f` within a scoped Rayon thread pool matching this config.
    ///
    /// If no thread limit is set, `f` runs directly on the global pool.
    pub fn scoped<R: Send>(&self, f: impl FnOnce() -> R + Send) -> Result<R> {
        match self.effective_threads() {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                Ok(pool.install(f))
            }
            None => Ok(f()),
        }
    }
}
