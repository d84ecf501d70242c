//! Pairwise document comparison
//!
//! Every unordered pair `{i, j}` with `i < j` is scored with the weighted
//! edit-distance engine. Results always come back in the order
//! `(0,1), (0,2), …, (0,N-1), (1,2), …`, whether the pairs were computed
//! sequentially or on the Rayon pool.

use crate::alignment::edit_distance::WeightedEditDistance;
use crate::errors::{require, Result, SimilarityError};
use crate::oracle::TokenDistance;
use crate::types::{CompareConfig, ComparisonResult};
use rayon::prelude::*;

/// Enter a tracing span (when the `tracing` feature is enabled).
macro_rules! trace_span {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!($($arg)*).entered();
    };
}

/// Number of unordered pairs among `n` documents
pub fn pair_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

/// All pairs `(i, j)`, `i < j < n`, in comparison order
pub fn pair_indices(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
}

/// Scores every pair of documents in a collection
#[derive(Debug, Clone, Default)]
pub struct PairwiseComparator<O> {
    engine: WeightedEditDistance<O>,
    config: CompareConfig,
}

impl<O> PairwiseComparator<O> {
    /// Create a comparator with the default configuration
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, CompareConfig::default())
    }

    /// Create a comparator with a custom configuration
    pub fn with_config(oracle: O, config: CompareConfig) -> Self {
        let engine = WeightedEditDistance::new(oracle).with_strategy(config.strategy);
        Self { engine, config }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    pub fn engine(&self) -> &WeightedEditDistance<O> {
        &self.engine
    }

    /// Compare every unordered pair of `documents`.
    ///
    /// Zero or one document yields an empty result set.
    pub fn compare_all<'a, T, D>(&self, documents: &'a [D]) -> Result<Vec<ComparisonResult<'a, T>>>
    where
        D: AsRef<[T]> + Sync,
        T: PartialEq + Sync,
        O: TokenDistance<T> + Sync,
    {
        let docs: Vec<&'a [T]> = documents.iter().map(|d| d.as_ref()).collect();
        self.compare_slices(&docs)
    }

    /// Like [`compare_all`](Self::compare_all), but accepts possibly-absent
    /// input.
    ///
    /// The collection and every document are checked before any pair is
    /// scored, so an absent entry fails with `InvalidArgument` and no partial
    /// result, even when the collection holds a single document.
    pub fn try_compare_all<'a, T, D>(
        &self,
        documents: Option<&'a [Option<D>]>,
    ) -> Result<Vec<ComparisonResult<'a, T>>>
    where
        D: AsRef<[T]> + Sync,
        T: PartialEq + Sync,
        O: TokenDistance<T> + Sync,
    {
        let documents = require(documents, "documents")?;
        let docs = documents
            .iter()
            .enumerate()
            .map(|(idx, doc)| {
                doc.as_ref()
                    .map(|d| d.as_ref())
                    .ok_or_else(|| SimilarityError::invalid_argument(format!("documents[{}]", idx)))
            })
            .collect::<Result<Vec<&'a [T]>>>()?;
        self.compare_slices(&docs)
    }

    fn compare_slices<'a, T>(&self, docs: &[&'a [T]]) -> Result<Vec<ComparisonResult<'a, T>>>
    where
        T: PartialEq + Sync,
        O: TokenDistance<T> + Sync,
    {
        self.config.validate()?;
        let total = pair_count(docs.len());
        trace_span!("compare_all", documents = docs.len(), pairs = total);

        let score = |(i, j): (usize, usize)| {
            let distance = self.engine.distance(docs[i], docs[j]);
            ComparisonResult::new(i, j, docs[i], docs[j], distance)
        };

        if !self.config.runs_parallel(total) {
            #[cfg(feature = "tracing")]
            tracing::debug!(pairs = total, "scoring pairs sequentially");
            return Ok(pair_indices(docs.len()).map(score).collect());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            pairs = total,
            threads = ?self.config.effective_threads(),
            "scoring pairs in parallel"
        );
        let pairs: Vec<(usize, usize)> = pair_indices(docs.len()).collect();
        self.config
            .scoped(|| pairs.into_par_iter().map(score).collect())
    }
}
