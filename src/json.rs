//! JSON interface for batch comparison
//!
//! Callers outside Rust pass pre-tokenized documents (or raw texts) as one
//! JSON payload and get index-based pair scores back, which keeps the
//! boundary crossing to a single string each way.

use crate::alignment::lcs::longest_common_subsequence;
use crate::comparator::{pair_count, PairwiseComparator};
use crate::errors::{require, Result, SimilarityError};
use crate::nlp::tokenizer::Tokenizer;
use crate::oracle::OracleKind;
use crate::types::{CompareConfig, PairScore};
use serde::{Deserialize, Serialize};

/// Input payload for [`compare_from_json`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonCompareRequest {
    /// Pre-tokenized documents; `null` entries are rejected
    #[serde(default)]
    pub documents: Option<Vec<Option<Vec<String>>>>,
    /// Raw texts, tokenized when `documents` is absent
    #[serde(default)]
    pub texts: Option<Vec<String>>,
    #[serde(default)]
    pub oracle: OracleKind,
    #[serde(default)]
    pub config: CompareConfig,
}

/// Output payload of [`compare_from_json`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCompareResponse {
    pub pair_count: usize,
    pub results: Vec<PairScore>,
}

/// Input payload for [`lcs_from_json`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonLcsRequest {
    #[serde(default)]
    pub first: Option<Vec<String>>,
    #[serde(default)]
    pub second: Option<Vec<String>>,
}

/// Output payload of [`lcs_from_json`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLcsResponse {
    pub length: usize,
    pub subsequence: Vec<String>,
}

/// Score every document pair described by a JSON request
pub fn compare(request: JsonCompareRequest) -> Result<JsonCompareResponse> {
    let documents: Vec<Option<Vec<String>>> = match (request.documents, request.texts) {
        (Some(documents), _) => documents,
        (None, Some(texts)) => Tokenizer::new()
            .tokenize_all(&texts)
            .into_iter()
            .map(Some)
            .collect(),
        (None, None) => return Err(SimilarityError::invalid_argument("documents")),
    };

    let comparator = PairwiseComparator::with_config(request.oracle, request.config);
    let results: Vec<PairScore> = comparator
        .try_compare_all::<String, Vec<String>>(Some(documents.as_slice()))?
        .iter()
        .map(|r| r.to_pair_score())
        .collect();

    Ok(JsonCompareResponse {
        pair_count: pair_count(documents.len()),
        results,
    })
}

/// Parse a [`JsonCompareRequest`], compare, and serialize the response
pub fn compare_from_json(json: &str) -> Result<String> {
    let request: JsonCompareRequest = serde_json::from_str(json)?;
    let response = compare(request)?;
    Ok(serde_json::to_string(&response)?)
}

/// Longest common subsequence of the two sequences in a JSON request
pub fn lcs(request: &JsonLcsRequest) -> Result<JsonLcsResponse> {
    let first = require(request.first.as_deref(), "first")?;
    let second = require(request.second.as_deref(), "second")?;
    let subsequence = longest_common_subsequence(first, second);
    Ok(JsonLcsResponse {
        length: subsequence.len(),
        subsequence,
    })
}

/// Parse a [`JsonLcsRequest`], compute the LCS, and serialize the response
pub fn lcs_from_json(json: &str) -> Result<String> {
    let request: JsonLcsRequest = serde_json::from_str(json)?;
    Ok(serde_json::to_string(&lcs(&request)?)?)
}
