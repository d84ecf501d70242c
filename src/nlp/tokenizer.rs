//! Unicode-aware tokenization
//!
//! Splits raw text into documents (ordered token sequences) using UAX #29
//! word boundaries. Callers with their own tokenizer can skip this module and
//! hand token slices straight to the engines.

use unicode_segmentation::UnicodeSegmentation;

/// A UAX #29 word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Lowercase every token
    lowercase: bool,
    /// Minimum token length (in chars) to keep
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            lowercase: true,
            min_token_length: 1,
        }
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Tokenize text into a document
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter(|word| word.chars().any(|c| c.is_alphanumeric()))
            .filter(|word| word.chars().count() >= self.min_token_length)
            .map(|word| {
                if self.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .collect()
    }

    /// Tokenize a batch of texts, preserving order
    pub fn tokenize_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<String>> {
        texts.iter().map(|t| self.tokenize(t.as_ref())).collect()
    }
}
