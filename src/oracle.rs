//! Token distance oracles
//!
//! The edit-distance engine prices substitutions through [`TokenDistance`].
//! Implementations must be deterministic, non-negative, and return 0 for
//! identical tokens. The engine never consults the oracle for equal tokens,
//! so an oracle that misbehaves on identical input still yields cost 0 there.

/// A real-valued distance between two tokens.
pub trait TokenDistance<T: ?Sized> {
    /// Cost of substituting `a` with `b`
    fn distance(&self, a: &T, b: &T) -> f64;
}

impl<T: ?Sized, F> TokenDistance<T> for F
where
    F: Fn(&T, &T) -> f64,
{
    fn distance(&self, a: &T, b: &T) -> f64 {
        self(a, b)
    }
}

/// Classic 0/1 substitution cost: every unequal pair costs 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitDistance;

impl<T: PartialEq + ?Sized> TokenDistance<T> for UnitDistance {
    fn distance(&self, a: &T, b: &T) -> f64 {
        if a == b {
            0.0
        } else {
            1.0
        }
    }
}

/// Character-level Levenshtein distance divided by the longer token's
/// character count, so every substitution costs in `[0, 1]`.
///
/// "colour" vs "color" costs 1/6, while "cat" vs "dog" costs 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizedLevenshtein;

impl NormalizedLevenshtein {
    /// Raw character edit distance between two strings
    pub fn char_distance(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.is_empty() {
            return b.len();
        }
        if b.is_empty() {
            return a.len();
        }

        let mut prev: Vec<usize> = (0..=b.len()).collect();
        let mut curr = vec![0usize; b.len() + 1];
        for (i, ca) in a.iter().enumerate() {
            curr[0] = i + 1;
            for (j, cb) in b.iter().enumerate() {
                let cost = usize::from(ca != cb);
                curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        prev[b.len()]
    }
}

impl<T: AsRef<str> + ?Sized> TokenDistance<T> for NormalizedLevenshtein {
    fn distance(&self, a: &T, b: &T) -> f64 {
        let (a, b) = (a.as_ref(), b.as_ref());
        let longest = a.chars().count().max(b.chars().count());
        if longest == 0 {
            return 0.0;
        }
        Self::char_distance(a, b) as f64 / longest as f64
    }
}

/// Selects one of the built-in oracles by name (JSON and Python surfaces).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleKind {
    Unit,
    #[default]
    NormalizedLevenshtein,
}

impl OracleKind {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "unit" | "binary" | "exact" => Some(OracleKind::Unit),
            "normalized_levenshtein" | "levenshtein" | "edit" => {
                Some(OracleKind::NormalizedLevenshtein)
            }
            _ => None,
        }
    }
}

impl std::str::FromStr for OracleKind {
    type Err = crate::errors::SimilarityError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            crate::errors::SimilarityError::invalid_config(format!("unknown oracle '{}'", value))
        })
    }
}

impl<T: AsRef<str> + ?Sized> TokenDistance<T> for OracleKind {
    fn distance(&self, a: &T, b: &T) -> f64 {
        match self {
            OracleKind::Unit => UnitDistance.distance(a.as_ref(), b.as_ref()),
            OracleKind::NormalizedLevenshtein => NormalizedLevenshtein.distance(a, b),
        }
    }
}
