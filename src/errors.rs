//! Error types for rapid_similarity
//!
//! The alignment engines are total over slices. Errors only arise at the
//! boundaries where input may be absent (`Option` entry points, JSON, Python)
//! and from runtime configuration.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SimilarityError>;

/// Main error type for rapid_similarity
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    /// A required sequence or collection was absent.
    ///
    /// An empty sequence is valid input and never produces this error.
    #[error("Invalid argument: '{argument}' is missing")]
    InvalidArgument { argument: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The scoped Rayon pool could not be built
    #[error("Thread pool error: {message}")]
    ThreadPool { message: String },
}

impl SimilarityError {
    /// Create an invalid argument error naming the missing input
    pub fn invalid_argument(argument: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a thread pool error
    pub fn thread_pool(message: impl Into<String>) -> Self {
        Self::ThreadPool {
            message: message.into(),
        }
    }

    /// Check if this error reports an absent input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

impl From<serde_json::Error> for SimilarityError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for SimilarityError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::thread_pool(err.to_string())
    }
}

/// Unwrap a required input, failing with [`SimilarityError::InvalidArgument`].
pub(crate) fn require<'a, T: ?Sized>(value: Option<&'a T>, argument: &str) -> Result<&'a T> {
    value.ok_or_else(|| SimilarityError::invalid_argument(argument))
}
