//! Error types for sequence evaluation.

use thiserror::Error;

/// Result type alias for evaluator operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors an evaluator can report.
#[derive(Error, Debug)]
pub enum EvalError {
    /// The requested index is negative.
    #[error("invalid argument: index {0} is negative")]
    InvalidArgument(i64),

    /// The term at `index` does not fit in a u64.
    #[error("overflow: term {index} exceeds u64")]
    Overflow { index: u64 },

    /// Uncached recursion would descend deeper than allowed.
    #[error("recursion depth {requested} exceeds limit {limit}")]
    DepthLimit { requested: u64, limit: u64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EvalError {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

/// Converts a caller-supplied index into a table key, rejecting negatives.
pub(crate) fn check_index(n: i64) -> Result<u64> {
    u64::try_from(n).map_err(|_| EvalError::InvalidArgument(n))
}
