//! Error types for document preprocessing.

use thiserror::Error;

/// Failures surfaced at the parse/encode boundary.
///
/// Normalization itself cannot fail: every node either matches the nullable
/// union pattern and is rewritten, or is left as-is.
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("JSON parsing error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("JSON encoding error: {0}")]
    Encode(#[source] serde_json::Error),
}

impl PreprocessError {
    /// True when the input bytes were not well-formed JSON.
    pub fn is_parse(&self) -> bool {
        matches!(self, PreprocessError::Parse(_))
    }
}
