//! # openapi-preprocess-core
//!
//! Rewrites OpenAPI 3.1 documents so that strict code generators can consume
//! them: every `anyOf: [{type: T, ...}, {type: "null"}]` is collapsed into
//! the plain `{type: T, ...}` schema.
//!
//! ```
//! use openapi_preprocess_core::{preprocess, PreprocessOptions};
//!
//! let input = br#"{"schema": {"anyOf": [{"type": "string"}, {"type": "null"}]}}"#;
//! let result = preprocess(input, &PreprocessOptions::default()).unwrap();
//!
//! let doc: serde_json::Value = serde_json::from_slice(&result.output).unwrap();
//! assert_eq!(doc["schema"], serde_json::json!({"type": "string"}));
//! assert_eq!(result.report.len(), 1);
//! ```
//!
//! Output keys are emitted in sorted order, so repeated runs over the same
//! document produce byte-identical files.

pub mod config;
pub mod error;
pub mod normalize;
pub mod pointer;
pub mod report;

use serde_json::Value;

pub use config::{OutputFormat, PreprocessOptions};
pub use error::PreprocessError;
pub use normalize::{
    is_null_branch, normalize, normalize_value, try_collapse_nullable_union, UNION_KEYWORD,
};
pub use pointer::{build_path, escape_pointer_segment};
pub use report::{NormalizeReport, Rewrite};

/// Result of a full parse → normalize → encode run.
#[derive(Debug)]
pub struct PreprocessResult {
    /// The serialized, normalized document.
    pub output: Vec<u8>,
    /// Where rewrites happened.
    pub report: NormalizeReport,
}

/// Parse raw bytes into a generic document tree.
pub fn parse_document(bytes: &[u8]) -> Result<Value, PreprocessError> {
    serde_json::from_slice(bytes).map_err(PreprocessError::Parse)
}

/// Serialize a document, terminated by a newline.
pub fn encode_document(doc: &Value, format: OutputFormat) -> Result<Vec<u8>, PreprocessError> {
    let mut out = match format {
        OutputFormat::Pretty => serde_json::to_vec_pretty(doc),
        OutputFormat::Compact => serde_json::to_vec(doc),
    }
    .map_err(PreprocessError::Encode)?;
    out.push(b'\n');
    Ok(out)
}

/// Parse `input`, collapse its nullable unions and re-serialize it.
///
/// Nothing is produced unless every step succeeds.
pub fn preprocess(
    input: &[u8],
    options: &PreprocessOptions,
) -> Result<PreprocessResult, PreprocessError> {
    let mut doc = parse_document(input)?;
    let report = normalize(&mut doc);
    tracing::debug!(rewrites = report.len(), "normalized document");

    let output = encode_document(&doc, options.format)?;
    Ok(PreprocessResult { output, report })
}
