//! Configuration for document preprocessing.

use serde::{Deserialize, Serialize};

/// How the normalized document is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Two-space indented, one key per line.
    #[default]
    Pretty,
    /// Single line, no insignificant whitespace.
    Compact,
}

/// Options for [`preprocess`](crate::preprocess).
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case`. This naming convention is part of
/// the public contract for config files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PreprocessOptions {
    /// Output formatting. Default: pretty.
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_options_serde_round_trip() {
        let opts = PreprocessOptions {
            format: OutputFormat::Compact,
        };

        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"{"format":"compact"}"#);

        let deserialized: PreprocessOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.format, OutputFormat::Compact);
    }

    #[test]
    fn test_default_is_pretty() {
        assert_eq!(PreprocessOptions::default().format, OutputFormat::Pretty);
    }
}
