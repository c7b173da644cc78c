//! Error types for token stream inspection.

use thiserror::Error;

/// Anomalies a consumer can detect in a tokenized stream.
///
/// Tokenization itself never fails: malformed input surfaces as `Unknown`
/// tokens, catch-all `Range` operands, or missing stop tokens. These
/// variants are what [`crate::validate`] reports when asked to check a
/// stream before further processing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    #[error("unknown token at index {index}: {value:?}")]
    UnknownToken { index: usize, value: String },

    #[error("unbalanced groups: {starts} start tokens vs {stops} stop tokens")]
    UnbalancedGroups { starts: usize, stops: usize },
}
