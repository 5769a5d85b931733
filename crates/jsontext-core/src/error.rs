//! Error types for jsontext parsing and query operations.

use thiserror::Error;

/// Errors that can occur while parsing a document or evaluating a query.
#[derive(Error, Debug)]
pub enum JsonTextError {
    /// The source text was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request itself was structurally unusable: positional access
    /// against a non-array top level, or a matcher the operator cannot
    /// interpret. A well-formed request that merely finds nothing is not an
    /// error; it yields an empty result.
    #[error("query error: {0}")]
    Query(String),
}

/// Convenience alias used throughout jsontext-core.
pub type Result<T> = std::result::Result<T, JsonTextError>;
