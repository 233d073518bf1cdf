use std::path::PathBuf;

use thiserror::Error;

/// Failures while obtaining a raw profile. All are fatal to the invocation.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("profile fixture not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read profile fixture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("profile fixture {} is not a valid profile: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("not implemented: {0}")]
    NotImplemented(String),
}

/// Failures of the generative text service.
///
/// Never leaves the text synthesizer: every variant routes to the
/// deterministic fallback path.
#[derive(Debug, Error)]
pub enum GenerativeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generative service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("generative response had no message content")]
    EmptyResponse,

    #[error("generative response is not the expected shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("generative response field {field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// An aggregate that violates the [`Insight`](pinsight_core::Insight) schema.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid insight field {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fatal errors surfaced by [`analyze_profile`](crate::analyze_profile).
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}
