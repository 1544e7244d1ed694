//! Error types for the ClinIQ symptom-check pipeline.
//!
//! Fallible operations across the workspace return `CliniqResult<T>`.
//! Specialization resolution is total and never produces one of these.

use thiserror::Error;

/// The unified error type for the ClinIQ workspace.
#[derive(Debug, Error)]
pub enum CliniqError {
    /// A specialization table or other configuration source is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// Caller-supplied input was rejected before any classification ran.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Classifier output failed structural or semantic validation at ingest.
    #[error("schema validation error: {reason}")]
    SchemaValidation { reason: String },

    /// The symptom classifier could not produce a result.
    #[error("classifier failed: {reason}")]
    ClassifierFailed { reason: String },

    /// A result could not be encoded for output.
    #[error("encoding error: {reason}")]
    Encoding { reason: String },
}

/// Convenience alias used throughout the ClinIQ crates.
pub type CliniqResult<T> = Result<T, CliniqError>;
