//! # cliniq-ingest
//!
//! Validation of raw symptom classifier output before it enters the
//! pipeline.
//!
//! This crate provides [`engine::ResultIngestor`], which turns a JSON
//! payload into a `SymptomResult` in two phases:
//!
//! 1. **Structural** — JSON Schema validation via the `jsonschema` crate
//!    against [`schema::classifier_output_schema`].
//! 2. **Semantic** — range and presence rules on the typed result
//!    (non-blank condition names, probability 0..=100, severity 1..=4).
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use cliniq_ingest::engine::ResultIngestor;
//!
//! let ingestor = ResultIngestor::new()?;
//! let result = ingestor.ingest_str(&body)?;
//! ```

pub mod engine;
pub mod schema;

pub use engine::ResultIngestor;
