//! Validation report types for classifier output ingestion.

use serde::{Deserialize, Serialize};

/// The result of validating one raw classifier payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    /// True only if every check passed.
    pub passed: bool,
    /// All failures collected during validation. Empty on pass.
    pub failures: Vec<IngestFailure>,
}

/// A single failed check within an `IngestReport`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestFailure {
    /// Identifier of the check that failed, e.g. "json-schema".
    pub rule_id: String,
    /// Human-readable explanation.
    pub message: String,
}

impl IngestReport {
    /// All failure messages joined into one line, for error reasons.
    pub fn summary(&self) -> String {
        self.failures
            .iter()
            .map(|f| format!("[{}] {}", f.rule_id, f.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
