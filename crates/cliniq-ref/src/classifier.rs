//! Keyword-driven stand-in for the symptom inference service.

use tracing::debug;

use cliniq_contracts::{
    error::{CliniqError, CliniqResult},
    symptom::SymptomResult,
};
use cliniq_core::traits::SymptomClassifier;
use cliniq_ingest::ResultIngestor;

use crate::mock_data::get_mock_symptom_response;

/// A `SymptomClassifier` that answers from canned responses.
///
/// Responses go through the same `ResultIngestor` a remote classifier's
/// payloads would, so the mock exercises the real ingest boundary.
pub struct MockSymptomClassifier {
    ingestor: ResultIngestor,
}

impl MockSymptomClassifier {
    pub fn new() -> CliniqResult<Self> {
        Ok(Self { ingestor: ResultIngestor::new()? })
    }
}

impl SymptomClassifier for MockSymptomClassifier {
    fn classify(&self, symptoms: &str) -> CliniqResult<SymptomResult> {
        if symptoms.trim().is_empty() {
            return Err(CliniqError::InvalidInput {
                reason: "symptom description is empty".to_string(),
            });
        }

        let payload = get_mock_symptom_response(symptoms);
        debug!(payload = %payload, "mock classifier response");

        self.ingestor.ingest(&payload)
    }
}
