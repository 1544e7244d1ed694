//! Classifier output ingestor.
//!
//! `ResultIngestor` is the only way raw classifier JSON becomes a
//! `SymptomResult`. Validation runs in two phases:
//!
//! 1. **Structural** — the payload is validated against the compiled JSON
//!    Schema. Every violation is recorded.
//! 2. **Semantic** — the payload is deserialized and each domain rule is
//!    evaluated. All failures are collected before returning so operators
//!    see the full failure set in one pass.
//!
//! Absent or `null` optional fields take their defaults during
//! deserialization: `description` becomes an empty string, `probability`
//! stays `None`, lists are empty and `requires_attention` is false.

use serde_json::Value;
use tracing::{debug, warn};

use cliniq_contracts::{
    error::{CliniqError, CliniqResult},
    ingest::{IngestFailure, IngestReport},
    symptom::SymptomResult,
};

use crate::schema::classifier_output_schema;

/// Validates classifier payloads and converts them into `SymptomResult`s.
///
/// The schema is compiled once at construction; `ingest` can then be called
/// any number of times, from any thread.
pub struct ResultIngestor {
    validator: jsonschema::Validator,
}

impl ResultIngestor {
    /// Build an ingestor over the bundled classifier output schema.
    pub fn new() -> CliniqResult<Self> {
        Self::with_schema(&classifier_output_schema())
    }

    /// Build an ingestor over a caller-supplied JSON Schema document.
    ///
    /// Returns `CliniqError::ConfigError` if the document is not a valid schema.
    pub fn with_schema(schema: &Value) -> CliniqResult<Self> {
        let validator = jsonschema::validator_for(schema).map_err(|e| CliniqError::ConfigError {
            reason: format!("invalid classifier output schema: {e}"),
        })?;
        Ok(Self { validator })
    }

    /// Validate `payload` and return the full report without converting it.
    pub fn validate(&self, payload: &Value) -> IngestReport {
        self.run(payload).0
    }

    /// Validate `payload` and convert it into a `SymptomResult`.
    ///
    /// Returns `CliniqError::SchemaValidation` carrying every failure when
    /// any check fails.
    pub fn ingest(&self, payload: &Value) -> CliniqResult<SymptomResult> {
        match self.run(payload) {
            (report, Some(result)) if report.passed => Ok(result),
            (report, _) => Err(CliniqError::SchemaValidation { reason: report.summary() }),
        }
    }

    /// Parse `body` as JSON, then [`ingest`](Self::ingest) it.
    pub fn ingest_str(&self, body: &str) -> CliniqResult<SymptomResult> {
        let payload: Value = serde_json::from_str(body).map_err(|e| {
            warn!(error = %e, "classifier output is not valid JSON");
            CliniqError::SchemaValidation {
                reason: format!("classifier output is not valid JSON: {e}"),
            }
        })?;
        self.ingest(&payload)
    }

    fn run(&self, payload: &Value) -> (IngestReport, Option<SymptomResult>) {
        let mut failures: Vec<IngestFailure> = Vec::new();

        // ── Phase 1: JSON Schema structural validation ────────────────────────
        for error in self.validator.iter_errors(payload) {
            let message = format!("JSON Schema violation at {}: {}", error.instance_path, error);
            warn!(%message, "structural validation failure");
            failures.push(IngestFailure {
                rule_id: "json-schema".to_string(),
                message,
            });
        }

        // A payload that failed structurally cannot be trusted to deserialize.
        if !failures.is_empty() {
            return (IngestReport { passed: false, failures }, None);
        }

        let result: SymptomResult = match serde_json::from_value(payload.clone()) {
            Ok(result) => result,
            Err(e) => {
                let message = format!("payload does not match the result shape: {e}");
                warn!(%message, "deserialization failure");
                failures.push(IngestFailure {
                    rule_id: "result-shape".to_string(),
                    message,
                });
                return (IngestReport { passed: false, failures }, None);
            }
        };

        // ── Phase 2: Semantic rule evaluation ────────────────────────────────
        for (i, condition) in result.possible_conditions.iter().enumerate() {
            if condition.name.trim().is_empty() {
                failures.push(IngestFailure {
                    rule_id: "condition-name".to_string(),
                    message: format!("condition {i} has a blank name"),
                });
            }

            if let Some(probability) = condition.probability {
                if !(0.0..=100.0).contains(&probability) {
                    failures.push(IngestFailure {
                        rule_id: "condition-probability".to_string(),
                        message: format!(
                            "condition {i} ('{}') has probability {probability} outside 0..=100",
                            condition.name
                        ),
                    });
                }
            }
        }

        if let Some(severity) = result.severity {
            if !(1..=4).contains(&severity) {
                failures.push(IngestFailure {
                    rule_id: "severity-range".to_string(),
                    message: format!("severity {severity} is outside 1..=4"),
                });
            }
        }

        for failure in &failures {
            warn!(rule_id = %failure.rule_id, message = %failure.message, "semantic rule failed");
        }

        let passed = failures.is_empty();
        debug!(
            passed,
            failure_count = failures.len(),
            conditions = result.possible_conditions.len(),
            "classifier output validated"
        );

        (IngestReport { passed, failures }, Some(result))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use cliniq_contracts::{error::CliniqError, symptom::Urgency};

    use super::ResultIngestor;

    fn ingestor() -> ResultIngestor {
        ResultIngestor::new().unwrap()
    }

    #[test]
    fn test_well_formed_payload_ingests() {
        let payload = json!({
            "possible_conditions": [
                { "name": "Bronchitis", "description": "Inflamed bronchial tubes", "probability": 72 },
                { "name": "Pneumonia" }
            ],
            "severity": 2,
            "recommendations": ["Rest", "Drink fluids"],
            "requires_attention": true
        });

        let result = ingestor().ingest(&payload).unwrap();

        assert_eq!(result.possible_conditions.len(), 2);
        assert_eq!(result.possible_conditions[0].probability, Some(72.0));
        assert_eq!(result.possible_conditions[1].description, "");
        assert_eq!(result.possible_conditions[1].probability, None);
        assert_eq!(result.urgency(), Urgency::Moderate);
        assert!(result.requires_attention);
    }

    #[test]
    fn test_camel_case_payload_ingests() {
        let payload = json!({
            "possibleConditions": [{ "name": "Migraine", "probability": 80.5 }],
            "requiresAttention": false,
            "diet": { "recommendedFoods": ["Leafy greens"] }
        });

        let result = ingestor().ingest(&payload).unwrap();

        assert_eq!(result.possible_conditions[0].name, "Migraine");
        let diet = result.diet.unwrap();
        assert_eq!(diet.recommended_foods, Some(vec!["Leafy greens".to_string()]));
        assert_eq!(diet.foods_to_avoid, None);
    }

    #[test]
    fn test_empty_object_ingests_with_defaults() {
        let result = ingestor().ingest(&json!({})).unwrap();
        assert!(result.possible_conditions.is_empty());
        assert!(!result.requires_attention);
    }

    #[test]
    fn test_null_optional_fields_take_defaults() {
        let payload = json!({
            "possibleConditions": [
                { "name": "Migraine", "description": null, "probability": null }
            ],
            "severity": null,
            "recommendations": null,
            "requiresAttention": null,
            "attentionReason": null,
            "diet": { "recommendedFoods": null, "hydration": null },
            "medications": null,
            "disclaimer": null
        });

        let report = ingestor().validate(&payload);
        assert!(report.passed, "null fields should pass: {:?}", report.failures);

        let result = ingestor().ingest(&payload).unwrap();
        let condition = &result.possible_conditions[0];
        assert_eq!(condition.description, "");
        assert_eq!(condition.probability, None);
        assert_eq!(condition.display_probability(), 87.0);
        assert_eq!(result.severity, None);
        assert!(result.recommendations.is_empty());
        assert!(!result.requires_attention);
        assert_eq!(result.attention_reason, None);
        assert_eq!(result.diet.unwrap().recommended_foods, None);
        assert_eq!(result.medications, None);
    }

    #[test]
    fn test_null_condition_list_reads_as_empty() {
        let result = ingestor().ingest(&json!({ "possible_conditions": null })).unwrap();
        assert!(result.possible_conditions.is_empty());
    }

    #[test]
    fn test_null_condition_name_is_still_rejected() {
        let report = ingestor().validate(&json!({ "possible_conditions": [{ "name": null }] }));

        assert!(!report.passed);
        assert_eq!(report.failures[0].rule_id, "json-schema");
    }

    #[test]
    fn test_whole_number_float_severity_ingests() {
        let result = ingestor().ingest(&json!({ "severity": 4.0 })).unwrap();

        assert_eq!(result.severity, Some(4));
        assert_eq!(result.urgency(), Urgency::Emergency);
    }

    #[test]
    fn test_fractional_severity_fails_structurally() {
        let report = ingestor().validate(&json!({ "severity": 2.5 }));

        assert!(!report.passed);
        assert_eq!(report.failures[0].rule_id, "json-schema");
    }

    #[test]
    fn test_missing_condition_name_fails_structurally() {
        let payload = json!({ "possible_conditions": [{ "description": "no name here" }] });

        let report = ingestor().validate(&payload);

        assert!(!report.passed);
        assert_eq!(report.failures[0].rule_id, "json-schema");
    }

    #[test]
    fn test_wrong_types_fail_structurally() {
        let payload = json!({ "severity": "high", "requires_attention": "yes" });

        let report = ingestor().validate(&payload);

        assert!(!report.passed);
        assert!(report.failures.len() >= 2, "expected every violation: {:?}", report.failures);
        assert!(report.failures.iter().all(|f| f.rule_id == "json-schema"));
    }

    #[test]
    fn test_semantic_failures_are_all_collected() {
        let payload = json!({
            "possible_conditions": [
                { "name": "  ", "probability": 50 },
                { "name": "Influenza", "probability": 140 }
            ],
            "severity": 7
        });

        let report = ingestor().validate(&payload);

        assert!(!report.passed);
        let rules: Vec<&str> = report.failures.iter().map(|f| f.rule_id.as_str()).collect();
        assert_eq!(rules, vec!["condition-name", "condition-probability", "severity-range"]);
        assert!(report.failures[1].message.contains("Influenza"));
    }

    #[test]
    fn test_ingest_error_carries_every_failure() {
        let payload = json!({
            "possible_conditions": [{ "name": "", "probability": -5 }]
        });

        match ingestor().ingest(&payload) {
            Err(CliniqError::SchemaValidation { reason }) => {
                assert!(reason.contains("condition-name"), "reason: {reason}");
                assert!(reason.contains("condition-probability"), "reason: {reason}");
            }
            other => panic!("expected SchemaValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_severity_for_u8_is_shape_failure() {
        let report = ingestor().validate(&json!({ "severity": 300 }));

        assert!(!report.passed);
        assert_eq!(report.failures[0].rule_id, "result-shape");
    }

    #[test]
    fn test_ingest_str_rejects_malformed_json() {
        match ingestor().ingest_str("{ not json") {
            Err(CliniqError::SchemaValidation { reason }) => {
                assert!(reason.contains("not valid JSON"));
            }
            other => panic!("expected SchemaValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_schema_document_is_config_error() {
        match ResultIngestor::with_schema(&json!({ "type": "string", "pattern": "(unclosed" })) {
            Err(CliniqError::ConfigError { reason }) => {
                assert!(reason.contains("invalid classifier output schema"));
            }
            Err(other) => panic!("expected ConfigError, got {other:?}"),
            Ok(_) => panic!("expected ConfigError, got a working ingestor"),
        }
    }
}
