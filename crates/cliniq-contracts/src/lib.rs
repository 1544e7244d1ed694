//! # cliniq-contracts
//!
//! Shared types and errors for the ClinIQ symptom-check workspace.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions, small conversions, and error types.

pub mod check;
pub mod condition;
pub mod doctor;
pub mod error;
pub mod ingest;
mod nullable;
pub mod specialization;
pub mod symptom;

#[cfg(test)]
mod tests {
    use super::*;
    use check::CheckId;
    use condition::{Condition, ProbabilityBand};
    use error::CliniqError;
    use specialization::{Specialization, SpecializationSet, FAMILY_MEDICINE, INTERNAL_MEDICINE};
    use symptom::{SymptomResult, Urgency};

    // ── SpecializationSet ────────────────────────────────────────────────────

    #[test]
    fn specialization_set_insert_and_contains() {
        let mut set = SpecializationSet::new();
        assert!(!set.contains("Cardiology"));

        assert!(set.insert(Specialization::new("Cardiology")));
        assert!(set.contains("Cardiology"));
        assert!(!set.contains("Neurology"));
    }

    #[test]
    fn specialization_set_duplicate_insert_is_idempotent() {
        let mut set = SpecializationSet::new();
        assert!(set.insert(Specialization::new("Neurology")));
        assert!(!set.insert(Specialization::new("Neurology")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn specialization_set_keeps_first_insertion_order() {
        let set: SpecializationSet = ["Neurology", "Family Medicine", "Neurology", "Cardiology"]
            .into_iter()
            .map(Specialization::from)
            .collect();

        assert_eq!(set.names(), vec!["Neurology", "Family Medicine", "Cardiology"]);
    }

    #[test]
    fn specialization_set_equality_ignores_order() {
        let a: SpecializationSet =
            ["Neurology", "Cardiology"].into_iter().map(Specialization::from).collect();
        let b: SpecializationSet =
            ["Cardiology", "Neurology"].into_iter().map(Specialization::from).collect();
        let c: SpecializationSet = ["Cardiology"].into_iter().map(Specialization::from).collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn generalists_are_family_and_internal_medicine() {
        let set = SpecializationSet::generalists();
        assert_eq!(set.names(), vec![FAMILY_MEDICINE, INTERNAL_MEDICINE]);
    }

    #[test]
    fn specialization_set_serializes_as_plain_array() {
        let set = SpecializationSet::generalists();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Family Medicine","Internal Medicine"]"#);

        // Duplicates in the wire form collapse on the way in.
        let decoded: SpecializationSet =
            serde_json::from_str(r#"["Urology","Urology","Nephrology"]"#).unwrap();
        assert_eq!(decoded.names(), vec!["Urology", "Nephrology"]);
    }

    // ── Urgency / probability bands ──────────────────────────────────────────

    #[test]
    fn urgency_from_severity_scores() {
        assert_eq!(Urgency::from_severity(Some(1)), Urgency::Mild);
        assert_eq!(Urgency::from_severity(Some(2)), Urgency::Moderate);
        assert_eq!(Urgency::from_severity(Some(3)), Urgency::Moderate);
        assert_eq!(Urgency::from_severity(Some(4)), Urgency::Emergency);
    }

    #[test]
    fn urgency_defaults_to_moderate() {
        assert_eq!(Urgency::from_severity(None), Urgency::Moderate);
        assert_eq!(Urgency::from_severity(Some(0)), Urgency::Moderate);
        assert_eq!(Urgency::from_severity(Some(9)), Urgency::Moderate);
    }

    #[test]
    fn urgency_severity_maps_back() {
        for urgency in [Urgency::Mild, Urgency::Moderate, Urgency::Emergency] {
            assert_eq!(Urgency::from_severity(Some(urgency.severity())), urgency);
        }
    }

    #[test]
    fn probability_band_thresholds() {
        assert_eq!(ProbabilityBand::from_probability(75.0), ProbabilityBand::High);
        assert_eq!(ProbabilityBand::from_probability(74.9), ProbabilityBand::Medium);
        assert_eq!(ProbabilityBand::from_probability(50.0), ProbabilityBand::Medium);
        assert_eq!(ProbabilityBand::from_probability(49.0), ProbabilityBand::Low);
    }

    #[test]
    fn missing_probability_displays_as_default() {
        let condition = Condition::named("Migraine");
        assert_eq!(condition.display_probability(), 87.0);
        assert_eq!(condition.band(), ProbabilityBand::High);

        let condition = Condition::named("Migraine").with_probability(30.0);
        assert_eq!(condition.band(), ProbabilityBand::Low);
    }

    #[test]
    fn display_percent_rounds_halves_up() {
        assert_eq!(Condition::named("A").with_probability(72.5).display_percent(), 73.0);
        assert_eq!(Condition::named("B").with_probability(64.4).display_percent(), 64.0);
        assert_eq!(Condition::named("C").display_percent(), 87.0);
        assert_eq!(format!("{}", Condition::named("D").with_probability(0.5).display_percent()), "1");
    }

    // ── SymptomResult serde ──────────────────────────────────────────────────

    #[test]
    fn symptom_result_accepts_camel_case_aliases() {
        let json = r#"{
            "possibleConditions": [{ "name": "Migraine" }],
            "severity": 1,
            "requiresAttention": true
        }"#;
        let result: SymptomResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.possible_conditions.len(), 1);
        assert_eq!(result.possible_conditions[0].name, "Migraine");
        assert_eq!(result.possible_conditions[0].description, "");
        assert_eq!(result.possible_conditions[0].probability, None);
        assert!(result.requires_attention);
        assert_eq!(result.urgency(), Urgency::Mild);
    }

    #[test]
    fn symptom_result_fields_default_when_absent() {
        let result: SymptomResult = serde_json::from_str("{}").unwrap();
        assert!(result.possible_conditions.is_empty());
        assert!(result.recommendations.is_empty());
        assert!(!result.requires_attention);
        assert_eq!(result.urgency(), Urgency::Moderate);
    }

    #[test]
    fn symptom_result_null_fields_read_as_absent() {
        let json = r#"{
            "possibleConditions": [{ "name": "Migraine", "description": null }],
            "severity": null,
            "recommendations": null,
            "requiresAttention": null
        }"#;
        let result: SymptomResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.possible_conditions[0].description, "");
        assert_eq!(result.severity, None);
        assert!(result.recommendations.is_empty());
        assert!(!result.requires_attention);
    }

    #[test]
    fn symptom_result_severity_accepts_whole_floats_only() {
        let result: SymptomResult = serde_json::from_str(r#"{ "severity": 3.0 }"#).unwrap();
        assert_eq!(result.severity, Some(3));

        assert!(serde_json::from_str::<SymptomResult>(r#"{ "severity": 2.5 }"#).is_err());
        assert!(serde_json::from_str::<SymptomResult>(r#"{ "severity": 300 }"#).is_err());
    }

    // ── CheckId ──────────────────────────────────────────────────────────────

    #[test]
    fn check_id_new_produces_unique_values() {
        let ids: Vec<CheckId> = (0..100).map(|_| CheckId::new()).collect();

        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.0.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── CliniqError display messages ─────────────────────────────────────────

    #[test]
    fn error_config_error_display() {
        let err = CliniqError::ConfigError {
            reason: "keyword 'Cold' is not lowercase".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("'Cold'"));
    }

    #[test]
    fn error_invalid_input_display() {
        let err = CliniqError::InvalidInput {
            reason: "symptom text is empty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid input"));
        assert!(msg.contains("symptom text is empty"));
    }

    #[test]
    fn error_schema_validation_display() {
        let err = CliniqError::SchemaValidation {
            reason: "type mismatch at /severity".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("schema validation error"));
        assert!(msg.contains("/severity"));
    }

    #[test]
    fn error_classifier_failed_display() {
        let err = CliniqError::ClassifierFailed {
            reason: "upstream timed out".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("classifier failed"));
        assert!(msg.contains("upstream timed out"));
    }

    #[test]
    fn error_encoding_display() {
        let err = CliniqError::Encoding {
            reason: "key must be a string".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("encoding error"));
        assert!(msg.contains("key must be a string"));
    }
}
