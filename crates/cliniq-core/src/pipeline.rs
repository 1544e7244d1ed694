//! The ClinIQ check pipeline: one symptom description in, one `SymptomCheck` out.
//!
//!   Symptoms → Classify → Resolve specializations → [Match doctors] → SymptomCheck
//!
//! Doctor matching only runs when the classifier says the result requires
//! attention; the specializations are resolved either way so callers can
//! still show them.

use chrono::Utc;
use tracing::{debug, info, warn};

use cliniq_contracts::{
    check::{CheckId, SymptomCheck},
    error::{CliniqError, CliniqResult},
};

use crate::traits::{DoctorDirectory, SpecializationResolver, SymptomClassifier};

/// Drives a symptom description through classification, resolution and
/// doctor matching.
///
/// A pipeline holds no per-check state, so one instance can serve any number
/// of checks, including from several threads at once.
pub struct CheckPipeline {
    classifier: Box<dyn SymptomClassifier>,
    resolver: Box<dyn SpecializationResolver>,
    directory: Box<dyn DoctorDirectory>,
}

impl CheckPipeline {
    pub fn new(
        classifier: Box<dyn SymptomClassifier>,
        resolver: Box<dyn SpecializationResolver>,
        directory: Box<dyn DoctorDirectory>,
    ) -> Self {
        Self { classifier, resolver, directory }
    }

    /// Run one symptom check.
    ///
    /// # Pipeline
    ///
    /// 1. Reject blank input with `CliniqError::InvalidInput`
    /// 2. Call `classifier.classify()`; classifier errors propagate unchanged
    /// 3. Call `resolver.resolve()` on the result's conditions
    /// 4. If the result requires attention, query the directory
    /// 5. Stamp the record with a fresh `CheckId` and the current time
    pub fn run(&self, symptoms: &str) -> CliniqResult<SymptomCheck> {
        let id = CheckId::new();

        if symptoms.trim().is_empty() {
            warn!(check_id = %id.0, "rejecting blank symptom description");
            return Err(CliniqError::InvalidInput {
                reason: "symptom description is empty".to_string(),
            });
        }

        debug!(check_id = %id.0, chars = symptoms.len(), "symptom check starting");

        // ── Step 2: Classification ───────────────────────────────────────────
        let result = self.classifier.classify(symptoms)?;
        let urgency = result.urgency();

        debug!(
            check_id = %id.0,
            conditions = result.possible_conditions.len(),
            %urgency,
            requires_attention = result.requires_attention,
            "classification complete"
        );

        // ── Step 3: Specialization resolution ────────────────────────────────
        let specializations = self.resolver.resolve(&result.possible_conditions);

        // ── Step 4: Doctor matching ──────────────────────────────────────────
        let doctors = if result.requires_attention {
            self.directory.find_by_specializations(&specializations)
        } else {
            Vec::new()
        };

        info!(
            check_id = %id.0,
            %urgency,
            specializations = specializations.len(),
            doctors = doctors.len(),
            "symptom check complete"
        );

        Ok(SymptomCheck {
            id,
            symptoms: symptoms.to_string(),
            result,
            urgency,
            specializations,
            doctors,
            created_at: Utc::now(),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use cliniq_contracts::{
        condition::Condition,
        doctor::Doctor,
        error::{CliniqError, CliniqResult},
        specialization::{Specialization, SpecializationSet},
        symptom::{SymptomResult, Urgency},
    };

    use super::CheckPipeline;
    use crate::traits::{DoctorDirectory, SpecializationResolver, SymptomClassifier};

    // ── Test doubles ──────────────────────────────────────────────────────────

    /// A classifier that returns a pre-configured result and counts calls.
    struct MockClassifier {
        result: SymptomResult,
        calls: Arc<Mutex<u32>>,
    }

    impl MockClassifier {
        fn new(result: SymptomResult) -> Self {
            Self { result, calls: Arc::new(Mutex::new(0)) }
        }
    }

    impl SymptomClassifier for MockClassifier {
        fn classify(&self, _symptoms: &str) -> CliniqResult<SymptomResult> {
            *self.calls.lock().unwrap() += 1;
            Ok(self.result.clone())
        }
    }

    /// A classifier that always fails.
    struct FailingClassifier;

    impl SymptomClassifier for FailingClassifier {
        fn classify(&self, _symptoms: &str) -> CliniqResult<SymptomResult> {
            Err(CliniqError::ClassifierFailed {
                reason: "inference service unavailable".to_string(),
            })
        }
    }

    /// A resolver that maps each condition name straight to a specialization
    /// of the same name, then appends the generalists.
    struct EchoResolver;

    impl SpecializationResolver for EchoResolver {
        fn resolve(&self, conditions: &[Condition]) -> SpecializationSet {
            let mut set: SpecializationSet = conditions
                .iter()
                .map(|c| Specialization::new(c.name.clone()))
                .collect();
            set.extend(SpecializationSet::generalists());
            set
        }
    }

    /// A directory that records every query it receives.
    struct MockDirectory {
        queries: Arc<Mutex<Vec<SpecializationSet>>>,
    }

    impl MockDirectory {
        fn new() -> Self {
            Self { queries: Arc::new(Mutex::new(vec![])) }
        }
    }

    impl DoctorDirectory for MockDirectory {
        fn find_by_specializations(&self, specializations: &SpecializationSet) -> Vec<Doctor> {
            self.queries.lock().unwrap().push(specializations.clone());
            specializations
                .iter()
                .enumerate()
                .map(|(i, s)| Doctor {
                    id: i.to_string(),
                    name: format!("Dr. {}", s),
                    specialization: s.clone(),
                    location: "Delhi".to_string(),
                    rating: 4.5,
                    availability: vec!["Monday".to_string()],
                    is_available_today: true,
                    experience_years: 5,
                    patient_count: 100,
                    reviews: 10,
                    is_verified: true,
                })
                .collect()
        }
    }

    fn result_with(conditions: &[&str], requires_attention: bool) -> SymptomResult {
        SymptomResult {
            possible_conditions: conditions.iter().map(|n| Condition::named(*n)).collect(),
            severity: Some(2),
            requires_attention,
            ..SymptomResult::default()
        }
    }

    // ── Tests ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_run_resolves_and_matches_when_attention_required() {
        let directory = MockDirectory::new();
        let queries = Arc::clone(&directory.queries);
        let pipeline = CheckPipeline::new(
            Box::new(MockClassifier::new(result_with(&["Cardiology"], true))),
            Box::new(EchoResolver),
            Box::new(directory),
        );

        let check = pipeline.run("chest tightness").unwrap();

        assert_eq!(check.symptoms, "chest tightness");
        assert_eq!(check.urgency, Urgency::Moderate);
        assert_eq!(
            check.specializations.names(),
            vec!["Cardiology", "Family Medicine", "Internal Medicine"]
        );
        assert_eq!(check.doctors.len(), 3);
        assert_eq!(queries.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_run_skips_directory_when_attention_not_required() {
        let directory = MockDirectory::new();
        let queries = Arc::clone(&directory.queries);
        let pipeline = CheckPipeline::new(
            Box::new(MockClassifier::new(result_with(&["Migraine"], false))),
            Box::new(EchoResolver),
            Box::new(directory),
        );

        let check = pipeline.run("throbbing headache").unwrap();

        assert!(check.doctors.is_empty());
        assert!(check.specializations.contains("Migraine"));
        assert!(queries.lock().unwrap().is_empty(), "directory must not be queried");
    }

    #[test]
    fn test_blank_input_is_rejected_before_classification() {
        let classifier = MockClassifier::new(result_with(&[], false));
        let calls = Arc::clone(&classifier.calls);
        let pipeline = CheckPipeline::new(
            Box::new(classifier),
            Box::new(EchoResolver),
            Box::new(MockDirectory::new()),
        );

        match pipeline.run("   \n\t") {
            Err(CliniqError::InvalidInput { reason }) => {
                assert!(reason.contains("empty"), "unexpected reason: {reason}");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_classifier_errors_propagate() {
        let pipeline = CheckPipeline::new(
            Box::new(FailingClassifier),
            Box::new(EchoResolver),
            Box::new(MockDirectory::new()),
        );

        match pipeline.run("fever") {
            Err(CliniqError::ClassifierFailed { reason }) => {
                assert!(reason.contains("unavailable"));
            }
            other => panic!("expected ClassifierFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_each_run_gets_a_distinct_check_id() {
        let pipeline = CheckPipeline::new(
            Box::new(MockClassifier::new(result_with(&[], false))),
            Box::new(EchoResolver),
            Box::new(MockDirectory::new()),
        );

        let a = pipeline.run("cough").unwrap();
        let b = pipeline.run("cough").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.specializations, b.specializations);
    }
}
