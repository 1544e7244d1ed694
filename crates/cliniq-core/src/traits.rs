//! Collaborator trait definitions for the symptom-check pipeline.
//!
//! - `SymptomClassifier`      — free text in, candidate conditions out
//!                              (a canned mock today, a remote model later)
//! - `SpecializationResolver` — conditions in, specializations out
//! - `DoctorDirectory`        — specializations in, bookable doctors out
//!
//! The pipeline only ever talks to these traits, so each collaborator can be
//! swapped for a test double or an alternate data source.

use cliniq_contracts::{
    condition::Condition,
    doctor::Doctor,
    error::CliniqResult,
    specialization::SpecializationSet,
    symptom::SymptomResult,
};

/// Turns a free-text symptom description into a `SymptomResult`.
///
/// Implementations may block on network I/O. Failures surface as
/// `CliniqError::ClassifierFailed` or `CliniqError::InvalidInput`.
pub trait SymptomClassifier: Send + Sync {
    fn classify(&self, symptoms: &str) -> CliniqResult<SymptomResult>;
}

/// Maps candidate conditions to the specializations worth booking.
///
/// Implementations must be pure and total: the same conditions always yield
/// the same set, and the set is never empty.
pub trait SpecializationResolver: Send + Sync {
    /// Resolve `conditions` to a set of specializations.
    ///
    /// An empty slice yields exactly the generalist pair. A non-empty slice
    /// yields a superset of it.
    fn resolve(&self, conditions: &[Condition]) -> SpecializationSet;
}

/// A queryable roster of bookable doctors.
pub trait DoctorDirectory: Send + Sync {
    /// Return every doctor whose specialization is in `specializations`,
    /// most bookable first.
    fn find_by_specializations(&self, specializations: &SpecializationSet) -> Vec<Doctor>;
}
