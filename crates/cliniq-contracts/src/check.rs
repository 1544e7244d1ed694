//! The record of one completed symptom check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    doctor::Doctor,
    specialization::SpecializationSet,
    symptom::{SymptomResult, Urgency},
};

/// Unique identifier for a single symptom check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckId(pub uuid::Uuid);

impl CheckId {
    /// Create a new, unique check ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CheckId {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything produced by running one block of symptom text through the
/// pipeline: the classifier's result, the specializations it points to, and
/// any doctors matched for follow-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomCheck {
    pub id: CheckId,
    /// The symptom text exactly as the user entered it.
    pub symptoms: String,
    pub result: SymptomResult,
    pub urgency: Urgency,
    /// Never empty; always includes the generalist pair.
    pub specializations: SpecializationSet,
    /// Empty unless the result requires attention.
    pub doctors: Vec<Doctor>,
    pub created_at: DateTime<Utc>,
}
