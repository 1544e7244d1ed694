//! Symptom classification results.
//!
//! A `SymptomResult` is what a classifier hands back for one block of
//! free-text symptoms. Field names are snake_case; the camelCase names
//! emitted by browser-side classifiers are accepted as aliases.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::condition::Condition;

/// Everything a classifier reports for one symptom description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomResult {
    /// Candidate conditions, most likely first. Absent means none.
    #[serde(
        default,
        alias = "possibleConditions",
        deserialize_with = "crate::nullable::null_as_default"
    )]
    pub possible_conditions: Vec<Condition>,

    /// Severity score in 1..=4. See [`Urgency::from_severity`].
    #[serde(
        default,
        deserialize_with = "crate::nullable::severity_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub severity: Option<u8>,

    /// Home-care and self-care actions.
    #[serde(default, deserialize_with = "crate::nullable::null_as_default")]
    pub recommendations: Vec<String>,

    /// True when a professional consultation is advised.
    #[serde(
        default,
        alias = "requiresAttention",
        deserialize_with = "crate::nullable::null_as_default"
    )]
    pub requires_attention: bool,

    /// Why a consultation is (or is not) advised.
    #[serde(default, alias = "attentionReason", skip_serializing_if = "Option::is_none")]
    pub attention_reason: Option<String>,

    /// Free-form analysis confidence label, e.g. "High".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<DietAdvice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<MedicationAdvice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

impl SymptomResult {
    pub fn urgency(&self) -> Urgency {
        Urgency::from_severity(self.severity)
    }
}

/// Dietary suggestions attached to a result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietAdvice {
    #[serde(default, alias = "recommendedFoods", skip_serializing_if = "Option::is_none")]
    pub recommended_foods: Option<Vec<String>>,
    #[serde(default, alias = "foodsToAvoid", skip_serializing_if = "Option::is_none")]
    pub foods_to_avoid: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydration: Option<String>,
}

/// Medication and supplement suggestions attached to a result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicationAdvice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precautions: Option<String>,
}

/// How urgently the user should act on a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Mild,
    Moderate,
    Emergency,
}

impl Urgency {
    /// Map a 1..=4 severity score onto an urgency level.
    ///
    /// 1 is Mild, 2 and 3 are Moderate, 4 is Emergency. A missing or
    /// out-of-range score reads as Moderate.
    pub fn from_severity(severity: Option<u8>) -> Self {
        match severity {
            Some(1) => Urgency::Mild,
            Some(4) => Urgency::Emergency,
            _ => Urgency::Moderate,
        }
    }

    /// The severity score a classifier should report for this level.
    pub fn severity(self) -> u8 {
        match self {
            Urgency::Mild => 1,
            Urgency::Moderate => 2,
            Urgency::Emergency => 4,
        }
    }

    /// One-sentence guidance shown alongside the urgency level.
    pub fn guidance(self) -> &'static str {
        match self {
            Urgency::Mild => {
                "Your symptoms suggest a mild condition that can likely be managed at home."
            }
            Urgency::Moderate => {
                "Your symptoms may require medical attention but are not immediately life-threatening."
            }
            Urgency::Emergency => {
                "Your symptoms require immediate medical attention. Please seek emergency care."
            }
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Mild => "Mild",
            Urgency::Moderate => "Moderate",
            Urgency::Emergency => "Emergency",
        };
        f.write_str(label)
    }
}
