//! Candidate medical conditions produced by symptom classification.

use serde::{Deserialize, Serialize};

/// Probability shown when a classifier omits one.
pub const DEFAULT_DISPLAY_PROBABILITY: f64 = 87.0;

/// A named condition candidate with a match-confidence percentage.
///
/// Only `name` drives specialization resolution. `description` and
/// `probability` are carried through for display and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Human-readable name, e.g. "Common Cold".
    pub name: String,
    #[serde(default, deserialize_with = "crate::nullable::null_as_default")]
    pub description: String,
    /// Percentage in 0..=100, when the classifier supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

impl Condition {
    /// Construct a condition with a name and description and no probability.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            probability: None,
        }
    }

    /// Construct a condition carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// Attach a probability percentage.
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }

    /// The probability used for display, falling back to
    /// [`DEFAULT_DISPLAY_PROBABILITY`] when none was supplied.
    pub fn display_probability(&self) -> f64 {
        self.probability.unwrap_or(DEFAULT_DISPLAY_PROBABILITY)
    }

    /// The display probability rounded to a whole percent, halves rounding up.
    pub fn display_percent(&self) -> f64 {
        self.display_probability().round()
    }

    pub fn band(&self) -> ProbabilityBand {
        ProbabilityBand::from_probability(self.display_probability())
    }
}

/// Coarse grouping of a match probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbabilityBand {
    High,
    Medium,
    Low,
}

impl ProbabilityBand {
    /// `>= 75` is High, `>= 50` is Medium, anything else is Low.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 75.0 {
            ProbabilityBand::High
        } else if probability >= 50.0 {
            ProbabilityBand::Medium
        } else {
            ProbabilityBand::Low
        }
    }
}
