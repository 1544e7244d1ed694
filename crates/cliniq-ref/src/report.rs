//! Plain-text symptom report.
//!
//! `SymptomReport` renders a completed `SymptomCheck` section by section:
//! symptoms, urgency, conditions, actions, consultation advice, suggested
//! specializations, diet, medications, disclaimer. Sections the classifier
//! left empty fall back to general advice.

use std::fmt;

use cliniq_contracts::{check::SymptomCheck, condition::Condition};

const DEFAULT_RECOMMENDED_FOODS: [&str; 3] =
    ["Fresh fruits and vegetables", "Whole grains", "Lean proteins"];
const DEFAULT_FOODS_TO_AVOID: [&str; 3] =
    ["Processed foods", "High-sugar items", "Excessive caffeine"];
const DEFAULT_HYDRATION: &str =
    "Drink plenty of water throughout the day. Aim for 8-10 glasses daily.";
const DEFAULT_MEDICATIONS: [&str; 2] =
    ["Over-the-counter pain relievers", "Antihistamines if needed"];
const DEFAULT_SUPPLEMENTS: [&str; 3] = ["Vitamin C", "Zinc", "Probiotics"];
const DEFAULT_PRECAUTIONS: &str = "Always read medication labels carefully and follow dosage \
    instructions. Report any adverse reactions to your healthcare provider immediately.";
const DEFAULT_DISCLAIMER: &str = "This analysis is for informational purposes only and is not \
    a substitute for professional medical advice, diagnosis, or treatment. Always seek the \
    advice of your physician or other qualified health provider with any questions you may \
    have regarding a medical condition.";

const CONSULT_RECOMMENDED: &str = "Professional medical consultation recommended. Based on \
    your symptom analysis, you should consult a healthcare provider.";
const CONSULT_OPTIONAL: &str = "Medical consultation may not be necessary at this time. \
    Monitor your symptoms and seek medical attention if they worsen.";

/// Display adapter that renders a `SymptomCheck` as a text report.
pub struct SymptomReport<'a> {
    check: &'a SymptomCheck,
}

impl<'a> SymptomReport<'a> {
    pub fn new(check: &'a SymptomCheck) -> Self {
        Self { check }
    }
}

/// Render `check` as a complete plain-text report.
pub fn render_report(check: &SymptomCheck) -> String {
    SymptomReport::new(check).to_string()
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")
}

fn bullets<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    provided: Option<&[S]>,
    fallback: &[&str],
) -> fmt::Result {
    match provided {
        Some(items) => items.iter().try_for_each(|item| writeln!(f, "  - {}", item.as_ref())),
        None => fallback.iter().try_for_each(|item| writeln!(f, "  - {item}")),
    }
}

/// Empty text reads as missing, so it falls back to the default wording.
fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|s| !s.is_empty())
}

fn condition_line(f: &mut fmt::Formatter<'_>, index: usize, condition: &Condition) -> fmt::Result {
    writeln!(
        f,
        "  {}. {} ({}% match)",
        index + 1,
        condition.name,
        condition.display_percent()
    )?;
    if !condition.description.is_empty() {
        writeln!(f, "     {}", condition.description)?;
    }
    Ok(())
}

impl fmt::Display for SymptomReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = self.check;
        let result = &check.result;

        writeln!(f, "ClinIQ Health Assistant")?;
        writeln!(f, "Symptom Analysis Report")?;
        writeln!(f, "=======================")?;
        writeln!(f, "Generated on: {}", check.created_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(f, "Check ID:     {}", check.id.0)?;

        heading(f, "Symptoms Reported:")?;
        writeln!(f, "  {}", check.symptoms.trim())?;

        heading(f, "Urgency Level:")?;
        writeln!(f, "  {}", check.urgency)?;
        writeln!(f, "  {}", check.urgency.guidance())?;

        heading(f, "Possible Conditions:")?;
        if let Some(confidence) = &result.confidence {
            writeln!(f, "  Analysis confidence: {confidence}")?;
        }
        if result.possible_conditions.is_empty() {
            writeln!(f, "  No conditions identified")?;
        }
        for (i, condition) in result.possible_conditions.iter().enumerate() {
            condition_line(f, i, condition)?;
        }

        heading(f, "Recommended Actions:")?;
        if result.recommendations.is_empty() {
            writeln!(f, "  No specific recommendations")?;
        }
        for (i, recommendation) in result.recommendations.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, recommendation)?;
        }

        heading(f, "Medical Consultation:")?;
        if result.requires_attention {
            writeln!(f, "  {CONSULT_RECOMMENDED}")?;
        } else {
            writeln!(f, "  {CONSULT_OPTIONAL}")?;
        }
        if let Some(reason) = &result.attention_reason {
            writeln!(f, "  {reason}")?;
        }

        heading(f, "Suggested Specializations:")?;
        writeln!(f, "  {}", check.specializations.names().join(", "))?;

        if !check.doctors.is_empty() {
            heading(f, "Matched Doctors:")?;
            for doctor in &check.doctors {
                writeln!(
                    f,
                    "  - {} ({}, {}) rating {:.1}{}",
                    doctor.name,
                    doctor.specialization,
                    doctor.location,
                    doctor.rating,
                    if doctor.is_available_today { ", available today" } else { "" }
                )?;
            }
        }

        let diet = result.diet.as_ref();
        heading(f, "Dietary Recommendations:")?;
        writeln!(f, " Recommended Foods:")?;
        bullets(f, diet.and_then(|d| d.recommended_foods.as_deref()), &DEFAULT_RECOMMENDED_FOODS)?;
        writeln!(f, " Foods to Avoid:")?;
        bullets(f, diet.and_then(|d| d.foods_to_avoid.as_deref()), &DEFAULT_FOODS_TO_AVOID)?;
        writeln!(f, " Hydration:")?;
        writeln!(
            f,
            "  {}",
            non_blank(diet.and_then(|d| d.hydration.as_deref())).unwrap_or(DEFAULT_HYDRATION)
        )?;

        let medications = result.medications.as_ref();
        heading(f, "Medications & Supplements:")?;
        writeln!(f, " Recommended Medications:")?;
        bullets(f, medications.and_then(|m| m.recommended.as_deref()), &DEFAULT_MEDICATIONS)?;
        writeln!(f, " Supplements:")?;
        bullets(f, medications.and_then(|m| m.supplements.as_deref()), &DEFAULT_SUPPLEMENTS)?;
        writeln!(f, " Precautions:")?;
        writeln!(
            f,
            "  {}",
            non_blank(medications.and_then(|m| m.precautions.as_deref()))
                .unwrap_or(DEFAULT_PRECAUTIONS)
        )?;

        heading(f, "Disclaimer:")?;
        writeln!(f, "  {}", non_blank(result.disclaimer.as_deref()).unwrap_or(DEFAULT_DISCLAIMER))
    }
}
