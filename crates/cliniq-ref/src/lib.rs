//! # cliniq-ref
//!
//! Reference collaborators for the ClinIQ symptom-check pipeline.
//!
//! - [`classifier::MockSymptomClassifier`] — canned keyword classifier whose
//!   responses pass through the real ingest boundary
//! - [`directory::InMemoryDoctorDirectory`] — the fifteen-doctor roster
//! - [`report::render_report`] — plain-text symptom report
//!
//! All data is hardcoded and fictional. No external API calls are made.

use std::sync::Arc;

use cliniq_contracts::error::CliniqResult;
use cliniq_core::CheckPipeline;
use cliniq_mapping::{SpecializationTable, TableResolver};

pub mod classifier;
pub mod directory;
pub mod mock_data;
pub mod report;

/// Wire the mock classifier, a resolver over `table`, and the mock roster
/// into a ready-to-run pipeline.
pub fn reference_pipeline(table: Arc<SpecializationTable>) -> CliniqResult<CheckPipeline> {
    Ok(CheckPipeline::new(
        Box::new(classifier::MockSymptomClassifier::new()?),
        Box::new(TableResolver::new(table)),
        Box::new(directory::InMemoryDoctorDirectory::with_mock_roster()),
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
