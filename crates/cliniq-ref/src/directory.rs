//! In-memory implementation of `DoctorDirectory`.

use tracing::debug;

use cliniq_contracts::{doctor::Doctor, specialization::SpecializationSet};
use cliniq_core::traits::DoctorDirectory;

use crate::mock_data::mock_doctors;

/// A fixed roster of doctors held in memory.
///
/// Query results list doctors available today first, then by rating from
/// highest to lowest. Ties keep roster order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDoctorDirectory {
    doctors: Vec<Doctor>,
}

impl InMemoryDoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// A directory over the bundled mock roster.
    pub fn with_mock_roster() -> Self {
        Self::new(mock_doctors())
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }
}

impl DoctorDirectory for InMemoryDoctorDirectory {
    fn find_by_specializations(&self, specializations: &SpecializationSet) -> Vec<Doctor> {
        let mut matched: Vec<Doctor> = self
            .doctors
            .iter()
            .filter(|d| specializations.contains(d.specialization.as_str()))
            .cloned()
            .collect();

        // Stable sort: equal keys keep roster order.
        matched.sort_by(|a, b| {
            b.is_available_today
                .cmp(&a.is_available_today)
                .then_with(|| b.rating.total_cmp(&a.rating))
        });

        debug!(
            specializations = specializations.len(),
            matched = matched.len(),
            roster = self.doctors.len(),
            "doctor directory queried"
        );

        matched
    }
}
