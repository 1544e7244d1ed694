//! Bookable doctors as the directory stores them.

use serde::{Deserialize, Serialize};

use crate::specialization::Specialization;

/// A doctor listed in the booking directory.
///
/// `specialization` is matched verbatim against resolved specialization
/// names, so it must use the same vocabulary as the specialization table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: Specialization,
    pub location: String,
    /// Average patient rating out of 5.
    pub rating: f32,
    /// Weekdays the doctor takes appointments.
    pub availability: Vec<String>,
    pub is_available_today: bool,
    pub experience_years: u32,
    pub patient_count: u32,
    pub reviews: u32,
    pub is_verified: bool,
}
