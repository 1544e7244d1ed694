//! Canned classifier responses and the doctor roster.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. The classifier responses stand in for a remote inference
//! service and are shaped exactly like its JSON payloads.

use serde_json::{json, Value};

use cliniq_contracts::{doctor::Doctor, specialization::Specialization};

// ── Symptom classifier responses (mock) ──────────────────────────────────────

/// Return the canned classifier payload for a symptom description.
///
/// Matching is case-insensitive and checks, in order:
/// - headache and fever → Common Cold, Influenza (moderate, consult)
/// - cough and fever    → Bronchitis, Pneumonia (moderate, consult)
/// - headache           → Tension Headache, Migraine (mild)
/// - fatigue            → Chronic Fatigue Syndrome, Iron Deficiency (mild, consult)
/// - anything else      → General Malaise (mild)
pub fn get_mock_symptom_response(symptoms: &str) -> Value {
    let text = symptoms.to_lowercase();
    let has_headache = text.contains("headache");
    let has_fever = text.contains("fever");
    let has_cough = text.contains("cough");
    let has_fatigue = text.contains("fatigue");

    let no_consult = "Based on your symptoms, home care should be sufficient at this time.";

    let (conditions, remedies, severity, requires_attention, reason) = if has_headache && has_fever {
        (
            json!([
                {
                    "name": "Common Cold",
                    "description": "A viral infection causing inflammation of the mucous membranes lining the respiratory passages."
                },
                {
                    "name": "Influenza",
                    "description": "A contagious respiratory illness caused by influenza viruses that infect the nose, throat, and lungs."
                }
            ]),
            json!([
                "Rest and stay hydrated",
                "Take over-the-counter pain relievers for fever",
                "Use a humidifier to ease congestion",
                "Stay warm and get plenty of sleep"
            ]),
            2,
            true,
            "Your combination of fever and headache should be evaluated by a healthcare professional, especially if symptoms persist for more than 3 days.",
        )
    } else if has_cough && has_fever {
        (
            json!([
                {
                    "name": "Bronchitis",
                    "description": "Inflammation of the lining of your bronchial tubes, which carry air to and from your lungs."
                },
                {
                    "name": "Pneumonia",
                    "description": "An infection that inflames the air sacs in one or both lungs, which may fill with fluid."
                }
            ]),
            json!([
                "Rest as much as possible",
                "Drink plenty of fluids",
                "Use over-the-counter medications to reduce fever",
                "Use a humidifier to add moisture to the air"
            ]),
            2,
            true,
            "Cough with fever may indicate a respiratory infection that should be evaluated by a doctor, especially if you have difficulty breathing.",
        )
    } else if has_headache {
        (
            json!([
                {
                    "name": "Tension Headache",
                    "description": "A mild to moderate pain often described as feeling like a tight band around the head."
                },
                {
                    "name": "Migraine",
                    "description": "A headache of varying intensity, often accompanied by nausea and sensitivity to light and sound."
                }
            ]),
            json!([
                "Rest in a quiet, dark room",
                "Apply a cold pack to your forehead",
                "Drink plenty of water",
                "Take over-the-counter pain relievers"
            ]),
            1,
            false,
            no_consult,
        )
    } else if has_fatigue {
        (
            json!([
                {
                    "name": "Chronic Fatigue Syndrome",
                    "description": "A complicated disorder characterized by extreme fatigue that can't be explained by any underlying medical condition."
                },
                {
                    "name": "Iron Deficiency",
                    "description": "A condition in which blood lacks adequate healthy red blood cells that carry oxygen to the body's tissues."
                }
            ]),
            json!([
                "Establish a regular sleep schedule",
                "Engage in light physical activity",
                "Eat a balanced diet",
                "Manage stress through relaxation techniques"
            ]),
            1,
            true,
            "Persistent fatigue should be evaluated to rule out underlying conditions like anemia or thyroid issues.",
        )
    } else {
        (
            json!([
                {
                    "name": "General Malaise",
                    "description": "A general feeling of discomfort, illness, or uneasiness whose exact cause is difficult to identify."
                }
            ]),
            json!([
                "Get adequate rest",
                "Stay hydrated",
                "Maintain a balanced diet",
                "Monitor your symptoms"
            ]),
            1,
            false,
            no_consult,
        )
    };

    json!({
        "possible_conditions": conditions,
        "severity": severity,
        "recommendations": remedies,
        "requires_attention": requires_attention,
        "attention_reason": reason
    })
}

// ── Doctor roster (mock) ─────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn doctor(
    id: &str,
    name: &str,
    specialization: &str,
    location: &str,
    rating: f32,
    availability: &[&str],
    is_available_today: bool,
    experience_years: u32,
    patient_count: u32,
    reviews: u32,
) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialization: Specialization::new(specialization),
        location: location.to_string(),
        rating,
        availability: availability.iter().map(|d| d.to_string()).collect(),
        is_available_today,
        experience_years,
        patient_count,
        reviews,
        is_verified: true,
    }
}

/// Return the fifteen-doctor booking roster.
#[rustfmt::skip]
pub fn mock_doctors() -> Vec<Doctor> {
    vec![
        doctor("1", "Dr. Aisha Sharma", "Family Medicine", "Delhi", 4.9, &["Monday", "Tuesday", "Thursday"], true, 12, 2300, 120),
        doctor("2", "Dr. Meera Menon", "Internal Medicine", "Mumbai", 4.7, &["Wednesday", "Friday"], false, 9, 1800, 95),
        doctor("3", "Dr. Kavita Banerjee", "Pediatrics", "Kolkata", 4.8, &["Monday", "Wednesday", "Friday"], true, 7, 1500, 110),
        doctor("4", "Dr. Anjali Iyer", "Cardiology", "Chennai", 4.9, &["Tuesday", "Thursday"], false, 15, 2600, 135),
        doctor("5", "Dr. Rohan Gupta", "Neurology", "Bangalore", 4.8, &["Monday", "Wednesday", "Friday"], true, 10, 1900, 105),
        doctor("6", "Dr. Priya Singh", "Dermatology", "Hyderabad", 4.6, &["Tuesday", "Thursday", "Saturday"], false, 8, 1750, 90),
        doctor("7", "Dr. Arjun Desai", "ENT (Otolaryngology)", "Pune", 4.7, &["Monday", "Thursday"], true, 11, 2100, 100),
        doctor("8", "Dr. Sneha Reddy", "Pulmonology", "Ahmedabad", 4.8, &["Wednesday", "Friday", "Saturday"], true, 9, 1850, 98),
        doctor("9", "Dr. Vikram Patel", "Gastroenterology", "Jaipur", 4.5, &["Tuesday", "Thursday"], false, 13, 2200, 115),
        doctor("10", "Dr. Sunita Joshi", "Endocrinology", "Lucknow", 4.9, &["Monday", "Wednesday"], true, 14, 2400, 125),
        doctor("11", "Dr. Alok Verma", "Orthopedics", "Chandigarh", 4.6, &["Tuesday", "Friday", "Saturday"], false, 10, 2000, 102),
        doctor("12", "Dr. Fatima Khan", "Psychiatry", "Bhopal", 4.7, &["Monday", "Thursday"], true, 8, 1600, 85),
        doctor("13", "Dr. Rajesh Kumar", "Emergency Medicine", "Mumbai", 4.6, &["Tuesday", "Wednesday", "Friday"], false, 9, 1950, 100),
        doctor("14", "Dr. Anita Desai", "Internal Medicine", "Delhi", 4.8, &["Monday", "Thursday", "Saturday"], true, 11, 2150, 112),
        doctor("15", "Dr. Sameer Shah", "Neurology", "Chennai", 4.7, &["Tuesday", "Friday"], false, 12, 2050, 108),
    ]
}
