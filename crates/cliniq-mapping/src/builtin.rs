//! The specialization table shipped with the product.
//!
//! Keys are lowercase keywords or full condition names. Order matters only
//! for output ordering: keyword scans walk this list top to bottom.

pub(crate) const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    ("headache", &["Neurology", "Family Medicine", "Internal Medicine"]),
    ("migraine", &["Neurology", "Family Medicine"]),
    ("tension headache", &["Neurology", "Family Medicine", "Internal Medicine"]),
    ("sinus", &["ENT (Otolaryngology)", "Family Medicine", "Internal Medicine"]),
    ("cluster headache", &["Neurology"]),
    ("cold", &["Family Medicine", "Internal Medicine"]),
    ("flu", &["Family Medicine", "Internal Medicine"]),
    ("influenza", &["Family Medicine", "Internal Medicine"]),
    ("fever", &["Family Medicine", "Internal Medicine"]),
    ("cough", &["Pulmonology", "Family Medicine", "Internal Medicine"]),
    ("bronchitis", &["Pulmonology", "Family Medicine", "Internal Medicine"]),
    ("pneumonia", &["Pulmonology", "Internal Medicine", "Emergency Medicine"]),
    ("chest pain", &["Cardiology", "Emergency Medicine", "Internal Medicine"]),
    ("heart", &["Cardiology", "Internal Medicine"]),
    ("breathing", &["Pulmonology", "Emergency Medicine", "Internal Medicine"]),
    ("fatigue", &["Internal Medicine", "Endocrinology", "Family Medicine"]),
    ("anemia", &["Hematology", "Internal Medicine", "Family Medicine"]),
    ("thyroid", &["Endocrinology", "Internal Medicine", "Family Medicine"]),
    ("stomach", &["Gastroenterology", "Internal Medicine", "Family Medicine"]),
    ("gastro", &["Gastroenterology", "Internal Medicine"]),
    ("skin", &["Dermatology", "Family Medicine"]),
    ("rash", &["Dermatology", "Allergy and Immunology", "Family Medicine"]),
    ("allergy", &["Allergy and Immunology", "Family Medicine"]),
    ("joint", &["Rheumatology", "Orthopedics", "Family Medicine"]),
    ("arthritis", &["Rheumatology", "Family Medicine"]),
    (
        "back pain",
        &["Orthopedics", "Neurology", "Physical Medicine and Rehabilitation", "Family Medicine"],
    ),
    ("mental health", &["Psychiatry", "Psychology", "Family Medicine"]),
    ("anxiety", &["Psychiatry", "Psychology", "Family Medicine"]),
    ("depression", &["Psychiatry", "Psychology", "Family Medicine"]),
    ("diabetes", &["Endocrinology", "Internal Medicine", "Family Medicine"]),
    ("hypertension", &["Cardiology", "Internal Medicine", "Family Medicine"]),
    ("asthma", &["Pulmonology", "Allergy and Immunology", "Family Medicine"]),
    ("kidney stone", &["Urology", "Nephrology", "Emergency Medicine"]),
    ("menstrual disorder", &["Gynecology", "Endocrinology", "Family Medicine"]),
    ("vision loss", &["Ophthalmology", "Neurology", "Family Medicine"]),
    ("unexplained weight loss", &["Oncology", "Endocrinology", "Internal Medicine"]),
    ("urinary tract infection", &["Urology", "Family Medicine", "Internal Medicine"]),
    ("seizure", &["Neurology", "Emergency Medicine"]),
];
