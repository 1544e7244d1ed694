//! # cliniq-core
//!
//! The symptom-check pipeline for ClinIQ.
//!
//! This crate provides:
//! - The three collaborator traits (`SymptomClassifier`,
//!   `SpecializationResolver`, `DoctorDirectory`)
//! - The `CheckPipeline` that wires them together in order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cliniq_core::{CheckPipeline, traits::{SymptomClassifier, SpecializationResolver, DoctorDirectory}};
//! ```

pub mod pipeline;
pub mod traits;

pub use pipeline::CheckPipeline;
