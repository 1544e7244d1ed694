//! # cliniq-mapping
//!
//! Resolves candidate conditions to the medical specializations a patient
//! should consider booking.
//!
//! ## Overview
//!
//! This crate provides [`TableResolver`], which implements the
//! [`SpecializationResolver`](cliniq_core::traits::SpecializationResolver)
//! trait over a [`SpecializationTable`]. The table maps lowercase keywords to
//! specialization lists. A built-in table ships with the crate; alternate
//! tables load from TOML.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use cliniq_core::traits::SpecializationResolver;
//! use cliniq_mapping::TableResolver;
//!
//! let resolver = TableResolver::builtin();
//! let specializations = resolver.resolve(&conditions);
//! ```
//!
//! ## Matching
//!
//! A condition whose lowercased name is exactly a keyword takes that entry
//! alone. Any other condition takes every entry whose keyword occurs inside
//! its name. Family Medicine and Internal Medicine are always offered.

mod builtin;
pub mod resolver;
pub mod table;

pub use resolver::{ConditionMatch, TableResolver};
pub use table::{MappingConfig, MappingEntry, SpecializationTable};

// ── Tests ─────────────────────────────────────────────────────────────────────
