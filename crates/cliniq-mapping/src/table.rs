//! Specialization table types and the TOML configuration schema.
//!
//! A `MappingConfig` is deserialized from TOML and holds an ordered list of
//! `MappingEntry`s. `SpecializationTable` is the validated, read-only form
//! the resolver consults.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, OnceLock},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use cliniq_contracts::{
    error::{CliniqError, CliniqResult},
    specialization::Specialization,
};

use crate::builtin::BUILTIN_ENTRIES;

/// One keyword and the specializations it points to.
///
/// Example in TOML:
/// ```toml
/// [[entries]]
/// keyword = "chest pain"
/// specializations = ["Cardiology", "Emergency Medicine", "Internal Medicine"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Lowercase keyword or full condition name.
    pub keyword: String,

    /// Specializations to offer when the keyword matches. Must not be empty.
    pub specializations: Vec<String>,
}

/// The top-level structure deserialized from a TOML mapping file.
///
/// Entries keep their declaration order; keyword scans walk them top to
/// bottom.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingConfig {
    #[serde(default)]
    pub entries: Vec<MappingEntry>,
}

/// A validated table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub keyword: String,
    pub specializations: Vec<Specialization>,
}

/// The immutable keyword → specialization table.
///
/// Invariants, checked on construction from a `MappingConfig`:
/// - every keyword is non-empty and already lowercase
/// - keywords are unique
/// - every entry lists at least one non-blank specialization
///
/// Duplicate specializations within one entry collapse to the first
/// occurrence.
#[derive(Debug, Clone)]
pub struct SpecializationTable {
    entries: Vec<TableEntry>,
    index: HashMap<String, usize>,
}

impl SpecializationTable {
    /// The table compiled into the binary.
    ///
    /// Built on first use and shared for the life of the process.
    pub fn builtin() -> Arc<SpecializationTable> {
        static BUILTIN: OnceLock<Arc<SpecializationTable>> = OnceLock::new();
        Arc::clone(BUILTIN.get_or_init(|| {
            let table = Self::build(BUILTIN_ENTRIES.iter().map(|(keyword, specializations)| {
                MappingEntry {
                    keyword: keyword.to_string(),
                    specializations: specializations.iter().map(|s| s.to_string()).collect(),
                }
            }));
            debug!(entries = table.len(), "built-in specialization table initialized");
            Arc::new(table)
        }))
    }

    /// This table in its TOML-serializable form.
    pub fn to_config(&self) -> MappingConfig {
        MappingConfig {
            entries: self
                .entries()
                .map(|entry| MappingEntry {
                    keyword: entry.keyword.clone(),
                    specializations: entry
                        .specializations
                        .iter()
                        .map(|s| s.0.clone())
                        .collect(),
                })
                .collect(),
        }
    }

    /// Render this table as a TOML document that `from_toml_str` accepts.
    pub fn to_toml_string(&self) -> CliniqResult<String> {
        toml::to_string(&self.to_config()).map_err(|e| CliniqError::ConfigError {
            reason: format!("failed to serialize specialization table: {}", e),
        })
    }

    /// Validate `config` and build a table from it.
    ///
    /// Returns `CliniqError::ConfigError` naming the first offending entry.
    pub fn from_config(config: MappingConfig) -> CliniqResult<Self> {
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (position, entry) in config.entries.iter().enumerate() {
            if entry.keyword.trim().is_empty() {
                return Err(config_error(format!("entry {} has an empty keyword", position)));
            }
            if entry.keyword != entry.keyword.to_lowercase() {
                return Err(config_error(format!(
                    "keyword '{}' must be lowercase",
                    entry.keyword
                )));
            }
            if let Some(first) = seen.insert(entry.keyword.as_str(), position) {
                return Err(config_error(format!(
                    "keyword '{}' is declared twice (entries {} and {})",
                    entry.keyword, first, position
                )));
            }
            if entry.specializations.is_empty() {
                return Err(config_error(format!(
                    "keyword '{}' lists no specializations",
                    entry.keyword
                )));
            }
            if entry.specializations.iter().any(|s| s.trim().is_empty()) {
                return Err(config_error(format!(
                    "keyword '{}' lists a blank specialization",
                    entry.keyword
                )));
            }
        }

        Ok(Self::build(config.entries))
    }

    /// Parse `s` as TOML and build a validated table.
    pub fn from_toml_str(s: &str) -> CliniqResult<Self> {
        let config: MappingConfig = toml::from_str(s).map_err(|e| CliniqError::ConfigError {
            reason: format!("failed to parse specialization table TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML specialization table.
    pub fn from_file(path: &Path) -> CliniqResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CliniqError::ConfigError {
            reason: format!(
                "failed to read specialization table '{}': {}",
                path.display(),
                e
            ),
        })?;
        Self::from_toml_str(&contents)
    }

    fn build(entries: impl IntoIterator<Item = MappingEntry>) -> Self {
        let mut table = Self { entries: Vec::new(), index: HashMap::new() };
        for entry in entries {
            let mut specializations: Vec<Specialization> = Vec::new();
            for name in entry.specializations {
                let specialization = Specialization::new(name);
                if !specializations.contains(&specialization) {
                    specializations.push(specialization);
                }
            }
            table.index.insert(entry.keyword.clone(), table.entries.len());
            table.entries.push(TableEntry { keyword: entry.keyword, specializations });
        }
        table
    }

    /// Specializations listed under exactly `keyword`, if any.
    pub fn get(&self, keyword: &str) -> Option<&[Specialization]> {
        self.index
            .get(keyword)
            .map(|&i| self.entries[i].specializations.as_slice())
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &TableEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn config_error(reason: String) -> CliniqError {
    CliniqError::ConfigError { reason }
}
