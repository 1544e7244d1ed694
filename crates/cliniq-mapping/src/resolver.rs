//! Table-driven specialization resolver.
//!
//! `TableResolver` implements the `SpecializationResolver` trait from
//! cliniq-core over an injected `SpecializationTable`.
//!
//! Resolution algorithm:
//!
//! 1. No conditions → return the generalist pair and stop.
//! 2. For each condition, lowercase its name, then:
//!    a. If the whole name is a table keyword, take that entry only.
//!    b. Otherwise take every entry whose keyword is a substring of the name.
//! 3. Union everything matched, in first-seen order.
//! 4. Append the generalist pair, whatever step 3 produced.
//!
//! Step 2a short-circuits per condition, not per batch: an exact match on
//! one condition never suppresses keyword scanning for the others.

use std::sync::Arc;

use tracing::debug;

use cliniq_contracts::{
    condition::Condition,
    specialization::{Specialization, SpecializationSet},
};
use cliniq_core::traits::SpecializationResolver;

use crate::table::SpecializationTable;

/// How a single condition name matched the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionMatch {
    /// The lowercased name is itself a keyword.
    Exact(String),
    /// These keywords occur inside the lowercased name, in table order.
    Keywords(Vec<String>),
    /// Nothing in the table applies.
    Unmatched,
}

impl ConditionMatch {
    /// The keywords this match drew specializations from.
    pub fn keywords(&self) -> &[String] {
        match self {
            ConditionMatch::Exact(keyword) => std::slice::from_ref(keyword),
            ConditionMatch::Keywords(keywords) => keywords,
            ConditionMatch::Unmatched => &[],
        }
    }
}

/// A `SpecializationResolver` backed by a read-only `SpecializationTable`.
///
/// Cloning is cheap; clones share the table.
#[derive(Debug, Clone)]
pub struct TableResolver {
    table: Arc<SpecializationTable>,
}

impl TableResolver {
    pub fn new(table: Arc<SpecializationTable>) -> Self {
        Self { table }
    }

    /// A resolver over the built-in table.
    pub fn builtin() -> Self {
        Self::new(SpecializationTable::builtin())
    }

    /// Like [`SpecializationResolver::resolve`], treating `None` as no
    /// conditions.
    pub fn resolve_optional(&self, conditions: Option<&[Condition]>) -> SpecializationSet {
        self.resolve(conditions.unwrap_or_default())
    }

    /// Report which table keywords a condition name hits.
    pub fn match_condition(&self, name: &str) -> ConditionMatch {
        let lowered = name.to_lowercase();

        if self.table.get(&lowered).is_some() {
            return ConditionMatch::Exact(lowered);
        }

        let keywords: Vec<String> = self
            .table
            .entries()
            .filter(|entry| lowered.contains(entry.keyword.as_str()))
            .map(|entry| entry.keyword.clone())
            .collect();

        if keywords.is_empty() {
            ConditionMatch::Unmatched
        } else {
            ConditionMatch::Keywords(keywords)
        }
    }

    fn specializations_for<'a>(
        &'a self,
        matched: &'a ConditionMatch,
    ) -> impl Iterator<Item = Specialization> + 'a {
        matched
            .keywords()
            .iter()
            .filter_map(|keyword| self.table.get(keyword))
            .flatten()
            .cloned()
    }
}

impl SpecializationResolver for TableResolver {
    fn resolve(&self, conditions: &[Condition]) -> SpecializationSet {
        if conditions.is_empty() {
            debug!("no conditions supplied; returning generalists");
            return SpecializationSet::generalists();
        }

        let mut resolved = conditions.iter().fold(SpecializationSet::new(), |mut acc, condition| {
            let matched = self.match_condition(&condition.name);
            debug!(
                condition = %condition.name,
                matched = ?matched,
                "condition matched against specialization table"
            );
            acc.extend(self.specializations_for(&matched));
            acc
        });

        resolved.extend(SpecializationSet::generalists());

        debug!(
            conditions = conditions.len(),
            specializations = resolved.len(),
            "specializations resolved"
        );

        resolved
    }
}
