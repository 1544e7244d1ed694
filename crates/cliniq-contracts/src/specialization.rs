//! Medical specialization names and the ordered set the resolver returns.
//!
//! Specializations are an open, curated vocabulary rather than an enum: the
//! doctor directory stores them as free text, and the resolver only ever
//! compares them for equality.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const FAMILY_MEDICINE: &str = "Family Medicine";
pub const INTERNAL_MEDICINE: &str = "Internal Medicine";

/// The generalist specializations offered with every resolution.
pub const GENERALISTS: [&str; 2] = [FAMILY_MEDICINE, INTERNAL_MEDICINE];

/// An opaque specialization name, e.g. "Cardiology".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Specialization(pub String);

impl Specialization {
    /// Construct a specialization from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Specialization {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A deduplicated set of specializations that remembers insertion order.
///
/// Equality ignores order: two sets are equal when they hold the same names.
/// Iteration yields names in the order they were first inserted, which keeps
/// rendered output stable across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Specialization>", into = "Vec<Specialization>")]
pub struct SpecializationSet {
    inner: Vec<Specialization>,
}

impl SpecializationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default generalist pair: Family Medicine, Internal Medicine.
    pub fn generalists() -> Self {
        GENERALISTS.iter().copied().map(Specialization::from).collect()
    }

    /// Insert `specialization`, returning false if it was already present.
    pub fn insert(&mut self, specialization: Specialization) -> bool {
        if self.inner.contains(&specialization) {
            return false;
        }
        self.inner.push(specialization);
        true
    }

    /// Return true if the set contains a specialization with this exact name.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.iter().any(|s| s.0 == name)
    }

    /// Return true if every member of `other` is also in `self`.
    pub fn is_superset(&self, other: &SpecializationSet) -> bool {
        other.iter().all(|s| self.contains(s.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Specialization> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Names in insertion order, as plain string slices.
    pub fn names(&self) -> Vec<&str> {
        self.inner.iter().map(Specialization::as_str).collect()
    }
}

impl PartialEq for SpecializationSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_superset(other)
    }
}

impl Eq for SpecializationSet {}

impl FromIterator<Specialization> for SpecializationSet {
    fn from_iter<I: IntoIterator<Item = Specialization>>(iter: I) -> Self {
        let mut set = SpecializationSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Specialization> for SpecializationSet {
    fn extend<I: IntoIterator<Item = Specialization>>(&mut self, iter: I) {
        for specialization in iter {
            self.insert(specialization);
        }
    }
}

impl IntoIterator for SpecializationSet {
    type Item = Specialization;
    type IntoIter = std::vec::IntoIter<Specialization>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a SpecializationSet {
    type Item = &'a Specialization;
    type IntoIter = std::slice::Iter<'a, Specialization>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl From<Vec<Specialization>> for SpecializationSet {
    fn from(items: Vec<Specialization>) -> Self {
        items.into_iter().collect()
    }
}

impl From<SpecializationSet> for Vec<Specialization> {
    fn from(set: SpecializationSet) -> Self {
        set.inner
    }
}
