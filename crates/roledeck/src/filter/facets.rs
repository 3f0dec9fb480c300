//! Facet values and selections.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// One of the three filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Industry,
    Level,
    Medium,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Industry, Facet::Level, Facet::Medium];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Facet::Industry => "Industry",
            Facet::Level => "Org-Level",
            Facet::Medium => "Medium",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::Industry => write!(f, "industry"),
            Facet::Level => write!(f, "level"),
            Facet::Medium => write!(f, "medium"),
        }
    }
}

impl FromStr for Facet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "industry" | "industries" => Ok(Facet::Industry),
            "level" | "levels" | "org-level" => Ok(Facet::Level),
            "medium" | "mediums" => Ok(Facet::Medium),
            _ => Err(format!(
                "Unknown facet: {}. Use industry, level, or medium.",
                s
            )),
        }
    }
}

/// Distinct facet values across a collection, each sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub industries: BTreeSet<String>,
    pub levels: BTreeSet<String>,
    pub mediums: BTreeSet<String>,
}

impl Facets {
    pub fn values(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Industry => &self.industries,
            Facet::Level => &self.levels,
            Facet::Medium => &self.mediums,
        }
    }
}

/// Collect the selectable values of every facet.
///
/// Industries are comma-split; levels and mediums are taken whole. Values
/// are trimmed and blanks dropped.
pub fn derive_facets<'a>(records: impl IntoIterator<Item = &'a Record>) -> Facets {
    let mut facets = Facets::default();
    for record in records {
        facets
            .industries
            .extend(record.industry_tags().map(str::to_string));
        if let Some(level) = record.level_label() {
            facets.levels.insert(level.to_string());
        }
        if let Some(medium) = record.medium_label() {
            facets.mediums.insert(medium.to_string());
        }
    }
    facets
}

/// Active filter values per facet. An empty set means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetSelection {
    pub industries: BTreeSet<String>,
    pub levels: BTreeSet<String>,
    pub mediums: BTreeSet<String>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.add(facet, value);
        self
    }

    pub fn values(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Industry => &self.industries,
            Facet::Level => &self.levels,
            Facet::Medium => &self.mediums,
        }
    }

    fn values_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Industry => &mut self.industries,
            Facet::Level => &mut self.levels,
            Facet::Medium => &mut self.mediums,
        }
    }

    /// Add a value, as when a badge is clicked. Returns false if it was
    /// already selected; selecting twice changes nothing.
    pub fn add(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        self.values_mut(facet).insert(value.to_string())
    }

    /// Remove a value. Returns whether it was selected.
    pub fn remove(&mut self, facet: Facet, value: &str) -> bool {
        self.values_mut(facet).remove(value.trim())
    }

    /// Flip a value's membership. Returns true if it is now selected.
    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        if self.remove(facet, value) {
            false
        } else {
            self.add(facet, value)
        }
    }

    pub fn clear(&mut self) {
        Facet::ALL
            .iter()
            .for_each(|facet| self.values_mut(*facet).clear());
    }

    /// True when no facet constrains the result.
    pub fn is_empty(&self) -> bool {
        self.industries.is_empty() && self.levels.is_empty() && self.mediums.is_empty()
    }

    /// Facet part of the predicate: AND across facets, OR within one.
    pub fn matches(&self, record: &Record) -> bool {
        let industry_ok = self.industries.is_empty()
            || record.industry_tags().any(|tag| self.industries.contains(tag));
        let level_ok = self.levels.is_empty()
            || record
                .level_label()
                .is_some_and(|level| self.levels.contains(level));
        let medium_ok = self.mediums.is_empty()
            || record
                .medium_label()
                .is_some_and(|medium| self.mediums.contains(medium));

        industry_ok && level_ok && medium_ok
    }
}
