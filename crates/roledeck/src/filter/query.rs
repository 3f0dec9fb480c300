//! The filter predicate.

use serde::{Deserialize, Serialize};

use crate::record::Record;

use super::facets::FacetSelection;

/// Search terms shorter than this (after trimming) do not filter.
pub const MIN_SEARCH_CHARS: usize = 2;

/// Facet selection plus free-text search over role names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    #[serde(flatten)]
    pub selection: FacetSelection,
    pub search: String,
}

impl FilterQuery {
    pub fn new(selection: FacetSelection, search: impl Into<String>) -> Self {
        Self {
            selection,
            search: search.into(),
        }
    }

    /// True when the query passes every record.
    pub fn is_unconstrained(&self) -> bool {
        self.selection.is_empty() && search_needle(&self.search).is_none()
    }

    /// Select matching records, keeping their order.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        filter(records, &self.selection, &self.search)
    }
}

/// Records matching every active facet and the search term, in input order.
///
/// A record passes a facet when the facet has no selected values or when one
/// of the record's values for it is selected. The search term applies only
/// once it is at least [`MIN_SEARCH_CHARS`] long after trimming, and matches
/// case-insensitively anywhere in the role name.
pub fn filter<'a>(
    records: &'a [Record],
    selection: &FacetSelection,
    search_term: &str,
) -> Vec<&'a Record> {
    let needle = search_needle(search_term);
    records
        .iter()
        .filter(|record| {
            selection.matches(record)
                && needle
                    .as_deref()
                    .is_none_or(|needle| record.name.to_lowercase().contains(needle))
        })
        .collect()
}

/// Lowercased search term, or `None` when it is too short to apply.
fn search_needle(term: &str) -> Option<String> {
    let term = term.trim();
    (term.chars().count() >= MIN_SEARCH_CHARS).then(|| term.to_lowercase())
}
