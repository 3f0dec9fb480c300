//! Faceted filtering and name search over a role collection.
//!
//! Three facets (industry, org-level, medium) combine with AND; values
//! inside one facet combine with OR. Nothing here keeps state between calls:
//! the view is recomputed from the collection and the current query.
//!
//! ```
//! use roledeck::Record;
//! use roledeck::filter::{Facet, FacetSelection, derive_facets, filter};
//!
//! let records = vec![
//!     Record::new("Alpha").with_industry("Tech, Retail").with_level("Senior"),
//!     Record::new("Beta").with_industry("Tech").with_level("Junior"),
//! ];
//!
//! let facets = derive_facets(&records);
//! assert_eq!(facets.industries.len(), 2);
//!
//! let selection = FacetSelection::new().with(Facet::Industry, "Retail");
//! let view = filter(&records, &selection, "");
//! assert_eq!(view[0].name, "Alpha");
//! ```

mod debounce;
mod facets;
mod query;

pub use debounce::{Debouncer, SEARCH_SETTLE_DELAY};
pub use facets::{Facet, FacetSelection, Facets, derive_facets};
pub use query::{FilterQuery, MIN_SEARCH_CHARS, filter};
