//! API request handlers.

mod facets;
mod roles;
mod settings;

pub use facets::*;
pub use roles::*;
pub use settings::*;
