//! CLI command implementations.

pub mod clean;
pub mod export;
pub mod import;
pub mod levels;
pub mod serve;
