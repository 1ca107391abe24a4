//! CLI library components for the citation indexer.

pub mod batch;
pub mod logging;
