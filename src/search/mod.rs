//! Global search subsystem
//!
//! Coordinates query-driven lookup across the three catalog collections,
//! enriches child hits with parent summaries, and caches result bundles
//! for a short window.

mod cache;
mod executor;
mod models;

pub use cache::{cache_key, Clock, ManualClock, SearchCache, SystemClock};
pub use executor::{Enrich, PerRowEnricher, Search, SearchError};
pub use models::SearchType;
