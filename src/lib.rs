//! Daleel-RS: A university catalog directory and search service written in Rust
//!
//! Serves a browsable catalog of universities, their colleges, and the
//! majors they offer, with a cached global search across all three
//! collections and a JSON CRUD API for administration.

pub mod config;
pub mod matcher;
pub mod models;
pub mod search;
pub mod store;
pub mod web;

pub use config::Settings;
pub use matcher::{MatchMode, NamePattern};
pub use models::SearchResults;
pub use search::{Search, SearchCache};
pub use store::{CatalogStore, MemoryStore};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default time-to-live for cached search results in seconds
pub const DEFAULT_CACHE_TTL: u64 = 300;

/// Default maximum number of cached search results
pub const DEFAULT_CACHE_CAPACITY: usize = 100;
