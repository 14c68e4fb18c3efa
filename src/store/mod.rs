//! Catalog storage
//!
//! Search and the CRUD API both go through the [`CatalogStore`] trait, so
//! the backing store is swappable. The shipped implementation keeps the
//! three collections in memory; a document database would sit behind the
//! same trait.

mod memory;

pub use memory::MemoryStore;

use crate::matcher::NamePattern;
use crate::models::{College, Major, University};
use async_trait::async_trait;
use thiserror::Error;

/// Storage failure surfaced to callers
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("duplicate {entity} key: {key}")]
    DuplicateKey { entity: &'static str, key: String },
    #[error("{0}")]
    Validation(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// The catalog's persistence interface
///
/// The five `find_*` methods are what search consumes; the rest back the
/// CRUD endpoints. All reads are point-in-time snapshots, no transactions.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Universities whose name matches the pattern
    async fn find_universities_by_name(
        &self,
        pattern: &NamePattern,
    ) -> Result<Vec<University>, StoreError>;

    /// Colleges whose name matches the pattern
    async fn find_colleges_by_name(
        &self,
        pattern: &NamePattern,
    ) -> Result<Vec<College>, StoreError>;

    /// Majors whose name matches the pattern
    async fn find_majors_by_name(&self, pattern: &NamePattern) -> Result<Vec<Major>, StoreError>;

    /// Resolve a university by its catalog key
    async fn find_university_by_key(&self, key: &str) -> Result<Option<University>, StoreError>;

    /// Resolve a college by its (university key, college key) pair
    async fn find_college_by_key_and_university(
        &self,
        university_key: &str,
        college_key: &str,
    ) -> Result<Option<College>, StoreError>;

    async fn list_universities(&self) -> Result<Vec<University>, StoreError>;
    async fn create_university(&self, university: University) -> Result<University, StoreError>;
    async fn update_university(
        &self,
        id: &str,
        university: University,
    ) -> Result<University, StoreError>;
    async fn delete_university(&self, id: &str) -> Result<University, StoreError>;

    /// Colleges belonging to a university
    async fn list_colleges(&self, university_key: &str) -> Result<Vec<College>, StoreError>;
    async fn create_college(&self, college: College) -> Result<College, StoreError>;
    async fn update_college(&self, id: &str, college: College) -> Result<College, StoreError>;
    async fn delete_college(&self, id: &str) -> Result<College, StoreError>;

    /// Majors belonging to a college within a university
    async fn list_majors(
        &self,
        university_key: &str,
        college_key: &str,
    ) -> Result<Vec<Major>, StoreError>;
    async fn get_major(
        &self,
        university_key: &str,
        college_key: &str,
        id: &str,
    ) -> Result<Option<Major>, StoreError>;
    async fn create_major(&self, major: Major) -> Result<Major, StoreError>;
    async fn update_major(&self, id: &str, major: Major) -> Result<Major, StoreError>;
    async fn delete_major(&self, id: &str) -> Result<Major, StoreError>;
}
