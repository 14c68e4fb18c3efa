//! Search orchestration
//!
//! `Search` validates input, consults the cache, and on a miss fans out
//! to the three category lookups, enriching college and major hits with
//! parent summaries before caching and returning the bundle.

use super::cache::{cache_key, SearchCache};
use super::models::SearchType;
use crate::matcher::{MatchError, MatchMode, NamePattern};
use crate::models::{College, CollegeHit, CollegeSummary, Major, MajorHit, SearchResults, UniversitySummary};
use crate::store::{CatalogStore, StoreError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Search failure surfaced to the caller as one opaque error
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Pattern(#[from] MatchError),
}

/// Strategy for attaching parent summaries to child hits
///
/// The shipped implementation resolves parents with one store lookup per
/// hit. A batched join can replace it without touching the orchestrator.
#[async_trait]
pub trait Enrich: Send + Sync {
    async fn enrich_colleges(&self, colleges: Vec<College>) -> Result<Vec<CollegeHit>, SearchError>;
    async fn enrich_majors(&self, majors: Vec<Major>) -> Result<Vec<MajorHit>, SearchError>;
}

/// Per-row parent lookup enrichment
pub struct PerRowEnricher {
    store: Arc<dyn CatalogStore>,
}

impl PerRowEnricher {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Enrich for PerRowEnricher {
    async fn enrich_colleges(&self, colleges: Vec<College>) -> Result<Vec<CollegeHit>, SearchError> {
        let mut hits = Vec::with_capacity(colleges.len());
        for college in colleges {
            let university = self
                .store
                .find_university_by_key(&college.university_key)
                .await?
                .map(|u| UniversitySummary::of(&u));
            hits.push(CollegeHit {
                college,
                university,
            });
        }
        Ok(hits)
    }

    async fn enrich_majors(&self, majors: Vec<Major>) -> Result<Vec<MajorHit>, SearchError> {
        let mut hits = Vec::with_capacity(majors.len());
        for major in majors {
            let university = self
                .store
                .find_university_by_key(&major.university_key)
                .await?
                .map(|u| UniversitySummary::of(&u));
            let college = self
                .store
                .find_college_by_key_and_university(&major.university_key, &major.college_key)
                .await?
                .map(|c| CollegeSummary::of(&c));
            hits.push(MajorHit {
                major,
                university,
                college,
            });
        }
        Ok(hits)
    }
}

/// The search orchestrator
pub struct Search {
    store: Arc<dyn CatalogStore>,
    cache: SearchCache,
    match_mode: MatchMode,
    enricher: Arc<dyn Enrich>,
}

impl Search {
    /// Create an orchestrator over a store with default cache and matching
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        let enricher = Arc::new(PerRowEnricher::new(store.clone()));
        Self {
            store,
            cache: SearchCache::new(crate::DEFAULT_CACHE_TTL, crate::DEFAULT_CACHE_CAPACITY),
            match_mode: MatchMode::default(),
            enricher,
        }
    }

    /// Replace the result cache
    pub fn with_cache(mut self, cache: SearchCache) -> Self {
        self.cache = cache;
        self
    }

    /// Set the name matching mode
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Replace the enrichment strategy
    pub fn with_enricher(mut self, enricher: Arc<dyn Enrich>) -> Self {
        self.enricher = enricher;
        self
    }

    /// Execute a search across the categories selected by `search_type`
    ///
    /// An empty or whitespace-only query returns the all-empty bundle
    /// without touching the cache or the store. Unrecognized type values
    /// select every category; the raw value still feeds the cache key.
    pub async fn execute(
        &self,
        query: &str,
        search_type: Option<&str>,
    ) -> Result<SearchResults, SearchError> {
        if query.trim().is_empty() {
            return Ok(SearchResults::empty());
        }

        let key = cache_key(query, search_type);
        if let Some(cached) = self.cache.get(&key) {
            debug!("Cache HIT for \"{}\"", query);
            return Ok(cached);
        }
        debug!("Cache MISS for \"{}\", querying store", query);

        let filter = SearchType::parse(search_type);
        let pattern = NamePattern::compile(query, self.match_mode)?;

        let universities = async {
            if filter.includes_universities() {
                self.store
                    .find_universities_by_name(&pattern)
                    .await
                    .map_err(SearchError::from)
            } else {
                Ok(Vec::new())
            }
        };
        let colleges = async {
            if filter.includes_colleges() {
                let found = self.store.find_colleges_by_name(&pattern).await?;
                self.enricher.enrich_colleges(found).await
            } else {
                Ok(Vec::new())
            }
        };
        let majors = async {
            if filter.includes_majors() {
                let found = self.store.find_majors_by_name(&pattern).await?;
                self.enricher.enrich_majors(found).await
            } else {
                Ok(Vec::new())
            }
        };

        let (universities, colleges, majors) = futures::try_join!(universities, colleges, majors)?;

        let results = SearchResults {
            universities,
            colleges,
            majors,
        };
        info!(
            "Search \"{}\" matched {} entries across {} categories",
            query,
            results.len(),
            if filter == SearchType::All { 3 } else { 1 }
        );

        self.cache.put(key, results.clone());
        Ok(results)
    }
}
