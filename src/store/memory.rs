//! In-memory catalog store
//!
//! Collections live in a `RwLock`ed struct; ids are minted as uuid v4 on
//! create. Referential integrity between the collections is not enforced,
//! matching the catalog's historical behavior: a college may reference a
//! university key that no longer exists, and search renders that as a
//! `null` parent rather than an error.

use super::{CatalogStore, StoreError};
use crate::matcher::NamePattern;
use crate::models::{College, Major, University};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Default)]
struct Collections {
    universities: Vec<University>,
    colleges: Vec<College>,
    majors: Vec<Major>,
}

/// Seed file format: the three collections as one JSON document
#[derive(Debug, Default, Deserialize)]
struct SeedData {
    #[serde(default)]
    universities: Vec<University>,
    #[serde(default)]
    colleges: Vec<College>,
    #[serde(default)]
    majors: Vec<Major>,
}

/// Memory-backed [`CatalogStore`]
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the three collections from a JSON seed file
    pub async fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let seed: SeedData =
            serde_json::from_str(&content).map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let store = Self::new();
        {
            let mut inner = store.inner.write().await;
            for mut u in seed.universities {
                if u.id.is_empty() {
                    u.id = new_id();
                }
                inner.universities.push(u);
            }
            for mut c in seed.colleges {
                if c.id.is_empty() {
                    c.id = new_id();
                }
                inner.colleges.push(c);
            }
            for mut m in seed.majors {
                if m.id.is_empty() {
                    m.id = new_id();
                }
                inner.majors.push(m);
            }
            info!(
                "Seeded catalog: {} universities, {} colleges, {} majors",
                inner.universities.len(),
                inner.colleges.len(),
                inner.majors.len()
            );
        }
        Ok(store)
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn require(field: &str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn find_universities_by_name(
        &self,
        pattern: &NamePattern,
    ) -> Result<Vec<University>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .universities
            .iter()
            .filter(|u| pattern.is_match(&u.name))
            .cloned()
            .collect())
    }

    async fn find_colleges_by_name(
        &self,
        pattern: &NamePattern,
    ) -> Result<Vec<College>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .colleges
            .iter()
            .filter(|c| pattern.is_match(&c.name))
            .cloned()
            .collect())
    }

    async fn find_majors_by_name(&self, pattern: &NamePattern) -> Result<Vec<Major>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .majors
            .iter()
            .filter(|m| pattern.is_match(&m.name))
            .cloned()
            .collect())
    }

    async fn find_university_by_key(&self, key: &str) -> Result<Option<University>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.universities.iter().find(|u| u.key == key).cloned())
    }

    async fn find_college_by_key_and_university(
        &self,
        university_key: &str,
        college_key: &str,
    ) -> Result<Option<College>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .colleges
            .iter()
            .find(|c| c.key == college_key && c.university_key == university_key)
            .cloned())
    }

    async fn list_universities(&self) -> Result<Vec<University>, StoreError> {
        Ok(self.inner.read().await.universities.clone())
    }

    async fn create_university(&self, mut university: University) -> Result<University, StoreError> {
        require("key", &university.key)?;
        require("name", &university.name)?;
        let mut inner = self.inner.write().await;
        if inner.universities.iter().any(|u| u.key == university.key) {
            return Err(StoreError::DuplicateKey {
                entity: "university",
                key: university.key,
            });
        }
        university.id = new_id();
        inner.universities.push(university.clone());
        Ok(university)
    }

    async fn update_university(
        &self,
        id: &str,
        mut university: University,
    ) -> Result<University, StoreError> {
        require("key", &university.key)?;
        require("name", &university.name)?;
        let mut inner = self.inner.write().await;
        let slot = inner
            .universities
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::NotFound("University"))?;
        university.id = id.to_string();
        *slot = university.clone();
        Ok(university)
    }

    async fn delete_university(&self, id: &str) -> Result<University, StoreError> {
        let mut inner = self.inner.write().await;
        let pos = inner
            .universities
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound("University"))?;
        Ok(inner.universities.remove(pos))
    }

    async fn list_colleges(&self, university_key: &str) -> Result<Vec<College>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .colleges
            .iter()
            .filter(|c| c.university_key == university_key)
            .cloned()
            .collect())
    }

    async fn create_college(&self, mut college: College) -> Result<College, StoreError> {
        require("key", &college.key)?;
        require("name", &college.name)?;
        require("universityKey", &college.university_key)?;
        let mut inner = self.inner.write().await;
        if inner
            .colleges
            .iter()
            .any(|c| c.key == college.key && c.university_key == college.university_key)
        {
            return Err(StoreError::DuplicateKey {
                entity: "college",
                key: college.key,
            });
        }
        college.id = new_id();
        inner.colleges.push(college.clone());
        Ok(college)
    }

    async fn update_college(&self, id: &str, mut college: College) -> Result<College, StoreError> {
        require("key", &college.key)?;
        require("name", &college.name)?;
        let mut inner = self.inner.write().await;
        let slot = inner
            .colleges
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound("College"))?;
        college.id = id.to_string();
        *slot = college.clone();
        Ok(college)
    }

    async fn delete_college(&self, id: &str) -> Result<College, StoreError> {
        let mut inner = self.inner.write().await;
        let pos = inner
            .colleges
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound("College"))?;
        Ok(inner.colleges.remove(pos))
    }

    async fn list_majors(
        &self,
        university_key: &str,
        college_key: &str,
    ) -> Result<Vec<Major>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .majors
            .iter()
            .filter(|m| m.university_key == university_key && m.college_key == college_key)
            .cloned()
            .collect())
    }

    async fn get_major(
        &self,
        university_key: &str,
        college_key: &str,
        id: &str,
    ) -> Result<Option<Major>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .majors
            .iter()
            .find(|m| {
                m.id == id && m.university_key == university_key && m.college_key == college_key
            })
            .cloned())
    }

    async fn create_major(&self, mut major: Major) -> Result<Major, StoreError> {
        require("name", &major.name)?;
        require("universityKey", &major.university_key)?;
        require("collegeKey", &major.college_key)?;
        let mut inner = self.inner.write().await;
        major.id = new_id();
        inner.majors.push(major.clone());
        Ok(major)
    }

    async fn update_major(&self, id: &str, mut major: Major) -> Result<Major, StoreError> {
        require("name", &major.name)?;
        let mut inner = self.inner.write().await;
        let slot = inner
            .majors
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound("Major"))?;
        major.id = id.to_string();
        *slot = major.clone();
        Ok(major)
    }

    async fn delete_major(&self, id: &str) -> Result<Major, StoreError> {
        let mut inner = self.inner.write().await;
        let pos = inner
            .majors
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::NotFound("Major"))?;
        Ok(inner.majors.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchMode;
    use crate::models::UniversityType;

    fn university(key: &str, name: &str) -> University {
        University {
            id: String::new(),
            key: key.to_string(),
            name: name.to_string(),
            color: "#123456".to_string(),
            university_type: UniversityType::Public,
        }
    }

    fn college(key: &str, name: &str, university_key: &str) -> College {
        College {
            id: String::new(),
            key: key.to_string(),
            name: name.to_string(),
            university_key: university_key.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_lists() {
        let store = MemoryStore::new();
        let created = store
            .create_university(university("iu", "Islamic University"))
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(store.list_universities().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_university_key_rejected() {
        let store = MemoryStore::new();
        store
            .create_university(university("iu", "First"))
            .await
            .unwrap();
        let err = store
            .create_university(university("iu", "Second"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey { .. }));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update_university("missing", university("iu", "X"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound("University")));
    }

    #[tokio::test]
    async fn test_find_by_name_is_case_insensitive() {
        let store = MemoryStore::new();
        store
            .create_university(university("tech", "Technical University"))
            .await
            .unwrap();
        let pattern = NamePattern::compile("TECHNICAL", MatchMode::Raw).unwrap();
        let hits = store.find_universities_by_name(&pattern).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "tech");
    }

    #[tokio::test]
    async fn test_college_pair_lookup_requires_both_keys() {
        let store = MemoryStore::new();
        store
            .create_college(college("eng", "Engineering", "iu"))
            .await
            .unwrap();
        assert!(store
            .find_college_by_key_and_university("iu", "eng")
            .await
            .unwrap()
            .is_some());
        assert!(store
            .find_college_by_key_and_university("other", "eng")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_colleges_filters_by_university() {
        let store = MemoryStore::new();
        store
            .create_college(college("eng", "Engineering", "iu"))
            .await
            .unwrap();
        store
            .create_college(college("med", "Medicine", "aqsa"))
            .await
            .unwrap();
        let colleges = store.list_colleges("iu").await.unwrap();
        assert_eq!(colleges.len(), 1);
        assert_eq!(colleges[0].key, "eng");
    }

    #[tokio::test]
    async fn test_delete_returns_the_document() {
        let store = MemoryStore::new();
        let created = store
            .create_university(university("iu", "Islamic University"))
            .await
            .unwrap();
        let deleted = store.delete_university(&created.id).await.unwrap();
        assert_eq!(deleted.key, "iu");
        assert!(store.list_universities().await.unwrap().is_empty());
    }
}
