//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;

/// In-memory repository backed by a DashMap.
///
/// The sharded locking gives the same at-most-one-winner insert semantics as
/// the database constraint, which makes this a faithful stand-in for
/// integration tests and local runs without PostgreSQL.
#[derive(Debug, Default)]
pub struct MemoryMappingRepository {
    storage: DashMap<String, UrlMapping>,
}

impl MemoryMappingRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings. Test helper.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true when no mappings are stored.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.storage.get(key).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<InsertOutcome, AppError> {
        match self.storage.entry(new_mapping.key.clone()) {
            Entry::Occupied(_) => Ok(InsertOutcome::AlreadyExists),
            Entry::Vacant(vacant) => {
                let mapping = UrlMapping::new(
                    new_mapping.key,
                    new_mapping.original_url,
                    Utc::now(),
                );
                vacant.insert(mapping.clone());
                Ok(InsertOutcome::Inserted(mapping))
            }
        }
    }

    async fn ensure_schema(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_mapping(key: &str, url: &str) -> NewUrlMapping {
        NewUrlMapping {
            key: key.to_string(),
            original_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_and_find() {
        let repo = MemoryMappingRepository::new();

        let outcome = repo
            .insert(new_mapping("abc123", "https://example.com"))
            .await
            .unwrap();
        assert!(matches!(outcome, InsertOutcome::Inserted(_)));

        let found = repo.find_by_key("abc123").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn find_nonexistent() {
        let repo = MemoryMappingRepository::new();

        assert!(repo.find_by_key("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn second_insert_observes_existing_row() {
        let repo = MemoryMappingRepository::new();

        repo.insert(new_mapping("abc123", "https://example.com"))
            .await
            .unwrap();

        let outcome = repo
            .insert(new_mapping("abc123", "https://other.com"))
            .await
            .unwrap();
        assert!(matches!(outcome, InsertOutcome::AlreadyExists));

        // First mapping is untouched.
        let found = repo.find_by_key("abc123").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_inserts_single_winner() {
        use std::sync::Arc;

        let repo = Arc::new(MemoryMappingRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.insert(new_mapping("same-key", &format!("https://example{i}.com")))
                    .await
                    .unwrap()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if matches!(handle.await.unwrap(), InsertOutcome::Inserted(_)) {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.len(), 1);
    }
}
