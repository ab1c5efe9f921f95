//! In-memory metadata store.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::StorageError;
use crate::traits::MetaStore;
use crate::types::MetaKey;

/// In-memory metadata backend backed by a concurrent map.
///
/// Intended for tests and embedding; nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryMetaStore {
    data: DashMap<MetaKey, Vec<Value>>,
}

impl InMemoryMetaStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys holding at least one value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn checked_key(object_type: &str, object_id: u64, key: &str) -> Result<MetaKey, StorageError> {
    if key.is_empty() {
        return Err(StorageError::invalid_key("meta key must not be empty"));
    }
    Ok(MetaKey::new(object_type, object_id, key))
}

#[async_trait]
impl MetaStore for InMemoryMetaStore {
    async fn get_meta(
        &self,
        object_type: &str,
        object_id: u64,
        key: &str,
    ) -> Result<Vec<Value>, StorageError> {
        let meta_key = MetaKey::new(object_type, object_id, key);
        let values = self
            .data
            .get(&meta_key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        trace!(key = %meta_key, count = values.len(), "Read meta values");
        Ok(values)
    }

    async fn add_meta(
        &self,
        object_type: &str,
        object_id: u64,
        key: &str,
        value: Value,
    ) -> Result<(), StorageError> {
        let meta_key = checked_key(object_type, object_id, key)?;
        trace!(key = %meta_key, "Adding meta value");
        self.data.entry(meta_key).or_default().push(value);
        Ok(())
    }

    async fn update_meta(
        &self,
        object_type: &str,
        object_id: u64,
        key: &str,
        value: Value,
    ) -> Result<(), StorageError> {
        let meta_key = checked_key(object_type, object_id, key)?;
        let previous = self.data.insert(meta_key.clone(), vec![value]);
        trace!(
            key = %meta_key,
            replaced = previous.map_or(0, |values| values.len()),
            "Updated meta value"
        );
        Ok(())
    }

    async fn delete_meta(
        &self,
        object_type: &str,
        object_id: u64,
        key: &str,
    ) -> Result<bool, StorageError> {
        let meta_key = MetaKey::new(object_type, object_id, key);
        let deleted = self.data.remove(&meta_key).is_some();
        debug!(key = %meta_key, deleted, "Deleted meta key");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_key_reads_empty() {
        let store = InMemoryMetaStore::new();
        let values = store.get_meta("post", 1, "color").await.unwrap();
        assert!(values.is_empty());
        assert!(store.get_single_meta("post", 1, "color").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_keeps_insertion_order() {
        let store = InMemoryMetaStore::new();
        store.add_meta("post", 1, "tag", json!("red")).await.unwrap();
        store.add_meta("post", 1, "tag", json!("blue")).await.unwrap();

        let values = store.get_meta("post", 1, "tag").await.unwrap();
        assert_eq!(values, vec![json!("red"), json!("blue")]);
        assert_eq!(
            store.get_single_meta("post", 1, "tag").await.unwrap(),
            Some(json!("red"))
        );
    }

    #[tokio::test]
    async fn test_update_replaces_all_values() {
        let store = InMemoryMetaStore::new();
        store.add_meta("post", 1, "tag", json!("red")).await.unwrap();
        store.add_meta("post", 1, "tag", json!("blue")).await.unwrap();
        store.update_meta("post", 1, "tag", json!("green")).await.unwrap();

        let values = store.get_meta("post", 1, "tag").await.unwrap();
        assert_eq!(values, vec![json!("green")]);
    }

    #[tokio::test]
    async fn test_keys_are_scoped_by_object() {
        let store = InMemoryMetaStore::new();
        store.add_meta("post", 1, "color", json!("red")).await.unwrap();

        assert!(store.get_meta("post", 2, "color").await.unwrap().is_empty());
        assert!(store.get_meta("user", 1, "color").await.unwrap().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryMetaStore::new();
        store.add_meta("post", 1, "color", json!("red")).await.unwrap();

        assert!(store.delete_meta("post", 1, "color").await.unwrap());
        assert!(!store.delete_meta("post", 1, "color").await.unwrap());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_empty_key_rejected() {
        let store = InMemoryMetaStore::new();
        let err = store.add_meta("post", 1, "", json!(1)).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey { .. }));
    }
}
