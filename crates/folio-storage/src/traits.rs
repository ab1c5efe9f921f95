//! Storage traits for the metadata store.
//!
//! This module defines the contract that every metadata backend implements.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StorageError;

/// Per-object key/value metadata store.
///
/// A key may hold several values; reads return them in insertion order.
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Example
///
/// ```ignore
/// use folio_storage::{MetaStore, StorageError};
///
/// async fn color(store: &dyn MetaStore, post_id: u64) -> Result<Option<Value>, StorageError> {
///     store.get_single_meta("post", post_id, "color").await
/// }
/// ```
#[async_trait]
pub trait MetaStore: Send + Sync {
    /// Returns every value stored under `key` for the object.
    ///
    /// Returns an empty vector when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues, not for missing keys.
    async fn get_meta(
        &self,
        object_type: &str,
        object_id: u64,
        key: &str,
    ) -> Result<Vec<Value>, StorageError>;

    /// Appends a value under `key` for the object.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidKey` if the key is empty.
    async fn add_meta(
        &self,
        object_type: &str,
        object_id: u64,
        key: &str,
        value: Value,
    ) -> Result<(), StorageError>;

    /// Replaces every value under `key` with a single value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidKey` if the key is empty.
    async fn update_meta(
        &self,
        object_type: &str,
        object_id: u64,
        key: &str,
        value: Value,
    ) -> Result<(), StorageError>;

    /// Removes every value under `key`. Returns `true` if anything was removed.
    async fn delete_meta(
        &self,
        object_type: &str,
        object_id: u64,
        key: &str,
    ) -> Result<bool, StorageError>;

    /// Returns the first value stored under `key`, if any.
    async fn get_single_meta(
        &self,
        object_type: &str,
        object_id: u64,
        key: &str,
    ) -> Result<Option<Value>, StorageError> {
        Ok(self
            .get_meta(object_type, object_id, key)
            .await?
            .into_iter()
            .next())
    }
}

/// Shared, dynamically dispatched metadata store.
pub type DynMetaStore = Arc<dyn MetaStore>;
