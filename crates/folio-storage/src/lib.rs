//! # folio-storage
//!
//! Metadata storage abstraction for the Folio GraphQL layer.
//!
//! Content objects (posts, users, terms, ...) carry free-form key/value
//! metadata. The GraphQL layer reads it lazily, at field-resolution time,
//! through the [`MetaStore`] trait defined here.
//!
//! ## Example
//!
//! ```ignore
//! use folio_storage::{InMemoryMetaStore, MetaStore};
//! use serde_json::json;
//!
//! let store = InMemoryMetaStore::new();
//! store.add_meta("post", 42, "color", json!("teal")).await?;
//! let values = store.get_meta("post", 42, "color").await?;
//! ```

mod error;
mod memory;
mod traits;
mod types;

pub use error::{ErrorCategory, StorageError};
pub use memory::InMemoryMetaStore;
pub use traits::{DynMetaStore, MetaStore};
pub use types::MetaKey;
