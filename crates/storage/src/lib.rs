//! # formsmith-storage
//!
//! String key-value persistence used to keep templates and submissions
//! across runs.
//!
//! - [`MemoryStorage`]: process-local map, for tests and embedding.
//! - [`FileStorage`]: one `<key>.json` file per key in a directory.
//!
//! Both implement [`KeyValueStore`], which is all the template store
//! depends on.

mod error;
mod file;
mod memory;

use std::sync::Arc;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A synchronous string key-value store.
///
/// Methods take `&self`; implementations provide their own interior
/// mutability so one store can be shared behind an `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
