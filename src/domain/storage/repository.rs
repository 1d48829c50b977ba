//! Key-value persistence medium trait

use std::fmt::Debug;

use crate::domain::DomainError;

/// Synchronous key-value persistence medium.
///
/// Values are opaque text blobs (the full serialized collection for a key).
/// A `set` must be complete and visible to subsequent `get` calls by the time
/// it returns.
pub trait KeyValueStore: Send + Sync + Debug {
    /// Returns the last value written under `key`, or `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Replaces the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Removes `key`, returns true if a value was present
    fn remove(&self, key: &str) -> Result<bool, DomainError>;

    /// Checks whether a value is stored under `key`
    fn contains(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.get(key)?.is_some())
    }
}
