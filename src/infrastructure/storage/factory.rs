//! Storage factory for runtime medium selection

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::domain::storage::KeyValueStore;
use crate::domain::DomainError;

use super::file::FileKeyValueStore;
use super::in_memory::InMemoryKeyValueStore;

/// Factory for creating persistence media
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a medium based on the configuration
    pub fn create(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, DomainError> {
        match config.backend {
            StorageBackend::Memory => {
                info!("Using in-memory storage");
                Ok(Self::create_in_memory())
            }
            StorageBackend::File => {
                info!("Using file storage at {}", config.path.display());
                Ok(Arc::new(FileKeyValueStore::open(&config.path)?))
            }
        }
    }

    /// Creates an in-memory medium
    pub fn create_in_memory() -> Arc<InMemoryKeyValueStore> {
        Arc::new(InMemoryKeyValueStore::new())
    }
}
