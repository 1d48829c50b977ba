//! Storage infrastructure - persistence medium implementations

mod factory;
mod file;
mod in_memory;

pub use factory::StorageFactory;
pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
