//! Storage domain - persistence medium abstraction

mod repository;

pub use repository::KeyValueStore;

#[cfg(test)]
pub use repository::mock;
