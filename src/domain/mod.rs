//! Domain layer - Core business logic and entities

pub mod error;
pub mod navigation;
pub mod storage;
pub mod user;

pub use error::DomainError;
pub use navigation::{NavigationGuard, NavigationOutcome, View};
pub use storage::KeyValueStore;
pub use user::{EmailPolicy, RegistrationError, User, UserId};
