//! FocusUp core
//!
//! Client-side core of the FocusUp focus tracker:
//! - A persistent user store with race-safe registration
//! - A session-guarded navigation state machine for the sidebar

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use crate::domain::DomainError;
use crate::infrastructure::storage::StorageFactory;
use crate::infrastructure::user::{UserService, UserStore};

/// Create the user service from configuration
pub fn create_user_service(config: &AppConfig) -> Result<UserService, DomainError> {
    let medium = StorageFactory::create(&config.storage)?;
    let store = UserStore::with_options(
        medium,
        config.storage.users_key.clone(),
        config.users.email_policy,
    )?;

    Ok(UserService::new(Arc::new(store)))
}
