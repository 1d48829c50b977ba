//! User infrastructure module
//!
//! This module provides the persistent user store with race-safe
//! registration and the user service that validates registration input.

mod service;
mod store;

pub use service::{RegisterUserRequest, UserService};
pub use store::UserStore;
