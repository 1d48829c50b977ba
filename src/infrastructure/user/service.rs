//! User service for registration and lookup

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{
    validate_email, validate_name, validate_password, RegistrationError, User,
};
use crate::domain::DomainError;

use super::store::UserStore;

/// Request for registering a new account, as submitted by the form
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Validates registration input and delegates persistence to the [`UserStore`]
#[derive(Debug, Clone)]
pub struct UserService {
    store: Arc<UserStore>,
}

impl UserService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    /// Register a new user.
    ///
    /// Name and email are trimmed; the password is kept exactly as entered.
    pub fn register(&self, request: RegisterUserRequest) -> Result<User, RegistrationError> {
        let name = request.name.trim();
        let email = request.email.trim();

        validate_name(name)?;
        validate_email(email)?;
        validate_password(&request.password)?;

        info!("Registering user: email={}", email);
        self.store.register(name, email, &request.password)
    }

    /// Look up a user by email
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        debug!("Looking up user: email={}", email.trim());
        self.store.find_by_email(email.trim())
    }

    /// List users in registration order
    pub fn list(&self) -> Vec<User> {
        self.store.users()
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}
