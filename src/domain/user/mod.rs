//! User domain
//!
//! This module provides domain types for account registration, including the
//! user entity, input validation, email comparison policy and registration
//! errors.

mod email;
mod entity;
mod error;
mod validation;

pub use email::EmailPolicy;
pub use entity::{User, UserId};
pub use error::RegistrationError;
pub use validation::{
    validate_email, validate_name, validate_password, UserValidationError, MIN_PASSWORD_LENGTH,
};
