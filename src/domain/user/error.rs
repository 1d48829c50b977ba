//! Registration errors

use thiserror::Error;

use super::validation::UserValidationError;
use crate::domain::DomainError;

const DUPLICATE_EMAIL_MESSAGE: &str = "An account with this email already exists.";
const PERSISTENCE_FAILURE_MESSAGE: &str =
    "Something went wrong while saving your account. Please try again.";

/// Errors returned by the registration write path
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Input rejected before reaching the store
    #[error("{0}")]
    Invalid(#[from] UserValidationError),

    /// An account with the same email is already stored; nothing was written
    #[error("An account with this email already exists: {email}")]
    DuplicateEmail { email: String },

    /// The persistence medium failed; the operation is not retried
    #[error("Failed to persist user collection: {0}")]
    Persistence(#[from] DomainError),
}

impl RegistrationError {
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Whether the user can fix the problem by changing the form input
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Persistence(_))
    }

    /// Message suitable for inline display next to the registration form
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(e) => e.to_string(),
            Self::DuplicateEmail { .. } => DUPLICATE_EMAIL_MESSAGE.to_string(),
            Self::Persistence(_) => PERSISTENCE_FAILURE_MESSAGE.to_string(),
        }
    }
}
