//! Email comparison policy

use serde::{Deserialize, Serialize};

/// How two email addresses are compared when enforcing uniqueness and on lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EmailPolicy {
    /// Byte-for-byte comparison
    #[default]
    Exact,
    /// Comparison after trimming and lowercasing both sides
    CaseInsensitive,
}

impl EmailPolicy {
    /// Check whether two addresses identify the same account
    pub fn matches(&self, stored: &str, candidate: &str) -> bool {
        match self {
            Self::Exact => stored == candidate,
            Self::CaseInsensitive => {
                stored.trim().to_lowercase() == candidate.trim().to_lowercase()
            }
        }
    }
}
