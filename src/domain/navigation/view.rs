//! View identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The closed set of views reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Dashboard,
    StartFocus,
    Statistics,
    TipsTricks,
    Notes,
}

impl View {
    /// All views in sidebar order
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::StartFocus,
        View::Statistics,
        View::TipsTricks,
        View::Notes,
    ];

    /// Stable identifier, e.g. `start-focus`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::StartFocus => "start-focus",
            Self::Statistics => "statistics",
            Self::TipsTricks => "tips-tricks",
            Self::Notes => "notes",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::StartFocus => "Start Focus",
            Self::Statistics => "Statistics",
            Self::TipsTricks => "Tips & Tricks",
            Self::Notes => "Notes",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = View::ALL.iter().map(View::as_str).collect();
                DomainError::validation(format!(
                    "Unknown view '{}', expected one of: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}
