//! Shared focus-session flag

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::navigation::SessionState;

/// Cloneable handle to the "focus session active" flag.
///
/// The focus-session tracker owns a clone and toggles it; the navigation
/// guard holds another clone and only reads it.
#[derive(Debug, Clone, Default)]
pub struct SessionFlag(Arc<AtomicBool>);

impl SessionFlag {
    pub fn start(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SessionState for SessionFlag {
    fn is_session_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
