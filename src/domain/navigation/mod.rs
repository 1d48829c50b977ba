//! Navigation domain
//!
//! View identifiers, the session-guarded navigation state machine and the
//! sidebar item model.

mod guard;
mod sidebar;
mod view;

pub use guard::{
    decide, GuardState, NavigationDecision, NavigationGuard, NavigationOutcome, Notifier,
    SessionState, ViewRenderer, NAVIGATION_LOCKED_ADVISORY,
};
pub use sidebar::{sidebar_items, NavItem};
pub use view::View;

#[cfg(test)]
pub use guard::{MockNotifier, MockSessionState, MockViewRenderer};
