//! Session-guarded navigation state machine

use tracing::{debug, info, warn};

use super::view::View;

/// Advisory shown when navigation is attempted during a focus session
pub const NAVIGATION_LOCKED_ADVISORY: &str = "stay focused; other tabs cannot be opened";

/// Source of the "focus session active" flag
#[cfg_attr(test, mockall::automock)]
pub trait SessionState {
    fn is_session_active(&self) -> bool;
}

/// Receives advisory messages for display
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Receives the committed view for rendering
#[cfg_attr(test, mockall::automock)]
pub trait ViewRenderer {
    fn render(&self, view: View);
}

/// Guard state derived from the session flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// No focus session; navigation is honored
    Idle,
    /// Focus session running; navigation is rejected
    Locked,
}

impl GuardState {
    pub fn from_session_active(active: bool) -> Self {
        if active { Self::Locked } else { Self::Idle }
    }
}

/// Result of evaluating a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Commit(View),
    Reject,
}

/// Decide a navigation request without touching any collaborator.
///
/// Re-selecting `current` while unlocked is still a commit.
pub fn decide(target: View, current: View, locked: bool) -> NavigationDecision {
    if locked {
        return NavigationDecision::Reject;
    }

    if target == current {
        debug!("Re-selecting active view: {}", current);
    }

    NavigationDecision::Commit(target)
}

/// Observable outcome of [`NavigationGuard::request`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Committed(View),
    Rejected,
}

impl NavigationOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// Holds the active view and mediates navigation requests.
///
/// Each request produces exactly one effect: a render call on commit or an
/// advisory notification on rejection.
#[derive(Debug)]
pub struct NavigationGuard<S, N, R>
where
    S: SessionState,
    N: Notifier,
    R: ViewRenderer,
{
    session: S,
    notifier: N,
    renderer: R,
    active_view: View,
}

impl<S, N, R> NavigationGuard<S, N, R>
where
    S: SessionState,
    N: Notifier,
    R: ViewRenderer,
{
    /// Create a guard starting at `initial` without rendering it
    pub fn new(initial: View, session: S, notifier: N, renderer: R) -> Self {
        Self {
            session,
            notifier,
            renderer,
            active_view: initial,
        }
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// Current state, read from the session collaborator
    pub fn state(&self) -> GuardState {
        GuardState::from_session_active(self.session.is_session_active())
    }

    pub fn is_locked(&self) -> bool {
        self.state() == GuardState::Locked
    }

    /// Handle a navigation request for `target`
    pub fn request(&mut self, target: View) -> NavigationOutcome {
        let locked = self.is_locked();

        match decide(target, self.active_view, locked) {
            NavigationDecision::Commit(view) => {
                info!("Navigating: {} -> {}", self.active_view, view);
                self.active_view = view;
                self.renderer.render(view);
                NavigationOutcome::Committed(view)
            }
            NavigationDecision::Reject => {
                warn!(
                    "Navigation to {} rejected during focus session (active: {})",
                    target, self.active_view
                );
                self.notifier.notify(NAVIGATION_LOCKED_ADVISORY);
                NavigationOutcome::Rejected
            }
        }
    }
}
