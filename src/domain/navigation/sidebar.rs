//! Sidebar item model

use serde::Serialize;

use super::view::View;

/// One sidebar entry as it should be presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub view: View,
    pub label: &'static str,
    /// Highlighted as the current view
    pub active: bool,
    /// Greyed out; clicking it produces the focus advisory
    pub disabled: bool,
}

/// Build the sidebar entries for the given current view and lock flag.
///
/// While locked every entry is disabled and none is highlighted.
pub fn sidebar_items(current: View, locked: bool) -> Vec<NavItem> {
    View::ALL
        .into_iter()
        .map(|view| NavItem {
            view,
            label: view.label(),
            active: !locked && view == current,
            disabled: locked,
        })
        .collect()
}
