//! Local UI chrome state for the dashboard frame.
//!
//! DESIGN
//! ======
//! The frame owns exactly one piece of layout state: whether the side
//! navigation is open. The header toggles it; the close button, the mobile
//! overlay, the Escape key and every navigation entry close it. Mutators
//! report whether anything changed so callers can skip signal notification
//! (and the scroll-lock side effect) on no-op transitions.
//!
//! Escape is routed at the window level because focus usually stays on the
//! button that opened the dialog or sidebar. The logout dialog is on top, so
//! it takes the key first.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Open/closed flag for the collapsible side navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the flag. Always a change.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the sidebar. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    /// Whether the document body should have scrolling suppressed.
    #[must_use]
    pub fn locks_body_scroll(self) -> bool {
        self.open
    }
}

/// What an Escape press dismisses in the dashboard frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeTarget {
    LogoutDialog,
    Sidebar,
}

/// Route a window key press. `None` means the key changes nothing: not
/// Escape, or nothing is open.
#[must_use]
pub fn escape_target(key: &str, dialog_open: bool, sidebar: SidebarState) -> Option<EscapeTarget> {
    if key != "Escape" {
        return None;
    }
    if dialog_open {
        Some(EscapeTarget::LogoutDialog)
    } else if sidebar.is_open() {
        Some(EscapeTarget::Sidebar)
    } else {
        None
    }
}
