use super::*;

fn opened() -> SidebarState {
    let mut state = SidebarState::default();
    state.toggle();
    state
}

// =============================================================
// SidebarState defaults
// =============================================================

#[test]
fn sidebar_default_is_closed() {
    let state = SidebarState::default();
    assert!(!state.is_open());
    assert!(!state.locks_body_scroll());
}

// =============================================================
// toggle / close
// =============================================================

#[test]
fn toggle_flips_each_call() {
    let mut state = SidebarState::default();
    state.toggle();
    assert!(state.is_open());
    state.toggle();
    assert!(!state.is_open());
}

#[test]
fn close_twice_stays_closed() {
    let mut state = opened();
    assert!(state.close());
    assert!(!state.close());
    assert!(!state.is_open());
}

#[test]
fn close_while_closed_reports_no_change() {
    let mut state = SidebarState::default();
    assert!(!state.close());
    assert_eq!(state, SidebarState::default());
}

#[test]
fn open_sidebar_locks_body_scroll() {
    let mut state = opened();
    assert!(state.locks_body_scroll());
    state.close();
    assert!(!state.locks_body_scroll());
}

// =============================================================
// escape_target
// =============================================================

#[test]
fn escape_with_nothing_open_is_noop() {
    assert_eq!(escape_target("Escape", false, SidebarState::default()), None);
}

#[test]
fn escape_closes_open_sidebar() {
    assert_eq!(escape_target("Escape", false, opened()), Some(EscapeTarget::Sidebar));
}

#[test]
fn escape_dismisses_logout_dialog_without_focus_in_it() {
    assert_eq!(
        escape_target("Escape", true, SidebarState::default()),
        Some(EscapeTarget::LogoutDialog)
    );
}

#[test]
fn escape_dismisses_dialog_before_sidebar() {
    assert_eq!(escape_target("Escape", true, opened()), Some(EscapeTarget::LogoutDialog));
}

#[test]
fn other_keys_change_nothing() {
    assert_eq!(escape_target("Enter", true, opened()), None);
    assert_eq!(escape_target("Esc", false, opened()), None);
}
