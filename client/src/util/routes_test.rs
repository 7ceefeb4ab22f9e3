use super::*;

#[test]
fn resolve_top_level_paths() {
    assert_eq!(AppRoute::resolve("/"), Some(AppRoute::Root));
    assert_eq!(AppRoute::resolve("/login"), Some(AppRoute::Login));
    assert_eq!(AppRoute::resolve("/signup"), Some(AppRoute::Signup));
    assert_eq!(AppRoute::resolve("/dashboard"), Some(AppRoute::Overview));
}

#[test]
fn resolve_every_dashboard_child() {
    for (segment, route) in DASHBOARD_CHILDREN {
        assert_eq!(AppRoute::resolve(&format!("/dashboard/{segment}")), Some(*route));
    }
}

#[test]
fn resolve_unmapped_path_is_not_found() {
    assert_eq!(AppRoute::resolve("/does-not-exist"), None);
    assert_eq!(AppRoute::resolve("/dashboard/unknown"), None);
    assert_eq!(AppRoute::resolve("/dashboard/auditing/extra"), None);
    assert_eq!(AppRoute::resolve("/dashboardx"), None);
}

#[test]
fn resolve_ignores_trailing_slash_query_and_fragment() {
    assert_eq!(AppRoute::resolve("/dashboard/"), Some(AppRoute::Overview));
    assert_eq!(AppRoute::resolve("/dashboard/reports?range=30d"), Some(AppRoute::Reports));
    assert_eq!(AppRoute::resolve("/login#top"), Some(AppRoute::Login));
}

#[test]
fn path_and_resolve_agree_for_every_routable_screen() {
    let routes = [
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::Overview,
        AppRoute::Features,
        AppRoute::Auditing,
        AppRoute::Verification,
        AppRoute::Realtime,
        AppRoute::Regulatory,
        AppRoute::Reports,
        AppRoute::Integrations,
        AppRoute::Settings,
        AppRoute::Support,
    ];
    for route in routes {
        assert_eq!(AppRoute::resolve(route.path()), Some(route), "{route:?}");
    }
}

#[test]
fn dashboard_membership() {
    assert!(AppRoute::Overview.in_dashboard());
    assert!(AppRoute::Support.in_dashboard());
    assert!(!AppRoute::Login.in_dashboard());
    assert!(!AppRoute::Root.in_dashboard());
}

#[test]
fn nav_has_nine_entries_all_inside_dashboard() {
    assert_eq!(NAV_ENTRIES.len(), 9);
    assert!(NAV_ENTRIES.iter().all(|entry| entry.route.in_dashboard()));
}

#[test]
fn overview_entry_is_only_active_on_exact_path() {
    let overview = NAV_ENTRIES[0];
    assert!(overview.is_active("/dashboard"));
    assert!(!overview.is_active("/dashboard/auditing"));
}

#[test]
fn child_entry_active_on_its_path() {
    let reports = NAV_ENTRIES.iter().find(|e| e.route == AppRoute::Reports).unwrap();
    assert!(reports.is_active("/dashboard/reports"));
    assert!(!reports.is_active("/dashboard/regulatory"));
}

#[test]
fn unmapped_location_activates_no_entry() {
    assert!(NAV_ENTRIES.iter().all(|entry| !entry.is_active("/dashboard/unknown")));
}
