use super::*;

// =============================================================
// selector_of
// =============================================================

#[test]
fn selector_of_list_and_detail_paths() {
    assert_eq!(selector_of("/inbox").as_deref(), Some("inbox"));
    assert_eq!(selector_of("/inbox/42").as_deref(), Some("inbox"));
}

#[test]
fn selector_of_login_and_root_is_none() {
    assert_eq!(selector_of(LOGIN_PATH), None);
    assert_eq!(selector_of("/"), None);
    assert_eq!(selector_of(""), None);
}

// =============================================================
// route_action decision table
// =============================================================

#[test]
fn authenticated_selector_change_refetches() {
    let action = route_action(true, Some("inbox"), Some("spam"), "/spam");
    assert_eq!(action, RouteAction::Refetch("spam".to_owned()));
}

#[test]
fn opening_detail_overlay_does_not_refetch() {
    // /inbox -> /inbox/42: same selector, sid added.
    let action = route_action(true, Some("inbox"), Some("inbox"), "/inbox/42");
    assert_eq!(action, RouteAction::None);
}

#[test]
fn closing_detail_overlay_does_not_refetch() {
    let action = route_action(true, Some("inbox"), Some("inbox"), "/inbox");
    assert_eq!(action, RouteAction::None);
}

#[test]
fn authenticated_navigation_to_login_does_nothing() {
    let action = route_action(true, Some("inbox"), None, LOGIN_PATH);
    assert_eq!(action, RouteAction::None);
}

#[test]
fn unauthenticated_non_login_path_redirects() {
    let action = route_action(false, None, Some("inbox"), "/inbox");
    assert_eq!(action, RouteAction::RedirectLogin);
    let action = route_action(false, Some("inbox"), Some("spam"), "/spam");
    assert_eq!(action, RouteAction::RedirectLogin);
}

#[test]
fn unauthenticated_login_path_is_left_alone() {
    let action = route_action(false, None, None, LOGIN_PATH);
    assert_eq!(action, RouteAction::None);
}

#[test]
fn replace_nav_replaces_history_entry() {
    assert!(replace_nav().replace);
}
