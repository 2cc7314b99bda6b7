use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn submissions_endpoint_formats_expected_path() {
    assert_eq!(submissions_endpoint("inbox"), "/api/get/selector/inbox");
}

#[test]
fn selector_action_endpoint_formats_expected_path() {
    assert_eq!(selector_action_endpoint("delete", "spam"), "/api/delete/selector/spam");
    assert_eq!(selector_action_endpoint("archive", "sent"), "/api/archive/selector/sent");
}

#[test]
fn id_action_endpoint_formats_expected_path() {
    assert_eq!(id_action_endpoint("delete", 5), "/api/delete/id/5");
    assert_eq!(id_action_endpoint("unarchive", 42), "/api/unarchive/id/42");
    assert_eq!(id_action_endpoint("respond", 7), "/api/respond/id/7");
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn auth_probe_failed_message_formats_status() {
    assert_eq!(auth_probe_failed_message(401), "auth probe failed: 401");
}

#[test]
fn list_request_failed_message_formats_status() {
    assert_eq!(list_request_failed_message(500), "list request failed: 500");
}

#[test]
fn action_failed_message_names_the_action() {
    assert_eq!(action_failed_message("archive", 403), "archive request failed: 403");
}
