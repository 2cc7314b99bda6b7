use super::*;

// =============================================================
// AppInfo
// =============================================================

#[test]
fn app_info_default_title_is_administration() {
    assert_eq!(AppInfo::default().title, "Administration");
}

#[test]
fn app_info_carries_unknown_metadata_fields() {
    let info: AppInfo =
        serde_json::from_str(r#"{"title":"Postbox","contact":"admin@example.com"}"#).unwrap();
    assert_eq!(info.title, "Postbox");
    assert_eq!(
        info.extra.get("contact").and_then(|v| v.as_str()),
        Some("admin@example.com")
    );
}

// =============================================================
// Submission + envelope decoding
// =============================================================

#[test]
fn submission_keeps_opaque_fields() {
    let sub: Submission =
        serde_json::from_str(r#"{"id":7,"from":"alice","archived":true}"#).unwrap();
    assert_eq!(sub.id, 7);
    assert_eq!(sub.fields.get("from").and_then(|v| v.as_str()), Some("alice"));
    assert_eq!(sub.fields.get("archived").and_then(serde_json::Value::as_bool), Some(true));
}

#[test]
fn submission_without_id_is_rejected() {
    assert!(serde_json::from_str::<Submission>(r#"{"from":"alice"}"#).is_err());
}

#[test]
fn list_envelope_decodes_submissions_in_order() {
    let body = r#"{"result":{"submissions":[{"id":1},{"id":2}]}}"#;
    let envelope: Envelope<SubmissionList> = serde_json::from_str(body).unwrap();
    let ids: Vec<u64> = envelope.result.submissions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn info_envelope_decodes_app_info() {
    let body = r#"{"result":{"title":"Inbox Admin"}}"#;
    let envelope: Envelope<AppInfo> = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.result.title, "Inbox Admin");
}
