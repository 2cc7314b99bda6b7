use super::*;

#[test]
fn token_key_is_stable() {
    assert_eq!(TOKEN_KEY, "authToken");
}

// =============================================================
// resolve_token precedence
// =============================================================

#[test]
fn session_token_wins_over_durable() {
    let token = resolve_token(Some("session".to_owned()), Some("durable".to_owned()));
    assert_eq!(token.as_deref(), Some("session"));
}

#[test]
fn durable_token_used_when_session_empty() {
    assert_eq!(
        resolve_token(None, Some("durable".to_owned())).as_deref(),
        Some("durable")
    );
    assert_eq!(
        resolve_token(Some(String::new()), Some("durable".to_owned())).as_deref(),
        Some("durable")
    );
}

#[test]
fn absent_everywhere_is_none() {
    assert_eq!(resolve_token(None, None), None);
    assert_eq!(resolve_token(Some(String::new()), Some(String::new())), None);
}
