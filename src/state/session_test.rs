use super::*;

// =============================================================
// AuthContext
// =============================================================

#[test]
fn auth_context_default_has_no_header() {
    assert_eq!(AuthContext::default().header(), None);
}

#[test]
fn auth_context_from_token_formats_basic_header() {
    let auth = AuthContext::from_token("YWRtaW46aHVudGVyMg==");
    assert_eq!(auth.header(), Some("Basic YWRtaW46aHVudGVyMg=="));
}

#[test]
fn auth_context_clear_removes_header() {
    let mut auth = AuthContext::from_token("abc");
    auth.clear();
    assert_eq!(auth.header(), None);
}

// =============================================================
// SessionState phase machine
// =============================================================

#[test]
fn session_default_is_unauthenticated() {
    let state = SessionState::default();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(!state.is_authenticated());
    assert_eq!(state.auth.header(), None);
}

#[test]
fn begin_probe_enters_authenticating_with_candidate_header() {
    let mut state = SessionState::default();
    state.begin_probe("abc");
    assert_eq!(state.phase, SessionPhase::Authenticating);
    assert!(!state.is_authenticated());
    assert_eq!(state.auth.header(), Some("Basic abc"));
}

#[test]
fn establish_enters_authenticated() {
    let mut state = SessionState::default();
    state.begin_probe("abc");
    state.establish("abc");
    assert!(state.is_authenticated());
    assert_eq!(state.auth.header(), Some("Basic abc"));
}

#[test]
fn reject_returns_to_unauthenticated_and_drops_credential() {
    let mut state = SessionState::default();
    state.begin_probe("abc");
    state.reject();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert_eq!(state.auth.header(), None);
}

#[test]
fn logout_is_idempotent() {
    let mut state = SessionState::default();
    state.establish("abc");
    state.logout();
    state.logout();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert_eq!(state.auth.header(), None);
}
