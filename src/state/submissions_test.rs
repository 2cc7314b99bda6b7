use super::*;

fn submission(id: u64) -> Submission {
    Submission {
        id,
        fields: serde_json::Map::new(),
    }
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn begin_fetch_returns_increasing_tags_and_sets_loading() {
    let mut state = SubmissionsState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();
    assert!(second > first);
    assert!(state.loading);
}

#[test]
fn apply_fetch_replaces_list_wholesale() {
    let mut state = SubmissionsState::default();
    let seq = state.begin_fetch();
    assert!(state.apply_fetch(seq, vec![submission(9)]));

    let seq = state.begin_fetch();
    assert!(state.apply_fetch(seq, vec![submission(1), submission(2)]));

    let ids: Vec<u64> = state.items.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(!state.loading);
    assert_eq!(state.applied_seq(), seq);
}

#[test]
fn stale_completion_is_discarded() {
    let mut state = SubmissionsState::default();
    let stale = state.begin_fetch();
    let latest = state.begin_fetch();

    // Latest response lands first.
    assert!(state.apply_fetch(latest, vec![submission(2)]));
    // The earlier fetch resolves afterwards and must not win.
    assert!(!state.apply_fetch(stale, vec![submission(1)]));

    let ids: Vec<u64> = state.items.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn fail_fetch_keeps_previous_items() {
    let mut state = SubmissionsState::default();
    let seq = state.begin_fetch();
    assert!(state.apply_fetch(seq, vec![submission(1)]));

    let failed = state.begin_fetch();
    state.fail_fetch(failed);
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
}

#[test]
fn fail_fetch_of_stale_request_keeps_loading() {
    let mut state = SubmissionsState::default();
    let stale = state.begin_fetch();
    let _latest = state.begin_fetch();
    state.fail_fetch(stale);
    assert!(state.loading);
}
