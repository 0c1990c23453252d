use super::*;

fn outcome(is_complete: bool) -> CompletionOutcome {
    CompletionOutcome { is_complete, warning: None }
}

#[test]
fn default_needs_check() {
    let state = CompletionState::default();
    assert_eq!(state.status.is_complete, None);
    assert!(state.needs_check("u1"));
}

#[test]
fn in_flight_check_is_not_repeated() {
    let mut state = CompletionState::default();
    state.begin("u1");
    assert!(state.checking);
    assert!(!state.needs_check("u1"));
}

#[test]
fn finished_check_is_cached_per_user() {
    let mut state = CompletionState::default();
    state.begin("u1");
    state.finish("u1", &outcome(false));
    assert_eq!(state.status, ProfileCompletionStatus::known(false));
    assert!(!state.needs_check("u1"));
    assert!(state.needs_check("u2"));
}

#[test]
fn recheck_same_user_keeps_previous_status_until_finished() {
    let mut state = CompletionState::default();
    state.begin("u1");
    state.finish("u1", &outcome(false));
    state.begin("u1");
    assert_eq!(state.status, ProfileCompletionStatus::known(false));
    state.finish("u1", &outcome(true));
    assert_eq!(state.status, ProfileCompletionStatus::known(true));
}

#[test]
fn switching_user_clears_status() {
    let mut state = CompletionState::default();
    state.begin("u1");
    state.finish("u1", &outcome(true));
    state.begin("u2");
    assert_eq!(state.status, ProfileCompletionStatus::UNCHECKED);
}

#[test]
fn reset_forgets_user() {
    let mut state = CompletionState::default();
    state.begin("u1");
    state.reset();
    assert_eq!(state, CompletionState::default());
}

#[test]
fn late_outcome_for_signed_out_user_is_dropped() {
    let mut state = CompletionState::default();
    state.begin("alice");
    state.reset();
    state.begin("bob");
    state.finish("bob", &outcome(false));
    state.finish("alice", &outcome(true));
    assert_eq!(state.status, ProfileCompletionStatus::known(false));
    assert_eq!(state.user_id.as_deref(), Some("bob"));
}

#[test]
fn outcome_after_reset_leaves_state_empty() {
    let mut state = CompletionState::default();
    state.begin("alice");
    state.reset();
    state.finish("alice", &outcome(true));
    assert_eq!(state, CompletionState::default());
}

#[test]
fn stale_outcome_does_not_end_current_check() {
    let mut state = CompletionState::default();
    state.begin("alice");
    state.reset();
    state.begin("bob");
    state.finish("alice", &outcome(true));
    assert!(state.checking);
    assert_eq!(state.status, ProfileCompletionStatus::UNCHECKED);
}
