use super::*;

#[test]
fn recheck_is_offered_when_idle() {
    assert_eq!(recheck_label(&CompletionState::default()), "Re-check");
}

#[test]
fn recheck_shows_progress_while_checking() {
    let mut state = CompletionState::default();
    state.begin("u1");
    assert_eq!(recheck_label(&state), "Checking...");
    state.finish("u1", &ats_core::completion::CompletionOutcome { is_complete: false, warning: None });
    assert_eq!(recheck_label(&state), "Re-check");
}
