use super::*;
use crate::types::UserRecord;

fn signed_in(user_type: UserType) -> Session {
    Session::authenticated(
        "t1".to_owned(),
        UserRecord {
            user_id: "u1".to_owned(),
            email: "a@b.com".to_owned(),
            first_name: "A".to_owned(),
            last_name: String::new(),
            phone_number: None,
            user_type,
        },
    )
}

fn loading_with_stale_user() -> Session {
    let mut session = signed_in(UserType::Candidate);
    session.is_loading = true;
    session
}

// =============================================================
// Loading never redirects
// =============================================================

#[test]
fn protected_while_loading_never_redirects() {
    assert_eq!(evaluate_protected(&Session::default()), GuardDecision::Loading);
    assert_eq!(evaluate_protected(&loading_with_stale_user()), GuardDecision::Loading);
}

#[test]
fn public_only_while_loading_never_redirects() {
    assert_eq!(evaluate_public_only(&Session::default()), GuardDecision::Loading);
    assert_eq!(evaluate_public_only(&loading_with_stale_user()), GuardDecision::Loading);
}

#[test]
fn role_while_loading_never_redirects() {
    assert_eq!(evaluate_role(&Session::default(), UserType::Admin), GuardDecision::Loading);
    assert_eq!(evaluate_role(&loading_with_stale_user(), UserType::Admin), GuardDecision::Loading);
}

// =============================================================
// Settled sessions
// =============================================================

#[test]
fn protected_redirects_anonymous_to_login() {
    assert_eq!(evaluate_protected(&Session::anonymous()), GuardDecision::Redirect(Target::Login));
    assert_eq!(evaluate_protected(&signed_in(UserType::Candidate)), GuardDecision::Allow);
}

#[test]
fn public_only_redirects_signed_in_to_dashboard() {
    assert_eq!(evaluate_public_only(&Session::anonymous()), GuardDecision::Allow);
    assert_eq!(
        evaluate_public_only(&signed_in(UserType::Employee)),
        GuardDecision::Redirect(Target::Dashboard)
    );
}

#[test]
fn role_checks_authentication_before_role() {
    assert_eq!(
        evaluate_role(&Session::anonymous(), UserType::Admin),
        GuardDecision::Redirect(Target::Login)
    );
}

#[test]
fn role_mismatch_is_access_denied() {
    assert_eq!(
        evaluate_role(&signed_in(UserType::Candidate), UserType::Admin),
        GuardDecision::Redirect(Target::AccessDenied)
    );
    assert_eq!(evaluate_role(&signed_in(UserType::Admin), UserType::Admin), GuardDecision::Allow);
}

#[test]
fn target_paths_are_routes() {
    assert_eq!(Target::Login.path(), "/login");
    assert_eq!(Target::Dashboard.path(), "/dashboard");
    assert_eq!(Target::AccessDenied.path(), "/access-denied");
}

#[test]
fn home_routes_follow_role() {
    assert_eq!(home_for(UserType::Candidate), "/dashboard");
    assert_eq!(home_for(UserType::Employee), "/hr");
    assert_eq!(home_for(UserType::Admin), "/admin");
}
