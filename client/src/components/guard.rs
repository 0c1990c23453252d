//! Route guard wrappers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each wrapper turns the current session into a [`GuardDecision`] and either
//! renders its children, a neutral placeholder while the session loads, or
//! nothing while the redirect effect navigates away. The decisions themselves
//! live in `ats_core::guard`; this module is only the reactive glue.

use ats_core::Session;
use ats_core::guard::{GuardDecision, evaluate_protected, evaluate_public_only, evaluate_role};
use ats_core::types::UserType;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_guard_redirect;

fn guarded(evaluate: impl Fn(&Session) -> GuardDecision + Send + Sync + 'static, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| auth.with(|state| evaluate(state.session())));
    install_guard_redirect(decision, use_navigate());

    move || match decision.get() {
        GuardDecision::Loading => view! { <p class="guard-placeholder">"Loading..."</p> }.into_any(),
        GuardDecision::Redirect(_) => view! { <p class="guard-placeholder">"Redirecting..."</p> }.into_any(),
        GuardDecision::Allow => children().into_any(),
    }
}

/// Only signed-in users see `children`; everyone else goes to `/login`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(evaluate_protected, children)
}

/// Only signed-out visitors see `children`; signed-in users go to `/dashboard`.
#[component]
pub fn PublicOnlyRoute(children: ChildrenFn) -> impl IntoView {
    guarded(evaluate_public_only, children)
}

/// Only users of `role` see `children`. Signed-out visitors go to `/login`,
/// other roles to `/access-denied`.
#[component]
pub fn RoleRoute(role: UserType, children: ChildrenFn) -> impl IntoView {
    guarded(move |session| evaluate_role(session, role), children)
}
