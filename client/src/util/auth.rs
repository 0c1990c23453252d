//! Shared guard redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and pages that bounce visitors elsewhere must apply the same
//! navigation behavior: only after the session has settled, and replacing
//! the current history entry so "back" does not loop through the guard.

use ats_core::guard::{GuardDecision, home_for};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate whenever `decision` resolves to a redirect.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision.get() {
            navigate(target.path(), replace());
        }
    });
}

/// Send a signed-in user to the landing page for their role, or a signed-out
/// visitor to `/login`. Does nothing while the session is loading.
pub fn install_home_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if state.is_loading() {
            return;
        }
        let path = state.user_type().map_or("/login", home_for);
        navigate(path, replace());
    });
}
