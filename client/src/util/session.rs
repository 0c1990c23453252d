//! Session side effects that touch more than one piece of state.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::completion::CompletionState;
use crate::state::toast::ToastState;

/// Re-check whether the signed-in candidate's profile is complete.
///
/// Leaves state untouched when nobody is signed in. A failed lookup other
/// than 404 is surfaced as a warning toast and treated as incomplete.
pub fn refresh_completion(
    auth: RwSignal<AuthState>,
    completion: RwSignal<CompletionState>,
    toasts: RwSignal<ToastState>,
) {
    let Some((token, user_id)) = auth.with_untracked(AuthState::credentials) else {
        return;
    };
    completion.update(|state| state.begin(&user_id));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = ats_core::completion::check_completion(&user_id, move |id| async move {
            crate::net::api::fetch_completion(&token, &id).await
        })
        .await;
        let current = completion.with_untracked(|state| state.user_id.as_deref() == Some(user_id.as_str()));
        if let Some(warning) = outcome.warning.as_ref().filter(|_| current) {
            crate::util::toast::notify(toasts, crate::state::toast::ToastKind::Warning, warning.clone());
        }
        completion.update(|state| state.finish(&user_id, &outcome));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, toasts);
    }
}

/// Clear the local session, then tell the backend. The local logout happens
/// first and never waits on the network.
pub fn sign_out(auth: RwSignal<AuthState>, completion: RwSignal<CompletionState>) {
    let token = auth.with_untracked(AuthState::token);
    auth.update(AuthState::logout);
    completion.update(CompletionState::reset);

    #[cfg(feature = "hydrate")]
    if let Some(token) = token {
        leptos::task::spawn_local(async move {
            crate::net::api::logout(&token).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
