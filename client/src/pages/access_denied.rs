//! Shown when a signed-in user opens a page reserved for another role.

use ats_core::guard::home_for;
use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn AccessDeniedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let home = move || auth.with(|state| state.user_type().map_or("/login", home_for));

    view! {
        <div class="access-denied-page">
            <h1>"Access denied"</h1>
            <p>"Your account does not have permission to view that page."</p>
            <a class="btn btn--primary" href=home>"Go to your home page"</a>
        </div>
    }
}
