//! `/` route: bounces to the right landing page once the session is known.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_home_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_home_redirect(auth, use_navigate());

    view! {
        <div class="home-page">
            <p>{move || if auth.with(AuthState::is_loading) { "Loading..." } else { "Redirecting..." }}</p>
        </div>
    }
}
