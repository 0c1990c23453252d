//! Top navigation bar.
//!
//! Links depend on the signed-in role; signed-out visitors get login and
//! register links instead.

use ats_core::guard::home_for;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::completion::CompletionState;
use crate::util::session::sign_out;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let completion = expect_context::<RwSignal<CompletionState>>();
    let navigate = use_navigate();

    let identity = move || {
        auth.with(|state| state.user().map(|user| (user.display_name(), user.user_type.label())))
    };
    let home = move || auth.with(|state| state.user_type().map_or("/", home_for));

    let on_logout = move |_| {
        sign_out(auth, completion);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href=home>"Recruitment Portal"</a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || auth.with(|state| !state.is_loading() && state.is_authenticated())
                fallback=move || {
                    view! {
                        <Show when=move || !auth.with(AuthState::is_loading)>
                            <a class="btn nav-bar__link" href="/login">"Login"</a>
                            <a class="btn btn--primary nav-bar__link" href="/register">"Register"</a>
                        </Show>
                    }
                }
            >
                <span class="nav-bar__self">
                    {move || identity().map(|(name, _)| name).unwrap_or_default()}
                    <span class="nav-bar__role">{move || identity().map(|(_, role)| role).unwrap_or_default()}</span>
                </span>
                <button class="btn nav-bar__logout" on:click=on_logout.clone() title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
