//! Candidate dashboard with profile-gated tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `/dashboard` route is shared by every signed-in user; employees and
//! admins are forwarded to their own workspace. For candidates the page runs
//! the profile-completion check, then shows the tab named by `?tab=` if the
//! completion gate allows it, or the landing tab otherwise.
//!
//! TAB GATING
//! ==========
//! Profile and Documents are always reachable. The other tabs stay locked
//! until the backend reports a complete profile; a locked tab request falls
//! back to the profile editor.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use ats_core::completion::{CandidateTab, TabAccess, landing_tab, resolve_tab, tab_access};
use ats_core::guard::home_for;
use ats_core::types::UserType;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::pages::candidate_applications::ApplicationsTab;
use crate::pages::candidate_documents::DocumentsTab;
use crate::pages::candidate_interviews::InterviewsTab;
use crate::pages::candidate_jobs::JobsTab;
use crate::pages::candidate_offers::OffersTab;
use crate::pages::candidate_profile::ProfileTab;
use crate::state::auth::AuthState;
use crate::state::completion::CompletionState;
use crate::state::toast::ToastState;
use crate::util::session::refresh_completion;

/// Caption for the banner's re-check button.
pub fn recheck_label(state: &CompletionState) -> &'static str {
    if state.checking { "Checking..." } else { "Re-check" }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let completion = expect_context::<RwSignal<CompletionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    // Staff have their own workspace.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if let Some(user_type) = auth.with(AuthState::user_type)
            && user_type != UserType::Candidate
        {
            navigate_home(home_for(user_type), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    Effect::new(move || {
        let candidate = auth.with(|state| {
            (state.user_type() == Some(UserType::Candidate)).then(|| state.user_id()).flatten()
        });
        if let Some(user_id) = candidate
            && completion.with(|state| state.needs_check(&user_id))
        {
            refresh_completion(auth, completion, toasts);
        }
    });

    let status = Memo::new(move |_| completion.with(|state| state.status));
    let requested = Memo::new(move |_| query.with(|q| q.get("tab").and_then(|slug| CandidateTab::from_slug(&slug))));
    let current = Memo::new(move |_| {
        let status = status.get();
        match requested.get() {
            Some(tab) => Some(resolve_tab(tab, status)),
            None => landing_tab(status),
        }
    });

    let select_tab = move |tab: CandidateTab| {
        navigate(&format!("/dashboard?tab={}", tab.slug()), NavigateOptions::default());
    };
    let checking = Memo::new(move |_| completion.with(|state| state.checking));
    let recheck = move |_| refresh_completion(auth, completion, toasts);
    let on_profile_saved = Callback::new(move |()| refresh_completion(auth, completion, toasts));

    let tab_buttons = move || {
        CandidateTab::ALL
            .into_iter()
            .map(|tab| {
                let select_tab = select_tab.clone();
                let access = move || tab_access(tab, status.get());
                let class = move || {
                    if current.get() == Some(tab) { "tab-bar__tab tab-bar__tab--active" } else { "tab-bar__tab" }
                };
                view! {
                    <button
                        class=class
                        disabled=move || access() != TabAccess::Allowed
                        title=move || match access() {
                            TabAccess::Locked => "Complete your profile to unlock",
                            TabAccess::Pending => "Checking your profile...",
                            TabAccess::Allowed => "",
                        }
                        on:click=move |_| select_tab(tab)
                    >
                        {tab.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    // Pending tabs render the placeholder until the check finishes.
    let shown = Memo::new(move |_| current.get().filter(|tab| tab_access(*tab, status.get()) != TabAccess::Pending));
    let tab_body = move || match shown.get() {
        None => view! { <p class="dashboard-page__loading">"Checking your profile..."</p> }.into_any(),
        Some(CandidateTab::Profile) => view! { <ProfileTab on_saved=on_profile_saved/> }.into_any(),
        Some(CandidateTab::Jobs) => view! { <JobsTab/> }.into_any(),
        Some(CandidateTab::Applications) => view! { <ApplicationsTab/> }.into_any(),
        Some(CandidateTab::Interviews) => view! { <InterviewsTab/> }.into_any(),
        Some(CandidateTab::Offers) => view! { <OffersTab/> }.into_any(),
        Some(CandidateTab::Documents) => view! { <DocumentsTab/> }.into_any(),
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>
                    "Welcome, "
                    {move || auth.with(|state| state.user().map(|u| u.first_name.clone()).unwrap_or_default())}
                </h1>
            </header>
            <Show when=move || status.get().is_complete == Some(false)>
                <p class="dashboard-page__banner">
                    "Complete your profile to unlock job browsing, applications, interviews and offers."
                    <button class="btn dashboard-page__recheck" disabled=move || checking.get() on:click=recheck>
                        {move || completion.with(recheck_label)}
                    </button>
                </p>
            </Show>
            <nav class="tab-bar">{tab_buttons}</nav>
            <section class="dashboard-page__body">{tab_body}</section>
        </div>
    }
}
