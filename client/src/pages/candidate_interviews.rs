//! Upcoming and past interviews for the candidate.

use ats_core::types::Interview;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::status_badge::{StatusBadge, interview_tone};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format::format_date_time;

#[component]
pub fn InterviewsTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let interviews = RwSignal::new(Vec::<Interview>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    if let Some((token, user_id)) = auth.with_untracked(AuthState::credentials) {
        leptos::task::spawn_local(async move {
            match crate::net::api::candidate_interviews(&token, &user_id).await {
                Ok(mut list) => {
                    list.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
                    interviews.set(list);
                }
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, toasts);
    }

    view! {
        <Show when=move || !loading.get() fallback=move || view! { <p>"Loading interviews..."</p> }>
            {move || {
                let list = interviews.get();
                if list.is_empty() {
                    return view! { <p class="empty-state">"No interviews scheduled."</p> }.into_any();
                }
                list.into_iter()
                    .map(|interview| {
                        view! {
                            <article class="interview-card">
                                <header>
                                    <h3>{interview.job_title.clone().unwrap_or_else(|| "Interview".to_owned())}</h3>
                                    <StatusBadge label=interview.status.label() tone=interview_tone(interview.status)/>
                                </header>
                                <p>{format_date_time(&interview.scheduled_at)}</p>
                                <p>{interview.location.clone().unwrap_or_default()}</p>
                                <p>{interview.interviewer.clone().map(|name| format!("With {name}")).unwrap_or_default()}</p>
                                <p class="interview-card__feedback">{interview.feedback.clone().unwrap_or_default()}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </Show>
    }
}
