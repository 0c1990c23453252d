//! Job browsing and applying.

#[cfg(test)]
#[path = "candidate_jobs_test.rs"]
mod candidate_jobs_test;

use std::collections::HashSet;

use ats_core::types::{Application, Job};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format::format_date;
use crate::util::markdown::render_markdown_html;

/// Open postings matching `query`, newest first.
pub fn visible_jobs(jobs: &[Job], query: &str) -> Vec<Job> {
    let mut visible: Vec<Job> = jobs.iter().filter(|job| job.is_open && job.matches(query)).cloned().collect();
    visible.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
    visible
}

/// Jobs the candidate already has an application for.
pub fn applied_job_ids(applications: &[Application]) -> HashSet<String> {
    applications.iter().map(|app| app.job_id.clone()).collect()
}

#[component]
pub fn JobsTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let jobs = RwSignal::new(Vec::<Job>::new());
    let applied = RwSignal::new(HashSet::<String>::new());
    let loading = RwSignal::new(true);
    let query = RwSignal::new(String::new());
    let expanded = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    if let Some((token, user_id)) = auth.with_untracked(AuthState::credentials) {
        leptos::task::spawn_local(async move {
            match crate::net::api::list_jobs(&token).await {
                Ok(list) => jobs.set(list),
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
            match crate::net::api::candidate_applications(&token, &user_id).await {
                Ok(list) => applied.set(applied_job_ids(&list)),
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
            loading.set(false);
        });
    }

    let on_apply = move |job_id: String| {
        let Some((token, user_id)) = auth.with_untracked(AuthState::credentials) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::apply_to_job(&token, &user_id, &job_id).await {
                Ok(()) => {
                    applied.update(|ids| {
                        ids.insert(job_id);
                    });
                    crate::util::toast::notify_success(toasts, "Application submitted.");
                }
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user_id, job_id);
        }
    };

    view! {
        <div class="jobs-tab">
            <input
                class="form-input jobs-tab__search"
                type="search"
                placeholder="Search by title, department or location"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading jobs..."</p> }>
                {move || {
                    let list = jobs.with(|all| visible_jobs(all, &query.get()));
                    if list.is_empty() {
                        return view! { <p class="empty-state">"No open positions match your search."</p> }
                            .into_any();
                    }
                    list.into_iter()
                        .map(|job| {
                            let id = job.job_id.clone();
                            let toggle_id = id.clone();
                            let apply_id = id.clone();
                            let is_applied = Memo::new({
                                let id = id.clone();
                                move |_| applied.with(|ids| ids.contains(&id))
                            });
                            let is_expanded = Memo::new(move |_| expanded.get().as_deref() == Some(id.as_str()));
                            let description = render_markdown_html(&job.description);
                            view! {
                                <article class="job-card">
                                    <header class="job-card__header">
                                        <h3>{job.title.clone()}</h3>
                                        <span class="job-card__meta">
                                            {job.department.clone()} " · " {job.location.clone()} " · "
                                            {job.employment_type.clone()}
                                        </span>
                                    </header>
                                    <p class="job-card__salary">{job.salary_range().unwrap_or_default()}</p>
                                    <p class="job-card__posted">
                                        {job.posted_at.as_deref().map(format_date).unwrap_or_default()}
                                    </p>
                                    <button
                                        class="btn"
                                        on:click=move |_| {
                                            expanded.update(|open| {
                                                *open = if open.as_deref() == Some(toggle_id.as_str()) {
                                                    None
                                                } else {
                                                    Some(toggle_id.clone())
                                                };
                                            });
                                        }
                                    >
                                        {move || if is_expanded.get() { "Hide details" } else { "Details" }}
                                    </button>
                                    <Show when=move || is_expanded.get()>
                                        <div class="job-card__description markdown" inner_html=description.clone()></div>
                                    </Show>
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || is_applied.get()
                                        on:click=move |_| on_apply(apply_id.clone())
                                    >
                                        {move || if is_applied.get() { "Applied" } else { "Apply" }}
                                    </button>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </Show>
        </div>
    }
}
