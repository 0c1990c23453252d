//! Job posting management for HR.
//!
//! One dialog serves both create and edit; `editing` holds the id of the
//! posting being edited, or `None` for a new one.

#[cfg(test)]
#[path = "hr_postings_test.rs"]
mod hr_postings_test;

use ats_core::types::{Job, JobDraft};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, parse_optional_amount};

/// Raw dialog fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub salary_min: String,
    pub salary_max: String,
    pub is_open: bool,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            department: String::new(),
            location: String::new(),
            employment_type: "Full-time".to_owned(),
            description: String::new(),
            salary_min: String::new(),
            salary_max: String::new(),
            is_open: true,
        }
    }
}

impl From<&Job> for JobForm {
    fn from(job: &Job) -> Self {
        let amount = |value: Option<f64>| value.map(|v| format!("{v:.0}")).unwrap_or_default();
        Self {
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            employment_type: job.employment_type.clone(),
            description: job.description.clone(),
            salary_min: amount(job.salary_min),
            salary_max: amount(job.salary_max),
            is_open: job.is_open,
        }
    }
}

/// Build the request body, or explain what is wrong with the form.
pub fn validate_job_form(form: &JobForm) -> Result<JobDraft, String> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err("Title is required.".to_owned());
    }
    let salary_min = parse_optional_amount(&form.salary_min)?;
    let salary_max = parse_optional_amount(&form.salary_max)?;
    if let (Some(min), Some(max)) = (salary_min, salary_max)
        && min > max
    {
        return Err("Minimum salary cannot exceed the maximum.".to_owned());
    }
    Ok(JobDraft {
        title: title.to_owned(),
        department: form.department.trim().to_owned(),
        location: form.location.trim().to_owned(),
        employment_type: form.employment_type.trim().to_owned(),
        description: form.description.clone(),
        salary_min,
        salary_max,
        is_open: form.is_open,
    })
}

#[component]
pub fn PostingsTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let jobs = RwSignal::new(Vec::<Job>::new());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let show_dialog = RwSignal::new(false);
    let editing = RwSignal::new(None::<String>);
    let form = RwSignal::new(JobForm::default());
    let form_error = RwSignal::new(String::new());
    let delete_job_id = RwSignal::new(None::<String>);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        if let Some(token) = auth.with_untracked(AuthState::token) {
            leptos::task::spawn_local(async move {
                match crate::net::api::list_jobs(&token).await {
                    Ok(list) => jobs.set(list),
                    Err(e) => crate::util::toast::notify_error(toasts, &e),
                }
                loading.set(false);
            });
        }
    };
    reload();

    let open_create = move |_| {
        editing.set(None);
        form.set(JobForm::default());
        form_error.set(String::new());
        show_dialog.set(true);
    };
    let open_edit = move |job: &Job| {
        editing.set(Some(job.job_id.clone()));
        form.set(JobForm::from(job));
        form_error.set(String::new());
        show_dialog.set(true);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_job_form(&form.get()) {
            Ok(draft) => draft,
            Err(message) => {
                form_error.set(message);
                return;
            }
        };
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        let job_id = editing.get();
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match &job_id {
                Some(id) => crate::net::api::update_job(&token, id, &draft).await,
                None => crate::net::api::create_job(&token, &draft).await,
            };
            match result {
                Ok(()) => {
                    show_dialog.set(false);
                    let message = if job_id.is_some() { "Posting updated." } else { "Posting created." };
                    crate::util::toast::notify_success(toasts, message);
                    reload();
                }
                Err(e) => {
                    form_error.set(e.user_message());
                    crate::util::toast::notify_error(toasts, &e);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, draft, job_id);
            busy.set(false);
        }
    };

    let on_delete_confirm = move |_| {
        let Some(job_id) = delete_job_id.get() else {
            return;
        };
        delete_job_id.set(None);
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_job(&token, &job_id).await {
                Ok(()) => {
                    jobs.update(|list| list.retain(|job| job.job_id != job_id));
                    crate::util::toast::notify_success(toasts, "Posting deleted.");
                }
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, job_id);
        }
    };

    let text_field = move |label: &'static str, get: fn(&JobForm) -> String, set: fn(&mut JobForm, String)| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="postings-tab">
            <div class="postings-tab__toolbar">
                <button class="btn btn--primary" on:click=open_create>"+ New posting"</button>
            </div>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading postings..."</p> }>
                {move || {
                    let list = jobs.get();
                    if list.is_empty() {
                        return view! { <p class="empty-state">"No job postings yet."</p> }.into_any();
                    }
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Department"</th>
                                    <th>"Location"</th>
                                    <th>"Posted"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|job| {
                                        let delete_id = job.job_id.clone();
                                        let edit_job = job.clone();
                                        view! {
                                            <tr>
                                                <td>{job.title.clone()}</td>
                                                <td>{job.department.clone()}</td>
                                                <td>{job.location.clone()}</td>
                                                <td>{job.posted_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                                <td>{if job.is_open { "Open" } else { "Closed" }}</td>
                                                <td class="data-table__actions">
                                                    <button class="btn" on:click=move |_| open_edit(&edit_job)>
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| delete_job_id.set(Some(delete_id.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </Show>

            <Show when=move || show_dialog.get()>
                <div class="dialog-backdrop" on:click=move |_| show_dialog.set(false)>
                    <form class="dialog dialog--wide" on:click=|ev| ev.stop_propagation() on:submit=on_save>
                        <h2>{move || if editing.get().is_some() { "Edit posting" } else { "New posting" }}</h2>
                        {text_field("Title", |f| f.title.clone(), |f, v| f.title = v)}
                        {text_field("Department", |f| f.department.clone(), |f, v| f.department = v)}
                        {text_field("Location", |f| f.location.clone(), |f, v| f.location = v)}
                        {text_field("Employment type", |f| f.employment_type.clone(), |f, v| f.employment_type = v)}
                        {text_field("Minimum salary", |f| f.salary_min.clone(), |f, v| f.salary_min = v)}
                        {text_field("Maximum salary", |f| f.salary_max.clone(), |f, v| f.salary_max = v)}
                        <label class="form-field">
                            <span class="form-field__label">"Description (Markdown)"</span>
                            <textarea
                                class="form-input form-input--multiline"
                                rows="8"
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.description = value);
                                }
                            ></textarea>
                        </label>
                        <label class="form-field form-field--inline">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.is_open)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update(|f| f.is_open = checked);
                                }
                            />
                            <span>"Accepting applications"</span>
                        </label>
                        <Show when=move || !form_error.get().is_empty()>
                            <p class="dialog__error">{move || form_error.get()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| show_dialog.set(false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            <Show when=move || delete_job_id.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| delete_job_id.set(None)>
                    <div class="dialog" on:click=|ev| ev.stop_propagation()>
                        <h2>"Delete posting?"</h2>
                        <p>"Applications for this posting will no longer be reachable from the workspace."</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| delete_job_id.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=on_delete_confirm>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
