//! Applicants per posting: status changes, interview scheduling, offers.
//!
//! SYSTEM CONTEXT
//! ==============
//! HR first picks a posting; its applications are fetched on every change
//! of selection. Interview and offer dialogs act on one application at a
//! time, tracked by `action`.

#[cfg(test)]
#[path = "hr_applicants_test.rs"]
mod hr_applicants_test;

use ats_core::types::{Application, ApplicationStatus, InterviewDraft, Job, OfferDraft};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::status_badge::{StatusBadge, application_tone};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, parse_optional_amount};

/// Which dialog is open, and for which application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplicantAction {
    Interview(Application),
    Offer(Application),
}

/// Request built from a submitted dialog.
enum Outgoing {
    Interview(InterviewDraft),
    Offer(OfferDraft),
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Interview request for `application`; `scheduled_at` comes from a
/// `datetime-local` input.
pub fn build_interview(
    application: &Application,
    scheduled_at: &str,
    location: &str,
    interviewer: &str,
) -> Result<InterviewDraft, String> {
    let scheduled_at = scheduled_at.trim();
    if scheduled_at.is_empty() {
        return Err("Pick a date and time for the interview.".to_owned());
    }
    Ok(InterviewDraft {
        application_id: application.application_id.clone(),
        candidate_id: application.candidate_id.clone(),
        scheduled_at: scheduled_at.to_owned(),
        location: optional(location),
        interviewer: optional(interviewer),
    })
}

/// Offer for `application`. A salary is required; start date and notes are not.
pub fn build_offer(application: &Application, salary: &str, start_date: &str, notes: &str) -> Result<OfferDraft, String> {
    let Some(salary) = parse_optional_amount(salary)? else {
        return Err("Enter the offered salary.".to_owned());
    };
    Ok(OfferDraft {
        application_id: application.application_id.clone(),
        candidate_id: application.candidate_id.clone(),
        salary: Some(salary),
        start_date: optional(start_date),
        notes: optional(notes),
    })
}

#[component]
pub fn ApplicantsTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let jobs = RwSignal::new(Vec::<Job>::new());
    let selected_job = RwSignal::new(String::new());
    let applications = RwSignal::new(Vec::<Application>::new());
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let action = RwSignal::new(None::<ApplicantAction>);
    let when = RwSignal::new(String::new());
    let place = RwSignal::new(String::new());
    let interviewer = RwSignal::new(String::new());
    let salary = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let dialog_error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    if let Some(token) = auth.with_untracked(AuthState::token) {
        leptos::task::spawn_local(async move {
            match crate::net::api::list_jobs(&token).await {
                Ok(list) => jobs.set(list),
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
        });
    }

    Effect::new(move || {
        let job_id = selected_job.get();
        applications.set(Vec::new());
        if job_id.is_empty() {
            return;
        }
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::job_applications(&token, &job_id).await {
                Ok(list) => applications.set(list),
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            loading.set(false);
        }
    });

    let set_status = move |application_id: String, status: ApplicationStatus| {
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_application_status(&token, &application_id, status).await {
                Ok(()) => {
                    applications.update(|list| {
                        if let Some(app) = list.iter_mut().find(|app| app.application_id == application_id) {
                            app.status = status;
                        }
                    });
                    crate::util::toast::notify_success(toasts, format!("Status set to {}.", status.label()));
                }
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, application_id, status);
        }
    };

    let open_action = move |next: ApplicantAction| {
        for field in [when, place, interviewer, salary, start_date, notes, dialog_error] {
            field.set(String::new());
        }
        action.set(Some(next));
    };

    let on_dialog_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(current) = action.get() else {
            return;
        };
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        let request = match &current {
            ApplicantAction::Interview(app) => {
                build_interview(app, &when.get(), &place.get(), &interviewer.get()).map(Outgoing::Interview)
            }
            ApplicantAction::Offer(app) => {
                build_offer(app, &salary.get(), &start_date.get(), &notes.get()).map(Outgoing::Offer)
            }
        };
        let request = match request {
            Ok(request) => request,
            Err(message) => {
                dialog_error.set(message);
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (result, done, next_status) = match &request {
                Outgoing::Interview(draft) => (
                    crate::net::api::schedule_interview(&token, draft).await,
                    "Interview scheduled.",
                    ApplicationStatus::Interviewing,
                ),
                Outgoing::Offer(draft) => {
                    (crate::net::api::issue_offer(&token, draft).await, "Offer sent.", ApplicationStatus::Offered)
                }
            };
            match result {
                Ok(()) => {
                    let application_id = match &current {
                        ApplicantAction::Interview(app) | ApplicantAction::Offer(app) => app.application_id.clone(),
                    };
                    applications.update(|list| {
                        if let Some(app) = list.iter_mut().find(|app| app.application_id == application_id) {
                            app.status = next_status;
                        }
                    });
                    action.set(None);
                    crate::util::toast::notify_success(toasts, done);
                }
                Err(e) => {
                    dialog_error.set(e.user_message());
                    crate::util::toast::notify_error(toasts, &e);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, request, current);
            busy.set(false);
        }
    };

    let input = move |label: &'static str, kind: &'static str, field: RwSignal<String>| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="form-input"
                    type=kind
                    prop:value=move || field.get()
                    on:input=move |ev| field.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="applicants-tab">
            <label class="form-field">
                <span class="form-field__label">"Posting"</span>
                <select
                    class="form-input"
                    prop:value=move || selected_job.get()
                    on:change=move |ev| selected_job.set(event_target_value(&ev))
                >
                    <option value="">"Select a posting..."</option>
                    {move || {
                        jobs.get()
                            .into_iter()
                            .map(|job| view! { <option value=job.job_id.clone()>{job.title.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading applicants..."</p> }>
                {move || {
                    let list = applications.get();
                    if selected_job.with(String::is_empty) {
                        return view! { <p class="empty-state">"Choose a posting to see its applicants."</p> }.into_any();
                    }
                    if list.is_empty() {
                        return view! { <p class="empty-state">"No applications for this posting yet."</p> }.into_any();
                    }
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Candidate"</th>
                                    <th>"Applied"</th>
                                    <th>"Status"</th>
                                    <th>"Change status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|app| {
                                        let status_id = app.application_id.clone();
                                        let interview_app = app.clone();
                                        let offer_app = app.clone();
                                        view! {
                                            <tr>
                                                <td>
                                                    {app
                                                        .candidate_name
                                                        .clone()
                                                        .unwrap_or_else(|| format!("Candidate #{}", app.candidate_id))}
                                                </td>
                                                <td>{app.applied_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                                <td>
                                                    <StatusBadge label=app.status.label() tone=application_tone(app.status)/>
                                                </td>
                                                <td>
                                                    <select
                                                        class="form-input"
                                                        prop:value=app.status.label()
                                                        on:change=move |ev| {
                                                            if let Ok(status) = event_target_value(&ev).parse() {
                                                                set_status(status_id.clone(), status);
                                                            }
                                                        }
                                                    >
                                                        {ApplicationStatus::ALL
                                                            .into_iter()
                                                            .map(|status| {
                                                                view! { <option value=status.label()>{status.label()}</option> }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </select>
                                                </td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| {
                                                            open_action(ApplicantAction::Interview(interview_app.clone()));
                                                        }
                                                    >
                                                        "Schedule interview"
                                                    </button>
                                                    <button
                                                        class="btn btn--primary"
                                                        on:click=move |_| open_action(ApplicantAction::Offer(offer_app.clone()))
                                                    >
                                                        "Issue offer"
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

            <Show when=move || action.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| action.set(None)>
                    <form class="dialog" on:click=|ev| ev.stop_propagation() on:submit=on_dialog_submit>
                        {move || match action.get() {
                            Some(ApplicantAction::Interview(_)) => {
                                view! {
                                    <h2>"Schedule interview"</h2>
                                    {input("Date and time", "datetime-local", when)}
                                    {input("Location or meeting link", "text", place)}
                                    {input("Interviewer", "text", interviewer)}
                                }
                                    .into_any()
                            }
                            Some(ApplicantAction::Offer(_)) => {
                                view! {
                                    <h2>"Issue offer"</h2>
                                    {input("Salary", "text", salary)}
                                    {input("Start date", "date", start_date)}
                                    {input("Notes", "text", notes)}
                                }
                                    .into_any()
                            }
                            None => ().into_any(),
                        }}
                        <Show when=move || !dialog_error.get().is_empty()>
                            <p class="dialog__error">{move || dialog_error.get()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| action.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Sending..." } else { "Confirm" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
