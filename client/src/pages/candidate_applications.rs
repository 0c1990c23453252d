//! The candidate's own applications.

use ats_core::types::{Application, ApplicationStatus};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::status_badge::{StatusBadge, application_tone};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format::format_date;

#[component]
pub fn ApplicationsTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let applications = RwSignal::new(Vec::<Application>::new());
    let loading = RwSignal::new(true);
    let confirm_withdraw = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    if let Some((token, user_id)) = auth.with_untracked(AuthState::credentials) {
        leptos::task::spawn_local(async move {
            match crate::net::api::candidate_applications(&token, &user_id).await {
                Ok(list) => applications.set(list),
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
            loading.set(false);
        });
    }

    let on_withdraw_confirm = move |_| {
        let Some(application_id) = confirm_withdraw.get() else {
            return;
        };
        confirm_withdraw.set(None);
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_application_status(&token, &application_id, ApplicationStatus::Withdrawn)
                .await
            {
                Ok(()) => {
                    applications.update(|list| {
                        if let Some(app) = list.iter_mut().find(|app| app.application_id == application_id) {
                            app.status = ApplicationStatus::Withdrawn;
                        }
                    });
                    crate::util::toast::notify_success(toasts, "Application withdrawn.");
                }
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, application_id);
        }
    };

    view! {
        <Show when=move || !loading.get() fallback=move || view! { <p>"Loading applications..."</p> }>
            {move || {
                let list = applications.get();
                if list.is_empty() {
                    return view! { <p class="empty-state">"You have not applied to any jobs yet."</p> }.into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Position"</th>
                                <th>"Applied"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|app| {
                                    let id = app.application_id.clone();
                                    let active = app.status.is_active();
                                    view! {
                                        <tr>
                                            <td>{app.job_title.clone().unwrap_or_else(|| format!("Job #{}", app.job_id))}</td>
                                            <td>{app.applied_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                            <td>
                                                <StatusBadge label=app.status.label() tone=application_tone(app.status)/>
                                            </td>
                                            <td>
                                                <Show when=move || active>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click={
                                                            let id = id.clone();
                                                            move |_| confirm_withdraw.set(Some(id.clone()))
                                                        }
                                                    >
                                                        "Withdraw"
                                                    </button>
                                                </Show>
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
        <Show when=move || confirm_withdraw.get().is_some()>
            <div class="dialog-backdrop" on:click=move |_| confirm_withdraw.set(None)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2>"Withdraw application?"</h2>
                    <p>"The hiring team will no longer consider you for this position."</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| confirm_withdraw.set(None)>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" on:click=on_withdraw_confirm>
                            "Withdraw"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
