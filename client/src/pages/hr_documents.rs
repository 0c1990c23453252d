//! Review queue for uploaded candidate documents.

#[cfg(test)]
#[path = "hr_documents_test.rs"]
mod hr_documents_test;

use ats_core::types::{Document, DocumentStatus};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format::format_date;

/// Reviewer note to send with a decision. Rejections must say why.
pub fn review_note(decision: DocumentStatus, raw: &str) -> Result<Option<String>, &'static str> {
    let note = raw.trim();
    match decision {
        DocumentStatus::Rejected if note.is_empty() => Err("Add a note explaining the rejection."),
        _ if note.is_empty() => Ok(None),
        _ => Ok(Some(note.to_owned())),
    }
}

#[component]
pub fn VerificationTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let documents = RwSignal::new(Vec::<Document>::new());
    let loading = RwSignal::new(true);
    let notes = RwSignal::new(std::collections::HashMap::<String, String>::new());

    #[cfg(feature = "hydrate")]
    if let Some(token) = auth.with_untracked(AuthState::token) {
        leptos::task::spawn_local(async move {
            match crate::net::api::pending_documents(&token).await {
                Ok(list) => documents.set(list),
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
            loading.set(false);
        });
    }

    let decide = move |document_id: String, decision: DocumentStatus| {
        let raw = notes.with_untracked(|map| map.get(&document_id).cloned().unwrap_or_default());
        let note = match review_note(decision, &raw) {
            Ok(note) => note,
            Err(message) => {
                crate::util::toast::notify(toasts, crate::state::toast::ToastKind::Warning, message);
                return;
            }
        };
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_document(&token, &document_id, decision, note).await {
                Ok(()) => {
                    documents.update(|list| list.retain(|doc| doc.document_id != document_id));
                    crate::util::toast::notify_success(toasts, format!("Document marked {}.", decision.label()));
                }
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, document_id, note);
        }
    };

    view! {
        <Show when=move || !loading.get() fallback=move || view! { <p>"Loading pending documents..."</p> }>
            {move || {
                let list = documents.get();
                if list.is_empty() {
                    return view! { <p class="empty-state">"Nothing waiting for review."</p> }.into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Candidate"</th>
                                <th>"Type"</th>
                                <th>"File"</th>
                                <th>"Uploaded"</th>
                                <th>"Note"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|doc| {
                                    let note_id = doc.document_id.clone();
                                    let verify_id = doc.document_id.clone();
                                    let reject_id = doc.document_id.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                {doc
                                                    .candidate_name
                                                    .clone()
                                                    .unwrap_or_else(|| format!("Candidate #{}", doc.candidate_id))}
                                            </td>
                                            <td>{doc.document_type.clone()}</td>
                                            <td>
                                                <a href=doc.file_url.clone().unwrap_or_default() target="_blank" rel="noopener">
                                                    {doc.file_name.clone()}
                                                </a>
                                            </td>
                                            <td>{doc.uploaded_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                            <td>
                                                <input
                                                    class="form-input"
                                                    type="text"
                                                    placeholder="Optional unless rejecting"
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        notes.update(|map| {
                                                            map.insert(note_id.clone(), value);
                                                        });
                                                    }
                                                />
                                            </td>
                                            <td class="data-table__actions">
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| decide(verify_id.clone(), DocumentStatus::Verified)
                                                >
                                                    "Verify"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| decide(reject_id.clone(), DocumentStatus::Rejected)
                                                >
                                                    "Reject"
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
    }
}
