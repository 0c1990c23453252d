//! Candidate document uploads and their review status.

#[cfg(test)]
#[path = "candidate_documents_test.rs"]
mod candidate_documents_test;

use ats_core::types::{DOCUMENT_TYPES, Document};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::status_badge::{StatusBadge, document_tone};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::format::format_date;

/// Largest file the upload form accepts.
pub const MAX_UPLOAD_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Check the chosen type and file before uploading.
pub fn check_upload(document_type: &str, file_size: Option<f64>) -> Result<(), &'static str> {
    if !DOCUMENT_TYPES.contains(&document_type) {
        return Err("Choose a document type.");
    }
    match file_size {
        None => Err("Choose a file to upload."),
        Some(size) if size <= 0.0 => Err("The selected file is empty."),
        Some(size) if size > MAX_UPLOAD_BYTES => Err("Files must be 5 MB or smaller."),
        Some(_) => Ok(()),
    }
}

#[component]
pub fn DocumentsTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let documents = RwSignal::new(Vec::<Document>::new());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let document_type = RwSignal::new(DOCUMENT_TYPES[0].to_owned());
    let file_input = NodeRef::<leptos::html::Input>::new();

    let reload = move || {
        #[cfg(feature = "hydrate")]
        if let Some((token, user_id)) = auth.with_untracked(AuthState::credentials) {
            leptos::task::spawn_local(async move {
                match crate::net::api::candidate_documents(&token, &user_id).await {
                    Ok(list) => documents.set(list),
                    Err(e) => crate::util::toast::notify_error(toasts, &e),
                }
                loading.set(false);
            });
        }
    };
    reload();

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let file = file_input.get().and_then(|input| input.files()).and_then(|files| files.get(0));
            let kind = document_type.get();
            if let Err(message) = check_upload(&kind, file.as_ref().map(web_sys::File::size)) {
                crate::util::toast::notify(toasts, ToastKind::Warning, message);
                return;
            }
            let (Some(file), Some((token, user_id))) = (file, auth.with_untracked(AuthState::credentials)) else {
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_document(&token, &user_id, &kind, &file).await {
                    Ok(()) => {
                        crate::util::toast::notify_success(toasts, "Document uploaded.");
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                        reload();
                    }
                    Err(e) => crate::util::toast::notify_error(toasts, &e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            crate::util::toast::notify(toasts, ToastKind::Warning, "Uploads are only available in the browser.");
        }
    };

    view! {
        <div class="documents-tab">
            <form class="upload-form" on:submit=on_upload>
                <select
                    class="form-input"
                    prop:value=move || document_type.get()
                    on:change=move |ev| document_type.set(event_target_value(&ev))
                >
                    {DOCUMENT_TYPES
                        .into_iter()
                        .map(|kind| view! { <option value=kind>{kind}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input class="form-input" type="file" node_ref=file_input/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Uploading..." } else { "Upload" }}
                </button>
            </form>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading documents..."</p> }>
                {move || {
                    let list = documents.get();
                    if list.is_empty() {
                        return view! { <p class="empty-state">"No documents uploaded yet."</p> }.into_any();
                    }
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Type"</th>
                                    <th>"File"</th>
                                    <th>"Uploaded"</th>
                                    <th>"Status"</th>
                                    <th>"Reviewer note"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|doc| {
                                        view! {
                                            <tr>
                                                <td>{doc.document_type.clone()}</td>
                                                <td>
                                                    {match doc.file_url.clone() {
                                                        Some(url) => {
                                                            view! {
                                                                <a href=url target="_blank" rel="noopener">
                                                                    {doc.file_name.clone()}
                                                                </a>
                                                            }
                                                                .into_any()
                                                        }
                                                        None => view! { <span>{doc.file_name.clone()}</span> }.into_any(),
                                                    }}
                                                </td>
                                                <td>{doc.uploaded_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                                <td>
                                                    <StatusBadge label=doc.status.label() tone=document_tone(doc.status)/>
                                                </td>
                                                <td>{doc.reviewer_note.clone().unwrap_or_default()}</td>
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
        </div>
    }
}
