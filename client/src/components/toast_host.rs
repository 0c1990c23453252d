//! Fixed-position stack of toasts.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.css_class()>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
