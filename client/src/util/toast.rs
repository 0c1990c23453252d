//! Toast helpers with auto-dismiss.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every failed request ends up here. Toasts disappear on their own after
//! [`TOAST_TTL_MS`] in the browser; server renders never schedule timers.

use ats_core::ApiError;
use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u32 = 4_000;

/// Push a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Surface a failed request to the user.
pub fn notify_error(toasts: RwSignal<ToastState>, err: &ApiError) {
    log::warn!("request failed: {err}");
    notify(toasts, ToastKind::Error, err.user_message());
}

pub fn notify_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}
