//! Offers addressed to the candidate; pending ones can be answered.

use ats_core::types::{Offer, OfferStatus};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::status_badge::{StatusBadge, offer_tone};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format::{format_date, format_money};

#[component]
pub fn OffersTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let offers = RwSignal::new(Vec::<Offer>::new());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    if let Some((token, user_id)) = auth.with_untracked(AuthState::credentials) {
        leptos::task::spawn_local(async move {
            match crate::net::api::candidate_offers(&token, &user_id).await {
                Ok(list) => offers.set(list),
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
            loading.set(false);
        });
    }

    let respond = move |offer_id: String, answer: OfferStatus| {
        if busy.get_untracked() {
            return;
        }
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::respond_to_offer(&token, &offer_id, answer).await {
                Ok(()) => {
                    offers.update(|list| {
                        if let Some(offer) = list.iter_mut().find(|offer| offer.offer_id == offer_id) {
                            offer.status = answer;
                        }
                    });
                    let message = if answer == OfferStatus::Accepted { "Offer accepted." } else { "Offer declined." };
                    crate::util::toast::notify_success(toasts, message);
                }
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, offer_id, answer, toasts);
            busy.set(false);
        }
    };

    view! {
        <Show when=move || !loading.get() fallback=move || view! { <p>"Loading offers..."</p> }>
            {move || {
                let list = offers.get();
                if list.is_empty() {
                    return view! { <p class="empty-state">"No offers yet."</p> }.into_any();
                }
                list.into_iter()
                    .map(|offer| {
                        let accept_id = offer.offer_id.clone();
                        let decline_id = offer.offer_id.clone();
                        let pending = offer.awaiting_response();
                        view! {
                            <article class="offer-card">
                                <header>
                                    <h3>{offer.job_title.clone().unwrap_or_else(|| "Offer".to_owned())}</h3>
                                    <StatusBadge label=offer.status.label() tone=offer_tone(offer.status)/>
                                </header>
                                <p>{offer.salary.map(|s| format!("Salary: {}", format_money(s))).unwrap_or_default()}</p>
                                <p>
                                    {offer
                                        .start_date
                                        .as_deref()
                                        .map(|d| format!("Start date: {}", format_date(d)))
                                        .unwrap_or_default()}
                                </p>
                                <p class="offer-card__notes">{offer.notes.clone().unwrap_or_default()}</p>
                                <Show when=move || pending>
                                    <div class="offer-card__actions">
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || busy.get()
                                            on:click={
                                                let id = accept_id.clone();
                                                move |_| respond(id.clone(), OfferStatus::Accepted)
                                            }
                                        >
                                            "Accept"
                                        </button>
                                        <button
                                            class="btn btn--danger"
                                            disabled=move || busy.get()
                                            on:click={
                                                let id = decline_id.clone();
                                                move |_| respond(id.clone(), OfferStatus::Declined)
                                            }
                                        >
                                            "Decline"
                                        </button>
                                    </div>
                                </Show>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </Show>
    }
}
