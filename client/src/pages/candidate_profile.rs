//! Candidate profile editor.
//!
//! The first save creates the profile (`POST /Candidate`); later saves
//! update it. Every successful save re-runs the completion check so the
//! gated dashboard tabs unlock as soon as the backend agrees.

#[cfg(test)]
#[path = "candidate_profile_test.rs"]
mod candidate_profile_test;

use ats_core::ApiError;
use ats_core::completion::missing_required_fields;
use ats_core::types::{CandidateProfile, UserRecord};
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format::split_list;

/// Form contents after the initial lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedProfile {
    pub profile: CandidateProfile,
    /// Whether the backend already has a record (decides POST vs PUT).
    pub exists: bool,
}

/// Turn the profile lookup into editor state. A 404 means "not created yet"
/// and seeds the form from the signed-in user; any other failure is returned
/// alongside the seeded form so the caller can report it.
pub fn profile_from_lookup(
    result: Result<CandidateProfile, ApiError>,
    user: &UserRecord,
) -> (LoadedProfile, Option<ApiError>) {
    match result {
        Ok(profile) => (LoadedProfile { profile, exists: true }, None),
        Err(err) => {
            let seeded = LoadedProfile { profile: CandidateProfile::seeded_from(user), exists: false };
            if err.is_not_found() { (seeded, None) } else { (seeded, Some(err)) }
        }
    }
}

/// Parse the years-of-experience field; blank means unknown.
pub fn parse_experience(raw: &str) -> Result<Option<u32>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| "Years of experience must be a whole number.".to_owned())
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn ProfileTab(on_saved: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let profile = RwSignal::new(CandidateProfile::default());
    let skills_text = RwSignal::new(String::new());
    let experience_text = RwSignal::new(String::new());
    let exists = RwSignal::new(false);
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);

    let apply_loaded = move |loaded: LoadedProfile| {
        skills_text.set(loaded.profile.skills.join(", "));
        experience_text.set(loaded.profile.experience_years.map(|y| y.to_string()).unwrap_or_default());
        exists.set(loaded.exists);
        profile.set(loaded.profile);
        loading.set(false);
    };

    #[cfg(feature = "hydrate")]
    if let (Some((token, user_id)), Some(user)) =
        auth.with_untracked(|state| (state.credentials(), state.user().cloned()))
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_profile(&token, &user_id).await;
            let (loaded, err) = profile_from_lookup(result, &user);
            if let Some(err) = err {
                crate::util::toast::notify_error(toasts, &err);
            }
            apply_loaded(loaded);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = apply_loaded;
    }

    // Checklist reflects unsaved edits too.
    let missing = move || {
        let mut draft = profile.get();
        draft.skills = split_list(&skills_text.get());
        missing_required_fields(&draft)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let experience_years = match parse_experience(&experience_text.get()) {
            Ok(years) => years,
            Err(message) => {
                crate::util::toast::notify(toasts, crate::state::toast::ToastKind::Warning, message);
                return;
            }
        };
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        let mut draft = profile.get();
        draft.skills = split_list(&skills_text.get());
        draft.experience_years = experience_years;
        draft.linkedin_url = draft.linkedin_url.as_deref().and_then(optional);
        draft.summary = draft.summary.as_deref().and_then(optional);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_profile(&token, &draft, exists.get_untracked()).await {
                Ok(()) => {
                    exists.set(true);
                    profile.set(draft);
                    crate::util::toast::notify_success(toasts, "Profile saved.");
                    on_saved.run(());
                }
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, draft, on_saved);
            busy.set(false);
        }
    };

    let text_field = move |label: &'static str,
                           get: fn(&CandidateProfile) -> String,
                           set: fn(&mut CandidateProfile, String)| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || profile.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        profile.update(|p| set(p, value));
                    }
                />
            </label>
        }
    };

    view! {
        <Show when=move || !loading.get() fallback=move || view! { <p>"Loading profile..."</p> }>
            <form class="profile-form" on:submit=on_submit>
                <div class="profile-form__grid">
                    {text_field("First name", |p| p.first_name.clone(), |p, v| p.first_name = v)}
                    {text_field("Last name", |p| p.last_name.clone(), |p, v| p.last_name = v)}
                    {text_field("Email", |p| p.email.clone(), |p, v| p.email = v)}
                    {text_field("Phone number", |p| p.phone_number.clone(), |p, v| p.phone_number = v)}
                    {text_field("Address", |p| p.address.clone(), |p, v| p.address = v)}
                    {text_field("City", |p| p.city.clone(), |p, v| p.city = v)}
                    {text_field("Education", |p| p.education.clone(), |p, v| p.education = v)}
                    {text_field(
                        "LinkedIn URL",
                        |p| p.linkedin_url.clone().unwrap_or_default(),
                        |p, v| p.linkedin_url = Some(v),
                    )}
                    <label class="form-field">
                        <span class="form-field__label">"Years of experience"</span>
                        <input
                            class="form-input"
                            type="number"
                            min="0"
                            prop:value=move || experience_text.get()
                            on:input=move |ev| experience_text.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Skills (comma separated)"</span>
                        <input
                            class="form-input"
                            type="text"
                            prop:value=move || skills_text.get()
                            on:input=move |ev| skills_text.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="form-field">
                    <span class="form-field__label">"Summary"</span>
                    <textarea
                        class="form-input form-input--multiline"
                        rows="4"
                        prop:value=move || profile.with(|p| p.summary.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            profile.update(|p| p.summary = Some(value));
                        }
                    ></textarea>
                </label>
                <Show when=move || !missing().is_empty()>
                    <div class="profile-form__missing">
                        <p>"Still missing:"</p>
                        <ul>
                            {move || {
                                missing()
                                    .into_iter()
                                    .map(|field| view! { <li>{field}</li> })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </div>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || match (busy.get(), exists.get()) {
                        (true, _) => "Saving...",
                        (false, true) => "Save profile",
                        (false, false) => "Create profile",
                    }}
                </button>
            </form>
        </Show>
    }
}
