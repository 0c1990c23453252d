//! Candidate self sign-up.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use ats_core::types::{RegisterRequest, UserType};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::toast::ToastState;

const MIN_PASSWORD_LEN: usize = 8;

/// Raw form values before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

/// Build the register payload, or explain what is wrong with the form.
pub fn validate_registration(form: &RegistrationForm) -> Result<RegisterRequest, String> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err("First and last name are required.".to_owned());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.".to_owned());
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters."));
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match.".to_owned());
    }
    let phone = form.phone_number.trim();
    Ok(RegisterRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        phone_number: (!phone.is_empty()).then(|| phone.to_owned()),
        user_type: UserType::Candidate,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_registration(&form.get()) {
            Ok(payload) => payload,
            Err(message) => {
                info.set(message);
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&payload).await {
                    Ok(()) => {
                        crate::util::toast::notify_success(toasts, "Account created. Please sign in.");
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(e.user_message());
                        crate::util::toast::notify_error(toasts, &e);
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, toasts, &navigate);
            busy.set(false);
        }
    };

    let field = move |label: &'static str,
                      kind: &'static str,
                      get: fn(&RegistrationForm) -> String,
                      set: fn(&mut RegistrationForm, String)| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="login-input"
                    type=kind
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
        <div class="login-page">
            <div class="login-card login-card--wide">
                <h1>"Create your account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {field("First name", "text", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                    {field("Last name", "text", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                    {field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {field("Phone (optional)", "tel", |f| f.phone_number.clone(), |f, v| f.phone_number = v)}
                    {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {field("Confirm password", "password", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">"Already registered? " <a href="/login">"Sign in"</a></p>
            </div>
        </div>
    }
}
