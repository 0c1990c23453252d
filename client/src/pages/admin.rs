//! Admin console: staff accounts and their roles.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use ats_core::types::{Employee, EmployeeDraft, UserType};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Raw fields of the create-employee dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub user_type: UserType,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            department: String::new(),
            user_type: UserType::Employee,
        }
    }
}

pub fn validate_employee(form: &EmployeeForm) -> Result<EmployeeDraft, &'static str> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err("First and last name are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if form.password.is_empty() {
        return Err("Set an initial password.");
    }
    let department = form.department.trim();
    Ok(EmployeeDraft {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        user_type: form.user_type,
        department: (!department.is_empty()).then(|| department.to_owned()),
    })
}

/// Admins may not change their own role or delete themselves.
pub fn is_self(employee: &Employee, signed_in_user_id: Option<&str>) -> bool {
    signed_in_user_id == Some(employee.employee_id.as_str())
}

#[component]
pub fn AdminConsolePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let employees = RwSignal::new(Vec::<Employee>::new());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let show_create = RwSignal::new(false);
    let form = RwSignal::new(EmployeeForm::default());
    let form_error = RwSignal::new(String::new());
    let delete_employee_id = RwSignal::new(None::<String>);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        if let Some(token) = auth.with_untracked(AuthState::token) {
            leptos::task::spawn_local(async move {
                match crate::net::api::list_employees(&token).await {
                    Ok(list) => employees.set(list),
                    Err(e) => crate::util::toast::notify_error(toasts, &e),
                }
                loading.set(false);
            });
        }
    };
    reload();

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_employee(&form.get()) {
            Ok(draft) => draft,
            Err(message) => {
                form_error.set(message.to_owned());
                return;
            }
        };
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_employee(&token, &draft).await {
                Ok(()) => {
                    show_create.set(false);
                    crate::util::toast::notify_success(toasts, "Employee created.");
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
            let _ = (token, draft);
            busy.set(false);
        }
    };

    let change_role = move |employee_id: String, user_type: UserType| {
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_employee_role(&token, &employee_id, user_type).await {
                Ok(()) => {
                    employees.update(|list| {
                        if let Some(employee) = list.iter_mut().find(|e| e.employee_id == employee_id) {
                            employee.user_type = user_type;
                        }
                    });
                    crate::util::toast::notify_success(toasts, format!("Role changed to {}.", user_type.label()));
                }
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, employee_id, user_type);
        }
    };

    let on_delete_confirm = move |_| {
        let Some(employee_id) = delete_employee_id.get() else {
            return;
        };
        delete_employee_id.set(None);
        let Some(token) = auth.with_untracked(AuthState::token) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_employee(&token, &employee_id).await {
                Ok(()) => {
                    employees.update(|list| list.retain(|e| e.employee_id != employee_id));
                    crate::util::toast::notify_success(toasts, "Employee removed.");
                }
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, employee_id);
        }
    };

    let text_field = move |label: &'static str,
                           kind: &'static str,
                           get: fn(&EmployeeForm) -> String,
                           set: fn(&mut EmployeeForm, String)| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="form-input"
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

    let role_options = |selected: UserType| {
        UserType::ALL
            .into_iter()
            .map(|role| view! { <option value=role.as_str() selected={role == selected}>{role.label()}</option> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="admin-page">
            <header class="dashboard-page__header">
                <h1>"Admin console"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        form.set(EmployeeForm::default());
                        form_error.set(String::new());
                        show_create.set(true);
                    }
                >
                    "+ New employee"
                </button>
            </header>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading employees..."</p> }>
                {move || {
                    let list = employees.get();
                    if list.is_empty() {
                        return view! { <p class="empty-state">"No employees yet."</p> }.into_any();
                    }
                    let me = auth.with(AuthState::user_id);
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Department"</th>
                                    <th>"Role"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|employee| {
                                        let locked = is_self(&employee, me.as_deref());
                                        let role_id = employee.employee_id.clone();
                                        let delete_id = employee.employee_id.clone();
                                        view! {
                                            <tr>
                                                <td>{format!("{} {}", employee.first_name, employee.last_name)}</td>
                                                <td>{employee.email.clone()}</td>
                                                <td>{employee.department.clone().unwrap_or_default()}</td>
                                                <td>
                                                    <select
                                                        class="form-input"
                                                        disabled=locked
                                                        on:change=move |ev| {
                                                            if let Ok(role) = event_target_value(&ev).parse() {
                                                                change_role(role_id.clone(), role);
                                                            }
                                                        }
                                                    >
                                                        {role_options(employee.user_type)}
                                                    </select>
                                                </td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="btn btn--danger"
                                                        disabled=locked
                                                        on:click=move |_| delete_employee_id.set(Some(delete_id.clone()))
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

            <Show when=move || show_create.get()>
                <div class="dialog-backdrop" on:click=move |_| show_create.set(false)>
                    <form class="dialog" on:click=|ev| ev.stop_propagation() on:submit=on_create>
                        <h2>"New employee"</h2>
                        {text_field("First name", "text", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                        {text_field("Last name", "text", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                        {text_field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                        {text_field("Initial password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                        {text_field("Department", "text", |f| f.department.clone(), |f, v| f.department = v)}
                        <label class="form-field">
                            <span class="form-field__label">"Role"</span>
                            <select
                                class="form-input"
                                on:change=move |ev| {
                                    if let Ok(role) = event_target_value(&ev).parse() {
                                        form.update(|f| f.user_type = role);
                                    }
                                }
                            >
                                {move || role_options(form.with(|f| f.user_type))}
                            </select>
                        </label>
                        <Show when=move || !form_error.get().is_empty()>
                            <p class="dialog__error">{move || form_error.get()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| show_create.set(false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Creating..." } else { "Create" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            <Show when=move || delete_employee_id.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| delete_employee_id.set(None)>
                    <div class="dialog" on:click=|ev| ev.stop_propagation()>
                        <h2>"Delete employee?"</h2>
                        <p>"They will lose access immediately."</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| delete_employee_id.set(None)>
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
