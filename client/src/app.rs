//! Root application component with routing and context providers.

use ats_core::types::UserType;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::{ProtectedRoute, PublicOnlyRoute, RoleRoute};
use crate::components::nav_bar::NavBar;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    access_denied::AccessDeniedPage, admin::AdminConsolePage, dashboard::DashboardPage, home::HomePage,
    hr::HrWorkspacePage, login::LoginPage, register::RegisterPage,
};
use crate::state::{auth::AuthState, completion::CompletionState, toast::ToastState};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, completion, and toast contexts, hydrates the session
/// from `localStorage` once in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::<BrowserStorage>::default());
    let completion = RwSignal::new(CompletionState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(completion);
    provide_context(toasts);

    // Effects only run in the browser, so SSR output stays in the loading state.
    Effect::new(move || {
        auth.update(AuthState::init);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ats.css"/>
        <Title text="Recruitment Portal"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <PublicOnlyRoute><LoginPage/></PublicOnlyRoute> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <PublicOnlyRoute><RegisterPage/></PublicOnlyRoute> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("hr")
                        view=|| view! { <RoleRoute role=UserType::Employee><HrWorkspacePage/></RoleRoute> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RoleRoute role=UserType::Admin><AdminConsolePage/></RoleRoute> }
                    />
                    <Route path=StaticSegment("access-denied") view=AccessDeniedPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
