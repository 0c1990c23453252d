//! HR workspace shell with one tab per hiring task.

#[cfg(test)]
#[path = "hr_test.rs"]
mod hr_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::pages::hr_analytics::AnalyticsTab;
use crate::pages::hr_applicants::ApplicantsTab;
use crate::pages::hr_documents::VerificationTab;
use crate::pages::hr_postings::PostingsTab;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HrTab {
    #[default]
    Postings,
    Applicants,
    Documents,
    Analytics,
}

impl HrTab {
    pub const ALL: [Self; 4] = [Self::Postings, Self::Applicants, Self::Documents, Self::Analytics];

    pub fn label(self) -> &'static str {
        match self {
            Self::Postings => "Job postings",
            Self::Applicants => "Applicants",
            Self::Documents => "Document review",
            Self::Analytics => "Analytics",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Postings => "postings",
            Self::Applicants => "applicants",
            Self::Documents => "documents",
            Self::Analytics => "analytics",
        }
    }

    /// Unknown or missing slugs open the default tab.
    pub fn from_query(slug: Option<&str>) -> Self {
        slug.and_then(|slug| Self::ALL.into_iter().find(|tab| tab.slug() == slug)).unwrap_or_default()
    }
}

#[component]
pub fn HrWorkspacePage() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();
    let current = Memo::new(move |_| query.with(|q| HrTab::from_query(q.get("tab").as_deref())));

    let tab_buttons = move || {
        HrTab::ALL
            .into_iter()
            .map(|tab| {
                let navigate = navigate.clone();
                view! {
                    <button
                        class=move || {
                            if current.get() == tab { "tab-bar__tab tab-bar__tab--active" } else { "tab-bar__tab" }
                        }
                        on:click=move |_| {
                            navigate(&format!("/hr?tab={}", tab.slug()), NavigateOptions::default());
                        }
                    >
                        {tab.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="hr-page">
            <header class="dashboard-page__header">
                <h1>"HR workspace"</h1>
            </header>
            <nav class="tab-bar">{tab_buttons}</nav>
            <section class="dashboard-page__body">
                {move || match current.get() {
                    HrTab::Postings => view! { <PostingsTab/> }.into_any(),
                    HrTab::Applicants => view! { <ApplicantsTab/> }.into_any(),
                    HrTab::Documents => view! { <VerificationTab/> }.into_any(),
                    HrTab::Analytics => view! { <AnalyticsTab/> }.into_any(),
                }}
            </section>
        </div>
    }
}
