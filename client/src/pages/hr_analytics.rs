//! Hiring funnel summary.

#[cfg(test)]
#[path = "hr_analytics_test.rs"]
mod hr_analytics_test;

use ats_core::types::AnalyticsSummary;
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Applications per status, largest first; ties keep alphabetical order.
pub fn status_rows(summary: &AnalyticsSummary) -> Vec<(String, u64)> {
    let mut rows: Vec<(String, u64)> =
        summary.applications_by_status.iter().map(|(status, count)| (status.clone(), *count)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

/// Width of a funnel bar as a CSS percentage of `total`.
pub fn bar_width(count: u64, total: u64) -> String {
    if total == 0 {
        return "0%".to_owned();
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = count as f64 * 100.0 / total as f64;
    format!("{:.1}%", pct.min(100.0))
}

#[component]
pub fn AnalyticsTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let summary = RwSignal::new(None::<AnalyticsSummary>);

    #[cfg(feature = "hydrate")]
    if let Some(token) = auth.with_untracked(AuthState::token) {
        leptos::task::spawn_local(async move {
            match crate::net::api::analytics_summary(&token).await {
                Ok(data) => summary.set(Some(data)),
                Err(e) => crate::util::toast::notify_error(toasts, &e),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, toasts);
    }

    view! {
        <Show
            when=move || summary.with(Option::is_some)
            fallback=move || view! { <p>"Loading analytics..."</p> }
        >
            {move || {
                let data = summary.get().unwrap_or_default();
                let total = data.total_applications;
                let stat = |label: &'static str, value: String| {
                    view! {
                        <div class="stat-card">
                            <span class="stat-card__value">{value}</span>
                            <span class="stat-card__label">{label}</span>
                        </div>
                    }
                };
                view! {
                    <div class="analytics-tab">
                        <div class="stat-grid">
                            {stat("Open jobs", format!("{} / {}", data.open_jobs, data.total_jobs))}
                            {stat("Applications", total.to_string())}
                            {stat("Hires", data.total_hires.to_string())}
                            {stat(
                                "Offer acceptance",
                                data.offer_acceptance_rate().map(|r| format!("{r:.0}%")).unwrap_or_else(|| "n/a".to_owned()),
                            )}
                            {stat(
                                "Avg. days to hire",
                                data.average_days_to_hire.map(|d| format!("{d:.1}")).unwrap_or_else(|| "n/a".to_owned()),
                            )}
                        </div>
                        <h3>"Applications by status"</h3>
                        <ul class="funnel">
                            {status_rows(&data)
                                .into_iter()
                                .map(|(status, count)| {
                                    view! {
                                        <li class="funnel__row">
                                            <span class="funnel__label">{status}</span>
                                            <span class="funnel__bar" style:width=bar_width(count, total)></span>
                                            <span class="funnel__count">{count}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                }
            }}
        </Show>
    }
}
