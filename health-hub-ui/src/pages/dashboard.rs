//! Dashboard Page
//!
//! Headline counts, programs by category and the enrollment trend.

use health_hub::query::TrendGranularity;
use health_hub::views::dashboard::fetch_dashboard;
use health_hub::views::{DashboardAction, DashboardView};
use leptos::*;

use crate::components::{BarChart, CardSkeleton, PieChart, StatCard};
use crate::state::global::{use_global_state, GlobalState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();
    let screen = create_rw_signal(DashboardView::new(TrendGranularity::default()));

    // Fetch on mount
    load(state.clone(), screen);

    let on_granularity = move |ev: web_sys::Event| {
        let Ok(granularity) = event_target_value(&ev).parse::<TrendGranularity>() else {
            return;
        };
        screen.update(|s| s.granularity = granularity);
        load(state.clone(), screen);
    };

    let stat = move |pick: fn(&DashboardView) -> usize| Signal::derive(move || screen.with(pick));

    view! {
        <div class="container mx-auto px-4 py-12 space-y-8">
            <h1 class="text-3xl font-bold">"Dashboard"</h1>

            // Load error
            {move || screen.with(|s| s.error.clone()).map(|msg| view! {
                <div class="flex justify-between items-center bg-red-100 text-red-700 p-4 rounded-lg" role="alert">
                    <span>{msg}</span>
                    <button
                        class="font-bold ml-4"
                        aria-label="Dismiss"
                        on:click=move |_| screen.update(|s| s.apply(DashboardAction::DismissError))
                    >
                        "×"
                    </button>
                </div>
            })}

            // Headline counts
            <section class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <Show
                    when=move || !screen.with(|s| s.loading)
                    fallback=|| view! { <CardSkeleton /> <CardSkeleton /> <CardSkeleton /> }
                >
                    <StatCard label="Total Clients" icon="👥" value=stat(|s| s.stats.clients) />
                    <StatCard label="Total Programs" icon="♥" value=stat(|s| s.stats.programs) />
                    <StatCard label="Total Enrollments" icon="📋" value=stat(|s| s.stats.enrollments) />
                </Show>
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-white rounded-lg shadow-lg p-6">
                    <h2 class="text-xl font-semibold mb-4">"Programs by Category"</h2>
                    <PieChart data=Signal::derive(move || screen.with(|s| s.categories.clone())) />
                </section>

                <section class="bg-white rounded-lg shadow-lg p-6">
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-xl font-semibold">"Enrollment Trends"</h2>
                        <select
                            class="px-2 py-1 border rounded-lg text-sm"
                            prop:value=move || granularity_value(screen.with(|s| s.granularity))
                            on:change=on_granularity
                        >
                            <option value="month">"By month"</option>
                            <option value="year-month">"By year and month"</option>
                        </select>
                    </div>
                    <BarChart data=Signal::derive(move || screen.with(|s| s.trend.clone())) />
                </section>
            </div>
        </div>
    }
}

fn granularity_value(granularity: TrendGranularity) -> &'static str {
    match granularity {
        TrendGranularity::Month => "month",
        TrendGranularity::YearMonth => "year-month",
    }
}

fn load(state: GlobalState, screen: RwSignal<DashboardView>) {
    spawn_local(async move {
        screen.update(|s| s.apply(DashboardAction::LoadStarted));
        let now = chrono::Utc::now().naive_utc();
        let outcome = fetch_dashboard(&state.backend(), now).await;
        screen.update(|s| s.apply(outcome));
    });
}
