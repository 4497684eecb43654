//! Enroll Page
//!
//! Two-step wizard: choose a client, choose a program, submit.

use health_hub::model::{ClientId, ProgramId};
use health_hub::views::enrollment::{enroll, fetch_choices};
use health_hub::views::{EnrollAction, EnrollView, WizardStep};
use leptos::*;

use crate::components::{Banners, Loading};
use crate::state::global::use_global_state;

/// Enrollment page component
#[component]
pub fn Enroll() -> impl IntoView {
    let state = use_global_state();
    let screen = create_rw_signal(EnrollView::new());

    // Fetch both lists on mount
    let state_for_load = state.clone();
    spawn_local(async move {
        screen.update(|s| s.apply(EnrollAction::LoadStarted));
        let outcome = fetch_choices(&state_for_load.backend()).await;
        screen.update(|s| s.apply(outcome));
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mut prepared = None;
        screen.update(|s| prepared = s.prepare_submit());
        let Some(enrollment) = prepared else {
            return;
        };

        let state = state.clone();
        spawn_local(async move {
            let outcome = enroll(&state.backend(), enrollment).await;
            screen.update(|s| s.apply(outcome));
        });
    };

    let step = move || screen.with(|s| s.wizard.step());
    let submitting = move || screen.with(|s| s.wizard.is_submitting());
    let notices = Signal::derive(move || screen.with(|s| s.notices.clone()));

    view! {
        <div class="container mx-auto px-4 py-12 max-w-2xl space-y-8">
            <h1 class="text-3xl font-bold text-center">"Enroll in a Program"</h1>

            // Step indicator
            <div class="flex items-center justify-center space-x-4">
                <StepBadge number=1 active=Signal::derive(move || step().number() >= 1) label="Choose Client" />
                <div class="w-12 h-1 bg-gray-300" />
                <StepBadge number=2 active=Signal::derive(move || step().number() >= 2) label="Choose Program" />
            </div>

            <Banners
                notices=notices
                on_dismiss=Callback::new(move |_| screen.update(|s| s.apply(EnrollAction::DismissError)))
            />

            <Show when=move || !screen.with(|s| s.loading) fallback=|| view! { <Loading /> }>
                <form on:submit=on_submit.clone() class="bg-white p-6 rounded-lg shadow-lg space-y-6">
                    <label class="block">
                        <span class="text-gray-700 font-medium">"Client"</span>
                        <select
                            class="mt-1 w-full px-4 py-2 border rounded-lg"
                            prop:value=move || screen.with(|s| s.wizard.client().map(|id| id.to_string()).unwrap_or_default())
                            on:change=move |ev| {
                                let client = event_target_value(&ev).parse::<ClientId>().ok();
                                screen.update(|s| s.apply(EnrollAction::SelectClient(client)));
                            }
                        >
                            <option value="">"Select a client"</option>
                            {move || screen.with(|s| {
                                s.clients
                                    .iter()
                                    .map(|c| view! { <option value=c.id.to_string()>{c.option_label()}</option> })
                                    .collect_view()
                            })}
                        </select>
                    </label>

                    <Show when=move || step() != WizardStep::AwaitingClient>
                        <label class="block">
                            <span class="text-gray-700 font-medium">"Program"</span>
                            <select
                                class="mt-1 w-full px-4 py-2 border rounded-lg"
                                prop:value=move || screen.with(|s| s.wizard.program().map(|id| id.to_string()).unwrap_or_default())
                                on:change=move |ev| {
                                    let program = event_target_value(&ev).parse::<ProgramId>().ok();
                                    screen.update(|s| s.apply(EnrollAction::SelectProgram(program)));
                                }
                            >
                                <option value="">"Select a program"</option>
                                {move || screen.with(|s| {
                                    s.programs
                                        .iter()
                                        .map(|p| view! { <option value=p.id.to_string()>{p.name.clone()}</option> })
                                        .collect_view()
                                })}
                            </select>
                        </label>
                    </Show>

                    <button
                        type="submit"
                        class="w-full bg-teal-600 hover:bg-teal-700 disabled:opacity-50 text-white font-semibold py-3 rounded-lg"
                        disabled=submitting
                    >
                        {move || if submitting() { "Enrolling..." } else { "Enroll" }}
                    </button>
                </form>
            </Show>

            // Confirmation overlay
            <Show when=move || screen.with(EnrollView::show_confirmation)>
                <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
                    <div class="bg-white rounded-lg p-8 max-w-md text-center shadow-xl">
                        <div class="text-5xl text-green-500 mb-4">"✓"</div>
                        <h2 class="text-2xl font-bold mb-2">"You're enrolled!"</h2>
                        <p class="text-gray-600 mb-6">
                            {move || screen.with(|s| {
                                match (s.selected_client(), s.selected_program()) {
                                    (Some(c), Some(p)) => format!("{} joined {}.", c.name, p.name),
                                    _ => s.notices.success.clone().unwrap_or_default(),
                                }
                            })}
                        </p>
                        <button
                            class="bg-teal-600 hover:bg-teal-700 text-white px-6 py-2 rounded-lg"
                            on:click=move |_| screen.update(|s| s.apply(EnrollAction::DismissConfirmation))
                        >
                            "Close"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn StepBadge(number: u8, active: Signal<bool>, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <span class=move || {
                let base = "w-8 h-8 rounded-full flex items-center justify-center font-bold";
                if active.get() {
                    format!("{} bg-teal-600 text-white", base)
                } else {
                    format!("{} bg-gray-300 text-gray-600", base)
                }
            }>
                {number}
            </span>
            <span class="text-sm text-gray-700">{label}</span>
        </div>
    }
}
