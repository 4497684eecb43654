//! Clients Page
//!
//! Registration form and searchable client list.

use health_hub::model::Gender;
use health_hub::views::clients::{create_client, fetch_clients};
use health_hub::views::{ClientsAction, ClientsView, RefreshPolicy};
use leptos::*;

use crate::components::{Banners, Loading};
use crate::state::global::{use_global_state, GlobalState};

/// Clients page component
#[component]
pub fn Clients() -> impl IntoView {
    let state = use_global_state();
    let screen = create_rw_signal(ClientsView::new(RefreshPolicy::default()));

    // Fetch on mount
    load(state.clone(), screen);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mut prepared = None;
        screen.update(|s| prepared = s.prepare_submit());
        let Some(client) = prepared else {
            return;
        };

        let state = state_for_submit.clone();
        spawn_local(async move {
            let api = state.backend();
            let outcome = create_client(&api, client).await;
            let refetch = screen.with_untracked(|s| s.wants_refetch(&outcome));
            screen.update(|s| s.apply(outcome));
            if refetch {
                screen.update(|s| s.apply(ClientsAction::LoadStarted));
                let outcome = fetch_clients(&api).await;
                screen.update(|s| s.apply(outcome));
            }
        });
    };

    let notices = Signal::derive(move || screen.with(|s| s.notices.clone()));

    view! {
        <div class="container mx-auto px-4 py-12 space-y-8">
            <h1 class="text-3xl font-bold">"Clients"</h1>

            <Banners
                notices=notices
                on_dismiss=Callback::new(move |_| screen.update(|s| s.apply(ClientsAction::DismissError)))
            />

            // Registration form
            <form on:submit=on_submit class="bg-white p-6 rounded-lg shadow-lg grid md:grid-cols-2 gap-4">
                <input
                    type="text"
                    placeholder="Name"
                    class="px-4 py-2 border rounded-lg"
                    prop:value=move || screen.with(|s| s.form.name.clone())
                    on:input=move |ev| screen.update(|s| s.apply(ClientsAction::SetName(event_target_value(&ev))))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Age"
                    class="px-4 py-2 border rounded-lg"
                    prop:value=move || screen.with(|s| s.form.age.clone())
                    on:input=move |ev| screen.update(|s| s.apply(ClientsAction::SetAge(event_target_value(&ev))))
                />
                <select
                    class="px-4 py-2 border rounded-lg"
                    prop:value=move || screen.with(|s| s.form.gender.map(|g| g.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let gender = event_target_value(&ev).parse::<Gender>().ok();
                        screen.update(|s| s.apply(ClientsAction::SetGender(gender)));
                    }
                >
                    <option value="">"Select Gender"</option>
                    {Gender::all()
                        .iter()
                        .map(|g| view! { <option value=g.as_str()>{g.as_str()}</option> })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Contact"
                    class="px-4 py-2 border rounded-lg"
                    prop:value=move || screen.with(|s| s.form.contact.clone())
                    on:input=move |ev| screen.update(|s| s.apply(ClientsAction::SetContact(event_target_value(&ev))))
                />
                <button
                    type="submit"
                    class="md:col-span-2 bg-teal-600 hover:bg-teal-700 disabled:opacity-50 text-white font-semibold py-2 rounded-lg"
                    disabled=move || screen.with(|s| s.submitting)
                >
                    {move || if screen.with(|s| s.submitting) { "Adding..." } else { "Add Client" }}
                </button>
            </form>

            // Search
            <input
                type="search"
                placeholder="Search clients by name..."
                class="w-full px-4 py-2 border rounded-lg"
                prop:value=move || screen.with(|s| s.search.clone())
                on:input=move |ev| screen.update(|s| s.apply(ClientsAction::SetSearch(event_target_value(&ev))))
            />

            // List
            {move || {
                if screen.with(|s| s.loading) {
                    return view! { <Loading /> }.into_view();
                }
                screen.with(|s| {
                    let clients = s.filtered();
                    if clients.is_empty() {
                        return view! { <p class="text-gray-500 text-center">"No clients found"</p> }.into_view();
                    }
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {clients
                                .into_iter()
                                .map(|c| view! {
                                    <div class="bg-white p-6 rounded-lg shadow">
                                        <h3 class="text-xl font-semibold text-teal-600">{c.name.clone()}</h3>
                                        <p class="text-gray-600">{format!("Age: {}", c.age_or_placeholder())}</p>
                                        <p class="text-gray-600">{format!("Gender: {}", c.gender_or_placeholder())}</p>
                                        <p class="text-gray-600">{format!("Contact: {}", c.contact_or_placeholder())}</p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                })
            }}
        </div>
    }
}

fn load(state: GlobalState, screen: RwSignal<ClientsView>) {
    spawn_local(async move {
        screen.update(|s| s.apply(ClientsAction::LoadStarted));
        let outcome = fetch_clients(&state.backend()).await;
        screen.update(|s| s.apply(outcome));
    });
}
