//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api::DEFAULT_API_BASE;
use crate::components::{Header, Toast};
use crate::pages::{Clients, Dashboard, Enroll, Home, Programs};
use crate::state::global::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-800 flex flex-col">
                // Navigation header
                <Header />

                // Main content area
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/enroll" view=Enroll />
                        <Route path="/programs" view=Programs />
                        <Route path="/clients" view=Clients />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with backend settings
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer showing and editing the backend URL
#[component]
fn Footer() -> impl IntoView {
    let state = use_global_state();
    let (editing, set_editing) = create_signal(false);
    let draft = create_rw_signal(String::new());

    let state_for_save = state.clone();
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state_for_save.set_api_base(&draft.get_untracked());
        state_for_save.show_success("Backend URL saved");
        set_editing.set(false);
    };

    let state_for_reset = state.clone();
    let on_reset = move |_| {
        state_for_reset.set_api_base(DEFAULT_API_BASE);
        set_editing.set(false);
    };

    let api_base = state.api_base;

    view! {
        <footer class="bg-gray-800 text-gray-300 py-4 px-4">
            <div class="container mx-auto flex flex-col md:flex-row items-center justify-between gap-2 text-sm">
                <span>"© Health Hub"</span>

                {move || {
                    if editing.get() {
                        view! {
                            <form on:submit=on_save.clone() class="flex items-center space-x-2">
                                <input
                                    type="url"
                                    class="px-2 py-1 rounded text-gray-800"
                                    prop:value=move || draft.get()
                                    on:input=move |ev| draft.set(event_target_value(&ev))
                                />
                                <button type="submit" class="px-3 py-1 bg-teal-600 rounded text-white">
                                    "Save"
                                </button>
                                <button type="button" class="px-3 py-1 bg-gray-600 rounded" on:click=on_reset.clone()>
                                    "Reset"
                                </button>
                            </form>
                        }.into_view()
                    } else {
                        view! {
                            <button
                                class="hover:text-white"
                                title="Change backend URL"
                                on:click=move |_| {
                                    draft.set(api_base.get_untracked());
                                    set_editing.set(true);
                                }
                            >
                                {move || format!("Backend: {}", api_base.get())}
                            </button>
                        }.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-teal-600 hover:bg-teal-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
