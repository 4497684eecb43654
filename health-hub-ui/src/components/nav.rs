//! Navigation Component
//!
//! Header bar with brand, links and the collapsible mobile menu.

use health_hub::views::{NavMenu, Route};
use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    let menu = create_rw_signal(NavMenu::new());

    view! {
        <header class="bg-white shadow-md sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-2">
                        <span class="text-2xl text-teal-600">"♥"</span>
                        <span class="text-xl font-bold text-gray-800">"Health Hub"</span>
                    </A>

                    // Desktop links
                    <nav class="hidden md:flex items-center space-x-1">
                        <NavLinks menu=menu />
                    </nav>

                    // Menu toggle
                    <button
                        class="md:hidden text-gray-700 text-2xl"
                        aria-label="Toggle menu"
                        on:click=move |_| menu.update(NavMenu::toggle)
                    >
                        {move || if menu.with(NavMenu::is_open) { "✕" } else { "☰" }}
                    </button>
                </div>

                // Mobile links
                <Show when=move || menu.with(NavMenu::is_open)>
                    <nav class="md:hidden flex flex-col pb-4 space-y-1">
                        <NavLinks menu=menu />
                    </nav>
                </Show>
            </div>
        </header>
    }
}

/// Links for every route
#[component]
fn NavLinks(menu: RwSignal<NavMenu>) -> impl IntoView {
    Route::all()
        .iter()
        .copied()
        .map(|route| {
            view! {
                <span on:click=move |_| menu.update(|m| {
                    m.choose(route);
                })>
                    <A
                        href=route.path()
                        exact=route == Route::Home
                        class="block px-4 py-2 rounded-lg text-gray-600 hover:text-teal-600 hover:bg-teal-50 transition-colors"
                        active_class="text-teal-600 font-semibold"
                    >
                        {route.label()}
                    </A>
                </span>
            }
        })
        .collect_view()
}
