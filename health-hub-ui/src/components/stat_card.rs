//! Stat Card Component

use leptos::*;

/// A headline count with an icon
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    icon: &'static str,
    #[prop(into)]
    value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="bg-white border-2 border-teal-100 rounded-lg shadow-lg p-6 flex items-center">
            <span class="text-4xl text-teal-600 mr-4">{icon}</span>
            <div>
                <p class="text-gray-600">{label}</p>
                <p class="text-3xl font-bold text-gray-800">{move || value.get()}</p>
            </div>
        </div>
    }
}
