//! Page banners
//!
//! Inline success/error messages of a page, as opposed to toasts.

use health_hub::views::{Notice, Notices};
use leptos::*;

/// Render a page's notices; `on_dismiss` adds a close button to errors
#[component]
pub fn Banners(
    #[prop(into)]
    notices: Signal<Notices>,
    #[prop(optional, into)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="space-y-3 mb-8">
            {move || {
                notices
                    .get()
                    .iter()
                    .map(|notice| {
                        let class = if notice.is_error() {
                            "flex justify-between items-center bg-red-100 text-red-700 p-4 rounded-lg"
                        } else {
                            "flex justify-between items-center bg-green-100 text-green-700 p-4 rounded-lg"
                        };
                        let dismiss = match (&notice, on_dismiss) {
                            (Notice::Error(_), Some(cb)) => Some(view! {
                                <button
                                    class="font-bold ml-4"
                                    aria-label="Dismiss"
                                    on:click=move |_| cb.call(())
                                >
                                    "×"
                                </button>
                            }),
                            _ => None,
                        };
                        view! {
                            <div class=class role="alert">
                                <span>{notice.message().to_string()}</span>
                                {dismiss}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
