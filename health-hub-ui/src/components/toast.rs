//! Toasts
//!
//! App-wide notices raised through `GlobalState::show_success` and
//! `GlobalState::show_error`. They clear on their own timers or when
//! dismissed.

use health_hub::views::{Notice, Notices};
use leptos::*;

use crate::state::global::use_global_state;

/// Floating stack of the current global notices, errors first
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();
    let (success, error) = (state.success, state.error);

    let notices = move || Notices {
        success: success.get(),
        error: error.get(),
    };

    view! {
        <div class="fixed bottom-20 right-4 z-50 flex flex-col gap-2" aria-live="polite">
            {move || {
                notices()
                    .iter()
                    .map(|notice| {
                        let (mark, tone) = toast_style(&notice);
                        let target = if notice.is_error() { error } else { success };
                        view! {
                            <div class=format!("flex items-center gap-3 {} text-white pl-4 pr-2 py-3 rounded-lg shadow-lg", tone)>
                                <span aria-hidden="true">{mark}</span>
                                <span class="text-sm font-medium">{notice.message().to_string()}</span>
                                <button
                                    class="ml-2 px-2 opacity-75 hover:opacity-100"
                                    aria-label="Dismiss"
                                    on:click=move |_| target.set(None)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Leading mark and background class of a toast
fn toast_style(notice: &Notice) -> (&'static str, &'static str) {
    match notice {
        Notice::Error(_) => ("!", "bg-red-600"),
        Notice::Success(_) => ("✓", "bg-teal-600"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_follow_notice_order() {
        let notices = Notices {
            success: Some("Exported 3 programs".to_string()),
            error: Some("Export failed".to_string()),
        };
        let styles: Vec<_> = notices.iter().map(|n| toast_style(&n)).collect();

        assert_eq!(styles, vec![("!", "bg-red-600"), ("✓", "bg-teal-600")]);
    }
}
