//! Global Application State
//!
//! Reactive state shared by every page. Page data itself lives in the
//! per-page view containers; this only holds the backend URL and toasts.

use leptos::*;

use crate::api::{self, GlooBackend};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Backend base URL, mirrored in local storage
    pub api_base: RwSignal<String>,
    /// Error message (for toasts)
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        api_base: create_rw_signal(api::get_api_base()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Backend client for the current URL
    pub fn backend(&self) -> GlooBackend {
        GlooBackend::new(self.api_base.get_untracked())
    }

    /// Change and persist the backend URL
    pub fn set_api_base(&self, url: &str) {
        api::set_api_base(url);
        self.api_base.set(api::get_api_base());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
