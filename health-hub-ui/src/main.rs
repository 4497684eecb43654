//! Health Hub Web
//!
//! Wellness program management front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing page with testimonials and an animated headline
//! - Client registration and search
//! - Program catalogue with filters, pages and CSV export
//! - Two-step enrollment wizard
//! - Dashboard with category and enrollment-trend charts
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Each page keeps one `health_hub::views` state container in a
//! signal and talks to the backend over HTTP through [`api::GlooBackend`].

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
