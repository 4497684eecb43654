//! API Module
//!
//! Browser implementation of the Health Hub backend trait.

pub mod client;

pub use client::{get_api_base, set_api_base, GlooBackend, DEFAULT_API_BASE};
