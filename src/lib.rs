//! # Health Hub
//!
//! Client for a small wellness practice: register clients, publish
//! programs, enroll clients in programs and watch the numbers on a
//! dashboard. The data lives in an external REST backend; this crate holds
//! everything on the client side of it.
//!
//! ## Modules
//!
//! - [`model`]: Records exchanged with the backend and form validation
//! - [`query`]: Filtering, pagination and dashboard histograms
//! - [`export`]: CSV export of the program list
//! - [`api`]: The [`HealthApi`] backend trait (and a reqwest client with `native`)
//! - [`views`]: Per-screen state containers shared by the CLI and the web UI
//! - [`config`]: TOML configuration with environment overrides (`native`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use health_hub::api::http::{HttpBackend, HttpBackendConfig};
//! use health_hub::views::DashboardView;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = HttpBackend::new(HttpBackendConfig::default())?;
//!
//!     let mut dashboard = DashboardView::default();
//!     dashboard.load(&backend).await;
//!
//!     println!("{} clients", dashboard.stats.clients);
//!     for (month, count) in dashboard.trend.entries() {
//!         println!("{}: {}", month, count);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
#[cfg(feature = "native")]
pub mod config;
pub mod export;
pub mod model;
pub mod query;
#[cfg(feature = "native")]
pub mod telemetry;
pub mod views;

// Re-export top-level types for convenience
pub use model::{
    Category, Client, ClientForm, ClientId, Enrollment, EnrollmentId, Gender, NewClient,
    NewEnrollment, NewProgram, Program, ProgramForm, ProgramId, ValidationError,
};

pub use query::{Histogram, Page, ProgramFilter, TrendGranularity, PAGE_SIZE};

pub use export::{programs_to_csv, ExportError};

pub use api::{ApiError, ApiResult, HealthApi};

#[cfg(feature = "native")]
pub use api::HttpBackend;

pub use views::{
    ClientsView, DashboardView, EnrollView, EnrollmentWizard, LandingView, NavMenu,
    ProgramsView, RefreshPolicy, Route, WizardStep,
};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, ConfigSearch, LoggingConfig};
