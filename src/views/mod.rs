//! View state
//!
//! One state container per screen. Each container owns its form fields,
//! fetched lists and notices, and changes only through `apply(action)`.
//! The async `load`/`submit` functions talk to a [`HealthApi`] and feed
//! the outcome back through the same reducer, so both front-ends share
//! identical behavior.
//!
//! [`HealthApi`]: crate::api::HealthApi

pub mod clients;
pub mod dashboard;
pub mod enrollment;
pub mod landing;
pub mod nav;
pub mod programs;

pub use clients::{ClientsAction, ClientsView};
pub use dashboard::{DashboardAction, DashboardStats, DashboardView};
pub use enrollment::{EnrollAction, EnrollView, EnrollmentWizard, WizardStep};
pub use landing::{LandingView, Testimonial, TestimonialCarousel, Typewriter};
pub use nav::{NavMenu, Route};
pub use programs::{ProgramsAction, ProgramsView};

use serde::{Deserialize, Serialize};

/// What a view does after a successful create
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefreshPolicy {
    /// Re-read the whole list from the backend
    #[default]
    Refetch,
    /// Append the submitted record locally under the id the backend returned
    Optimistic,
}

impl std::str::FromStr for RefreshPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "refetch" => Ok(RefreshPolicy::Refetch),
            "optimistic" => Ok(RefreshPolicy::Optimistic),
            other => Err(format!("Unknown refresh policy: {}. Use: refetch, optimistic", other)),
        }
    }
}

impl std::fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshPolicy::Refetch => f.write_str("refetch"),
            RefreshPolicy::Optimistic => f.write_str("optimistic"),
        }
    }
}

/// Banner shown above a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Success and error banners of a view.
///
/// A view can show both at once: a create that succeeded followed by a
/// refetch that failed keeps the success and reports the fetch error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl Notices {
    pub fn succeed(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn fail(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
        self.success = None;
    }

    /// Report an error without clearing a success banner
    pub fn also_fail(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    /// Banners in display order
    pub fn iter(&self) -> impl Iterator<Item = Notice> + '_ {
        self.error
            .iter()
            .map(|e| Notice::Error(e.clone()))
            .chain(self.success.iter().map(|s| Notice::Success(s.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_policy_parse() {
        assert_eq!("refetch".parse::<RefreshPolicy>().unwrap(), RefreshPolicy::Refetch);
        assert_eq!("Optimistic".parse::<RefreshPolicy>().unwrap(), RefreshPolicy::Optimistic);
        assert!("lazy".parse::<RefreshPolicy>().is_err());
        assert_eq!(RefreshPolicy::default(), RefreshPolicy::Refetch);
    }

    #[test]
    fn test_notices() {
        let mut notices = Notices::default();
        notices.fail("boom");
        assert_eq!(notices.error.as_deref(), Some("boom"));

        notices.succeed("ok");
        assert_eq!(notices.error, None);
        assert_eq!(notices.success.as_deref(), Some("ok"));

        notices.also_fail("refetch failed");
        let shown: Vec<Notice> = notices.iter().collect();
        assert_eq!(shown.len(), 2);
        assert!(shown[0].is_error());
        assert_eq!(shown[1].message(), "ok");
    }
}
