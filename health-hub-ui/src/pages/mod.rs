//! Pages
//!
//! Top-level page components for each route.

pub mod clients;
pub mod dashboard;
pub mod enroll;
pub mod home;
pub mod programs;

pub use clients::Clients;
pub use dashboard::Dashboard;
pub use enroll::Enroll;
pub use home::Home;
pub use programs::Programs;
