//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod banner;
pub mod chart;
pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use banner::Banners;
pub use chart::{BarChart, PieChart};
pub use loading::{CardSkeleton, Loading};
pub use nav::Header;
pub use stat_card::StatCard;
pub use toast::Toast;
