//! List queries
//!
//! The in-memory transformations the views run over fetched data:
//! name/category filtering, pagination and the dashboard histograms.
//! Everything here is pure and works on borrowed slices.

mod filter;
mod histogram;
mod paginate;

pub use filter::{filter_by_name, matches_category, matches_name, Named, ProgramFilter};
pub use histogram::{
    category_histogram, enrollment_trend, Histogram, TrendGranularity, UNCATEGORIZED,
};
pub use paginate::{clamp_page, page_count, page_slice, paginate, Page, PAGE_SIZE};
