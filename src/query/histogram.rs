//! Dashboard histograms
//!
//! Label → count mappings used as chart input. Entries keep the order in
//! which a label was first seen; they are not sorted.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{Enrollment, Program};

/// Label used for programs without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Insertion-ordered label counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Histogram {
    entries: Vec<(String, usize)>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `label`
    pub fn increment(&mut self, label: &str) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((label.to_string(), 1)),
        }
    }

    /// Count for a label, zero when never seen
    pub fn get(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Largest single count, for chart scaling
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }
}

impl<'a> FromIterator<&'a str> for Histogram {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut histogram = Histogram::new();
        for label in iter {
            histogram.increment(label);
        }
        histogram
    }
}

/// How enrollment dates are bucketed for the trend chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendGranularity {
    /// Short month name only (`Jan`); different years share a bucket
    #[default]
    Month,
    /// Year and month (`2024-01`)
    YearMonth,
}

impl TrendGranularity {
    /// Bucket label for a timestamp
    pub fn label(&self, at: NaiveDateTime) -> String {
        match self {
            TrendGranularity::Month => MONTH_ABBREVIATIONS[at.month0() as usize].to_string(),
            TrendGranularity::YearMonth => format!("{:04}-{:02}", at.year(), at.month()),
        }
    }
}

impl std::str::FromStr for TrendGranularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" => Ok(TrendGranularity::Month),
            "year-month" | "year_month" | "yearmonth" => Ok(TrendGranularity::YearMonth),
            other => Err(format!("Unknown trend granularity: {}. Use: month, year-month", other)),
        }
    }
}

/// Count programs per category, `Uncategorized` for missing/empty ones
pub fn category_histogram(programs: &[Program]) -> Histogram {
    programs
        .iter()
        .map(|p| p.category().unwrap_or(UNCATEGORIZED))
        .collect()
}

/// Count enrollments per date bucket.
///
/// Enrollments without a usable date are counted at `now`.
pub fn enrollment_trend(
    enrollments: &[Enrollment],
    granularity: TrendGranularity,
    now: NaiveDateTime,
) -> Histogram {
    let mut histogram = Histogram::new();
    for enrollment in enrollments {
        let at = match enrollment.enrolled_at() {
            Some(at) => at,
            None => {
                if enrollment.date.is_some() {
                    tracing::warn!(
                        date = ?enrollment.date,
                        "Unparseable enrollment date, counting it as now"
                    );
                }
                now
            }
        };
        histogram.increment(&granularity.label(at));
    }
    histogram
}
