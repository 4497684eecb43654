//! Dashboard: totals plus the category and enrollment-trend charts

use chrono::NaiveDateTime;

use crate::api::{ApiError, HealthApi};
use crate::model::{Client, Enrollment, Program};
use crate::query::{category_histogram, enrollment_trend, Histogram, TrendGranularity};

pub const LOAD_FAILED: &str = "Failed to load dashboard data.";

/// The three headline counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct DashboardStats {
    pub clients: usize,
    pub programs: usize,
    pub enrollments: usize,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub stats: DashboardStats,
    /// Programs per category, for the pie chart
    pub categories: Histogram,
    /// Enrollments per month, for the bar chart
    pub trend: Histogram,
    pub granularity: TrendGranularity,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    LoadStarted,
    Loaded {
        clients: Vec<Client>,
        programs: Vec<Program>,
        enrollments: Vec<Enrollment>,
        /// Stand-in instant for enrollments without a usable date
        now: NaiveDateTime,
    },
    LoadFailed(ApiError),
    DismissError,
}

impl DashboardView {
    pub fn new(granularity: TrendGranularity) -> Self {
        Self {
            granularity,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::LoadStarted => self.loading = true,
            DashboardAction::Loaded {
                clients,
                programs,
                enrollments,
                now,
            } => {
                self.loading = false;
                self.error = None;
                self.stats = DashboardStats {
                    clients: clients.len(),
                    programs: programs.len(),
                    enrollments: enrollments.len(),
                };
                self.categories = category_histogram(&programs);
                self.trend = enrollment_trend(&enrollments, self.granularity, now);
            }
            DashboardAction::LoadFailed(_) => {
                self.loading = false;
                self.error = Some(LOAD_FAILED.to_string());
            }
            DashboardAction::DismissError => self.error = None,
        }
    }

    pub async fn load<A: HealthApi + ?Sized>(&mut self, api: &A) {
        self.apply(DashboardAction::LoadStarted);
        let outcome = fetch_dashboard(api, chrono::Utc::now().naive_utc()).await;
        self.apply(outcome);
    }
}

/// Read clients, programs and enrollments in turn; any failure fails the load
pub async fn fetch_dashboard<A: HealthApi + ?Sized>(api: &A, now: NaiveDateTime) -> DashboardAction {
    let loaded = async {
        let clients = api.list_clients().await?;
        let programs = api.list_programs().await?;
        let enrollments = api.list_enrollments().await?;
        Ok::<_, ApiError>((clients, programs, enrollments))
    }
    .await;

    match loaded {
        Ok((clients, programs, enrollments)) => DashboardAction::Loaded {
            clients,
            programs,
            enrollments,
            now,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load dashboard data");
            DashboardAction::LoadFailed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn enrollment(date: Option<&str>) -> Enrollment {
        Enrollment {
            id: None,
            client_id: 1,
            program_id: 1,
            date: date.map(String::from),
        }
    }

    fn program(category: &str) -> Program {
        Program {
            id: 1,
            name: "Prog".to_string(),
            description: None,
            category: Some(category.to_string()),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_loaded_derives_stats_and_charts() {
        let mut view = DashboardView::default();
        view.apply(DashboardAction::Loaded {
            clients: vec![],
            programs: vec![program("Fitness"), program(""), program("Fitness")],
            enrollments: vec![
                enrollment(Some("2024-01-15")),
                enrollment(Some("2024-01-20")),
                enrollment(Some("2023-02-01")),
                enrollment(None),
            ],
            now: now(),
        });

        assert_eq!(
            view.stats,
            DashboardStats {
                clients: 0,
                programs: 3,
                enrollments: 4
            }
        );
        assert_eq!(view.categories.get("Fitness"), 2);
        assert_eq!(view.categories.get("Uncategorized"), 1);
        let labels: Vec<&str> = view.trend.labels().collect();
        assert_eq!(labels, vec!["Jan", "Feb", "Jun"]);
        assert_eq!(view.trend.get("Jan"), 2);
    }

    #[test]
    fn test_year_month_granularity() {
        let mut view = DashboardView::new(TrendGranularity::YearMonth);
        view.apply(DashboardAction::Loaded {
            clients: vec![],
            programs: vec![],
            enrollments: vec![enrollment(Some("2024-01-15")), enrollment(Some("2023-01-01"))],
            now: now(),
        });
        assert_eq!(view.trend.get("2024-01"), 1);
        assert_eq!(view.trend.get("2023-01"), 1);
    }

    #[test]
    fn test_failed_load_keeps_previous_data() {
        let mut view = DashboardView::default();
        view.apply(DashboardAction::Loaded {
            clients: vec![],
            programs: vec![program("Nutrition")],
            enrollments: vec![],
            now: now(),
        });
        view.apply(DashboardAction::LoadFailed(ApiError::Timeout));

        assert_eq!(view.error.as_deref(), Some(LOAD_FAILED));
        assert_eq!(view.stats.programs, 1);
        assert_eq!(view.categories.get("Nutrition"), 1);
    }
}
