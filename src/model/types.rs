//! Core data types for Health Hub
//!
//! This module defines the records exchanged with the backend:
//! - `Client`, `Program`, `Enrollment`: read models returned by list endpoints
//! - `NewClient`, `NewProgram`, `NewEnrollment`: write models sent on create
//! - `Gender` and `Category`: the choices offered by the entry forms
//!
//! Read models are tolerant of whatever the backend stores (free-form
//! gender/category strings, empty strings for "not set"). Write models are
//! only produced by the validators in [`super::validation`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Backend identifier of a client
pub type ClientId = u64;
/// Backend identifier of a program
pub type ProgramId = u64;
/// Backend identifier of an enrollment
pub type EnrollmentId = u64;

/// A registered client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    /// Backend rows are not validated, so unusable ages read as `None`
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

impl Client {
    /// Label used by selection lists, e.g. `Jane Doe (ID: 4)`
    pub fn option_label(&self) -> String {
        format!("{} (ID: {})", self.name, self.id)
    }

    /// Contact line for list cards
    pub fn contact_or_placeholder(&self) -> &str {
        non_empty(self.contact.as_deref()).unwrap_or("No contact provided")
    }

    /// Gender for list cards
    pub fn gender_or_placeholder(&self) -> &str {
        non_empty(self.gender.as_deref()).unwrap_or("N/A")
    }

    /// Age for list cards
    pub fn age_or_placeholder(&self) -> String {
        self.age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// A wellness program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Program {
    /// Category with empty strings treated as unset
    pub fn category(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }

    /// Description with empty strings treated as unset
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }
}

/// A client's enrollment in a program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enrollment {
    #[serde(default)]
    pub id: Option<EnrollmentId>,
    pub client_id: ClientId,
    pub program_id: ProgramId,
    /// ISO-8601 text exactly as the backend stored it
    #[serde(default)]
    pub date: Option<String>,
}

impl Enrollment {
    /// Parse the stored date.
    ///
    /// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.fff]` and plain dates
    /// (taken as midnight). Returns `None` for absent or unparseable text.
    pub fn enrolled_at(&self) -> Option<NaiveDateTime> {
        let raw = non_empty(self.date.as_deref())?.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }

        const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
        for fmt in FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(dt);
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

/// Client to be registered
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub contact: Option<String>,
}

/// Program to be created
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewProgram {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<Category>,
}

/// Enrollment request
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NewEnrollment {
    pub client_id: ClientId,
    pub program_id: ProgramId,
}

/// Gender choices offered by the client form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Get all choices for iteration
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female, Gender::Other]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::all()
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

/// Program categories offered by the program form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Fitness,
    Nutrition,
    #[serde(rename = "Mental Health")]
    MentalHealth,
    #[serde(rename = "General Wellness")]
    GeneralWellness,
}

impl Category {
    /// Get all categories for iteration
    pub fn all() -> &'static [Category] {
        &[
            Category::Fitness,
            Category::Nutrition,
            Category::MentalHealth,
            Category::GeneralWellness,
        ]
    }

    /// Label as stored by the backend and matched by the category filter
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fitness => "Fitness",
            Category::Nutrition => "Nutrition",
            Category::MentalHealth => "Mental Health",
            Category::GeneralWellness => "General Wellness",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| {
                c.as_str().eq_ignore_ascii_case(wanted)
                    || c.as_str().replace(' ', "-").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

/// A form choice that is not one of the offered values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown choice: {0}")]
pub struct UnknownChoice(pub String);

/// Empty strings count as unset; whitespace is kept as-is
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

/// Whole non-negative numbers (or their text) become an age, anything else `None`
fn lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let age = match raw {
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64))
            .and_then(|v| u32::try_from(v).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(age)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_deserializes_backend_row() {
        let json = r#"{"id": 3, "name": "Jane Doe", "age": null, "gender": "", "contact": "jane@example.com"}"#;
        let client: Client = serde_json::from_str(json).unwrap();

        assert_eq!(client.id, 3);
        assert_eq!(client.age, None);
        assert_eq!(client.gender_or_placeholder(), "N/A");
        assert_eq!(client.contact_or_placeholder(), "jane@example.com");
        assert_eq!(client.option_label(), "Jane Doe (ID: 3)");
    }

    #[test]
    fn test_client_list_tolerates_bad_ages() {
        let json = r#"[
            {"id": 1, "name": "Ann", "age": 30},
            {"id": 2, "name": "Ben", "age": -1},
            {"id": 3, "name": "Cal", "age": "abc"},
            {"id": 4, "name": "Dee", "age": 30.5},
            {"id": 5, "name": "Eve", "age": "41"},
            {"id": 6, "name": "Fay", "age": 52.0},
            {"id": 7, "name": "Gus"}
        ]"#;
        let clients: Vec<Client> = serde_json::from_str(json).unwrap();

        let ages: Vec<Option<u32>> = clients.iter().map(|c| c.age).collect();
        assert_eq!(ages, vec![Some(30), None, None, None, Some(41), Some(52), None]);
        assert_eq!(clients[1].age_or_placeholder(), "N/A");
    }

    #[test]
    fn test_program_empty_category_is_unset() {
        let json = r#"{"id": 1, "name": "Yoga", "description": "", "category": ""}"#;
        let program: Program = serde_json::from_str(json).unwrap();

        assert_eq!(program.category(), None);
        assert_eq!(program.description(), None);
    }

    #[test]
    fn test_program_blank_category_is_kept() {
        let json = r#"{"id": 1, "name": "Yoga", "category": " "}"#;
        let program: Program = serde_json::from_str(json).unwrap();

        assert_eq!(program.category(), Some(" "));
    }

    #[test]
    fn test_enrollment_date_formats() {
        let mut e = Enrollment {
            id: Some(1),
            client_id: 1,
            program_id: 2,
            date: Some("2024-03-05T10:20:30.123456".to_string()),
        };
        assert_eq!(
            e.enrolled_at().unwrap().date(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );

        e.date = Some("2024-01-15".to_string());
        assert_eq!(
            e.enrolled_at().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );

        e.date = Some("2023-12-31T23:00:00Z".to_string());
        assert!(e.enrolled_at().is_some());

        e.date = Some("yesterday".to_string());
        assert!(e.enrolled_at().is_none());

        e.date = None;
        assert!(e.enrolled_at().is_none());
    }

    #[test]
    fn test_category_round_trips_through_labels() {
        assert_eq!("mental health".parse::<Category>().unwrap(), Category::MentalHealth);
        assert_eq!("General-Wellness".parse::<Category>().unwrap(), Category::GeneralWellness);
        assert!("Yoga".parse::<Category>().is_err());

        let json = serde_json::to_string(&Category::MentalHealth).unwrap();
        assert_eq!(json, "\"Mental Health\"");
    }

    #[test]
    fn test_new_client_serializes_nulls() {
        let client = NewClient {
            name: "John Doe".to_string(),
            age: Some(30),
            gender: Some(Gender::Male),
            contact: None,
        };
        let value = serde_json::to_value(&client).unwrap();

        assert_eq!(value["name"], "John Doe");
        assert_eq!(value["age"], 30);
        assert_eq!(value["gender"], "Male");
        assert!(value["contact"].is_null());
    }
}
