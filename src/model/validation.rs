//! Form validation
//!
//! Client-side checks run before anything is sent to the backend. The
//! backend remains the source of truth and may reject more.

use thiserror::Error;

use super::types::{
    Category, ClientId, Gender, NewClient, NewEnrollment, NewProgram, ProgramId,
};

/// Minimum program name length, in characters
pub const PROGRAM_NAME_MIN: usize = 3;
/// Maximum program name length, in characters
pub const PROGRAM_NAME_MAX: usize = 50;
/// Maximum program description length, in characters
pub const DESCRIPTION_MAX: usize = 200;

/// Errors that block a submission locally
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Age must be a non-negative whole number")]
    InvalidAge,

    #[error("Program name must be at least 3 characters.")]
    ProgramNameTooShort,

    #[error("Program name cannot exceed 50 characters.")]
    ProgramNameTooLong,

    #[error("Description cannot exceed 200 characters.")]
    DescriptionTooLong,

    #[error("Please select a client and a program.")]
    SelectionIncomplete,
}

/// Result type alias for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Raw client form fields, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientForm {
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub contact: String,
}

impl ClientForm {
    /// Validate the form into a create request
    pub fn validate(&self) -> ValidationResult<NewClient> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }

        let age = match self.age.trim() {
            "" => None,
            raw => Some(raw.parse::<u32>().map_err(|_| ValidationError::InvalidAge)?),
        };

        Ok(NewClient {
            name: self.name.clone(),
            age,
            gender: self.gender,
            contact: optional_text(&self.contact),
        })
    }
}

/// Raw program form fields, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramForm {
    pub name: String,
    pub description: String,
    pub category: Option<Category>,
}

impl ProgramForm {
    /// Validate the form into a create request
    pub fn validate(&self) -> ValidationResult<NewProgram> {
        let name_len = self.name.chars().count();
        if name_len < PROGRAM_NAME_MIN {
            return Err(ValidationError::ProgramNameTooShort);
        }
        if name_len > PROGRAM_NAME_MAX {
            return Err(ValidationError::ProgramNameTooLong);
        }
        if self.description.chars().count() > DESCRIPTION_MAX {
            return Err(ValidationError::DescriptionTooLong);
        }

        Ok(NewProgram {
            name: self.name.clone(),
            description: optional_text(&self.description),
            category: self.category,
        })
    }

    /// Character counters shown under the inputs, e.g. `12/50 characters`
    pub fn counters(&self) -> (String, String) {
        (
            format!("{}/{} characters", self.name.chars().count(), PROGRAM_NAME_MAX),
            format!("{}/{} characters", self.description.chars().count(), DESCRIPTION_MAX),
        )
    }
}

/// Validate an enrollment selection
pub fn validate_enrollment(
    client: Option<ClientId>,
    program: Option<ProgramId>,
) -> ValidationResult<NewEnrollment> {
    match (client, program) {
        (Some(client_id), Some(program_id)) => Ok(NewEnrollment {
            client_id,
            program_id,
        }),
        _ => Err(ValidationError::SelectionIncomplete),
    }
}

fn optional_text(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_named(name: &str) -> ProgramForm {
        ProgramForm {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_client_name_required() {
        let form = ClientForm::default();
        assert_eq!(form.validate(), Err(ValidationError::NameRequired));

        let form = ClientForm {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::NameRequired));
    }

    #[test]
    fn test_client_age_parsing() {
        let mut form = ClientForm {
            name: "John".to_string(),
            age: "42".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap().age, Some(42));

        form.age = "-1".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidAge));

        form.age = "4.5".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidAge));

        form.age = String::new();
        assert_eq!(form.validate().unwrap().age, None);
    }

    #[test]
    fn test_program_name_bounds() {
        assert_eq!(
            program_named("ab").validate(),
            Err(ValidationError::ProgramNameTooShort)
        );
        assert!(program_named("abc").validate().is_ok());
        assert!(program_named(&"x".repeat(50)).validate().is_ok());
        assert_eq!(
            program_named(&"x".repeat(51)).validate(),
            Err(ValidationError::ProgramNameTooLong)
        );
    }

    #[test]
    fn test_program_name_counts_characters_not_bytes() {
        // Three characters, six bytes
        assert!(program_named("äöü").validate().is_ok());
    }

    #[test]
    fn test_description_limit() {
        let mut form = program_named("Yoga");
        form.description = "d".repeat(200);
        assert!(form.validate().is_ok());

        form.description.push('d');
        assert_eq!(form.validate(), Err(ValidationError::DescriptionTooLong));
    }

    #[test]
    fn test_enrollment_requires_both() {
        assert_eq!(
            validate_enrollment(None, Some(1)),
            Err(ValidationError::SelectionIncomplete)
        );
        assert_eq!(
            validate_enrollment(Some(1), None),
            Err(ValidationError::SelectionIncomplete)
        );
        assert_eq!(
            validate_enrollment(Some(1), Some(2)),
            Ok(NewEnrollment {
                client_id: 1,
                program_id: 2
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::ProgramNameTooShort.to_string(),
            "Program name must be at least 3 characters."
        );
        assert_eq!(
            ValidationError::DescriptionTooLong.to_string(),
            "Description cannot exceed 200 characters."
        );
    }
}
