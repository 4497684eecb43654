//! Data model
//!
//! Records exchanged with the backend and the validation applied to
//! form input before it is sent.

mod types;
mod validation;

pub use types::{
    Category, Client, ClientId, Enrollment, EnrollmentId, Gender, NewClient, NewEnrollment,
    NewProgram, Program, ProgramId, UnknownChoice,
};
pub use validation::{
    validate_enrollment, ClientForm, ProgramForm, ValidationError, ValidationResult,
    DESCRIPTION_MAX, PROGRAM_NAME_MAX, PROGRAM_NAME_MIN,
};
