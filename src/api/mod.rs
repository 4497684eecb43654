//! Backend API
//!
//! The REST backend that owns clients, programs and enrollments is an
//! external service. This module defines the operations the views need
//! from it as the [`HealthApi`] trait, plus a reqwest implementation for
//! native builds.
//!
//! # Endpoints
//!
//! - `GET /api/clients` - List clients
//! - `POST /api/clients` - Register a client
//! - `GET /api/programs` - List programs
//! - `POST /api/programs` - Create a program
//! - `POST /api/enroll` - Enroll a client in a program
//! - `GET /api/enrollments` - List enrollments
//!
//! The trait is `?Send` so that browser fetch futures can implement it.

pub mod dto;
pub mod error;
#[cfg(feature = "native")]
pub mod http;

pub use dto::{ClientCreated, EnrollmentCreated, ErrorBody, ProgramCreated};
pub use error::{ApiError, ApiResult};
#[cfg(feature = "native")]
pub use http::HttpBackend;

use async_trait::async_trait;

use crate::model::{
    Client, ClientId, Enrollment, EnrollmentId, NewClient, NewEnrollment, NewProgram, Program,
    ProgramId,
};

/// Path of the client collection
pub const CLIENTS_PATH: &str = "/api/clients";
/// Path of the program collection
pub const PROGRAMS_PATH: &str = "/api/programs";
/// Path of the enroll action
pub const ENROLL_PATH: &str = "/api/enroll";
/// Path of the enrollment collection
pub const ENROLLMENTS_PATH: &str = "/api/enrollments";

/// Operations the views perform against the backend
#[async_trait(?Send)]
pub trait HealthApi {
    /// Fetch every client
    async fn list_clients(&self) -> ApiResult<Vec<Client>>;

    /// Register a client, returning its new id
    async fn create_client(&self, client: &NewClient) -> ApiResult<ClientId>;

    /// Fetch every program
    async fn list_programs(&self) -> ApiResult<Vec<Program>>;

    /// Create a program, returning its new id
    async fn create_program(&self, program: &NewProgram) -> ApiResult<ProgramId>;

    /// Enroll a client in a program, returning the enrollment id
    async fn enroll(&self, enrollment: &NewEnrollment) -> ApiResult<EnrollmentId>;

    /// Fetch every enrollment
    async fn list_enrollments(&self) -> ApiResult<Vec<Enrollment>>;
}

/// Join a base URL and an endpoint path without doubling slashes
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        assert_eq!(
            endpoint("http://localhost:5000/", CLIENTS_PATH),
            "http://localhost:5000/api/clients"
        );
        assert_eq!(
            endpoint("http://localhost:5000", ENROLL_PATH),
            "http://localhost:5000/api/enroll"
        );
    }
}
