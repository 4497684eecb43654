//! Backend REST API Client
//!
//! reqwest implementation of [`HealthApi`] for native builds.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response};
use serde::{de::DeserializeOwned, Serialize};

use super::dto::{ClientCreated, EnrollmentCreated, ErrorBody, ProgramCreated};
use super::error::{ApiError, ApiResult};
use super::{endpoint, HealthApi, CLIENTS_PATH, ENROLLMENTS_PATH, ENROLL_PATH, PROGRAMS_PATH};
use crate::model::{
    Client, ClientId, Enrollment, EnrollmentId, NewClient, NewEnrollment, NewProgram, Program,
    ProgramId,
};

/// Header carrying the per-request correlation id
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Configuration for the HTTP backend
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Base URL of the backend (e.g., "http://localhost:5000")
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Health Hub backend REST client
pub struct HttpBackend {
    client: HttpClient,
    config: HttpBackendConfig,
}

impl HttpBackend {
    /// Create a new backend client with the given configuration
    pub fn new(config: HttpBackendConfig) -> ApiResult<Self> {
        let client = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &HttpBackendConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.config.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(request_id = %request_id, url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .header(REQUEST_ID_HEADER, &request_id)
            .send()
            .await
            .map_err(|e| log_failure(&request_id, &url, e.into()))?;

        decode(response)
            .await
            .map_err(|e| log_failure(&request_id, &url, e))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let url = self.url(path);
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(request_id = %request_id, url = %url, "POST");

        let response = self
            .client
            .post(&url)
            .header(REQUEST_ID_HEADER, &request_id)
            .json(body)
            .send()
            .await
            .map_err(|e| log_failure(&request_id, &url, e.into()))?;

        decode(response)
            .await
            .map_err(|e| log_failure(&request_id, &url, e))
    }
}

/// Turn a response into `T`, or into a status error carrying the backend's `msg`
async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    } else {
        let text = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: ErrorBody::parse(&text).msg,
        })
    }
}

fn log_failure(request_id: &str, url: &str, error: ApiError) -> ApiError {
    tracing::warn!(
        request_id = %request_id,
        url = %url,
        error = %error,
        "Backend request failed"
    );
    error
}

#[async_trait(?Send)]
impl HealthApi for HttpBackend {
    async fn list_clients(&self) -> ApiResult<Vec<Client>> {
        self.get_json(CLIENTS_PATH).await
    }

    async fn create_client(&self, client: &NewClient) -> ApiResult<ClientId> {
        let created: ClientCreated = self.post_json(CLIENTS_PATH, client).await?;
        tracing::info!(client_id = created.client_id, "Client registered");
        Ok(created.client_id)
    }

    async fn list_programs(&self) -> ApiResult<Vec<Program>> {
        self.get_json(PROGRAMS_PATH).await
    }

    async fn create_program(&self, program: &NewProgram) -> ApiResult<ProgramId> {
        let created: ProgramCreated = self.post_json(PROGRAMS_PATH, program).await?;
        tracing::info!(program_id = created.program_id, "Program created");
        Ok(created.program_id)
    }

    async fn enroll(&self, enrollment: &NewEnrollment) -> ApiResult<EnrollmentId> {
        let created: EnrollmentCreated = self.post_json(ENROLL_PATH, enrollment).await?;
        tracing::info!(
            enrollment_id = created.enrollment_id,
            client_id = enrollment.client_id,
            program_id = enrollment.program_id,
            "Client enrolled"
        );
        Ok(created.enrollment_id)
    }

    async fn list_enrollments(&self) -> ApiResult<Vec<Enrollment>> {
        self.get_json(ENROLLMENTS_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpBackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_url_building() {
        let backend = HttpBackend::new(HttpBackendConfig {
            base_url: "http://example.test:5000/".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            backend.url(ENROLLMENTS_PATH),
            "http://example.test:5000/api/enrollments"
        );
    }
}
