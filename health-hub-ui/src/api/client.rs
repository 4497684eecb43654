//! HTTP API Client
//!
//! [`HealthApi`] over `fetch`, via gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use health_hub::api::{
    endpoint, ApiError, ApiResult, ClientCreated, EnrollmentCreated, ErrorBody, HealthApi,
    ProgramCreated, CLIENTS_PATH, ENROLLMENTS_PATH, ENROLL_PATH, PROGRAMS_PATH,
};
use health_hub::model::{
    Client, ClientId, Enrollment, EnrollmentId, NewClient, NewEnrollment, NewProgram, Program,
    ProgramId,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

const STORAGE_KEY: &str = "health_hub_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, url.trim());
        }
    }
}

/// Backend client bound to one base URL
#[derive(Debug, Clone)]
pub struct GlooBackend {
    base_url: String,
}

impl GlooBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = endpoint(&self.base_url, path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| log_failure(&url, ApiError::Network(e.to_string())))?;

        decode(response).await.map_err(|e| log_failure(&url, e))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let url = endpoint(&self.base_url, path);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| log_failure(&url, ApiError::Network(e.to_string())))?;

        decode(response).await.map_err(|e| log_failure(&url, e))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if response.ok() {
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(serde_json::from_str(&text)?)
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status,
            message: ErrorBody::parse(&text).msg,
        })
    }
}

fn log_failure(url: &str, error: ApiError) -> ApiError {
    web_sys::console::warn_1(&format!("Backend request to {} failed: {}", url, error).into());
    error
}

#[async_trait(?Send)]
impl HealthApi for GlooBackend {
    async fn list_clients(&self) -> ApiResult<Vec<Client>> {
        self.get_json(CLIENTS_PATH).await
    }

    async fn create_client(&self, client: &NewClient) -> ApiResult<ClientId> {
        let created: ClientCreated = self.post_json(CLIENTS_PATH, client).await?;
        Ok(created.client_id)
    }

    async fn list_programs(&self) -> ApiResult<Vec<Program>> {
        self.get_json(PROGRAMS_PATH).await
    }

    async fn create_program(&self, program: &NewProgram) -> ApiResult<ProgramId> {
        let created: ProgramCreated = self.post_json(PROGRAMS_PATH, program).await?;
        Ok(created.program_id)
    }

    async fn enroll(&self, enrollment: &NewEnrollment) -> ApiResult<EnrollmentId> {
        let created: EnrollmentCreated = self.post_json(ENROLL_PATH, enrollment).await?;
        Ok(created.enrollment_id)
    }

    async fn list_enrollments(&self) -> ApiResult<Vec<Enrollment>> {
        self.get_json(ENROLLMENTS_PATH).await
    }
}
