//! reqwest backend against an in-process fake server

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use health_hub::api::http::{HttpBackend, HttpBackendConfig};
use health_hub::api::{ApiError, HealthApi};
use health_hub::model::{Category, Gender, NewClient, NewEnrollment, NewProgram};

#[derive(Default)]
struct FakeState {
    clients: Vec<Value>,
    posted: Vec<Value>,
    request_ids: Vec<String>,
}

type Shared = Arc<Mutex<FakeState>>;

async fn list_clients(State(state): State<Shared>, headers: HeaderMap) -> Json<Value> {
    let mut state = state.lock().unwrap();
    if let Some(id) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        state.request_ids.push(id.to_string());
    }
    Json(Value::Array(state.clients.clone()))
}

async fn create_client(State(state): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    let id = state.clients.len() + 1;
    let mut stored = body.clone();
    stored["id"] = json!(id);
    state.clients.push(stored);
    state.posted.push(body);
    (StatusCode::CREATED, Json(json!({ "client_id": id })))
}

async fn list_programs() -> Json<Value> {
    Json(json!([
        { "id": 1, "name": "Yoga", "description": "Stretch", "category": "Fitness" },
        { "id": 2, "name": "Diet", "description": null, "category": "" }
    ]))
}

async fn create_program(State(state): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    state.lock().unwrap().posted.push(body);
    (StatusCode::CREATED, Json(json!({ "program_id": 7 })))
}

async fn enroll(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["client_id"] == json!(99) {
        return (StatusCode::NOT_FOUND, Json(json!({ "msg": "Client not found" })));
    }
    if body["program_id"] == json!(1) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "msg": "Client is already enrolled in this program" })),
        );
    }
    (StatusCode::CREATED, Json(json!({ "enrollment_id": 3 })))
}

async fn list_enrollments() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>Internal Server Error</html>")
}

async fn spawn_backend(state: Shared) -> SocketAddr {
    let router = Router::new()
        .route("/api/clients", get(list_clients).post(create_client))
        .route("/api/programs", get(list_programs).post(create_program))
        .route("/api/enroll", post(enroll))
        .route("/api/enrollments", get(list_enrollments))
        .route(
            "/slow/api/clients",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!([]))
            }),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn backend(base_url: String) -> HttpBackend {
    HttpBackend::new(HttpBackendConfig {
        base_url,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_client_round_trip() {
    let state = Shared::default();
    let addr = spawn_backend(state.clone()).await;
    let api = backend(format!("http://{}/", addr));

    let id = api
        .create_client(&NewClient {
            name: "Ana Ruiz".to_string(),
            age: Some(34),
            gender: Some(Gender::Female),
            contact: None,
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    let posted = state.lock().unwrap().posted[0].clone();
    assert_eq!(
        posted,
        json!({ "name": "Ana Ruiz", "age": 34, "gender": "Female", "contact": null })
    );

    let clients = api.list_clients().await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].name, "Ana Ruiz");
    assert_eq!(clients[0].gender.as_deref(), Some("Female"));

    let request_ids = state.lock().unwrap().request_ids.clone();
    assert_eq!(request_ids.len(), 1);
    assert!(!request_ids[0].is_empty());
}

#[tokio::test]
async fn test_programs() {
    let state = Shared::default();
    let addr = spawn_backend(state.clone()).await;
    let api = backend(format!("http://{}", addr));

    let programs = api.list_programs().await.unwrap();
    assert_eq!(programs.len(), 2);
    assert_eq!(programs[0].category(), Some("Fitness"));
    assert_eq!(programs[1].category(), None);
    assert_eq!(programs[1].description(), None);

    let id = api
        .create_program(&NewProgram {
            name: "Mindful Mornings".to_string(),
            description: None,
            category: Some(Category::MentalHealth),
        })
        .await
        .unwrap();
    assert_eq!(id, 7);
    assert_eq!(state.lock().unwrap().posted[0]["category"], json!("Mental Health"));
}

#[tokio::test]
async fn test_enroll_errors_carry_backend_message() {
    let addr = spawn_backend(Shared::default()).await;
    let api = backend(format!("http://{}", addr));

    let id = api
        .enroll(&NewEnrollment { client_id: 1, program_id: 2 })
        .await
        .unwrap();
    assert_eq!(id, 3);

    let err = api
        .enroll(&NewEnrollment { client_id: 1, program_id: 1 })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 400,
            message: Some("Client is already enrolled in this program".to_string()),
        }
    );

    let err = api
        .enroll(&NewEnrollment { client_id: 99, program_id: 2 })
        .await
        .unwrap_err();
    assert_eq!(err.backend_message(), Some("Client not found"));
}

#[tokio::test]
async fn test_non_json_error_body() {
    let addr = spawn_backend(Shared::default()).await;
    let api = backend(format!("http://{}", addr));

    let err = api.list_enrollments().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: None
        }
    );
}

#[tokio::test]
async fn test_timeout() {
    let addr = spawn_backend(Shared::default()).await;
    let api = HttpBackend::new(HttpBackendConfig {
        base_url: format!("http://{}/slow", addr),
        timeout: Duration::from_millis(200),
    })
    .unwrap();

    let err = api.list_clients().await.unwrap_err();
    assert_eq!(err, ApiError::Timeout);
}

#[tokio::test]
async fn test_unreachable_backend() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = backend(format!("http://{}", addr));
    let err = api.list_programs().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "unexpected error: {:?}", err);
}
