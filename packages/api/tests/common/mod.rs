//! In-process mock of the Launchpad API for integration tests.
//!
//! Serves the same surface the real backend exposes (`/auth/*` plus the
//! `/startups` CRUD routes) on an ephemeral port. Sessions are a single
//! `sid` cookie: login/register set it, `/auth/user` requires it.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

const SESSION_COOKIE: &str = "sid=test-session";

/// Handle to the mock server's mutable state.
#[derive(Clone, Default)]
pub struct MockApi {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    startups: Vec<Value>,
    session_active: bool,
    fail_logout: bool,
    fail_refresh: bool,
    next_id: u32,
}

impl MockApi {
    /// Make `/auth/logout` answer 500 with a message body.
    pub fn set_fail_logout(&self, fail: bool) {
        self.state.lock().unwrap().fail_logout = fail;
    }

    /// Make `/auth/refresh-token` answer 401 with a message body.
    pub fn set_fail_refresh(&self, fail: bool) {
        self.state.lock().unwrap().fail_refresh = fail;
    }

    /// Insert a startup record directly, returning its id.
    pub fn seed_startup(&self, name: &str, description: &str, founder: &str) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("id-{}", state.next_id);
        state.startups.push(json!({
            "_id": id,
            "name": name,
            "description": description,
            "founder": founder,
            "createdAt": "2024-03-01T12:00:00Z",
        }));
        id
    }

    /// Whether a record with this id still exists server-side.
    pub fn has_startup(&self, id: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .startups
            .iter()
            .any(|s| s["_id"] == id)
    }
}

/// Start the mock API on an ephemeral port, returning its handle and base URL.
pub async fn spawn_mock() -> (MockApi, String) {
    let api = MockApi::default();
    let app = router(api.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });
    (api, format!("http://{addr}"))
}

fn router(api: MockApi) -> Router {
    Router::new()
        .route("/auth/user", get(current_user))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/refresh-token", post(refresh_token))
        .route("/startups", get(list_startups).post(create_startup))
        .route(
            "/startups/{id}",
            get(get_startup).put(update_startup).delete(delete_startup),
        )
        .with_state(api)
}

fn has_session_cookie(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|cookies| cookies.contains(SESSION_COOKIE))
}

fn user_json() -> Value {
    json!({ "_id": "u1", "email": "a@b.com", "name": "Test User" })
}

fn with_session_cookie(status: StatusCode, body: Value) -> Response {
    (
        status,
        [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/"))],
        Json(body),
    )
        .into_response()
}

async fn current_user(State(api): State<MockApi>, headers: HeaderMap) -> Response {
    let active = api.state.lock().unwrap().session_active;
    if active && has_session_cookie(&headers) {
        (StatusCode::OK, Json(user_json())).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Not authenticated" })),
        )
            .into_response()
    }
}

async fn register(State(api): State<MockApi>, Json(body): Json<Value>) -> Response {
    match body["email"].as_str() {
        Some("taken@b.com") => (
            StatusCode::CONFLICT,
            Json(json!({ "message": "An account with this email already exists" })),
        )
            .into_response(),
        // Non-JSON error body, for fallback-message coverage.
        Some("broken@b.com") => {
            (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
        }
        _ => {
            api.state.lock().unwrap().session_active = true;
            with_session_cookie(
                StatusCode::CREATED,
                json!({ "user": user_json(), "token": "t-1" }),
            )
        }
    }
}

async fn login(State(api): State<MockApi>, Json(body): Json<Value>) -> Response {
    if body["password"] == "secret" {
        api.state.lock().unwrap().session_active = true;
        with_session_cookie(StatusCode::OK, json!({ "user": user_json(), "token": "t-1" }))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
            .into_response()
    }
}

async fn logout(State(api): State<MockApi>) -> Response {
    let mut state = api.state.lock().unwrap();
    if state.fail_logout {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Logout rejected" })),
        )
            .into_response()
    } else {
        state.session_active = false;
        StatusCode::OK.into_response()
    }
}

async fn refresh_token(State(api): State<MockApi>) -> Response {
    if api.state.lock().unwrap().fail_refresh {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Token expired" })),
        )
            .into_response()
    } else {
        StatusCode::OK.into_response()
    }
}

async fn list_startups(State(api): State<MockApi>) -> Response {
    let startups = api.state.lock().unwrap().startups.clone();
    Json(startups).into_response()
}

async fn get_startup(State(api): State<MockApi>, Path(id): Path<String>) -> Response {
    let state = api.state.lock().unwrap();
    match state.startups.iter().find(|s| s["_id"] == id.as_str()) {
        Some(startup) => Json(startup.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Startup not found" })),
        )
            .into_response(),
    }
}

async fn create_startup(State(api): State<MockApi>, Json(body): Json<Value>) -> Response {
    match body["name"].as_str() {
        None | Some("") => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Name is required" })),
        )
            .into_response(),
        Some("boom") => (StatusCode::INTERNAL_SERVER_ERROR, "oops").into_response(),
        Some(_) => {
            let mut state = api.state.lock().unwrap();
            state.next_id += 1;
            let created = json!({
                "_id": format!("id-{}", state.next_id),
                "name": body["name"],
                "description": body["description"],
                "founder": body["founder"],
                "createdAt": "2024-03-01T12:00:00Z",
            });
            state.startups.push(created.clone());
            (StatusCode::CREATED, Json(created)).into_response()
        }
    }
}

async fn update_startup(
    State(api): State<MockApi>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = api.state.lock().unwrap();
    match state.startups.iter_mut().find(|s| s["_id"] == id.as_str()) {
        Some(startup) => {
            startup["name"] = body["name"].clone();
            startup["description"] = body["description"].clone();
            startup["founder"] = body["founder"].clone();
            StatusCode::OK.into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Startup not found" })),
        )
            .into_response(),
    }
}

async fn delete_startup(State(api): State<MockApi>, Path(id): Path<String>) -> Response {
    let mut state = api.state.lock().unwrap();
    let before = state.startups.len();
    state.startups.retain(|s| s["_id"] != id.as_str());
    if state.startups.len() < before {
        StatusCode::OK.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Startup not found" })),
        )
            .into_response()
    }
}
