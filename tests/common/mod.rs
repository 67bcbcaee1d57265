#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use sportlink_client::config::AppConfig;
use sportlink_client::state::AppState;

/// Request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    /// Still percent-encoded.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
struct MockState {
    replies: Arc<Mutex<HashMap<(Method, String), (StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(CapturedRequest {
        method: method.clone(),
        path: path.clone(),
        query,
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    let reply = state.replies.lock().unwrap().get(&(method, path)).cloned();
    match reply {
        Some((status, body)) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            json!({"code": "not_found", "message": "route not mocked"}).to_string(),
        )
            .into_response(),
    }
}

/// In-process HTTP backend listening on an ephemeral port. Unmocked routes
/// answer 404 with a `not_found` error body.
pub struct MockBackend {
    pub base_url: String,
    state: MockState,
}

impl MockBackend {
    pub async fn start() -> Self {
        init_tracing();
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockBackend {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }

    pub fn reply(&self, method: Method, path: &str, status: u16, body: Value) {
        self.reply_raw(method, path, status, &body.to_string());
    }

    pub fn reply_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.state.replies.lock().unwrap().insert(
            (method, format!("/api{}", path)),
            (StatusCode::from_u16(status).unwrap(), body.to_string()),
        );
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> CapturedRequest {
        self.requests().pop().expect("backend received no request")
    }

    pub fn config(&self) -> AppConfig {
        AppConfig::new(self.base_url.clone()).with_timeout(Duration::from_secs(5))
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(self.config()).unwrap()
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn query_value<'a>(request: &'a CapturedRequest, key: &str) -> Option<&'a str> {
    request
        .query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

pub fn team_json(name: &str, sport: &str, members: Value) -> Value {
    json!({
        "Name": name,
        "Category": 4,
        "Stats": {"Wins": 3, "Losses": 1, "Draws": 1},
        "Sport": sport,
        "Members": members
    })
}

pub fn announcement_json(team_name: &str, sport: &str) -> Value {
    json!({
        "id": format!("id-{}", team_name),
        "team_name": team_name,
        "sport": sport,
        "day": "2030-06-01T00:00:00Z",
        "time_slot": {
            "start_time": "2030-06-01T18:00:00-03:00",
            "end_time": "2030-06-01T19:30:00-03:00"
        },
        "location": {"country": "Argentina", "province": "Buenos Aires", "locality": "Palermo"},
        "admitted_categories": {"type": "BETWEEN", "min_level": 2, "max_level": 5},
        "status": "PENDING",
        "created_at": "2030-05-01T12:00:00Z"
    })
}
