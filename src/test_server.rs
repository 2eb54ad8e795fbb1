//! In-process stand-in for the BsonDB API used by the HTTP tests.
//!
//! Answers every request with a fixed status and JSON body and records
//! what it received.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::client::ApiClient;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

struct ServerState {
    requests: Mutex<Vec<RecordedRequest>>,
    status: StatusCode,
    response: String,
}

pub struct TestServer {
    pub url: String,
    state: Arc<ServerState>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Spawn a server answering `status` with `response` as the body.
    pub async fn spawn(status: u16, response: Value) -> Self {
        Self::spawn_raw(status, response.to_string()).await
    }

    pub async fn spawn_raw(status: u16, response: impl Into<String>) -> Self {
        let state = Arc::new(ServerState {
            requests: Mutex::new(Vec::new()),
            status: StatusCode::from_u16(status).unwrap(),
            response: response.into(),
        });
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { url, state, handle }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(Some(self.url.clone())).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The only request received; panics unless exactly one arrived.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type,
        body,
    });

    (
        state.status,
        [(CONTENT_TYPE, "application/json")],
        state.response.clone(),
    )
}

/// Base URL nothing listens on.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";
