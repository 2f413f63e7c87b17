//! In-process fake of the Daily room API.
//!
//! Every request is recorded and answered by a per-test responder, so each
//! test decides exactly what the platform says back.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use daily_rooms::{ClientOptions, Credentials, DailyClient};

pub const API_KEY: &str = "somekey";

/// A request as seen by the fake server
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

pub type Responder = dyn Fn(&Recorded) -> (StatusCode, String) + Send + Sync;

#[derive(Clone)]
struct FakeState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    responder: Arc<Responder>,
}

pub struct FakeDaily {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeDaily {
    /// Start a fake answering every request with `responder`.
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&Recorded) -> (StatusCode, String) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            requests: Arc::clone(&requests),
            responder: Arc::new(responder),
        };

        let app = Router::new().fallback(handle).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Should bind fake server");
        let addr = listener.local_addr().expect("Should have local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake server failed");
        });

        Self {
            base_url: format!("http://{}/v1/", addr),
            requests,
        }
    }

    /// Start a fake that always answers with `status` and `body`.
    pub async fn respond_with(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::start(move |_| (status, body.clone())).await
    }

    pub fn client(&self) -> DailyClient {
        self.client_with(ClientOptions::default())
    }

    pub fn client_with(&self, options: ClientOptions) -> DailyClient {
        let creds = Credentials::new(API_KEY, self.base_url.clone()).expect("Should build creds");
        DailyClient::with_options(creds, options).expect("Should build client")
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

async fn handle(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned)
    };

    let recorded = Recorded {
        method,
        path: uri.path().to_string(),
        query: uri
            .query()
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body,
    };

    let response = (state.responder)(&recorded);
    state.requests.lock().expect("requests lock").push(recorded);
    response
}

/// Room JSON object as the platform returns it.
pub fn room_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "api_created": true,
        "privacy": "public",
        "url": format!("https://api-demo.daily.co/{}", name),
        "created_at": "2019-01-26T09:01:22.000Z",
        "config": {}
    })
}

/// `count` rooms, newest first, with fresh ids.
pub fn make_rooms(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| room_json(&uuid::Uuid::new_v4().to_string(), &format!("room-{:04}", i)))
        .collect()
}

/// Serve `rooms` as a paginated listing honouring `limit` and `starting_after`.
///
/// `total_count` is the size of the whole listing, as the platform reports it.
pub fn paged_listing(
    rooms: Vec<Value>,
    default_page: usize,
) -> impl Fn(&Recorded) -> (StatusCode, String) {
    move |req| {
        let page_size = req
            .query
            .get("limit")
            .and_then(|l| l.parse().ok())
            .unwrap_or(default_page);

        let start = match req.query.get("starting_after") {
            Some(cursor) => rooms
                .iter()
                .position(|r| r["id"] == cursor.as_str())
                .map_or(rooms.len(), |i| i + 1),
            None => 0,
        };
        let data: Vec<Value> = rooms.iter().skip(start).take(page_size).cloned().collect();

        let body = json!({ "total_count": rooms.len(), "data": data });
        (StatusCode::OK, body.to_string())
    }
}
