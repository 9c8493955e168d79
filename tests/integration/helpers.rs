//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use bytes::Bytes;
use serde_json::Value;
use tower::ServiceExt;

use labinv_api::{AppState, build_app};
use labinv_core::config::AppConfig;

/// Public URL used by every test app.
pub const PUBLIC_URL: &str = "http://lab.test/";

/// Test application context.
///
/// Behaves like one browser: the session cookie set by the first response
/// is sent with every following request.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct access to the session registry
    pub state: AppState,
    /// Application config
    pub config: AppConfig,
    /// `name=value` of the session cookie, once issued
    cookie: Mutex<Option<String>>,
}

impl TestApp {
    /// Create a new test application with in-memory persistence.
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Create a test application persisting snapshots under `dir`.
    pub async fn with_snapshot_dir(dir: &Path) -> Self {
        let mut config = test_config();
        config.persistence.provider = "file".to_string();
        config.persistence.directory = dir.to_string_lossy().into_owned();
        Self::with_config(config).await
    }

    /// Create a test application from `config`.
    pub async fn with_config(config: AppConfig) -> Self {
        let state = AppState::from_config(config.clone())
            .await
            .expect("Failed to build app state");
        Self {
            router: build_app(state.clone()),
            state,
            config,
            cookie: Mutex::new(None),
        }
    }

    /// The current session cookie (`name=value`), if issued.
    pub fn cookie(&self) -> Option<String> {
        self.cookie.lock().expect("cookie lock").clone()
    }

    /// Present `cookie` on following requests, as a returning browser would.
    pub fn set_cookie(&self, cookie: Option<String>) {
        *self.cookie.lock().expect("cookie lock") = cookie;
    }

    /// GET `path` and parse the JSON body.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// POST to `path` without a body.
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request("POST", path, None).await
    }

    /// Make a request with an optional JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(cookie) = self.cookie() {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        if let Some(cookie) = session_cookie(&headers, &self.config.session.cookie_name) {
            self.set_cookie(Some(cookie));
        }

        let raw = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&raw).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            raw,
            body,
        }
    }

    /// Create a storage and return its id.
    pub async fn create_storage(&self, name: &str, kind: &str, location: &str) -> String {
        let response = self
            .request(
                "POST",
                "/storages",
                Some(serde_json::json!({
                    "name": name,
                    "type": kind,
                    "location": location,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        let location = response.header(header::LOCATION.as_str());
        location
            .strip_prefix("/?storage=")
            .expect("Location should point at the storage")
            .to_string()
    }

    /// Add an item to `storage_id`.
    pub async fn add_item(&self, storage_id: &str, name: &str, quantity: &str, status: &str) {
        let response = self
            .request(
                "POST",
                &format!("/storages/{storage_id}/items"),
                Some(serde_json::json!({
                    "name": name,
                    "quantity": quantity,
                    "status": status,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    }
}

/// Default configuration for tests.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.public_url = PUBLIC_URL.to_string();
    config
}

/// Extract `name=value` of the session cookie from `Set-Cookie` headers.
fn session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{name}=")))
        .map(str::to_string)
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub raw: Bytes,
    /// Parsed JSON body (`Null` for non-JSON bodies)
    pub body: Value,
}

impl TestResponse {
    /// The rendered view (`data.view`).
    pub fn view(&self) -> &Value {
        &self.body["data"]["view"]
    }

    /// The selected screen name.
    pub fn screen(&self) -> &str {
        self.view()["screen"].as_str().unwrap_or_default()
    }

    /// Notice messages attached to the render.
    pub fn notices(&self) -> Vec<String> {
        self.body["data"]["notices"]
            .as_array()
            .map(|notices| {
                notices
                    .iter()
                    .filter_map(|n| n["message"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A header value as a string, empty when absent.
    pub fn header(&self, name: &str) -> String {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }
}
