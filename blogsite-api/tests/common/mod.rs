/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - An application instance wired to the in-memory account store
/// - Request helpers for form posts and cookie-carrying GETs
/// - Session cookie extraction from login responses

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use blogsite_api::app::{build_router, AppState};
use blogsite_api::config::{Config, DatabaseConfig, ServerConfig};
use blogsite_shared::store::memory::MemoryStore;
use std::sync::Arc;
use tower::Service as _;

/// Test context containing the app and a handle on its store
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub app: Router,
}

impl TestContext {
    /// Creates a new test context backed by the in-memory store
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 1,
            },
        };

        let state = AppState::new(store.clone(), config);
        let app = build_router(state, tower_sessions::MemoryStore::default());

        TestContext { store, app }
    }

    /// Sends a GET request, optionally carrying a session cookie
    pub async fn get(&mut self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(Body::empty()).unwrap();

        self.app.call(request).await.unwrap()
    }

    /// Sends a urlencoded form POST, optionally carrying a session cookie
    pub async fn post_form(&mut self, uri: &str, body: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        self.app.call(request).await.unwrap()
    }

    /// Registers an account and asserts the signup redirect
    pub async fn register(&mut self, name: &str, email: &str, password: &str) {
        let response = self
            .post_form(
                "/signup",
                &format!("name={name}&email={email}&password={password}"),
                None,
            )
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");
    }

    /// Logs in and returns the session cookie for follow-up requests
    pub async fn login(&mut self, email: &str, password: &str) -> String {
        let response = self
            .post_form("/login", &format!("email={email}&password={password}"), None)
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/home");
        session_cookie(&response)
    }
}

/// Reads the Location header from a redirect response
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should carry a location header")
        .to_str()
        .unwrap()
}

/// Extracts the session cookie pair from a Set-Cookie header
pub fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should carry a set-cookie header")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// Collects a response body into a string
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
