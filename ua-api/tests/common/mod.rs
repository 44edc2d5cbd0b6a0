//! Shared test utilities for integration tests.
//!
//! The client is blocking, so every call runs on tokio's blocking pool
//! while the mock server keeps serving on the async side. The client is
//! built and dropped inside that closure too.

#![allow(dead_code)]

use ua_api::{AirshipClient, Endpoints};
use wiremock::matchers::any;
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

pub const KEY: &str = "app-key";
pub const SECRET: &str = "app-secret";
/// `Basic base64("app-key:app-secret")`.
pub const AUTH: &str = "Basic YXBwLWtleTphcHAtc2VjcmV0";

/// Build a client pointed at the mock server's `/api/` root.
pub fn client_for(server_uri: &str) -> AirshipClient {
    let endpoints =
        Endpoints::new(&format!("{server_uri}/api/")).expect("failed to build test endpoints");
    AirshipClient::new(KEY, SECRET)
        .expect("failed to build test client")
        .with_endpoints(endpoints)
}

/// Run blocking client code off the async runtime.
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

/// Fail the test if any request reaches the server.
pub async fn forbid_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Answer every request with 401 and the given body.
pub async fn reject_all(server: &MockServer, body: &str) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(401).set_body_string(body))
        .mount(server)
        .await;
}

/// Matches requests that carry neither a body nor a content-type header.
pub struct NoBody;

impl Match for NoBody {
    fn matches(&self, request: &Request) -> bool {
        request.body.is_empty() && !request.headers.contains_key("content-type")
    }
}
