#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::http::Request;
use http_body_util::BodyExt;
use todolist_core::{ApiError, HttpRequest, HttpResponse, Transport};
use tower::ServiceExt;

pub const BASE_URL: &str = "http://mock.local";

/// Runs requests straight through the mock server's router, no sockets.
pub struct RouterTransport {
    router: axum::Router,
    requests: AtomicUsize,
}

impl RouterTransport {
    pub fn new() -> Self {
        Self {
            router: mock_server::app(),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for RouterTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        let mut builder = Request::builder()
            .method(request.method.as_str())
            .uri(&request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let http_request = builder
            .body(request.body.unwrap_or_default())
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = self.router.clone().oneshot(http_request).await.unwrap();
        let status = response.status().as_u16();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        })
    }
}

/// Never reaches a server.
pub struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Transport("connection refused".to_string()))
    }
}
