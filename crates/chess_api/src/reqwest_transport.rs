//! [`HttpTransport`] backed by `reqwest`

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::error::{ChessApiError, ChessApiResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

/// Production transport over a shared `reqwest::Client`
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a preconfigured client (proxies, TLS roots, user agent)
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Builds a client with an optional whole-request timeout
    pub fn with_timeout(timeout: Option<Duration>) -> ChessApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ChessApiError::send)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> ChessApiResult<HttpResponse> {
        let method = match request.method {
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(ChessApiError::send)?;

        let status = response.status().as_u16();
        let body = if response.status().is_success() {
            response.text().await.map_err(ChessApiError::send)?
        } else {
            // A failed reply is classified by status alone; an unreadable body is dropped
            response.text().await.unwrap_or_default()
        };
        debug!(status, bytes = body.len(), "received chess API response");

        Ok(HttpResponse { status, body })
    }
}
