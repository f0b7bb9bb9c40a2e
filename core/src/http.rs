//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `StudentClient` builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network. The `Transport` trait is the single seam where a round-trip
//! actually happens, so tests substitute a scripted transport and production
//! code uses `HttpTransport` (reqwest).
//!
//! A `TransportError` means the exchange never completed. A completed exchange
//! that carries a 4xx/5xx status is an `HttpResponse`, not an error.

use std::error::Error as StdError;
use std::future::Future;

use thiserror::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `StudentClient::build_*` methods and handed to a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// True for any status in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The network exchange could not be completed at all.
#[derive(Debug, Error)]
#[error("transport failed: {source}")]
pub struct TransportError {
    source: Box<dyn StdError + Send + Sync>,
}

impl TransportError {
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Executes one HTTP round-trip.
///
/// Implementations must return non-2xx responses as `Ok(HttpResponse)` and
/// reserve `Err` for exchanges that never completed.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// `Transport` backed by a shared `reqwest::Client`.
#[cfg(feature = "reqwest")]
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    inner: reqwest::Client,
}

#[cfg(feature = "reqwest")]
impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already configured client (proxies, default headers, ...).
    pub fn with_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

#[cfg(feature = "reqwest")]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.inner.request(method, &request.path);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(TransportError::new)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(key, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (key.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await.map_err(TransportError::new)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
