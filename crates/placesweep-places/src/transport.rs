//! The HTTP seam between request building and response handling.
//!
//! [`PlacesClient`](crate::PlacesClient) is generic over [`Transport`] so tests
//! can substitute a stub; production code uses [`ReqwestTransport`].

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::{NetworkFailure, TransportFault};
use crate::request::PlacesRequest;

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub content_type: Option<String>,
    /// Final URL of the exchange, for logging.
    pub url: String,
    pub body: String,
}

/// Sends one POST request with a JSON body.
///
/// Implementations return `Ok` for every response that arrives, error
/// statuses included; `Err` is reserved for exchanges that never produced a
/// response.
pub trait Transport {
    fn post_json(
        &self,
        request: &PlacesRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportFault>> + Send;
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a client with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportFault`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, TransportFault> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        request: &PlacesRequest,
    ) -> Result<TransportResponse, TransportFault> {
        let payload = serde_json::to_vec(&request.body)
            .map_err(|e| TransportFault::new(NetworkFailure::Other, e.to_string()))?;

        let mut builder = self.client.post(&request.url).body(payload);
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        Ok(TransportResponse {
            status,
            content_type,
            url,
            body,
        })
    }
}
