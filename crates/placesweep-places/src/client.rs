//! Client for the Places API (New) `places:searchNearby` endpoint.
//!
//! Ties request building, the transport call, status classification and
//! normalization together. Each call issues exactly one request and waits for
//! it; there is no retry and no pagination beyond the query's result cap.

use crate::classify::{classify_status, parse_places};
use crate::error::PlacesError;
use crate::normalize::{normalize_places, NormalizedPlace};
use crate::request::{build_search_request, SearchQuery};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::RawPlace;

pub const DEFAULT_BASE_URL: &str = "https://places.googleapis.com";

/// Nearby-search client.
///
/// Use [`PlacesClient::new`] for production, [`PlacesClient::with_base_url`]
/// to point at a mock server, or [`PlacesClient::with_transport`] to swap the
/// HTTP layer entirely.
pub struct PlacesClient<T = ReqwestTransport> {
    transport: T,
    api_key: Option<String>,
    base_url: String,
}

impl PlacesClient<ReqwestTransport> {
    /// Creates a client pointed at the production Places API.
    ///
    /// `api_key` may be `None`; queries then fail with
    /// [`PlacesError::MissingCredential`] unless they carry their own key.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let transport = ReqwestTransport::new(timeout_secs, user_agent)?;
        Ok(Self::with_transport(transport, api_key, base_url))
    }
}

impl<T: Transport> PlacesClient<T> {
    #[must_use]
    pub fn with_transport(transport: T, api_key: Option<&str>, base_url: &str) -> Self {
        Self {
            transport,
            api_key: api_key.map(str::to_owned),
            base_url: base_url.to_owned(),
        }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one nearby search and returns normalized places in API order.
    ///
    /// # Errors
    ///
    /// - Validation errors ([`PlacesError::MissingCredential`],
    ///   [`PlacesError::InvalidLocation`], [`PlacesError::InvalidQuery`])
    ///   before any request is sent.
    /// - A status-derived error for any non-2xx response.
    /// - [`PlacesError::Network`] if no response was received.
    /// - [`PlacesError::Deserialize`] if a 2xx body is not a places envelope.
    pub async fn search_nearby(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<NormalizedPlace>, PlacesError> {
        let raw = self.search_nearby_raw(query).await?;
        Ok(normalize_places(&raw))
    }

    /// Like [`PlacesClient::search_nearby`] but returns the raw records.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::search_nearby`].
    pub async fn search_nearby_raw(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        let request = build_search_request(query, self.api_key.as_deref(), &self.base_url)?;
        tracing::debug!(url = %request.url, body = ?request.body, "sending searchNearby request");

        let response = self.transport.post_json(&request).await?;
        tracing::debug!(
            url = %response.url,
            status = response.status,
            content_type = response.content_type.as_deref().unwrap_or("unknown"),
            "searchNearby response received"
        );

        classify_status(response.status, &response.body)?;

        let places = parse_places(&response.body, &response.url)?;
        tracing::debug!(
            count = places.len(),
            ids = ?places.iter().filter_map(|p| p.id.as_deref()).collect::<Vec<_>>(),
            "parsed places"
        );
        Ok(places)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
