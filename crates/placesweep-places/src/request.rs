//! Request building for the `places:searchNearby` endpoint.
//!
//! [`build_search_request`] validates a [`SearchQuery`] and serializes it into
//! the wire shape. It performs no I/O: a query that fails validation never
//! reaches the transport.

use serde::Serialize;

use crate::error::PlacesError;
use crate::location::{Coordinates, LocationInput};

/// Upper bound the API accepts for `maxResultCount`.
pub const MAX_RESULT_CAP: u32 = 20;

/// Search radius used when a query or plan does not set one.
pub const DEFAULT_RADIUS_METERS: f64 = 2000.0;

const SEARCH_NEARBY_PATH: &str = "/v1/places:searchNearby";

/// Response fields requested through `X-Goog-FieldMask`.
pub const FIELD_MASK: &str = concat!(
    "places.id,places.displayName,places.formattedAddress,",
    "places.types,places.rating,places.reviews",
);

/// One logical nearby search.
///
/// An empty `place_types` list means "no type filter".
#[derive(Clone)]
pub struct SearchQuery {
    pub location: LocationInput,
    pub radius_meters: f64,
    pub place_types: Vec<String>,
    pub language: String,
    pub max_results: u32,
    /// Overrides the client's configured key for this query only.
    pub credential: Option<String>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(location: impl Into<LocationInput>) -> Self {
        Self {
            location: location.into(),
            radius_meters: DEFAULT_RADIUS_METERS,
            place_types: Vec::new(),
            language: "en".to_string(),
            max_results: MAX_RESULT_CAP,
            credential: None,
        }
    }

    #[must_use]
    pub fn radius(mut self, meters: f64) -> Self {
        self.radius_meters = meters;
        self
    }

    #[must_use]
    pub fn place_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.place_types = types.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn language(mut self, language: &str) -> Self {
        language.clone_into(&mut self.language);
        self
    }

    #[must_use]
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    #[must_use]
    pub fn credential(mut self, credential: &str) -> Self {
        self.credential = Some(credential.to_owned());
        self
    }
}

impl std::fmt::Debug for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchQuery")
            .field("location", &self.location)
            .field("radius_meters", &self.radius_meters)
            .field("place_types", &self.place_types)
            .field("language", &self.language)
            .field("max_results", &self.max_results)
            .field("credential", &self.credential.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNearbyBody {
    pub location_restriction: LocationRestriction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_types: Option<Vec<String>>,
    pub language_code: String,
    pub max_result_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRestriction {
    pub circle: Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub center: Coordinates,
    pub radius: f64,
}

/// A fully validated outbound request.
#[derive(Clone)]
pub struct PlacesRequest {
    pub url: String,
    api_key: String,
    pub body: SearchNearbyBody,
}

impl PlacesRequest {
    /// Headers to send with the request, API key included.
    #[must_use]
    pub fn headers(&self) -> [(&'static str, &str); 3] {
        [
            ("Content-Type", "application/json"),
            ("X-Goog-Api-Key", self.api_key.as_str()),
            ("X-Goog-FieldMask", FIELD_MASK),
        ]
    }
}

impl std::fmt::Debug for PlacesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesRequest")
            .field("url", &self.url)
            .field("api_key", &"[redacted]")
            .field("body", &self.body)
            .finish()
    }
}

/// Validates `query` and builds the `searchNearby` request.
///
/// The credential is taken from the query, falling back to
/// `default_credential`. It is checked before anything else.
///
/// # Errors
///
/// - [`PlacesError::MissingCredential`] if neither credential is set.
/// - [`PlacesError::InvalidLocation`] if the location does not resolve.
/// - [`PlacesError::InvalidQuery`] for a non-positive radius, a result cap
///   outside `1..=20`, or an empty language tag.
pub fn build_search_request(
    query: &SearchQuery,
    default_credential: Option<&str>,
    base_url: &str,
) -> Result<PlacesRequest, PlacesError> {
    let present = |key: &&str| !key.trim().is_empty();
    let api_key = query
        .credential
        .as_deref()
        .filter(present)
        .or(default_credential.filter(present))
        .ok_or(PlacesError::MissingCredential)?;

    let center = query.location.resolve()?;

    if !(query.radius_meters.is_finite() && query.radius_meters > 0.0) {
        return Err(PlacesError::InvalidQuery {
            field: "radius",
            reason: format!(
                "must be a positive distance in meters, got {}",
                query.radius_meters
            ),
        });
    }

    if !(1..=MAX_RESULT_CAP).contains(&query.max_results) {
        return Err(PlacesError::InvalidQuery {
            field: "max_results",
            reason: format!(
                "must be between 1 and {MAX_RESULT_CAP}, got {}",
                query.max_results
            ),
        });
    }

    if query.language.trim().is_empty() {
        return Err(PlacesError::InvalidQuery {
            field: "language",
            reason: "language tag must be non-empty".to_string(),
        });
    }

    let included_types = if query.place_types.is_empty() {
        None
    } else {
        Some(query.place_types.clone())
    };

    Ok(PlacesRequest {
        url: format!("{}{SEARCH_NEARBY_PATH}", base_url.trim_end_matches('/')),
        api_key: api_key.to_owned(),
        body: SearchNearbyBody {
            location_restriction: LocationRestriction {
                circle: Circle {
                    center,
                    radius: query.radius_meters,
                },
            },
            included_types,
            language_code: query.language.clone(),
            max_result_count: query.max_results,
        },
    })
}

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;
