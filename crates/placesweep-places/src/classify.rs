//! Mapping from a completed HTTP exchange to success or a [`PlacesError`].

use serde::Deserialize;

use crate::error::PlacesError;
use crate::types::RawPlace;

/// Longest raw body excerpt carried in an error message.
const MAX_BODY_EXCERPT: usize = 300;

/// Classifies a response by status code alone.
///
/// The body is only used to build the error message; it is never consulted
/// to decide the category.
///
/// # Errors
///
/// Returns the error variant matching `status` for every non-2xx code.
pub fn classify_status(status: u16, body: &str) -> Result<(), PlacesError> {
    match status {
        200..=299 => Ok(()),
        400 => Err(PlacesError::BadRequest {
            message: api_error_message(body),
        }),
        401 => Err(PlacesError::Unauthorized {
            message: api_error_message(body),
        }),
        403 => Err(PlacesError::Forbidden {
            message: api_error_message(body),
        }),
        429 => Err(PlacesError::RateLimited {
            message: api_error_message(body),
        }),
        500.. => Err(PlacesError::ServerError {
            status,
            message: api_error_message(body),
        }),
        _ => Err(PlacesError::Http {
            status,
            body: body.to_owned(),
        }),
    }
}

/// Extracts `error.message` from a Google API error envelope, falling back
/// to a trimmed excerpt of the raw body.
#[must_use]
pub fn api_error_message(body: &str) -> String {
    let from_envelope = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        });

    from_envelope.unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.chars().count() > MAX_BODY_EXCERPT {
            let excerpt: String = trimmed.chars().take(MAX_BODY_EXCERPT).collect();
            format!("{excerpt}...")
        } else if trimmed.is_empty() {
            "(empty response body)".to_string()
        } else {
            trimmed.to_owned()
        }
    })
}

#[derive(Debug, Deserialize)]
struct SearchNearbyResponse {
    #[serde(default)]
    places: Option<Vec<RawPlace>>,
}

/// Parses a successful response body into raw place records.
///
/// A body without a `places` field, or with `places: null`, is an empty
/// result, not an error.
///
/// # Errors
///
/// Returns [`PlacesError::Deserialize`] if the body is not a JSON object or
/// `places` is not a list.
pub fn parse_places(body: &str, context: &str) -> Result<Vec<RawPlace>, PlacesError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parsed: SearchNearbyResponse =
        serde_json::from_str(body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })?;
    Ok(parsed.places.unwrap_or_default())
}
