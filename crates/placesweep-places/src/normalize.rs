//! Flattening of raw place records into the fixed tabular schema.

use serde::Serialize;

use crate::types::RawPlace;

/// Placeholder for missing text fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// A place flattened for tabulation. Every field is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPlace {
    pub name: String,
    pub address: String,
    /// `None` when the API reported no rating; a missing rating is not zero.
    pub rating: Option<f64>,
    /// Type tags joined with `", "`.
    pub types: String,
    /// Number of review entries returned, with or without text.
    pub review_count: usize,
    pub reviews: Vec<String>,
}

/// Converts a [`RawPlace`] into a [`NormalizedPlace`]. Never fails.
#[must_use]
pub fn normalize_place(place: &RawPlace) -> NormalizedPlace {
    let or_na = |field: Option<&String>| {
        field.map_or_else(|| NOT_AVAILABLE.to_string(), Clone::clone)
    };

    NormalizedPlace {
        name: or_na(place.display_name.as_ref()),
        address: or_na(place.formatted_address.as_ref()),
        rating: place.rating,
        types: place.types.join(", "),
        review_count: place.reviews.len(),
        reviews: place
            .reviews
            .iter()
            .map(|review| or_na(review.text.as_ref()))
            .collect(),
    }
}

/// Normalizes a batch, preserving the API's relevance order.
#[must_use]
pub fn normalize_places(places: &[RawPlace]) -> Vec<NormalizedPlace> {
    places.iter().map(normalize_place).collect()
}
