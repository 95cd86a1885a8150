//! Raw `searchNearby` response records.
//!
//! Place records are read leniently: every field is optional at every
//! depth, and a field of the wrong JSON type is treated as absent. Building
//! a [`RawPlace`] therefore never fails.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RawPlace {
    pub id: Option<String>,
    /// `displayName.text`.
    pub display_name: Option<String>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub types: Vec<String>,
    pub reviews: Vec<RawReview>,
}

/// One entry of a place's `reviews` list. Entries are kept even when they
/// carry no text so that counts reflect the list as returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawReview {
    pub text: Option<String>,
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Reads a localized text field, which the API sends either as a
/// `{"text": ..., "languageCode": ...}` object or as a plain string.
fn localized_text(value: &Value, key: &str) -> Option<String> {
    let field = value.get(key)?;
    match field {
        Value::String(s) => Some(s.clone()),
        Value::Object(_) => str_field(field, "text"),
        _ => None,
    }
}

impl From<&Value> for RawReview {
    fn from(value: &Value) -> Self {
        Self {
            text: localized_text(value, "text"),
        }
    }
}

impl From<&Value> for RawPlace {
    fn from(value: &Value) -> Self {
        let display_name = value
            .get("displayName")
            .and_then(|d| d.get("text"))
            .and_then(Value::as_str)
            .map(str::to_owned);

        let types = value
            .get("types")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let reviews = value
            .get("reviews")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(RawReview::from).collect())
            .unwrap_or_default();

        Self {
            id: str_field(value, "id"),
            display_name,
            formatted_address: str_field(value, "formattedAddress"),
            rating: value.get("rating").and_then(Value::as_f64),
            types,
            reviews,
        }
    }
}

impl From<Value> for RawPlace {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}
