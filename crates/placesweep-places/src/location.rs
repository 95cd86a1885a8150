//! Search-center parsing.
//!
//! A location is either a numeric `(lat, lng)` pair or a string of the exact
//! form `"<number>,<number>"`. Anything else, free-text addresses included,
//! is rejected with [`PlacesError::InvalidLocation`]; nothing is geocoded.

use std::str::FromStr;

use serde::Serialize;

use crate::error::PlacesError;

/// A validated WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Builds a point, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidLocation`] if latitude is outside
    /// `[-90, 90]` or longitude is outside `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PlacesError> {
        let input = format!("({latitude}, {longitude})");
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PlacesError::invalid_location(
                input,
                "latitude must be within [-90, 90]",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PlacesError::invalid_location(
                input,
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl FromStr for Coordinates {
    type Err = PlacesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (Some(lat), Some(lng), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(PlacesError::invalid_location(
                s,
                "expected \"lat,lng\"; free-text addresses are not geocoded",
            ));
        };

        let parse = |part: &str, axis: &str| -> Result<f64, PlacesError> {
            part.trim().parse::<f64>().map_err(|_| {
                PlacesError::invalid_location(
                    s,
                    format!("{axis} \"{}\" is not a number", part.trim()),
                )
            })
        };

        let latitude = parse(lat, "latitude")?;
        let longitude = parse(lng, "longitude")?;
        Self::new(latitude, longitude).map_err(|e| match e {
            PlacesError::InvalidLocation { reason, .. } => PlacesError::invalid_location(s, reason),
            other => other,
        })
    }
}

/// An unresolved location as supplied by a caller or a plan file.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationInput {
    Pair(f64, f64),
    Text(String),
    /// Any other shape (a bare number, an object, a list of the wrong
    /// length). Always fails to resolve.
    Other(serde_json::Value),
}

impl LocationInput {
    /// Resolves the input into validated [`Coordinates`].
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidLocation`] for malformed strings,
    /// out-of-range pairs, and any input that is neither a string nor a pair.
    pub fn resolve(&self) -> Result<Coordinates, PlacesError> {
        match self {
            LocationInput::Pair(lat, lng) => Coordinates::new(*lat, *lng),
            LocationInput::Text(text) => text.parse(),
            LocationInput::Other(value) => Err(PlacesError::invalid_location(
                value.to_string(),
                "location must be a \"lat,lng\" string or a (lat, lng) pair",
            )),
        }
    }
}

impl From<(f64, f64)> for LocationInput {
    fn from((lat, lng): (f64, f64)) -> Self {
        LocationInput::Pair(lat, lng)
    }
}

impl From<Coordinates> for LocationInput {
    fn from(c: Coordinates) -> Self {
        LocationInput::Pair(c.latitude, c.longitude)
    }
}

impl From<&str> for LocationInput {
    fn from(s: &str) -> Self {
        LocationInput::Text(s.to_owned())
    }
}

impl From<String> for LocationInput {
    fn from(s: String) -> Self {
        LocationInput::Text(s)
    }
}

impl From<serde_json::Value> for LocationInput {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => LocationInput::Text(s),
            serde_json::Value::Array(ref items) if items.len() == 2 => {
                match (items[0].as_f64(), items[1].as_f64()) {
                    (Some(lat), Some(lng)) => LocationInput::Pair(lat, lng),
                    _ => LocationInput::Other(value),
                }
            }
            other => LocationInput::Other(other),
        }
    }
}

impl std::fmt::Display for LocationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationInput::Pair(lat, lng) => write!(f, "{lat},{lng}"),
            LocationInput::Text(text) => f.write_str(text),
            LocationInput::Other(value) => write!(f, "{value}"),
        }
    }
}
