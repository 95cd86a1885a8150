//! The sweep plan: which locations and place types a collection run visits.
//!
//! Locations are kept as raw values (`[lat, lng]` or `"lat,lng"`) and are
//! resolved by the request builder, so a malformed entry only fails its own
//! searches instead of the whole plan load.

use std::collections::HashSet;
use std::path::Path;

use placesweep_places::request::{DEFAULT_RADIUS_METERS, MAX_RESULT_CAP};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A search center with the label used in reports and CSV output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLocation {
    pub name: String,
    pub location: serde_json::Value,
}

impl NamedLocation {
    #[must_use]
    pub fn new(name: &str, lat: f64, lng: f64) -> Self {
        Self {
            name: name.to_string(),
            location: serde_json::json!([lat, lng]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPlan {
    #[serde(default = "default_radius")]
    pub radius_meters: f64,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    pub locations: Vec<NamedLocation>,
    pub place_types: Vec<String>,
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS_METERS
}

fn default_language() -> String {
    "en".to_string()
}

fn default_max_results() -> u32 {
    MAX_RESULT_CAP
}

impl Default for SweepPlan {
    /// Supermarket coverage across eight Manhattan neighbourhoods.
    fn default() -> Self {
        Self {
            radius_meters: default_radius(),
            language: default_language(),
            max_results: default_max_results(),
            locations: vec![
                NamedLocation::new("Midtown Manhattan", 40.7580, -73.9855),
                NamedLocation::new("Greenwich Village", 40.7282, -73.9942),
                NamedLocation::new("Upper West Side", 40.7614, -73.9776),
                NamedLocation::new("Tribeca", 40.7060, -74.0088),
                NamedLocation::new("Murray Hill", 40.7489, -73.9680),
                NamedLocation::new("Upper East Side", 40.7831, -73.9712),
                NamedLocation::new("SoHo", 40.7178, -73.9967),
                NamedLocation::new("East Village", 40.7308, -73.9973),
            ],
            place_types: vec![
                "supermarket".to_string(),
                "grocery_store".to_string(),
                "store".to_string(),
            ],
        }
    }
}

impl SweepPlan {
    /// Number of searches the plan will issue. An empty type list still
    /// searches each location once, without a type filter.
    #[must_use]
    pub fn search_count(&self) -> usize {
        self.locations.len() * self.place_types.len().max(1)
    }
}

/// Load and validate a sweep plan from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_plan(path: &Path) -> Result<SweepPlan, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PlanFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let plan: SweepPlan = serde_yaml::from_str(&content).map_err(ConfigError::PlanFileParse)?;

    validate_plan(&plan)?;

    Ok(plan)
}

fn validate_plan(plan: &SweepPlan) -> Result<(), ConfigError> {
    if plan.locations.is_empty() {
        return Err(ConfigError::Validation(
            "plan must list at least one location".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();
    for location in &plan.locations {
        if location.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "location name must be non-empty".to_string(),
            ));
        }
        if !seen_names.insert(location.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate location name: '{}'",
                location.name
            )));
        }
    }

    if plan.place_types.iter().any(|t| t.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "place type tags must be non-empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
