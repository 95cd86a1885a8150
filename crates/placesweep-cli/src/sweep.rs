//! The sweep: one nearby search per (location, place type) pair, run
//! strictly in sequence.

use placesweep_core::SweepPlan;
use placesweep_places::{
    ErrorCategory, LocationInput, NormalizedPlace, PlacesClient, PlacesError, SearchQuery,
    Transport,
};

/// Label recorded for searches issued without a type filter.
pub const UNFILTERED_TYPE: &str = "any";

/// A normalized place plus the search that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub place: NormalizedPlace,
    pub location_searched: String,
    pub place_type_searched: String,
}

/// A search that failed and contributed no rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PairFailure {
    pub location: String,
    pub place_type: String,
    pub category: ErrorCategory,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct SweepOutcome {
    pub rows: Vec<SweepRow>,
    pub failures: Vec<PairFailure>,
    pub searches: usize,
}

fn query_for(
    plan: &SweepPlan,
    location: &serde_json::Value,
    place_type: Option<&str>,
) -> SearchQuery {
    SearchQuery::new(LocationInput::from(location.clone()))
        .radius(plan.radius_meters)
        .language(&plan.language)
        .max_results(plan.max_results)
        .place_types(place_type)
}

/// Runs every search in `plan` and collects the results.
///
/// A failed search is logged, recorded in [`SweepOutcome::failures`], and
/// skipped. The only error that aborts the sweep is a missing credential on
/// the first search, since no later search could succeed either.
///
/// # Errors
///
/// Returns [`PlacesError::MissingCredential`] as described above.
pub async fn run_sweep<T: Transport>(
    client: &PlacesClient<T>,
    plan: &SweepPlan,
) -> Result<SweepOutcome, PlacesError> {
    let type_filters: Vec<Option<&str>> = if plan.place_types.is_empty() {
        vec![None]
    } else {
        plan.place_types.iter().map(|t| Some(t.as_str())).collect()
    };

    let mut outcome = SweepOutcome::default();

    for location in &plan.locations {
        for &place_type in &type_filters {
            let type_label = place_type.unwrap_or(UNFILTERED_TYPE);
            let query = query_for(plan, &location.location, place_type);
            let first = outcome.searches == 0;
            outcome.searches += 1;

            match client.search_nearby(&query).await {
                Ok(places) => {
                    tracing::info!(
                        location = %location.name,
                        place_type = type_label,
                        count = places.len(),
                        "collected places"
                    );
                    outcome.rows.extend(places.into_iter().map(|place| SweepRow {
                        place,
                        location_searched: location.name.clone(),
                        place_type_searched: type_label.to_string(),
                    }));
                }
                Err(err @ PlacesError::MissingCredential) if first => return Err(err),
                Err(err) => {
                    tracing::warn!(
                        location = %location.name,
                        place_type = type_label,
                        category = %err.category(),
                        error = %err,
                        "search failed; skipping"
                    );
                    outcome.failures.push(PairFailure {
                        location: location.name.clone(),
                        place_type: type_label.to_string(),
                        category: err.category(),
                        message: err.to_string(),
                    });
                }
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
#[path = "sweep_test.rs"]
mod tests;
