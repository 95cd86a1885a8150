mod export;
mod report;
mod sweep;

use clap::Parser;
use placesweep_core::{load_plan, SweepPlan};
use placesweep_places::PlacesClient;
use tracing_subscriber::EnvFilter;

/// Collects nearby places for every location and place type in the sweep
/// plan and writes them to CSV.
///
/// Configuration comes from the environment (and `.env`): the API key in
/// `GOOGLE_PLACES_API_KEY`, the rest under `PLACESWEEP_*`.
#[derive(Debug, Parser)]
#[command(name = "placesweep")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let config = placesweep_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    let plan = match &config.plan_path {
        Some(path) => load_plan(path)?,
        None => SweepPlan::default(),
    };
    tracing::info!(
        locations = plan.locations.len(),
        place_types = plan.place_types.len(),
        searches = plan.search_count(),
        "starting sweep"
    );

    let client = PlacesClient::with_base_url(
        config.places_api_key.as_deref(),
        config.request_timeout_secs,
        &config.user_agent,
        &config.places_base_url,
    )?;

    let outcome = sweep::run_sweep(&client, &plan).await?;

    println!(
        "Searches: {} ({} failed)",
        outcome.searches,
        outcome.failures.len()
    );
    for failure in &outcome.failures {
        println!(
            "  Failed {} - {}: [{}] {}",
            failure.location, failure.place_type, failure.category, failure.message
        );
    }
    print!("{}", report::summarize(&outcome.rows));

    export::write_csv(&config.output_path, &outcome.rows)?;
    println!("csv file saved to {}", config.output_path.display());

    Ok(())
}
