use clap::Parser;
use tracing_subscriber::EnvFilter;

use panoroute_cli::scenario;
use panoroute_imagery::ImageryClient;
use panoroute_route::DirectionsClient;

/// Entry point shell. The scenario is fixed (no flags by design); clap still
/// gives us `--help` and rejects stray arguments.
#[derive(Debug, Parser)]
#[command(name = "panoroute")]
#[command(about = "Fetch a route, sample headed points along it, download street-level imagery")]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Cli {} = Cli::parse();

    let config = panoroute_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();
    tracing::debug!(?config, "configuration loaded");

    let directions = DirectionsClient::new(
        &config.route_api_key,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let imagery = ImageryClient::new(
        &config.imagery_api_key,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let summary = scenario::run(&config, &directions, &imagery).await?;

    tracing::info!(
        route = %summary.route_geojson.display(),
        points = %summary.points_geojson.display(),
        map = %summary.map_html.display(),
        images = summary.images.len(),
        failed_images = summary.failed_images,
        "run complete"
    );
    for image in &summary.images {
        tracing::info!(path = %image.display(), "fetched image");
    }

    Ok(())
}
