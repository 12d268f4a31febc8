//! The fixed example scenario: a short walk through downtown Boston.
//!
//! One route fetch, sequential sampling, then one imagery fetch per sampled
//! point, in order. A failed image download is logged and skipped; the
//! GeoJSON and map artifacts are written before the imagery loop starts, so
//! they survive any number of imagery failures.

use std::fs;
use std::path::PathBuf;

use panoroute_core::{annotate, sample, AppConfig, GeoPoint};
use panoroute_export::{sampled_points_to_feature_collection, write_feature_collection, write_map};
use panoroute_imagery::ImageryClient;
use panoroute_route::{DirectionsClient, TravelMode};

const ROUTE_FILE: &str = "route.geojson";
const POINTS_FILE: &str = "spaced_points_with_heading.geojson";
const MAP_FILE: &str = "route_map.html";

/// Paths of everything a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub route_geojson: PathBuf,
    pub points_geojson: PathBuf,
    pub map_html: PathBuf,
    pub images: Vec<PathBuf>,
    pub failed_images: usize,
}

/// Runs the scenario end to end against the provided clients.
///
/// # Errors
///
/// Route fetching, sampling, and artifact writing are propagated without
/// recovery — a failure there aborts the run. Imagery failures do not.
pub async fn run(
    config: &AppConfig,
    directions: &DirectionsClient,
    imagery: &ImageryClient,
) -> anyhow::Result<RunSummary> {
    let start = GeoPoint::new(-71.062_290, 42.356_280)?;
    let destination = GeoPoint::new(-71.058_18, 42.351_55)?;

    tracing::info!(
        start_lat = start.lat,
        start_lon = start.lon,
        dest_lat = destination.lat,
        dest_lon = destination.lon,
        "fetching walking route"
    );
    let route = directions
        .get_route(start, destination, TravelMode::Walking)
        .await?;
    tracing::info!(
        points = route.geometry.points().len(),
        "route geometry received"
    );

    let spaced = sample(&route.geometry, config.sample_count)?;
    let annotated = annotate(&spaced);

    fs::create_dir_all(&config.output_dir)?;
    let route_geojson = config.output_dir.join(ROUTE_FILE);
    let points_geojson = config.output_dir.join(POINTS_FILE);
    let map_html = config.output_dir.join(MAP_FILE);

    write_feature_collection(&route_geojson, &route.raw)?;
    write_feature_collection(
        &points_geojson,
        &sampled_points_to_feature_collection(&annotated),
    )?;
    write_map(&map_html, start, destination, &route.raw, &annotated)?;

    let size = (config.image_width, config.image_height);
    let mut images = Vec::with_capacity(annotated.len());
    let mut failed_images = 0;
    for (index, sp) in annotated.iter().enumerate() {
        match imagery.get_image(sp.point, sp.heading, None, size).await {
            Ok(bytes) => {
                let path = config.output_dir.join(format!("streetview_{index:03}.jpg"));
                fs::write(&path, &bytes)?;
                images.push(path);
            }
            Err(e) => {
                tracing::warn!(
                    index,
                    lat = sp.point.lat,
                    lon = sp.point.lon,
                    error = %e,
                    "imagery fetch failed, skipping point"
                );
                failed_images += 1;
            }
        }
    }

    Ok(RunSummary {
        route_geojson,
        points_geojson,
        map_html,
        images,
        failed_images,
    })
}
