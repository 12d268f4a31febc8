//! Self-contained Leaflet HTML rendering of a route and its sampled points.
//!
//! The emitted page needs only network access to the OSM tile servers and
//! the Leaflet CDN; route geometry and sample markers are embedded inline.

use std::fs;
use std::path::Path;

use geojson::FeatureCollection;

use panoroute_core::{GeoPoint, SampledPoint};

use crate::error::ExportError;

const ZOOM_LEVEL: u8 = 15;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <title>panoroute</title>
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <style>
    html, body, #map { height: 100%; margin: 0; }
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    var map = L.map('map').setView(__CENTER__, __ZOOM__);
    L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
      maxZoom: 19,
      attribution: '&copy; OpenStreetMap contributors'
    }).addTo(map);

    var route = __ROUTE__;
    L.geoJSON(route).addTo(map);

    var samples = __SAMPLES__;
    samples.forEach(function (s) {
      var tooltip = s[2] === null ? 'heading: none' : 'heading: ' + s[2] + '°';
      L.circleMarker([s[0], s[1]], { radius: 4 }).bindTooltip(tooltip).addTo(map);
    });

    L.marker(__START__).bindTooltip('Start').addTo(map);
    L.marker(__DEST__).bindTooltip('Destination').addTo(map);
  </script>
</body>
</html>
"#;

/// Renders the interactive map page: the route layer, one circle marker per
/// sampled point (tooltip shows its heading), and pin markers for start and
/// destination. The view is centered on the start at street-level zoom.
///
/// # Errors
///
/// Returns [`ExportError::Serialize`] if the route geometry cannot be
/// serialized for embedding.
pub fn render_map(
    start: GeoPoint,
    destination: GeoPoint,
    route: &FeatureCollection,
    samples: &[SampledPoint],
) -> Result<String, ExportError> {
    let sample_rows: Vec<serde_json::Value> = samples
        .iter()
        .map(|sp| serde_json::json!([sp.point.lat, sp.point.lon, sp.heading]))
        .collect();

    Ok(TEMPLATE
        .replace("__CENTER__", &lat_lon(start)?)
        .replace("__ZOOM__", &ZOOM_LEVEL.to_string())
        .replace("__ROUTE__", &serde_json::to_string(route)?)
        .replace("__SAMPLES__", &serde_json::to_string(&sample_rows)?)
        .replace("__START__", &lat_lon(start)?)
        .replace("__DEST__", &lat_lon(destination)?))
}

/// Renders and writes the map page to `path`.
///
/// # Errors
///
/// Returns [`ExportError::Io`] on filesystem failure or
/// [`ExportError::Serialize`] if the route geometry cannot be embedded.
pub fn write_map(
    path: &Path,
    start: GeoPoint,
    destination: GeoPoint,
    route: &FeatureCollection,
    samples: &[SampledPoint],
) -> Result<(), ExportError> {
    let html = render_map(start, destination, route, samples)?;
    fs::write(path, html)?;
    tracing::info!(path = %path.display(), "map written");
    Ok(())
}

// Leaflet wants [lat, lon] pairs, the reverse of GeoJSON order.
fn lat_lon(point: GeoPoint) -> Result<String, ExportError> {
    Ok(serde_json::to_string(&[point.lat, point.lon])?)
}
