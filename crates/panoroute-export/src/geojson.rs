//! RFC 7946 GeoJSON writers for routes and sampled heading points.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

use panoroute_core::SampledPoint;

use crate::error::ExportError;

/// Builds a FeatureCollection of Point features, each carrying a `heading`
/// property: an integer in 1–360, or JSON null for the final point.
#[must_use]
pub fn sampled_points_to_feature_collection(points: &[SampledPoint]) -> FeatureCollection {
    let features = points
        .iter()
        .map(|sp| {
            let mut properties = JsonObject::new();
            let heading = sp
                .heading
                .map_or(serde_json::Value::Null, serde_json::Value::from);
            properties.insert("heading".to_owned(), heading);

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![sp.point.lon, sp.point.lat]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Writes a FeatureCollection to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ExportError::Io`] on filesystem failure or
/// [`ExportError::Serialize`] if serialization fails.
pub fn write_feature_collection(
    path: &Path,
    collection: &FeatureCollection,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, collection)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    tracing::info!(path = %path.display(), "GeoJSON written");
    Ok(())
}
