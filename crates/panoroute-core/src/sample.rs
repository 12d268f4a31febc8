//! Evenly-spaced point sampling along a polyline, plus heading annotation.

use crate::bearing::bearing;
use crate::error::CoreError;
use crate::types::{GeoPoint, Polyline, SampledPoint};

/// Samples `count` points at uniform arc-length spacing along `path`.
///
/// Fractions are `i / count` for `i` in `0..count`, so the first sample is
/// the path origin and every fraction stays strictly below 1.0 — the path's
/// terminal point is normally excluded unless a step lands on it. Uniform
/// spacing over endpoint inclusion is the intended trade-off here.
///
/// # Errors
///
/// Returns [`CoreError::InvalidSampleCount`] when `count` is 0.
#[allow(clippy::cast_precision_loss)]
pub fn sample(path: &Polyline, count: usize) -> Result<Vec<GeoPoint>, CoreError> {
    if count == 0 {
        return Err(CoreError::InvalidSampleCount(count));
    }

    Ok((0..count)
        .map(|i| path.point_at_fraction(i as f64 / count as f64))
        .collect())
}

/// Attaches to each point the compass bearing toward its successor; the
/// final point carries no heading. An empty input yields an empty output.
#[must_use]
pub fn annotate(points: &[GeoPoint]) -> Vec<SampledPoint> {
    let mut annotated = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        annotated.push(SampledPoint {
            point: pair[0],
            heading: Some(bearing(pair[0], pair[1])),
        });
    }
    if let Some(last) = points.last() {
        annotated.push(SampledPoint {
            point: *last,
            heading: None,
        });
    }
    annotated
}
