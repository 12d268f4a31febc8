//! Geographic domain types shared across the workspace.
//!
//! Coordinates are WGS84 degrees in `(lon, lat)` order, matching GeoJSON.
//! Distances here are planar (degree space): the sampler only ever needs
//! relative lengths along one city-scale path, so no geodesic math is used.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A single WGS84 coordinate, immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a point, validating that `lon` ∈ [-180, 180] and
    /// `lat` ∈ [-90, 90].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CoordinateOutOfRange`] if either component is
    /// outside its valid range (or is not finite).
    pub fn new(lon: f64, lat: f64) -> Result<Self, CoreError> {
        if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::CoordinateOutOfRange { lon, lat });
        }
        Ok(Self { lon, lat })
    }
}

/// An ordered path of at least two points; insertion order is the travel
/// direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    /// Builds a polyline from an ordered point sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TooFewPoints`] for sequences shorter than 2 —
    /// a single point has no direction and cannot be sampled.
    pub fn new(points: Vec<GeoPoint>) -> Result<Self, CoreError> {
        if points.len() < 2 {
            return Err(CoreError::TooFewPoints(points.len()));
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Total planar length in degree space. Only meaningful as a divisor for
    /// normalized arc-length lookups.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| planar_distance(w[0], w[1]))
            .sum()
    }

    /// Returns the point at `fraction` of the total arc length, linearly
    /// interpolated along the segment it falls into. `fraction` is clamped
    /// to [0, 1]. A polyline of zero total length collapses to its first
    /// point for every fraction.
    #[must_use]
    pub fn point_at_fraction(&self, fraction: f64) -> GeoPoint {
        let total = self.length();
        if total == 0.0 {
            return self.points[0];
        }
        let target = fraction.clamp(0.0, 1.0) * total;

        let mut walked = 0.0;
        for w in self.points.windows(2) {
            let segment = planar_distance(w[0], w[1]);
            if segment > 0.0 && walked + segment >= target {
                let t = (target - walked) / segment;
                return GeoPoint {
                    lon: w[0].lon + (w[1].lon - w[0].lon) * t,
                    lat: w[0].lat + (w[1].lat - w[0].lat) * t,
                };
            }
            walked += segment;
        }

        // Accumulated rounding can leave target marginally past the last
        // segment; the path endpoint is the correct answer there.
        self.points[self.points.len() - 1]
    }
}

/// A sampled location plus the compass heading toward the next sample.
/// `heading` is 1–360 (360 = due north) and `None` only for the final point
/// of a sequence — never a sentinel 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampledPoint {
    pub point: GeoPoint,
    pub heading: Option<u16>,
}

fn planar_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let dx = b.lon - a.lon;
    let dy = b.lat - a.lat;
    dx.hypot(dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lon, lat).expect("test point should be valid")
    }

    #[test]
    fn geo_point_accepts_boundary_values() {
        assert!(GeoPoint::new(-180.0, -90.0).is_ok());
        assert!(GeoPoint::new(180.0, 90.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn geo_point_rejects_out_of_range_longitude() {
        let result = GeoPoint::new(180.5, 0.0);
        assert!(
            matches!(result, Err(CoreError::CoordinateOutOfRange { .. })),
            "expected CoordinateOutOfRange, got: {result:?}"
        );
    }

    #[test]
    fn geo_point_rejects_out_of_range_latitude() {
        let result = GeoPoint::new(0.0, 91.0);
        assert!(
            matches!(result, Err(CoreError::CoordinateOutOfRange { .. })),
            "expected CoordinateOutOfRange, got: {result:?}"
        );
    }

    #[test]
    fn geo_point_rejects_nan() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn polyline_rejects_fewer_than_two_points() {
        let result = Polyline::new(vec![p(0.0, 0.0)]);
        assert!(
            matches!(result, Err(CoreError::TooFewPoints(1))),
            "expected TooFewPoints(1), got: {result:?}"
        );
    }

    #[test]
    fn polyline_length_sums_segments() {
        let line = Polyline::new(vec![p(0.0, 0.0), p(3.0, 0.0), p(3.0, 4.0)]).unwrap();
        assert!((line.length() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn point_at_fraction_start_and_end() {
        let line = Polyline::new(vec![p(0.0, 0.0), p(10.0, 0.0)]).unwrap();
        assert_eq!(line.point_at_fraction(0.0), p(0.0, 0.0));
        assert_eq!(line.point_at_fraction(1.0), p(10.0, 0.0));
    }

    #[test]
    fn point_at_fraction_interpolates_across_segments() {
        // Two equal-length segments: 0.75 lands halfway down the second.
        let line = Polyline::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(8.0, 0.0)]).unwrap();
        let mid = line.point_at_fraction(0.75);
        assert!((mid.lon - 6.0).abs() < 1e-12);
        assert!(mid.lat.abs() < 1e-12);
    }

    #[test]
    fn point_at_fraction_clamps_out_of_range_input() {
        let line = Polyline::new(vec![p(0.0, 0.0), p(2.0, 2.0)]).unwrap();
        assert_eq!(line.point_at_fraction(-0.5), p(0.0, 0.0));
        assert_eq!(line.point_at_fraction(1.5), p(2.0, 2.0));
    }

    #[test]
    fn zero_length_polyline_collapses_to_first_point() {
        let line = Polyline::new(vec![p(1.0, 1.0), p(1.0, 1.0)]).unwrap();
        assert_eq!(line.point_at_fraction(0.5), p(1.0, 1.0));
    }

    #[test]
    fn sampled_point_heading_serializes_as_number_or_null() {
        let with_heading = SampledPoint {
            point: p(1.0, 2.0),
            heading: Some(360),
        };
        let value = serde_json::to_value(with_heading).unwrap();
        assert_eq!(value["heading"], serde_json::json!(360));

        let terminal = SampledPoint {
            point: p(1.0, 2.0),
            heading: None,
        };
        let value = serde_json::to_value(terminal).unwrap();
        assert!(value["heading"].is_null());
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let line =
            Polyline::new(vec![p(0.0, 0.0), p(0.0, 0.0), p(2.0, 0.0)]).unwrap();
        let mid = line.point_at_fraction(0.5);
        assert!((mid.lon - 1.0).abs() < 1e-12);
    }
}
