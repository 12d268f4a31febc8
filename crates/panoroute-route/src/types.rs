//! Typed surface of the directions provider.

use geojson::FeatureCollection;
use panoroute_core::Polyline;

/// Routing profile requested from the directions provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Walking,
    Driving,
}

impl TravelMode {
    /// The provider-side profile segment used in the request path.
    #[must_use]
    pub fn profile(self) -> &'static str {
        match self {
            Self::Walking => "foot-walking",
            Self::Driving => "driving-car",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.profile())
    }
}

/// A fetched route: the extracted polyline for sampling, plus the raw
/// FeatureCollection exactly as the provider returned it, kept for export.
#[derive(Debug, Clone)]
pub struct Route {
    pub geometry: Polyline,
    pub raw: FeatureCollection,
}
