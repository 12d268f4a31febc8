use thiserror::Error;

/// Errors returned by the directions API client.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The directions API answered with a non-2xx status.
    #[error("directions API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed as a GeoJSON FeatureCollection.
    #[error("GeoJSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response parsed, but no feature carries a LineString geometry.
    #[error("directions response contains no route geometry")]
    EmptyRoute,

    /// A LineString position was shorter than `[lon, lat]`.
    #[error("malformed route geometry: {0}")]
    MalformedGeometry(String),

    /// The route geometry violated the domain invariants (coordinate range,
    /// minimum point count).
    #[error("invalid route geometry: {0}")]
    InvalidGeometry(#[from] panoroute_core::CoreError),

    /// The configured base URL does not parse.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
