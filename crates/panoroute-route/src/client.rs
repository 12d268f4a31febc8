//! HTTP client for the directions API.
//!
//! Wraps `reqwest` with provider-specific error handling, API key management,
//! and GeoJSON response parsing. The provider speaks the OpenRouteService
//! protocol: POST to `/v2/directions/{profile}/geojson` with an
//! `Authorization` header and a coordinates body, answering with an
//! RFC 7946 FeatureCollection whose first feature is the route LineString.

use std::time::Duration;

use geojson::{FeatureCollection, Value};
use reqwest::{header, Client, Url};

use panoroute_core::{GeoPoint, Polyline};

use crate::error::RouteError;
use crate::types::{Route, TravelMode};

const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org/";

/// Client for the directions API.
///
/// Manages the HTTP client, API key, and base URL. Use [`DirectionsClient::new`]
/// for production or [`DirectionsClient::with_base_url`] to point at a mock
/// server in tests.
pub struct DirectionsClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl DirectionsClient {
    /// Creates a new client pointed at the production directions API.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, RouteError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RouteError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, RouteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends the endpoint path instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| RouteError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches a route between two endpoints for the given travel mode.
    ///
    /// Returns the extracted [`Polyline`] alongside the raw FeatureCollection
    /// so callers can export the provider geometry untouched.
    ///
    /// # Errors
    ///
    /// - [`RouteError::Api`] if the provider answers with a non-2xx status.
    /// - [`RouteError::Http`] on network failure.
    /// - [`RouteError::Deserialize`] if the body is not a FeatureCollection.
    /// - [`RouteError::EmptyRoute`] / [`RouteError::MalformedGeometry`] /
    ///   [`RouteError::InvalidGeometry`] if no usable LineString is present.
    pub async fn get_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        mode: TravelMode,
    ) -> Result<Route, RouteError> {
        let url = self.directions_url(mode)?;
        let body = serde_json::json!({
            "coordinates": [[origin.lon, origin.lat], [destination.lon, destination.lat]],
            "units": "m",
        });

        tracing::debug!(%url, %mode, "requesting directions");

        let response = self
            .client
            .post(url.clone())
            .header(header::AUTHORIZATION, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(RouteError::Api {
                status: status.as_u16(),
                message: extract_error_message(&text),
            });
        }

        let raw: FeatureCollection =
            serde_json::from_str(&text).map_err(|e| RouteError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        let geometry = extract_polyline(&raw)?;
        Ok(Route { geometry, raw })
    }

    fn directions_url(&self, mode: TravelMode) -> Result<Url, RouteError> {
        let path = format!("v2/directions/{}/geojson", mode.profile());
        self.base_url
            .join(&path)
            .map_err(|e| RouteError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Pulls the first LineString out of the FeatureCollection and converts it
/// into a validated [`Polyline`].
fn extract_polyline(collection: &FeatureCollection) -> Result<Polyline, RouteError> {
    let line = collection
        .features
        .iter()
        .filter_map(|f| f.geometry.as_ref())
        .find_map(|g| match &g.value {
            Value::LineString(positions) => Some(positions),
            _ => None,
        })
        .ok_or(RouteError::EmptyRoute)?;

    let mut points = Vec::with_capacity(line.len());
    for position in line {
        let (Some(&lon), Some(&lat)) = (position.first(), position.get(1)) else {
            return Err(RouteError::MalformedGeometry(format!(
                "position has {} values, expected at least 2",
                position.len()
            )));
        };
        points.push(GeoPoint::new(lon, lat)?);
    }

    Ok(Polyline::new(points)?)
}

/// Best-effort extraction of the provider's error message from a failure body.
fn extract_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return truncate(body);
    };
    match value.get("error") {
        Some(serde_json::Value::String(message)) => message.clone(),
        Some(err) => err
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| truncate(body), ToOwned::to_owned),
        None => truncate(body),
    }
}

fn truncate(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > 200 {
        let head: String = trimmed.chars().take(200).collect();
        format!("{head}…")
    } else {
        trimmed.to_owned()
    }
}
