//! HTTP client for the street-level imagery API.
//!
//! One configuration-driven fetch method covers every parameter combination
//! (heading and pitch are independently optional), with the provider's
//! 640×640 size cap enforced locally so oversized requests never reach the
//! network.

use std::time::Duration;

use reqwest::{Client, Url};

use panoroute_core::GeoPoint;

use crate::error::ImageryError;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";
const STREETVIEW_PATH: &str = "maps/api/streetview";

/// Largest width or height the imagery provider serves.
pub const MAX_IMAGE_DIMENSION: u32 = 640;

/// Client for the street-level imagery API.
///
/// Manages the HTTP client, API key, and base URL. Use [`ImageryClient::new`]
/// for production or [`ImageryClient::with_base_url`] to point at a mock
/// server in tests.
pub struct ImageryClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl ImageryClient {
    /// Creates a new client pointed at the production imagery API.
    ///
    /// # Errors
    ///
    /// Returns [`ImageryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ImageryError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ImageryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ImageryError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, ImageryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ImageryError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches one street-level image for `location`, optionally constrained
    /// to a compass `heading` (1–360) and camera `pitch`.
    ///
    /// Returns the raw image bytes as served by the provider.
    ///
    /// # Errors
    ///
    /// - [`ImageryError::ImageTooLarge`] if either dimension of `size`
    ///   exceeds [`MAX_IMAGE_DIMENSION`]; no request is sent.
    /// - [`ImageryError::UnexpectedStatus`] for a non-2xx response.
    /// - [`ImageryError::Http`] on network failure.
    pub async fn get_image(
        &self,
        location: GeoPoint,
        heading: Option<u16>,
        pitch: Option<i16>,
        size: (u32, u32),
    ) -> Result<Vec<u8>, ImageryError> {
        let (width, height) = size;
        if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
            return Err(ImageryError::ImageTooLarge {
                width,
                height,
                max: MAX_IMAGE_DIMENSION,
            });
        }

        let url = self.image_url(location, heading, pitch, size)?;
        tracing::debug!(lat = location.lat, lon = location.lon, ?heading, "fetching image");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageryError::UnexpectedStatus {
                status: status.as_u16(),
                url: redacted(&url),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters. The provider expects `location` as `lat,lng`.
    fn image_url(
        &self,
        location: GeoPoint,
        heading: Option<u16>,
        pitch: Option<i16>,
        (width, height): (u32, u32),
    ) -> Result<Url, ImageryError> {
        let mut url = self
            .base_url
            .join(STREETVIEW_PATH)
            .map_err(|e| ImageryError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("size", &format!("{width}x{height}"));
            pairs.append_pair("location", &format!("{},{}", location.lat, location.lon));
            if let Some(heading) = heading {
                pairs.append_pair("heading", &heading.to_string());
            }
            if let Some(pitch) = pitch {
                pairs.append_pair("pitch", &pitch.to_string());
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }
}

/// URL rendered for error reporting, with the API key stripped.
fn redacted(url: &Url) -> String {
    let mut clean = url.clone();
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "key")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    clean.set_query(None);
    {
        let mut pairs = clean.query_pairs_mut();
        for (k, v) in &retained {
            pairs.append_pair(k, v);
        }
    }
    clean.to_string()
}
