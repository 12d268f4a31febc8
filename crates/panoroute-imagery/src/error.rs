use thiserror::Error;

/// Errors returned by the street-level imagery client.
#[derive(Debug, Error)]
pub enum ImageryError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested size exceeds the provider's 640×640 cap. Raised locally,
    /// before any request is sent.
    #[error("requested image size {width}x{height} exceeds the {max}x{max} maximum")]
    ImageTooLarge { width: u32, height: u32, max: u32 },

    /// The imagery API answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The configured base URL does not parse.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
