pub mod client;
pub mod error;

pub use client::{ImageryClient, MAX_IMAGE_DIMENSION};
pub use error::ImageryError;
