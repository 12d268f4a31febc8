pub mod client;
pub mod error;
pub mod types;

pub use client::DirectionsClient;
pub use error::RouteError;
pub use types::{Route, TravelMode};
