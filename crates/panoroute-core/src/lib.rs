pub mod app_config;
pub mod bearing;
pub mod config;
pub mod error;
pub mod sample;
pub mod types;

pub use app_config::AppConfig;
pub use bearing::bearing;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use sample::{annotate, sample};
pub use types::{GeoPoint, Polyline, SampledPoint};
