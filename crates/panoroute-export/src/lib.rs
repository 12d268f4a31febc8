pub mod error;
pub mod geojson;
pub mod map;

pub use crate::geojson::{sampled_points_to_feature_collection, write_feature_collection};
pub use error::ExportError;
pub use map::{render_map, write_map};
