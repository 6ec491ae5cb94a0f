pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use application::pricing::{ArtifactBundle, build_features, predict};
pub use domain::errors::{LoadError, PredictionError};
pub use domain::listing::{PredictionResult, RawInput, RoomType};
pub use infrastructure::artifact_loader::{ArtifactCache, load, load_from};
