//! Price estimation over a loaded artifact bundle.

pub mod bundle;
pub mod pipeline;

pub use bundle::ArtifactBundle;
pub use pipeline::{build_features, predict};
