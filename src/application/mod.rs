// Model families that can be loaded from the artifact
pub mod ml;

// Feature construction and inference
pub mod pricing;
