// Domain-specific error types
pub mod errors;

// Listing attributes and prediction output
pub mod listing;

// Feature schema and preprocessing artifacts
pub mod ml;
