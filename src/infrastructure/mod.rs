// Deployment artifact loading and process-wide caching
pub mod artifact_loader;
