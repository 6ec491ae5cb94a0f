// Feature schema shared with the offline training pipeline
pub mod feature_registry;

// Fitted scaler, label encoder and frequency table
pub mod preprocessing;
