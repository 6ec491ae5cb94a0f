/// Interface for fitted price regression models
pub trait PricePredictor: Send + Sync {
    /// Predict the nightly price for one fully preprocessed row.
    /// The row is in the model's fitted column order.
    fn predict(&self, row: &[f64]) -> Result<f64, String>;

    /// Number of input columns the model was fitted with
    fn n_features(&self) -> usize;

    /// Get model name/type
    fn name(&self) -> &str;
}
