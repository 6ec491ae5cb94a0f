use super::predictor::PricePredictor;
use serde::{Deserialize, Serialize};

/// Fitted linear regression: `intercept + coefficients · row`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearPredictor {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearPredictor {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }
}

impl PricePredictor for LinearPredictor {
    fn predict(&self, row: &[f64]) -> Result<f64, String> {
        if row.len() != self.coefficients.len() {
            return Err(format!(
                "Expected {} features, got {}",
                self.coefficients.len(),
                row.len()
            ));
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(row)
            .map(|(c, x)| c * x)
            .sum();
        Ok(self.intercept + dot)
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }
}
