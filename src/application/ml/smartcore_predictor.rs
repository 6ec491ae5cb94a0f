use super::predictor::PricePredictor;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;

pub type Forest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Random forest regressor persisted in smartcore's serde layout
#[derive(Serialize, Deserialize)]
pub struct SmartCorePredictor {
    n_features: usize,
    forest: Forest,
}

impl SmartCorePredictor {
    pub fn new(forest: Forest, n_features: usize) -> Self {
        Self { forest, n_features }
    }
}

impl PricePredictor for SmartCorePredictor {
    fn predict(&self, row: &[f64]) -> Result<f64, String> {
        if row.len() != self.n_features {
            return Err(format!(
                "Expected {} features, got {}",
                self.n_features,
                row.len()
            ));
        }

        let input_matrix = DenseMatrix::from_2d_vec(&vec![row.to_vec()])
            .map_err(|e| format!("Matrix creation failed: {}", e))?;

        let predictions = self
            .forest
            .predict(&input_matrix)
            .map_err(|e| format!("Prediction failed: {}", e))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| "No prediction returned".to_string())
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }
}
