use super::linear_predictor::LinearPredictor;
use super::predictor::PricePredictor;
use super::smartcore_predictor::SmartCorePredictor;
use serde::{Deserialize, Serialize};

/// Every model family the artifact file can carry, tagged by `kind`
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearPredictor),
    RandomForest(SmartCorePredictor),
}

impl ModelArtifact {
    pub fn into_predictor(self) -> Box<dyn PricePredictor> {
        match self {
            ModelArtifact::Linear(model) => Box::new(model),
            ModelArtifact::RandomForest(model) => Box::new(model),
        }
    }
}
