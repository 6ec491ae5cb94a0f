pub mod linear_predictor;
pub mod model_artifact;
pub mod predictor;
pub mod smartcore_predictor;
