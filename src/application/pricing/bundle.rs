use crate::application::ml::predictor::PricePredictor;
use crate::domain::errors::SchemaError;
use crate::domain::ml::preprocessing::{FrequencyMapping, LabelEncoder, Scaler};
use std::collections::HashSet;
use std::fmt;

/// The fitted model together with the preprocessing objects it was trained
/// with. Immutable once built; share it behind an `Arc`.
pub struct ArtifactBundle {
    model: Box<dyn PricePredictor>,
    scaler: Scaler,
    label_encoder: LabelEncoder,
    freq_mapping: FrequencyMapping,
    features: Vec<String>,
}

impl ArtifactBundle {
    pub fn new(
        model: Box<dyn PricePredictor>,
        scaler: Scaler,
        label_encoder: LabelEncoder,
        freq_mapping: FrequencyMapping,
        features: Vec<String>,
    ) -> Result<Self, SchemaError> {
        scaler.validate()?;
        label_encoder.validate()?;

        if features.is_empty() {
            return Err(SchemaError::EmptyFeatureOrder);
        }
        let mut seen = HashSet::new();
        for name in &features {
            if !seen.insert(name.as_str()) {
                return Err(SchemaError::DuplicateFeature { name: name.clone() });
            }
        }

        Ok(Self {
            model,
            scaler,
            label_encoder,
            freq_mapping,
            features,
        })
    }

    pub fn model(&self) -> &dyn PricePredictor {
        self.model.as_ref()
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    pub fn label_encoder(&self) -> &LabelEncoder {
        &self.label_encoder
    }

    pub fn freq_mapping(&self) -> &FrequencyMapping {
        &self.freq_mapping
    }

    /// Column order the model was fitted with
    pub fn features(&self) -> &[String] {
        &self.features
    }
}

impl fmt::Debug for ArtifactBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactBundle")
            .field("model", &self.model.name())
            .field("scaler", &self.scaler)
            .field("label_encoder", &self.label_encoder)
            .field("freq_mapping", &self.freq_mapping.len())
            .field("features", &self.features)
            .finish()
    }
}
