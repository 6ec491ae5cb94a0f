use super::bundle::ArtifactBundle;
use crate::domain::errors::PredictionError;
use crate::domain::listing::{PredictionResult, RawInput};
use crate::domain::ml::feature_registry::{FeatureVector, SCALED_FEATURES, named_features};
use crate::domain::ml::preprocessing::Scaler;
use tracing::{debug, info, warn};

/// Builds the scaled model input row for one listing.
///
/// Unknown neighbourhoods get a frequency of 0, matching the training-time
/// convention. An unknown borough is an error.
pub fn build_features(
    bundle: &ArtifactBundle,
    input: &RawInput,
) -> Result<FeatureVector, PredictionError> {
    let encoder = bundle.label_encoder();
    let borough_code =
        encoder
            .encode(&input.borough)
            .ok_or_else(|| PredictionError::UnknownCategory {
                value: input.borough.clone(),
                known: encoder.classes().to_vec(),
            })?;

    let frequency = match bundle.freq_mapping().get(&input.neighbourhood) {
        Some(frequency) => frequency,
        None => {
            debug!(
                "Neighbourhood '{}' not in frequency table, using 0",
                input.neighbourhood
            );
            0.0
        }
    };

    let available = named_features(input, borough_code, frequency);

    let mut values = Vec::with_capacity(bundle.features().len());
    let mut missing = Vec::new();
    for name in bundle.features() {
        match available.iter().find(|(n, _)| n == name) {
            Some((_, value)) => values.push(*value),
            None => missing.push(name.as_str()),
        }
    }
    if !missing.is_empty() {
        return Err(PredictionError::FeatureMismatch {
            reason: format!("pipeline does not produce {}", missing.join(", ")),
        });
    }

    let expected = bundle.model().n_features();
    if expected != values.len() {
        return Err(PredictionError::FeatureMismatch {
            reason: format!(
                "model was fitted on {} features, feature order lists {}",
                expected,
                values.len()
            ),
        });
    }

    let mut vector = FeatureVector::new(bundle.features().to_vec(), values);
    scale_numeric_subset(bundle.scaler(), &mut vector)?;
    Ok(vector)
}

/// Replaces the scaled columns in place. The scaler must have been fitted on
/// exactly `SCALED_FEATURES`, in that order.
fn scale_numeric_subset(
    scaler: &Scaler,
    vector: &mut FeatureVector,
) -> Result<(), PredictionError> {
    let fitted = scaler.feature_names();
    if !fitted
        .iter()
        .map(String::as_str)
        .eq(SCALED_FEATURES.iter().copied())
    {
        return Err(PredictionError::FeatureMismatch {
            reason: format!(
                "scaler was fitted on [{}], pipeline scales [{}]",
                fitted.join(", "),
                SCALED_FEATURES.join(", ")
            ),
        });
    }

    let positions = SCALED_FEATURES
        .iter()
        .map(|name| {
            vector
                .position(name)
                .ok_or_else(|| PredictionError::FeatureMismatch {
                    reason: format!("scaled feature '{}' is not in the feature order", name),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let raw: Vec<f64> = positions.iter().map(|&i| vector.values()[i]).collect();
    let scaled = scaler.transform(&raw);

    let values = vector.values_mut();
    for (i, value) in positions.into_iter().zip(scaled) {
        values[i] = value;
    }
    Ok(())
}

/// Estimates the nightly price of one listing.
///
/// The model output is returned unclamped.
pub fn predict(
    bundle: &ArtifactBundle,
    input: &RawInput,
) -> Result<PredictionResult, PredictionError> {
    let vector = build_features(bundle, input)?;

    let price = bundle
        .model()
        .predict(vector.values())
        .map_err(|reason| PredictionError::InferenceFailed { reason })?;

    if !price.is_finite() || price < 0.0 {
        warn!(
            "Model returned an implausible price {} for {} / {}",
            price, input.borough, input.neighbourhood
        );
    }

    info!(
        "Estimated ${:.2} for {} in {} ({})",
        price, input.room_type, input.neighbourhood, input.borough
    );
    Ok(PredictionResult { price })
}
