//! Fitted preprocessing objects shipped alongside the model.
//!
//! All of them are fitted offline and only ever applied here.

use crate::domain::errors::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A fitted numeric scaler over a named, ordered set of columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// `(x - mean) / scale`
    Standard {
        feature_names: Vec<String>,
        mean: Vec<f64>,
        scale: Vec<f64>,
    },
    /// `x * scale + min`
    MinMax {
        feature_names: Vec<String>,
        min: Vec<f64>,
        scale: Vec<f64>,
    },
}

impl Scaler {
    /// Column names the scaler was fitted on, in fit order
    pub fn feature_names(&self) -> &[String] {
        match self {
            Scaler::Standard { feature_names, .. } | Scaler::MinMax { feature_names, .. } => {
                feature_names
            }
        }
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        let (names, first, second) = match self {
            Scaler::Standard {
                feature_names,
                mean,
                scale,
            } => (feature_names.len(), ("mean", mean), ("scale", scale)),
            Scaler::MinMax {
                feature_names,
                min,
                scale,
            } => (feature_names.len(), ("min", min), ("scale", scale)),
        };

        for (param, values) in [first, second] {
            if values.len() != names {
                return Err(SchemaError::ScalerShape {
                    names,
                    params: values.len(),
                    param,
                });
            }
        }
        Ok(())
    }

    /// Scales one row. `values` must be in `feature_names()` order.
    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        match self {
            Scaler::Standard { mean, scale, .. } => values
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(x, (m, s))| {
                    // Constant training columns carry a zero scale.
                    let s = if *s == 0.0 { 1.0 } else { *s };
                    (x - m) / s
                })
                .collect(),
            Scaler::MinMax { min, scale, .. } => values
                .iter()
                .zip(min.iter().zip(scale))
                .map(|(x, (lo, s))| x * s + lo)
                .collect(),
        }
    }
}

/// Fixed mapping between borough names and integer codes.
///
/// The code of a class is its position in `classes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Result<Self, SchemaError> {
        let encoder = Self { classes };
        encoder.validate()?;
        Ok(encoder)
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.classes.is_empty() {
            return Err(SchemaError::EmptyEncoder);
        }
        let mut seen = HashSet::new();
        for class in &self.classes {
            if !seen.insert(class.as_str()) {
                return Err(SchemaError::DuplicateClass {
                    class: class.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn encode(&self, class: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == class)
    }

    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }
}

/// Neighbourhood name to training-time frequency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyMapping(BTreeMap<String, f64>);

impl FrequencyMapping {
    pub fn new(entries: BTreeMap<String, f64>) -> Self {
        Self(entries)
    }

    pub fn get(&self, neighbourhood: &str) -> Option<f64> {
        self.0.get(neighbourhood).copied()
    }

    /// Known neighbourhoods in alphabetical order
    pub fn neighbourhoods(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for FrequencyMapping {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: &[&str]) -> Vec<String> {
        n.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_standard_scaler_transform() {
        let scaler = Scaler::Standard {
            feature_names: names(&["a", "b", "c"]),
            mean: vec![10.0, 0.0, 5.0],
            scale: vec![2.0, 1.0, 0.0],
        };

        let out = scaler.transform(&[12.0, -3.0, 7.0]);
        assert_eq!(out, vec![1.0, -3.0, 2.0]);
    }

    #[test]
    fn test_min_max_scaler_transform() {
        let scaler = Scaler::MinMax {
            feature_names: names(&["a", "b"]),
            min: vec![-1.0, 0.0],
            scale: vec![0.5, 0.1],
        };

        let out = scaler.transform(&[4.0, 10.0]);
        assert!((out[0] - 1.0).abs() < 1e-12);
        assert!((out[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scaler_shape_validation() {
        let scaler = Scaler::Standard {
            feature_names: names(&["a", "b"]),
            mean: vec![0.0, 0.0],
            scale: vec![1.0],
        };

        assert_eq!(
            scaler.validate(),
            Err(SchemaError::ScalerShape {
                names: 2,
                params: 1,
                param: "scale"
            })
        );
    }

    #[test]
    fn test_scaler_json_layout() {
        let json = r#"{"kind":"standard","feature_names":["a"],"mean":[1.0],"scale":[2.0]}"#;
        let scaler: Scaler = serde_json::from_str(json).unwrap();
        assert_eq!(scaler.feature_names(), &["a".to_string()]);
    }

    #[test]
    fn test_label_encoder_is_bidirectional() {
        let encoder = LabelEncoder::new(names(&["Bronx", "Brooklyn", "Manhattan"])).unwrap();

        assert_eq!(encoder.encode("Manhattan"), Some(2));
        assert_eq!(encoder.decode(1), Some("Brooklyn"));
        assert_eq!(encoder.encode("Atlantis"), None);
        assert_eq!(encoder.decode(3), None);
    }

    #[test]
    fn test_label_encoder_rejects_bad_vocabularies() {
        assert_eq!(LabelEncoder::new(vec![]), Err(SchemaError::EmptyEncoder));
        assert!(matches!(
            LabelEncoder::new(names(&["Queens", "Queens"])),
            Err(SchemaError::DuplicateClass { .. })
        ));
    }

    #[test]
    fn test_frequency_mapping_is_sorted() {
        let mapping: FrequencyMapping = [
            ("Midtown".to_string(), 0.03),
            ("Astoria".to_string(), 0.01),
        ]
        .into_iter()
        .collect();

        let order: Vec<&str> = mapping.neighbourhoods().collect();
        assert_eq!(order, vec!["Astoria", "Midtown"]);
        assert_eq!(mapping.get("Midtown"), Some(0.03));
        assert_eq!(mapping.get("Nowhere"), None);
    }
}
