//! Configuration module for MinoAI.
//!
//! Settings are read from environment variables (a `.env` file is honoured
//! by the binary). None of them are part of the pricing core itself.

use crate::infrastructure::artifact_loader::DEFAULT_ARTIFACT_PATH;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const ARTIFACT_PATH_VAR: &str = "MINOAI_ARTIFACT_PATH";
pub const STRICT_INPUTS_VAR: &str = "MINOAI_STRICT_INPUTS";

/// Main application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Location of the deployment artifact
    pub artifact_path: PathBuf,
    /// Reject inputs outside the ranges the pricing form allows
    pub strict_inputs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            strict_inputs: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let artifact_path = lookup(ARTIFACT_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.artifact_path);

        let strict_inputs = match lookup(STRICT_INPUTS_VAR) {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("Failed to parse {}", STRICT_INPUTS_VAR))?,
            None => defaults.strict_inputs,
        };

        Ok(Self {
            artifact_path,
            strict_inputs,
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("Invalid boolean: {}. Must be 'true' or 'false'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.artifact_path, PathBuf::from("minoai_deployment_v1.json"));
        assert!(config.strict_inputs);
    }

    #[test]
    fn test_config_overrides() {
        let config = config_from(&[
            (ARTIFACT_PATH_VAR, "/srv/models/nyc.json"),
            (STRICT_INPUTS_VAR, "off"),
        ])
        .unwrap();

        assert_eq!(config.artifact_path, PathBuf::from("/srv/models/nyc.json"));
        assert!(!config.strict_inputs);
    }

    #[test]
    fn test_blank_artifact_path_falls_back() {
        let config = config_from(&[(ARTIFACT_PATH_VAR, "  ")]).unwrap();
        assert_eq!(config.artifact_path, PathBuf::from(DEFAULT_ARTIFACT_PATH));
    }

    #[test]
    fn test_invalid_bool_is_an_error() {
        let err = config_from(&[(STRICT_INPUTS_VAR, "maybe")]).unwrap_err();
        assert!(format!("{:#}", err).contains("maybe"));
    }
}
