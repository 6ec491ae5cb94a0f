//! Command-line front end over the pricing core.

use crate::application::pricing::{ArtifactBundle, predict};
use crate::config::Config;
use crate::domain::listing::{PredictionResult, RawInput, RoomType};
use crate::infrastructure::artifact_loader::ArtifactCache;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "NYC nightly rental price estimator", long_about = None)]
pub struct Cli {
    /// Path to the deployment artifact (overrides MINOAI_ARTIFACT_PATH)
    #[arg(long, global = true)]
    pub artifact: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the nightly price of a listing
    Predict(PredictArgs),
    /// Show the boroughs, neighbourhoods and features the artifact knows
    Inspect,
}

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Borough (defaults to the first one the model knows)
    #[arg(long)]
    pub borough: Option<String>,

    /// Neighbourhood (defaults to the alphabetically first known one)
    #[arg(long)]
    pub neighbourhood: Option<String>,

    /// Entire home/apt, Private room or Shared room
    #[arg(long, default_value = "Entire home/apt")]
    pub room_type: RoomType,

    /// Days per year the listing is available
    #[arg(long, default_value_t = 200)]
    pub availability: u32,

    /// Minimum nights per stay
    #[arg(long, default_value_t = 1)]
    pub min_nights: u32,

    /// Number of listings the host has
    #[arg(long, default_value_t = 1)]
    pub host_listings: u32,

    #[arg(long, default_value_t = 40.7128, allow_negative_numbers = true)]
    pub latitude: f64,

    #[arg(long, default_value_t = -74.0060, allow_negative_numbers = true)]
    pub longitude: f64,

    /// Total number of reviews
    #[arg(long, default_value_t = 25)]
    pub reviews: u32,

    /// New reviews per month
    #[arg(long, default_value_t = 1.5)]
    pub reviews_per_month: f64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl PredictArgs {
    /// Resolves the form values, filling unset categories from the artifact vocabulary
    pub fn to_raw_input(&self, bundle: &ArtifactBundle) -> RawInput {
        let borough = self.borough.clone().unwrap_or_else(|| {
            bundle
                .label_encoder()
                .classes()
                .first()
                .cloned()
                .unwrap_or_default()
        });
        let neighbourhood = self.neighbourhood.clone().unwrap_or_else(|| {
            bundle
                .freq_mapping()
                .neighbourhoods()
                .next()
                .map(str::to_string)
                .unwrap_or_default()
        });

        RawInput {
            latitude: self.latitude,
            longitude: self.longitude,
            minimum_nights: self.min_nights,
            number_of_reviews: self.reviews,
            reviews_per_month: self.reviews_per_month,
            host_listings_count: self.host_listings,
            availability_365: self.availability,
            borough,
            neighbourhood,
            room_type: self.room_type,
        }
    }
}

#[derive(Serialize)]
struct PredictionReport<'a> {
    price: f64,
    model: &'a str,
    input: &'a RawInput,
}

pub fn render_prediction(input: &RawInput, result: &PredictionResult) -> String {
    format!(
        "Recommended nightly rate for {}: {}",
        input.neighbourhood, result
    )
}

pub fn render_prediction_json(
    bundle: &ArtifactBundle,
    input: &RawInput,
    result: &PredictionResult,
) -> Result<String> {
    let report = PredictionReport {
        price: result.price,
        model: bundle.model().name(),
        input,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize prediction")
}

pub fn render_inspect(bundle: &ArtifactBundle) -> String {
    let mut lines = vec![
        format!("Model:    {}", bundle.model().name()),
        format!("Features: {}", bundle.features().join(", ")),
        format!("Scaled:   {}", bundle.scaler().feature_names().join(", ")),
        format!("Boroughs: {}", bundle.label_encoder().classes().join(", ")),
        format!("Neighbourhoods ({}):", bundle.freq_mapping().len()),
    ];
    lines.extend(
        bundle
            .freq_mapping()
            .neighbourhoods()
            .map(|name| format!("  {}", name)),
    );
    lines.join("\n")
}

/// Log filter from a `RUST_LOG`-style value, `info` when unset or invalid
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Runs one CLI invocation. A load failure stops everything.
pub fn run(cli: Cli, config: Config) -> Result<String> {
    let path = cli.artifact.unwrap_or(config.artifact_path);
    let cache = ArtifactCache::new(path);
    let bundle = cache.get()?;

    match cli.command {
        Commands::Inspect => Ok(render_inspect(&bundle)),
        Commands::Predict(args) => {
            let input = args.to_raw_input(&bundle);
            if config.strict_inputs {
                input.validate()?;
            }

            let result = predict(&bundle, &input)?;
            info!("Prediction complete: {}", result);

            if args.json {
                render_prediction_json(&bundle, &input, &result)
            } else {
                Ok(render_prediction(&input, &result))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::linear_predictor::LinearPredictor;
    use crate::domain::ml::feature_registry::{FEATURE_NAMES, SCALED_FEATURES};
    use crate::domain::ml::preprocessing::{FrequencyMapping, LabelEncoder, Scaler};

    fn bundle() -> ArtifactBundle {
        ArtifactBundle::new(
            Box::new(LinearPredictor::new(vec![0.0; FEATURE_NAMES.len()], 120.0)),
            Scaler::Standard {
                feature_names: SCALED_FEATURES.iter().map(|s| s.to_string()).collect(),
                mean: vec![0.0; SCALED_FEATURES.len()],
                scale: vec![1.0; SCALED_FEATURES.len()],
            },
            LabelEncoder::new(vec!["Brooklyn".to_string(), "Manhattan".to_string()]).unwrap(),
            [
                ("Williamsburg".to_string(), 0.08),
                ("Harlem".to_string(), 0.05),
            ]
            .into_iter()
            .collect::<FrequencyMapping>(),
            FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_predict_defaults_follow_the_form() {
        let cli = Cli::try_parse_from(["minoai", "predict"]).unwrap();
        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };

        assert_eq!(args.availability, 200);
        assert_eq!(args.min_nights, 1);
        assert_eq!(args.host_listings, 1);
        assert_eq!(args.reviews, 25);
        assert_eq!(args.reviews_per_month, 1.5);
        assert_eq!(args.latitude, 40.7128);
        assert_eq!(args.longitude, -74.0060);
        assert_eq!(args.room_type, RoomType::EntireHome);
        assert!(!args.json);
    }

    #[test]
    fn test_predict_parses_overrides() {
        let cli = Cli::try_parse_from([
            "minoai",
            "predict",
            "--borough",
            "Brooklyn",
            "--room-type",
            "Shared room",
            "--longitude",
            "-73.95",
            "--json",
            "--artifact",
            "model.json",
        ])
        .unwrap();

        assert_eq!(cli.artifact, Some(PathBuf::from("model.json")));
        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.borough.as_deref(), Some("Brooklyn"));
        assert_eq!(args.room_type, RoomType::SharedRoom);
        assert_eq!(args.longitude, -73.95);
        assert!(args.json);
    }

    #[test]
    fn test_bad_room_type_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["minoai", "predict", "--room-type", "Castle"]).is_err());
    }

    #[test]
    fn test_unset_categories_default_to_vocabulary() {
        let cli = Cli::try_parse_from(["minoai", "predict"]).unwrap();
        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };

        let input = args.to_raw_input(&bundle());
        assert_eq!(input.borough, "Brooklyn");
        assert_eq!(input.neighbourhood, "Harlem");
    }

    #[test]
    fn test_render_prediction() {
        let bundle = bundle();
        let input = RawInput {
            latitude: 40.7,
            longitude: -73.9,
            minimum_nights: 2,
            number_of_reviews: 3,
            reviews_per_month: 0.2,
            host_listings_count: 1,
            availability_365: 10,
            borough: "Manhattan".to_string(),
            neighbourhood: "Harlem".to_string(),
            room_type: RoomType::PrivateRoom,
        };
        let result = predict(&bundle, &input).unwrap();

        assert_eq!(
            render_prediction(&input, &result),
            "Recommended nightly rate for Harlem: $120.00"
        );

        let json = render_prediction_json(&bundle, &input, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["price"], 120.0);
        assert_eq!(value["model"], "Linear Regression");
        assert_eq!(value["input"]["room_type"], "Private room");
    }

    #[test]
    fn test_render_inspect_lists_vocabulary() {
        let out = render_inspect(&bundle());
        assert!(out.contains("Boroughs: Brooklyn, Manhattan"));
        assert!(out.contains("Neighbourhoods (2):"));
        assert!(out.contains("  Williamsburg"));
        assert!(out.contains("room_type_Private room"));
    }

    #[test]
    fn test_log_filter_honours_rust_log() {
        assert_eq!(log_filter(Some("debug")).to_string(), "debug");
        assert_eq!(log_filter(Some("minoai=trace")).to_string(), "minoai=trace");
    }

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).to_string(), "info");
        assert_eq!(log_filter(Some("minoai=notalevel")).to_string(), "info");
    }

    #[test]
    fn test_run_reports_missing_artifact() {
        let missing = std::env::temp_dir().join("minoai-cli-missing.json");
        let cli = Cli::try_parse_from(["minoai", "inspect"]).unwrap();
        let config = Config {
            artifact_path: missing,
            strict_inputs: true,
        };

        let err = run(cli, config).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
