//! MinoAI - NYC nightly rental price estimator
//!
//! # Usage
//! ```sh
//! minoai inspect
//! minoai predict --borough Manhattan --neighbourhood Midtown --room-type "Private room"
//! ```
//!
//! # Environment Variables
//! - `MINOAI_ARTIFACT_PATH` - Deployment artifact (default: minoai_deployment_v1.json)
//! - `MINOAI_STRICT_INPUTS` - Reject inputs outside the form ranges (default: true)
//! - `RUST_LOG` - Log filter (default: info)

use anyhow::Result;
use clap::Parser;
use minoai::config::Config;
use minoai::interfaces::cli::{self, Cli};
use tracing::info;
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    // Load Env (before anything reads configuration)
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for --json output
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(cli::log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with(stderr_layer)
        .init();

    let args = Cli::parse();
    let config = Config::from_env()?;
    info!(
        "MinoAI {} using artifact {:?}",
        env!("CARGO_PKG_VERSION"),
        args.artifact.as_ref().unwrap_or(&config.artifact_path)
    );

    let output = cli::run(args, config)?;
    println!("{}", output);
    Ok(())
}
