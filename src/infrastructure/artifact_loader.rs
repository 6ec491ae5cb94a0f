use crate::application::ml::model_artifact::ModelArtifact;
use crate::application::pricing::ArtifactBundle;
use crate::domain::errors::LoadError;
use crate::domain::ml::preprocessing::{FrequencyMapping, LabelEncoder, Scaler};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{error, info, warn};

/// Well-known location of the deployment artifact, relative to the working directory
pub const DEFAULT_ARTIFACT_PATH: &str = "minoai_deployment_v1.json";

/// On-disk layout of the deployment artifact
#[derive(Deserialize)]
struct BundleFile {
    model: ModelArtifact,
    scaler: Scaler,
    label_encoder: LabelEncoder,
    freq_mapping: FrequencyMapping,
    features: Vec<String>,
}

/// Reads and validates the artifact at `path`. Not cached.
pub fn load_from(path: &Path) -> Result<ArtifactBundle, LoadError> {
    if !path.exists() {
        warn!("Model artifact not found at {:?}", path);
        return Err(LoadError::MissingArtifact {
            path: path.to_path_buf(),
        });
    }

    // The handle is dropped as soon as deserialization finishes.
    let file: BundleFile = {
        let reader = File::open(path).map_err(|e| {
            error!("Failed to open model artifact: {}", e);
            LoadError::corrupt(path, e)
        })?;
        serde_json::from_reader(BufReader::new(reader)).map_err(|e| {
            error!("Failed to deserialize model artifact: {}", e);
            LoadError::corrupt(path, e)
        })?
    };

    let bundle = ArtifactBundle::new(
        file.model.into_predictor(),
        file.scaler,
        file.label_encoder,
        file.freq_mapping,
        file.features,
    )
    .map_err(|e| {
        error!("Model artifact is inconsistent: {}", e);
        LoadError::corrupt(path, e)
    })?;

    info!(
        "Loaded {} from {:?} ({} features, {} boroughs, {} neighbourhoods)",
        bundle.model().name(),
        path,
        bundle.features().len(),
        bundle.label_encoder().classes().len(),
        bundle.freq_mapping().len()
    );
    Ok(bundle)
}

/// Lazily loaded, process-lifetime artifact handle.
///
/// The first call to [`ArtifactCache::get`] loads the file; every later call
/// returns that same outcome, failure included. Restart to pick up a new file.
#[derive(Debug)]
pub struct ArtifactCache {
    path: PathBuf,
    cell: OnceLock<Result<Arc<ArtifactBundle>, LoadError>>,
}

impl ArtifactCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> Result<Arc<ArtifactBundle>, LoadError> {
        self.cell
            .get_or_init(|| load_from(&self.path).map(Arc::new))
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for ArtifactCache {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACT_PATH)
    }
}

static DEFAULT_CACHE: OnceLock<ArtifactCache> = OnceLock::new();

/// Process-wide artifact at [`DEFAULT_ARTIFACT_PATH`], loaded on first use
pub fn load() -> Result<Arc<ArtifactBundle>, LoadError> {
    DEFAULT_CACHE.get_or_init(ArtifactCache::default).get()
}
