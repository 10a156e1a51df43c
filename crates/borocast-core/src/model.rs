//! Model artifact loading.
//!
//! The dashboard loads a serialized model manifest exactly once at startup.
//! The manifest describes the trained classifier (a BiLSTM over GloVe
//! embeddings in the original pipeline) but is not yet consulted at
//! prediction time. Loading must fail fast: a missing or malformed artifact
//! aborts the process before any session state exists.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::borough::Borough;

/// Default artifact path, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "borocast-model.json";

/// Serialized model manifest (JSON on disk).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelManifest {
    /// Artifact name, e.g. `nyc311-bilstm`.
    pub name: String,
    /// Artifact format version.
    pub version: u32,
    /// Architecture label, informational only.
    pub architecture: String,
    /// Embedding dimensionality the model was trained with.
    pub embedding_dim: usize,
    /// Output class labels. Must be the five boroughs in canonical order.
    pub labels: Vec<String>,
}

impl ModelManifest {
    /// Load and validate a manifest from disk.
    ///
    /// Any failure here is fatal for the caller: the process has no degraded
    /// mode without a model artifact.
    pub fn load(path: &Path) -> io::Result<ModelManifest> {
        let raw = fs::read_to_string(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("model artifact {}: {e}", path.display()),
            )
        })?;
        let manifest: ModelManifest = serde_json::from_str(&raw).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("model artifact {}: {e}", path.display()),
            )
        })?;
        manifest.validate()?;
        log::info!(
            "loaded model artifact {} ({} v{}, dim {})",
            path.display(),
            manifest.name,
            manifest.version,
            manifest.embedding_dim
        );
        Ok(manifest)
    }

    /// Check that the manifest matches what the dashboard can serve.
    pub fn validate(&self) -> io::Result<()> {
        let expected: Vec<&str> = Borough::ALL.iter().map(|b| b.label()).collect();
        let got: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        if got != expected {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "model artifact lists labels {got:?}, expected the five NYC boroughs {expected:?}"
                ),
            ));
        }
        if self.embedding_dim == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "model artifact has embedding_dim 0",
            ));
        }
        Ok(())
    }

    /// A valid placeholder manifest, used by `borocast check --init` and the
    /// test suite.
    pub fn placeholder() -> ModelManifest {
        ModelManifest {
            name: "nyc311-bilstm".to_string(),
            version: 1,
            architecture: "bilstm-glove".to_string(),
            embedding_dim: 100,
            labels: Borough::ALL.iter().map(|b| b.label().to_string()).collect(),
        }
    }

    /// Write this manifest to disk as pretty JSON.
    pub fn write(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
