pub mod check;
pub mod dashboard;
pub mod examples;
pub mod predict;
pub mod serve;

use std::io;
use std::path::{Path, PathBuf};

use borocast_core::Classifier;

/// Resolve the model artifact path: `--model` flag, then the BOROCAST_MODEL
/// environment variable, then the default next to the working directory.
pub fn resolve_model_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("BOROCAST_MODEL").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(borocast_core::DEFAULT_MODEL_PATH))
}

/// Load the classifier or fail the whole command — there is no running
/// without a model artifact.
pub fn load_classifier(model_path: &Path) -> io::Result<Classifier> {
    Classifier::load(model_path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
