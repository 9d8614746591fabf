//! Flat-file model artifacts.
//!
//! Every app loads its pre-trained artifacts from JSON files in one
//! directory at startup and never writes them back. Loaders validate
//! structure eagerly so inference code can index without checks.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod heart;
pub mod laptop;
pub mod movie;
pub mod spam;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid artifact {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

pub type ArtifactResult<T> = Result<T, ArtifactError>;

pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> ArtifactResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn invalid(path: &Path, reason: impl Into<String>) -> ArtifactError {
    ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
