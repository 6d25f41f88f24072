use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Walkdir(#[from] walkdir::Error),

    #[error("{descriptor} not found in {dir}")]
    MissingDescriptor { dir: PathBuf, descriptor: String },

    #[error("descriptor in {dir} missing frontmatter")]
    MissingFrontmatter { dir: PathBuf },

    #[error("descriptor in {dir} has unclosed frontmatter")]
    UnclosedFrontmatter { dir: PathBuf },

    #[error("skills directory not found: {path}")]
    MissingSkillsDir { path: PathBuf },

    #[error("manifest not found: {path}")]
    ManifestMissing { path: PathBuf },

    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    #[must_use]
    pub fn missing_descriptor(dir: &Path, descriptor: impl Into<String>) -> Self {
        Self::MissingDescriptor {
            dir: dir.to_path_buf(),
            descriptor: descriptor.into(),
        }
    }

    #[must_use]
    pub fn missing_frontmatter(dir: &Path) -> Self {
        Self::MissingFrontmatter {
            dir: dir.to_path_buf(),
        }
    }

    #[must_use]
    pub fn unclosed_frontmatter(dir: &Path) -> Self {
        Self::UnclosedFrontmatter {
            dir: dir.to_path_buf(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
