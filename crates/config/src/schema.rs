//! Config schema for a skills repository.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Repository layout settings, read from `skillpack.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkillpackConfig {
    /// Directory (relative to the repository root) whose children are skills.
    pub skills_dir: PathBuf,
    /// Descriptor file every skill directory must contain.
    pub descriptor: String,
    /// Manifest path, relative to the repository root.
    pub manifest: PathBuf,
    /// Child directory names that are never treated as skills.
    pub reserved: Vec<String>,
}

impl Default for SkillpackConfig {
    fn default() -> Self {
        Self {
            skills_dir: PathBuf::from("skills"),
            descriptor: "SKILL.md".into(),
            manifest: PathBuf::from("manifest.json"),
            reserved: vec!["scripts".into()],
        }
    }
}

impl SkillpackConfig {
    /// Absolute skills directory for the given repository root.
    pub fn skills_path(&self, root: &Path) -> PathBuf {
        root.join(&self.skills_dir)
    }

    /// Absolute manifest path for the given repository root.
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.iter().any(|r| r == name)
    }
}
