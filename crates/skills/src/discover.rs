use std::path::{Path, PathBuf};

use skillpack_config::SkillpackConfig;

use crate::error::{Error, Result};

/// A child of the skills directory that qualifies as a skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDir {
    /// Directory name, used as the manifest key.
    pub name: String,
    pub path: PathBuf,
}

/// List skill directories directly under `skills_root`, sorted by name.
///
/// A child qualifies when it is a directory (symlinks resolved), its name
/// does not start with `.`, it is not a reserved name, and it contains the
/// configured descriptor file. Nested skill directories are not searched.
pub fn discover_skill_dirs(skills_root: &Path, config: &SkillpackConfig) -> Result<Vec<SkillDir>> {
    if !skills_root.is_dir() {
        return Err(Error::MissingSkillsDir {
            path: skills_root.to_path_buf(),
        });
    }

    let mut skills = Vec::new();
    for entry in std::fs::read_dir(skills_root)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_owned) else {
            tracing::warn!(?path, "skipping entry with non UTF-8 name");
            continue;
        };

        if !path.is_dir() {
            continue;
        }
        if name.starts_with('.') || config.is_reserved(&name) {
            tracing::debug!(%name, "skipping hidden or reserved directory");
            continue;
        }
        if !path.join(&config.descriptor).is_file() {
            tracing::debug!(%name, descriptor = %config.descriptor, "skipping directory without descriptor");
            continue;
        }

        skills.push(SkillDir { name, path });
    }

    skills.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(skills)
}
