use std::path::Path;

use tracing::debug;

use crate::{
    error::{Error, Result},
    schema::SkillpackConfig,
};

/// Config file name looked up at the repository root.
pub const CONFIG_FILENAME: &str = "skillpack.toml";

/// Load config from the given TOML file.
pub fn load_config(path: &Path) -> Result<SkillpackConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    toml::from_str(&raw).map_err(|e| Error::parse(path, e))
}

/// Load `skillpack.toml` from the repository root.
///
/// Returns `SkillpackConfig::default()` if the file does not exist. A file
/// that exists but cannot be read or parsed is an error.
pub fn load_from_root(root: &Path) -> Result<SkillpackConfig> {
    let path = root.join(CONFIG_FILENAME);
    if !path.is_file() {
        debug!(path = %path.display(), "no config file found, using defaults");
        return Ok(SkillpackConfig::default());
    }
    debug!(path = %path.display(), "loading config");
    load_config(&path)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, std::path::PathBuf};

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = load_from_root(tmp.path()).unwrap();
        assert_eq!(cfg, SkillpackConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILENAME),
            "skills_dir = \"packages\"\nreserved = [\"scripts\", \"tools\"]\n",
        )
        .unwrap();

        let cfg = load_from_root(tmp.path()).unwrap();
        assert_eq!(cfg.skills_dir, PathBuf::from("packages"));
        assert_eq!(cfg.reserved, vec!["scripts", "tools"]);
        assert_eq!(cfg.descriptor, "SKILL.md");
        assert_eq!(cfg.manifest, PathBuf::from("manifest.json"));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILENAME), "skills_dir = [").unwrap();

        let err = load_from_root(tmp.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILENAME));
    }
}
