use std::{collections::BTreeMap, path::Path};

use skillpack_config::SkillpackConfig;

use crate::{
    discover::discover_skill_dirs,
    error::Result,
    parse::read_version,
    scan::skill_updated_at,
    types::{Manifest, SkillEntry},
};

/// Build a fresh manifest for the repository at `root`.
///
/// Every qualifying skill is extracted and scanned in name order. The first
/// extraction error aborts the build; no partial manifest is returned.
pub fn build_manifest(root: &Path, config: &SkillpackConfig) -> Result<Manifest> {
    let skills_root = config.skills_path(root);
    let mut skills = BTreeMap::new();

    for skill in discover_skill_dirs(&skills_root, config)? {
        let version = read_version(&skill.path, &config.descriptor)?;
        let updated_at = skill_updated_at(&skill.path)?;
        tracing::debug!(name = %skill.name, %version, %updated_at, "discovered skill");
        skills.insert(skill.name, SkillEntry {
            version,
            updated_at,
        });
    }

    Ok(Manifest::new(skills))
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::error::Error};

    fn write_skill(root: &Path, name: &str, descriptor: &str) {
        let dir = root.join("skills").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("SKILL.md"), descriptor).unwrap();
    }

    #[test]
    fn builds_manifest_for_all_skills() {
        let tmp = tempfile::tempdir().unwrap();
        write_skill(tmp.path(), "commit", "---\nversion: \"1.2.0\"\n---\n");
        write_skill(tmp.path(), "review", "---\nname: review\n---\n");

        let manifest = build_manifest(tmp.path(), &SkillpackConfig::default()).unwrap();
        assert_eq!(manifest.version, "1");
        assert_eq!(manifest.skill_names().collect::<Vec<_>>(), vec![
            "commit", "review"
        ]);
        assert_eq!(manifest.skills["commit"].version, "1.2.0");
        assert_eq!(manifest.skills["review"].version, "0.0.0");
        assert!(manifest.skills["review"].updated_at.ends_with('Z'));
    }

    #[test]
    fn root_level_skills_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        write_skill(tmp.path(), "inside", "---\nversion: 1.0.0\n---\n");
        std::fs::create_dir_all(tmp.path().join("outside")).unwrap();
        std::fs::write(
            tmp.path().join("outside/SKILL.md"),
            "---\nversion: 1.0.0\n---\n",
        )
        .unwrap();

        let manifest = build_manifest(tmp.path(), &SkillpackConfig::default()).unwrap();
        assert_eq!(manifest.skill_names().collect::<Vec<_>>(), vec!["inside"]);
    }

    #[test]
    fn malformed_skill_aborts_build() {
        let tmp = tempfile::tempdir().unwrap();
        write_skill(tmp.path(), "good", "---\nversion: 1.0.0\n---\n");
        write_skill(tmp.path(), "bad", "# no frontmatter\n");

        let err = build_manifest(tmp.path(), &SkillpackConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MissingFrontmatter { ref dir } if dir.ends_with("bad")));
    }

    #[test]
    fn custom_layout_from_config() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("packages/demo");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("README.md"), "---\nversion: 4.0.0\n---\n").unwrap();

        let config = SkillpackConfig {
            skills_dir: "packages".into(),
            descriptor: "README.md".into(),
            ..Default::default()
        };
        let manifest = build_manifest(tmp.path(), &config).unwrap();
        assert_eq!(manifest.skills["demo"].version, "4.0.0");
    }
}
