use std::path::Path;

use {
    anyhow::Context,
    serde_json::Value,
    skillpack_config::SkillpackConfig,
    skillpack_skills::{Error, Manifest, ManifestStore, Validation, build_manifest, validate_manifest},
};

/// Build the manifest and write it to `manifest_path`.
pub fn handle_generate(
    root: &Path,
    config: &SkillpackConfig,
    manifest_path: &Path,
) -> anyhow::Result<()> {
    let manifest = build_manifest(root, config).context("failed to generate manifest")?;
    ManifestStore::new(manifest_path.to_path_buf())
        .save(&manifest)
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    println!("Generated {}", manifest_path.display());
    println!("{}", found_summary(&manifest));
    Ok(())
}

/// Check `manifest_path` against the skills on disk.
///
/// Returns `Ok(false)` when the manifest is stale, missing or unparseable.
/// Errors while scanning the skills themselves propagate.
pub fn handle_validate(
    root: &Path,
    config: &SkillpackConfig,
    manifest_path: &Path,
) -> anyhow::Result<bool> {
    match validate_manifest(root, config, manifest_path) {
        Ok(Validation::Match) => {
            println!("{} is up to date", manifest_path.display());
            Ok(true)
        },
        Ok(Validation::Mismatch {
            expected, actual, ..
        }) => {
            eprintln!("{}", mismatch_report(manifest_path, &expected, &actual)?);
            Ok(false)
        },
        Err(
            e @ (Error::ManifestMissing { .. }
            | Error::ManifestRead { .. }
            | Error::ManifestParse { .. }),
        ) => {
            eprintln!("Error: {e}");
            Ok(false)
        },
        Err(e) => Err(e).context("failed to build expected manifest"),
    }
}

fn found_summary(manifest: &Manifest) -> String {
    format!(
        "Found {} skill(s): {}",
        manifest.skills.len(),
        manifest.skill_names().collect::<Vec<_>>().join(", ")
    )
}

/// Error line followed by both normalized manifests, expected first.
fn mismatch_report(manifest_path: &Path, expected: &Value, actual: &Value) -> anyhow::Result<String> {
    Ok(format!(
        "Error: {} is out of date, run `skillpack generate`\nExpected:\n{}\nActual:\n{}",
        manifest_path.display(),
        serde_json::to_string_pretty(expected)?,
        serde_json::to_string_pretty(actual)?,
    ))
}
