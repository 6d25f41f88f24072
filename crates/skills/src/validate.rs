//! Timestamp-insensitive comparison of a persisted manifest against a fresh build.

use std::path::Path;

use {serde_json::Value, skillpack_config::SkillpackConfig};

use crate::{build::build_manifest, error::Result, manifest::ManifestStore};

const UPDATED_AT: &str = "updated_at";

/// Copy of a manifest with the document `updated_at` and every skill's
/// `updated_at` removed. Applying it twice changes nothing.
pub fn normalize(manifest: &Value) -> Value {
    let mut normalized = manifest.clone();
    if let Some(doc) = normalized.as_object_mut() {
        doc.remove(UPDATED_AT);
        if let Some(skills) = doc.get_mut("skills").and_then(Value::as_object_mut) {
            for entry in skills.values_mut() {
                if let Some(entry) = entry.as_object_mut() {
                    entry.remove(UPDATED_AT);
                }
            }
        }
    }
    normalized
}

/// A skill whose recorded version differs from the one on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMismatch {
    pub name: String,
    pub expected: String,
    pub actual: String,
}

/// Item-by-item breakdown of how two normalized manifests differ.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDiff {
    /// Schema version (expected, actual) when they differ.
    pub schema: Option<(String, String)>,
    /// Skills on disk but absent from the manifest.
    pub missing: Vec<String>,
    /// Skills in the manifest with no directory on disk.
    pub unexpected: Vec<String>,
    pub versions: Vec<VersionMismatch>,
}

impl ManifestDiff {
    pub fn between(expected: &Value, actual: &Value) -> Self {
        let mut diff = Self::default();

        let expected_schema = render(expected.get("version"));
        let actual_schema = render(actual.get("version"));
        if expected_schema != actual_schema {
            diff.schema = Some((expected_schema, actual_schema));
        }

        let empty = serde_json::Map::new();
        let expected_skills = skills_of(expected).unwrap_or(&empty);
        let actual_skills = skills_of(actual).unwrap_or(&empty);

        for (name, entry) in expected_skills {
            match actual_skills.get(name) {
                None => diff.missing.push(name.clone()),
                Some(other) => {
                    let expected = render(entry.get("version"));
                    let actual = render(other.get("version"));
                    if expected != actual {
                        diff.versions.push(VersionMismatch {
                            name: name.clone(),
                            expected,
                            actual,
                        });
                    }
                },
            }
        }
        diff.unexpected = actual_skills
            .keys()
            .filter(|name| !expected_skills.contains_key(*name))
            .cloned()
            .collect();

        diff
    }

    pub fn is_empty(&self) -> bool {
        self.schema.is_none()
            && self.missing.is_empty()
            && self.unexpected.is_empty()
            && self.versions.is_empty()
    }
}

fn skills_of(manifest: &Value) -> Option<&serde_json::Map<String, Value>> {
    manifest.get("skills").and_then(Value::as_object)
}

fn render(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "<absent>".to_string(),
    }
}

/// Result of checking a persisted manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Match,
    Mismatch {
        /// Normalized freshly built manifest.
        expected: Value,
        /// Normalized persisted manifest.
        actual: Value,
        diff: ManifestDiff,
    },
}

impl Validation {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

/// Compare two manifests after normalization.
pub fn compare(expected: &Value, actual: &Value) -> Validation {
    let expected = normalize(expected);
    let actual = normalize(actual);
    if expected == actual {
        return Validation::Match;
    }

    let diff = ManifestDiff::between(&expected, &actual);
    if let Some((want, got)) = &diff.schema {
        tracing::warn!(expected = %want, actual = %got, "schema version differs");
    }
    for name in &diff.missing {
        tracing::warn!(%name, "skill missing from manifest");
    }
    for name in &diff.unexpected {
        tracing::warn!(%name, "manifest lists unknown skill");
    }
    for m in &diff.versions {
        tracing::warn!(name = %m.name, expected = %m.expected, actual = %m.actual, "skill version differs");
    }
    Validation::Mismatch {
        expected,
        actual,
        diff,
    }
}

/// Load the manifest at `manifest_path` and compare it with a fresh build of `root`.
///
/// A missing or unparseable manifest, and any build failure, is returned as
/// an error rather than a [`Validation::Mismatch`].
pub fn validate_manifest(
    root: &Path,
    config: &SkillpackConfig,
    manifest_path: &Path,
) -> Result<Validation> {
    let actual = ManifestStore::new(manifest_path.to_path_buf()).load()?;
    let expected = serde_json::to_value(build_manifest(root, config)?)?;
    Ok(compare(&expected, &actual))
}
