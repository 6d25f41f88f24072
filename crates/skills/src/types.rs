use std::collections::BTreeMap;

use {
    chrono::{DateTime, Utc},
    serde::Serialize,
};

/// Schema version written at the top of every manifest.
pub const SCHEMA_VERSION: &str = "1";

/// Version recorded for skills whose frontmatter declares none.
pub const DEFAULT_SKILL_VERSION: &str = "0.0.0";

/// Timestamp layout used throughout the manifest: UTC, whole seconds, `Z` suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Render a UTC instant in manifest timestamp form, e.g. `2026-01-12T18:00:00Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

// ── Manifest document ───────────────────────────────────────────────────────

/// The generated `manifest.json` document.
///
/// Field order here is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// Schema version, always [`SCHEMA_VERSION`].
    pub version: String,
    /// Generation time. Ignored by validation.
    pub updated_at: String,
    /// Skill records keyed by directory name, kept sorted.
    pub skills: BTreeMap<String, SkillEntry>,
}

impl Manifest {
    /// Build a manifest from skill records, stamped with the current time.
    pub fn new(skills: BTreeMap<String, SkillEntry>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            updated_at: format_timestamp(Utc::now()),
            skills,
        }
    }

    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.keys().map(String::as_str)
    }
}

/// One skill's record in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    /// Version declared in the skill's frontmatter.
    pub version: String,
    /// Newest file modification time inside the skill directory. Ignored by validation.
    pub updated_at: String,
}
