//! Skills manifest: discovery, version extraction, generation and validation.
//!
//! Skills are directories under `<repo>/skills/` containing a `SKILL.md`
//! file whose frontmatter declares a `version`. The manifest records each
//! skill's version and the newest modification time of its files.

pub mod build;
pub mod discover;
pub mod error;
pub mod manifest;
pub mod parse;
pub mod scan;
pub mod types;
pub mod validate;

pub use {
    build::build_manifest,
    error::{Error, Result},
    manifest::ManifestStore,
    types::{DEFAULT_SKILL_VERSION, Manifest, SCHEMA_VERSION, SkillEntry},
    validate::{ManifestDiff, Validation, VersionMismatch, compare, normalize, validate_manifest},
};
