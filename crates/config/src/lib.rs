//! Configuration loading for skillpack.
//!
//! Config file: `skillpack.toml` at the repository root. Every field has a
//! default, so a repository without the file behaves like the stock layout
//! (`skills/*/SKILL.md` summarised into `manifest.json`).

pub mod error;
pub mod loader;
pub mod schema;

pub use {
    error::{Error, Result},
    loader::{CONFIG_FILENAME, load_config, load_from_root},
    schema::SkillpackConfig,
};
