use std::{path::Path, sync::LazyLock};

use regex::Regex;

use crate::{
    error::{Error, Result},
    types::DEFAULT_SKILL_VERSION,
};

/// Frontmatter delimiter. The descriptor must start with it.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// `version: <value>`, value optionally wrapped in single or double quotes.
#[allow(clippy::expect_used)]
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"version:\s*["']?([^"'\n]+)["']?"#).expect("version pattern is valid")
});

/// Why a descriptor's frontmatter could not be located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterError {
    /// Content does not start with the delimiter.
    Missing,
    /// No second delimiter after the opening one.
    Unclosed,
}

/// Return the text between the opening `---` and the next `---`.
///
/// The opening delimiter must be the very first bytes of the content; no
/// leading whitespace is skipped.
pub fn split_frontmatter(content: &str) -> std::result::Result<&str, FrontmatterError> {
    let Some(after_open) = content.strip_prefix(FRONTMATTER_DELIMITER) else {
        return Err(FrontmatterError::Missing);
    };
    let close = after_open
        .find(FRONTMATTER_DELIMITER)
        .ok_or(FrontmatterError::Unclosed)?;
    Ok(&after_open[..close])
}

/// Find the declared version inside a frontmatter block.
///
/// The first `version:` occurrence wins. Quotes and surrounding whitespace
/// are stripped from the value.
pub fn find_version(frontmatter: &str) -> Option<String> {
    VERSION_RE
        .captures(frontmatter)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Extract the version from descriptor content belonging to `skill_dir`.
///
/// Malformed frontmatter is an error; a block without a version key yields
/// [`DEFAULT_SKILL_VERSION`].
pub fn extract_version(content: &str, skill_dir: &Path) -> Result<String> {
    let frontmatter = split_frontmatter(content).map_err(|e| match e {
        FrontmatterError::Missing => Error::missing_frontmatter(skill_dir),
        FrontmatterError::Unclosed => Error::unclosed_frontmatter(skill_dir),
    })?;

    Ok(find_version(frontmatter).unwrap_or_else(|| {
        tracing::debug!(?skill_dir, "no version declared, using default");
        DEFAULT_SKILL_VERSION.to_string()
    }))
}

/// Read `<skill_dir>/<descriptor>` and extract its declared version.
pub fn read_version(skill_dir: &Path, descriptor: &str) -> Result<String> {
    let path = skill_dir.join(descriptor);
    if !path.is_file() {
        return Err(Error::missing_descriptor(skill_dir, descriptor));
    }
    let content = std::fs::read_to_string(&path)?;
    extract_version(&content, skill_dir)
}
