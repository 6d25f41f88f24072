use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    types::Manifest,
};

/// On-disk location of a generated manifest.
pub struct ManifestStore {
    path: PathBuf,
}

impl ManifestStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the manifest as untyped JSON.
    ///
    /// Validation compares structures, so the document is not forced into
    /// [`Manifest`]; an entry with an unexpected shape shows up as a mismatch
    /// instead of a load failure.
    pub fn load(&self) -> Result<serde_json::Value> {
        if !self.path.is_file() {
            return Err(Error::ManifestMissing {
                path: self.path.clone(),
            });
        }
        let data = std::fs::read(&self.path).map_err(|source| Error::ManifestRead {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| Error::ManifestParse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the manifest with 2-space indented JSON and a trailing newline.
    ///
    /// Non-ASCII characters are written as `\uXXXX` escapes so the bytes match
    /// manifests produced by the earlier Python generator.
    pub fn save(&self, manifest: &Manifest) -> Result<()> {
        let mut data = escape_non_ascii(&serde_json::to_string_pretty(manifest)?);
        data.push('\n');
        std::fs::write(&self.path, data)?;
        tracing::info!(path = %self.path.display(), skills = manifest.skills.len(), "wrote manifest");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Replace every non-ASCII character with its JSON `\uXXXX` escape.
///
/// Serialized JSON only carries non-ASCII text inside string literals, where
/// the escaped form is equivalent. Astral characters become surrogate pairs.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{unit:04x}"));
        }
    }
    out
}
