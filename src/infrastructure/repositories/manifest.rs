//! TOML Manifest Repository
//!
//! Stores the build manifest as `.folio-manifest.toml` inside the output
//! directory:
//!
//! ```toml
//! version = 1
//!
//! [pages."index.html"]
//! hash = "sha256:..."
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::BuildManifest;
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::manifest_repository::{
    ManifestError, ManifestRepository, ManifestResult,
};
use crate::domain::value_objects::ContentHash;
use crate::infrastructure::fs::LocalFs;

/// File name of the manifest inside the output directory
pub const MANIFEST_FILE: &str = ".folio-manifest.toml";

pub struct TomlManifestRepository<FS: FileSystem = LocalFs> {
    fs: FS,
}

impl TomlManifestRepository<LocalFs> {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<FS: FileSystem> TomlManifestRepository<FS> {
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }
}

impl Default for TomlManifestRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlPageEntry {
    hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlManifest {
    version: u32,
    #[serde(default)]
    pages: BTreeMap<String, TomlPageEntry>,
}

impl<FS: FileSystem> ManifestRepository for TomlManifestRepository<FS> {
    fn load(&self, path: &Path) -> ManifestResult<BuildManifest> {
        if !self.fs.exists(path) {
            return Ok(BuildManifest::new());
        }

        let content = self
            .fs
            .read(path)
            .map_err(|e| ManifestError::IoError(e.to_string()))?;
        let parsed: TomlManifest =
            toml::from_str(&content).map_err(|e| ManifestError::ParseError(e.to_string()))?;

        if parsed.version != BuildManifest::CURRENT_VERSION {
            return Err(ManifestError::VersionMismatch {
                found: parsed.version,
                expected: BuildManifest::CURRENT_VERSION,
            });
        }

        let mut manifest = BuildManifest::new();
        for (key, entry) in parsed.pages {
            manifest.set(Path::new(&key), ContentHash::new(&entry.hash));
        }
        Ok(manifest)
    }

    fn save(&self, manifest: &BuildManifest, path: &Path) -> ManifestResult<()> {
        let pages = manifest
            .entries()
            .map(|(key, hash)| {
                (
                    key.to_string(),
                    TomlPageEntry {
                        hash: hash.to_string(),
                    },
                )
            })
            .collect();

        let content = toml::to_string_pretty(&TomlManifest {
            version: manifest.version(),
            pages,
        })
        .map_err(|e| ManifestError::ParseError(e.to_string()))?;

        self.fs
            .write(path, &content)
            .map_err(|e| ManifestError::IoError(e.to_string()))
    }
}
