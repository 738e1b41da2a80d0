//! Build manifest entity - hashes of the pages written by the last build
//!
//! Pure data; reading and writing the TOML file is the job of
//! `ManifestRepository`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::value_objects::ContentHash;

/// Normalize a path for manifest storage (always forward slashes)
pub fn normalize_manifest_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildManifest {
    version: u32,
    pages: BTreeMap<String, ContentHash>,
}

impl BuildManifest {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            pages: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn get(&self, path: &Path) -> Option<&ContentHash> {
        self.pages.get(&normalize_manifest_path(path))
    }

    pub fn set(&mut self, path: &Path, hash: ContentHash) {
        self.pages.insert(normalize_manifest_path(path), hash);
    }

    pub fn remove(&mut self, path: &Path) -> Option<ContentHash> {
        self.pages.remove(&normalize_manifest_path(path))
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ContentHash)> {
        self.pages.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Paths tracked here that are not in `current`
    pub fn orphans<'a>(&'a self, current: &[&Path]) -> Vec<&'a str> {
        let current: Vec<String> = current.iter().map(|p| normalize_manifest_path(p)).collect();
        self.pages
            .keys()
            .filter(|k| !current.contains(k))
            .map(String::as_str)
            .collect()
    }
}

impl Default for BuildManifest {
    fn default() -> Self {
        Self::new()
    }
}
