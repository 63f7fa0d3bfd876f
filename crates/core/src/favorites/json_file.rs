//! JSON-file-backed favorites store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{FavoritesStore, StoreError};
use crate::catalog::CatalogItem;

/// Stores favorites as a JSON array in a single file.
///
/// Saves go through a sibling temp file and a rename, so a crash mid-write
/// leaves the previous set intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "favorites.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl FavoritesStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<CatalogItem>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }

    fn save_all(&self, items: &[CatalogItem]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(items)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
