use std::path::{Path, PathBuf};

use super::data::ArtworkRecord;
use crate::error::{GalleryError, Result};

/// The Catalog holds the ordered list of artworks loaded at startup.
/// Its length is fixed for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ArtworkRecord>,
    /// Directory relative asset paths are resolved against
    base_dir: PathBuf,
}

impl Catalog {
    /// Build a catalog from the dataset's JSON text.
    ///
    /// # Arguments
    /// * `json` - A JSON array of artwork records
    /// * `base_dir` - Directory the dataset lives in
    ///
    /// An empty array is rejected: the session requires at least one artwork.
    pub fn from_json(json: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let records: Vec<ArtworkRecord> = serde_json::from_str(json)?;
        if records.is_empty() {
            return Err(GalleryError::EmptyDataset);
        }

        Ok(Catalog {
            records,
            base_dir: base_dir.into(),
        })
    }

    /// Number of artworks (`total`)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, index: usize) -> Option<&ArtworkRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtworkRecord> {
        self.records.iter()
    }

    /// Resolve an asset reference from the dataset to something loadable.
    ///
    /// Relative paths (e.g. "./assets/starry-night/hero-large.jpg") are
    /// joined onto the dataset directory. Absolute paths and URLs pass through.
    pub fn resolve_asset(&self, reference: &str) -> PathBuf {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return PathBuf::from(reference);
        }

        let path = Path::new(reference);
        if path.is_absolute() {
            return path.to_path_buf();
        }

        let relative = path.strip_prefix("./").unwrap_or(path);
        self.base_dir.join(relative)
    }
}

/// Load the dataset from disk.
///
/// Runs once at startup as an iced task. There is no retry: the caller logs
/// the error and the gallery stays empty.
pub async fn load_catalog(path: PathBuf) -> Result<Catalog> {
    let json = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| GalleryError::Io {
            path: path.clone(),
            source,
        })?;

    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let catalog = Catalog::from_json(&json, base_dir)?;
    tracing::info!(
        path = %path.display(),
        artworks = catalog.len(),
        "dataset loaded"
    );

    Ok(catalog)
}
