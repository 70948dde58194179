/// Error types for the gallery
///
/// Only dataset and settings loading can fail. Navigation and layout work on
/// validated state and never return errors.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while bringing the gallery up
#[derive(Debug, Error)]
pub enum GalleryError {
    /// A file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of artwork records
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dataset parsed but contains no artworks
    #[error("dataset contains no artworks")]
    EmptyDataset,

    /// The settings file is not valid TOML
    #[error("invalid settings file: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
