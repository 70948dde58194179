/// Application settings
///
/// Settings are read once at startup from `settings.toml` in the user's
/// config directory:
/// - Linux: ~/.config/art-gallery/settings.toml
/// - macOS: ~/Library/Application Support/art-gallery/settings.toml
/// - Windows: %APPDATA%\art-gallery\settings.toml
///
/// A missing file means defaults. Nothing is ever written back.

use crate::error::{GalleryError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_DIR: &str = "art-gallery";

/// Default autoplay interval between slides
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 3000;
/// Default quiet period before a resize burst triggers a relayout
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the JSON dataset of artworks
    pub dataset: PathBuf,
    /// Delay between autoplay slides, in milliseconds
    pub autoplay_interval_ms: u64,
    /// Trailing-edge debounce applied to window resizes, in milliseconds
    pub resize_debounce_ms: u64,
    /// Initial window width (also the initial viewport width for layout)
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data.json"),
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            window_width: 1360.0,
            window_height: 900.0,
        }
    }
}

impl Config {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load settings from the default location, falling back to defaults.
///
/// An unreadable or malformed file is logged and ignored; the gallery always
/// starts.
pub fn load() -> Config {
    let Some(path) = default_config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded settings");
            config
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring settings file");
            Config::default()
        }
    }
}

/// Load settings from a specific file
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| GalleryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_timings() {
        let config = Config::default();
        assert_eq!(config.autoplay_interval(), Duration::from_millis(3000));
        assert_eq!(config.resize_debounce(), Duration::from_millis(100));
        assert_eq!(config.dataset, PathBuf::from("data.json"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "autoplay_interval_ms = 5000\ndataset = \"art/data.json\"\n")
            .expect("failed to write settings");

        let config = load_from_path(&path).expect("failed to load settings");

        assert_eq!(config.autoplay_interval_ms, 5000);
        assert_eq!(config.dataset, PathBuf::from("art/data.json"));
        assert_eq!(config.resize_debounce_ms, DEFAULT_RESIZE_DEBOUNCE_MS);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "autoplay_interval_ms = \"soon\"").expect("failed to write settings");

        let result = load_from_path(&path);
        assert!(matches!(result, Err(GalleryError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(GalleryError::Io { .. })));
    }
}
