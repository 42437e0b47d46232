//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/gridedit/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::csv::{CsvFormat, Delimiter, HeaderOnlySource, LineEnding};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Delimiter for reading and writing (e.g., "comma", "tab")
    #[serde(default)]
    pub delimiter: Delimiter,

    /// Guess the delimiter from imported text instead of using `delimiter`
    #[serde(default)]
    pub detect_delimiter: bool,

    /// Record separator for exported text ("lf" or "cr-lf")
    #[serde(default)]
    pub line_ending: LineEnding,

    /// Whether a source with a header and no data rows loads as an empty grid
    #[serde(default)]
    pub header_only_source: HeaderOnlySource,

    /// Number of columns in a new blank grid
    #[serde(default = "default_blank_columns")]
    pub blank_columns: usize,

    /// Suggested file name for downloads
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

fn default_blank_columns() -> usize {
    3
}

fn default_export_file_name() -> String {
    "edited_data.csv".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            detect_delimiter: false,
            line_ending: LineEnding::default(),
            header_only_source: HeaderOnlySource::default(),
            blank_columns: default_blank_columns(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if it is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Delimiter and line ending used for export
    pub fn csv_format(&self) -> CsvFormat {
        CsvFormat::new(self.delimiter, self.line_ending)
    }
}
