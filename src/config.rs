//! Configuration management for the blueprint generator.
//!
//! Handles loading configuration from TOML files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Local config file checked before the global one.
pub const LOCAL_CONFIG_FILE: &str = ".blueprint.toml";

/// Output directory used when none is configured.
pub const DEFAULT_OUT_DIR: &str = "out";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Export settings
    pub export: ExportConfig,

    /// Overrides for the built-in playbook content
    pub source: SourceConfig,

    /// File this configuration was read from, if any
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log filter used when neither `--verbose` nor `RUST_LOG` is set
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { log_level: "warn".to_string() }
    }
}

/// Export settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory artifacts are written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
}

impl ExportConfig {
    /// Get the configured output directory, or [`DEFAULT_OUT_DIR`].
    pub fn out_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }
}

/// Files replacing parts of the built-in playbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Workflow definition (JSON, YAML or TOML)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<PathBuf>,

    /// Source of the scoring snippet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring: Option<PathBuf>,

    /// Source of the digest snippet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Checks `.blueprint.toml` in the working directory, then
    /// `<config dir>/blueprint/config.toml`, then falls back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(config_dir) = Self::config_dir() {
            let global_config = config_dir.join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    ///
    /// Relative `out_dir` and source paths are resolved against the file's
    /// directory.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if let Some(base) = path.parent() {
            resolve_relative_to(base, config.export.out_dir.as_mut());
            config.source.resolve_relative_to(base);
        }

        config.loaded_from = Some(path.to_path_buf());
        Ok(config)
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::APP_NAME))
    }
}

impl SourceConfig {
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.workflow, &mut self.scoring, &mut self.digest] {
            resolve_relative_to(base, path.as_mut());
        }
    }
}

fn resolve_relative_to(base: &Path, path: Option<&mut PathBuf>) {
    if let Some(path) = path.filter(|p| p.is_relative()) {
        *path = base.join(&*path);
    }
}
