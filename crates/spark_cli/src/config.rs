//! Spark configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spark_core::{Config, ConfigPatch};
use spark_theme::{SparkTheme, ThemeBundle, ThemeMode, ThemeOverrides};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "spark.toml";

/// Top-level Spark configuration (spark.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SparkConfig {
    /// Engine options applied on top of the defaults
    #[serde(default)]
    pub style: ConfigPatch,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Theme selection
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
    /// Token overrides: `[theme.overrides.colors]`, `.spacing`, `.radii`
    #[serde(default, skip_serializing_if = "toml::Table::is_empty")]
    pub overrides: toml::Table,
}

impl SparkConfig {
    /// Load configuration from a directory (looks for spark.toml) or a file
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = config_path(path);

        if !config_path.exists() {
            anyhow::bail!(
                "No {CONFIG_FILE} found in {}. Run `spark init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Like [`SparkConfig::load_from_dir`], but a missing file gives the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if config_path(path).exists() {
            Self::load_from_dir(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Engine configuration with the `[style]` section applied
    pub fn style_config(&self) -> Config {
        Config::default().fork(&self.style)
    }

    /// Built-in bundle with the configured overrides applied
    pub fn bundle(&self) -> Result<ThemeBundle> {
        let bundle = SparkTheme::bundle();
        if self.theme.overrides.is_empty() {
            return Ok(bundle);
        }
        let overrides = ThemeOverrides::from_toml_table(self.theme.overrides.clone())
            .context("Invalid [theme.overrides]")?;
        Ok(overrides.apply_bundle(&bundle))
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Starter configuration written by `spark init`
    pub fn starter() -> Self {
        Self {
            style: ConfigPatch::new().prefix(spark_core::DEFAULT_PREFIX),
            theme: ThemeConfig::default(),
        }
    }
}

fn config_path(path: &Path) -> PathBuf {
    if path.is_file() {
        path.to_path_buf()
    } else {
        path.join(CONFIG_FILE)
    }
}
