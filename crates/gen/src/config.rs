//! Site generation configuration loaded from an optional YAML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Generation settings read from a YAML config file.
///
/// Every field is optional; a missing or unreadable file degrades to the
/// defaults with a logged warning rather than failing the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Project name shown on the index page; defaults to the repository
    /// directory name when absent.
    pub project_name: Option<String>,
    /// One-line project description used on the index page.
    pub description: Option<String>,
    /// AI model in `provider/model` form (e.g. `openai/gpt-4o`) when the
    /// enhancement pass is enabled.
    pub ai_model: Option<String>,
    /// Section ids to skip during generation.
    pub skip_sections: Vec<String>,
}

/// Errors emitted while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid YAML for [`SiteConfig`].
    #[error("config file is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load configuration from a YAML file.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(SiteConfig::default());
    }
    Ok(serde_yaml::from_str(&raw)?)
}

/// Load configuration, falling back to defaults with a warning on any
/// failure.
pub fn load_config_or_default(path: &Path) -> SiteConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!(
                "error loading configuration from {}: {err}",
                path.display()
            );
            SiteConfig::default()
        }
    }
}
