//! Configuration file support for cloud-threat-inventory.
//!
//! Provides YAML-based configuration through `cloud-threat-inventory.config.yml`
//! files, and resolves the effective settings of a run from command-line
//! values, environment and the file.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::cache::{DEFAULT_CACHE_DIR, DEFAULT_CACHE_TTL};
use crate::adapters::outbound::filesystem::DEFAULT_OUTPUT_DIR;
use crate::inventory::services::{CommandCatalog, DEFAULT_BQ_BIN, DEFAULT_GCLOUD_BIN};
use crate::shared::error::InventoryError;
use crate::shared::security::{read_bounded_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cloud-threat-inventory.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub project_id: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub cache_ttl_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub gcloud_bin: Option<String>,
    pub bq_bin: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_bounded_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ttl) = config.cache_ttl_secs {
        validate_ttl(ttl)?;
    }
    for (key, value) in [
        ("project_id", &config.project_id),
        ("gcloud_bin", &config.gcloud_bin),
        ("bq_bin", &config.bq_bin),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(InventoryError::InvalidConfig {
                message: format!("{} must not be empty", key),
            }
            .into());
        }
    }
    Ok(())
}

fn validate_ttl(ttl_secs: u64) -> Result<()> {
    if ttl_secs == 0 {
        return Err(InventoryError::InvalidConfig {
            message: "cache TTL must be at least 1 second (use --no-cache to bypass the cache)"
                .to_string(),
        }
        .into());
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line or through the environment
///
/// clap has already applied its own flag-over-environment precedence, so
/// every `Some` here wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub project_id: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub cache_ttl_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub gcloud_bin: Option<String>,
    pub bq_bin: Option<String>,
}

/// Effective settings of one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub project_id: String,
    pub cache_dir: PathBuf,
    pub cache_ttl: Duration,
    pub output_dir: PathBuf,
    pub gcloud_bin: String,
    pub bq_bin: String,
}

impl Settings {
    /// Merges overrides over the config file over the defaults
    ///
    /// # Errors
    /// `InvalidScope` when no project id is given anywhere, `InvalidConfig`
    /// for a zero TTL.
    pub fn resolve(overrides: SettingsOverrides, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let project_id = overrides
            .project_id
            .or(config.project_id)
            .ok_or_else(|| InventoryError::InvalidScope {
                scope: String::new(),
                reason: "no project id was given (--project-id or PROJECT_ID)".to_string(),
            })?;

        let cache_ttl = match overrides.cache_ttl_secs.or(config.cache_ttl_secs) {
            Some(secs) => {
                validate_ttl(secs)?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_CACHE_TTL,
        };

        Ok(Self {
            project_id,
            cache_dir: overrides
                .cache_dir
                .or(config.cache_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
            cache_ttl,
            output_dir: overrides
                .output_dir
                .or(config.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            gcloud_bin: overrides
                .gcloud_bin
                .or(config.gcloud_bin)
                .unwrap_or_else(|| DEFAULT_GCLOUD_BIN.to_string()),
            bq_bin: overrides
                .bq_bin
                .or(config.bq_bin)
                .unwrap_or_else(|| DEFAULT_BQ_BIN.to_string()),
        })
    }

    pub fn command_catalog(&self) -> CommandCatalog {
        CommandCatalog::new(self.gcloud_bin.clone(), self.bq_bin.clone())
    }
}
