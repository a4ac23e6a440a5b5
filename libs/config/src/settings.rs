//! Store Settings Module
//!
//! Provides settings loading for the field store and segment validation.
//! Supports layered loading from TOML files with environment-specific
//! overrides and `HL7STORE__` environment variables.

use anyhow::{Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of environment variable overrides, e.g. `HL7STORE__VALIDATION__STRICT`
pub const ENV_PREFIX: &str = "HL7STORE";

/// Separator between the prefix and nested keys in environment variables
pub const ENV_SEPARATOR: &str = "__";

/// Top-level store settings
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StoreSettings {
    /// Populated-segment validation
    pub validation: ValidationSettings,

    /// When typed values are constructed from raw text
    pub materialization: MaterializationSettings,

    /// Tracing subscriber setup
    pub logging: LoggingSettings,
}

/// Which validation checks run over populated segments
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationSettings {
    pub enforce_required: bool,
    pub enforce_max_length: bool,
    pub enforce_table_binding: bool,
    /// Fail on the first issue instead of collecting a report
    pub strict: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            enforce_required: true,
            enforce_max_length: true,
            enforce_table_binding: false,
            strict: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MaterializationSettings {
    /// Materialize every repetition as soon as a segment is populated
    pub eager: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl StoreSettings {
    /// Load settings from defaults, an optional TOML file, its
    /// environment-specific sibling and `HL7STORE__*` variables
    ///
    /// For a base file `store.toml` and environment `production` the
    /// environment file is `store.production.toml`. Both files are optional.
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&StoreSettings::default())
                .context("Failed to serialize default settings")?,
        );

        if let Some(base) = base_path {
            let base = expand_path(base)?;
            debug!("Loading store settings: {:?}", base);
            builder = builder.add_source(File::from(base.clone()).required(false));

            if let Some(env) = environment {
                let env_file = environment_file(&base, env);
                if env_file.exists() {
                    info!("Loading environment settings: {:?}", env_file);
                }
                builder = builder.add_source(File::from(env_file).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build store settings")?;

        config
            .try_deserialize()
            .context("Failed to deserialize store settings")
    }

    /// Parse settings from TOML text, missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse store settings")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize store settings")
    }
}

/// `<stem>.<environment>.<ext>` next to the base file
fn environment_file(base: &Path, environment: &str) -> PathBuf {
    let extension = base
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("toml");
    base.with_extension(format!("{environment}.{extension}"))
}

/// Expand `~` and `$VAR` references in a settings path
fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| format!("Failed to expand settings path {raw}"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}
