//! Configuration management for validation
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (validation.toml)
//! - Environment variables (VALIDATION__*)
//!
//! ## Example config file (validation.toml):
//! ```toml
//! [parse]
//! abort_early = false
//! abort_pipe_early = true
//!
//! [i18n]
//! builtin_locales = true
//! locale_dirs = ["./locales"]
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::context::ValidationContext;
use crate::error::Result;
use crate::i18n::LocalizationRegistry;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Parse behavior
    #[serde(default)]
    pub parse: ParseConfig,

    /// Locale pack sources
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// Parse configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Stop at the first issue
    #[serde(default)]
    pub abort_early: bool,

    /// Stop a pipe at its first failing action
    #[serde(default)]
    pub abort_pipe_early: bool,
}

/// Localization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Register the packs shipped with the crate
    #[serde(default = "default_true")]
    pub builtin_locales: bool,

    /// Directories scanned for `*.toml` locale packs
    #[serde(default)]
    pub locale_dirs: Vec<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            builtin_locales: true,
            locale_dirs: Vec::new(),
        }
    }
}

impl ValidationSettings {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, adding a required file on top of the defaults
    pub fn load_from(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = [
            "validation.toml",
            ".validation.toml",
            "config/validation.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "validation") {
            let xdg_config = config_dir.config_dir().join("validation.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // VALIDATION__PARSE__ABORT_EARLY=true
        builder = builder.add_source(
            Environment::with_prefix("VALIDATION")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        debug!(
            abort_early = settings.parse.abort_early,
            locale_dirs = settings.i18n.locale_dirs.len(),
            "Loaded validation settings"
        );
        Ok(settings)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Context for parse calls
    pub fn context(&self) -> ValidationContext {
        ValidationContext::new()
            .with_abort_early(self.parse.abort_early)
            .with_abort_pipe_early(self.parse.abort_pipe_early)
    }

    /// Build a registry from the configured sources
    pub fn build_registry(&self) -> Result<LocalizationRegistry> {
        let mut registry = if self.i18n.builtin_locales {
            LocalizationRegistry::with_builtin_locales()
        } else {
            LocalizationRegistry::new()
        };
        for dir in &self.i18n.locale_dirs {
            let count = registry.load_dir(dir)?;
            debug!(dir = %dir.display(), count, "Loaded locale packs");
        }
        Ok(registry)
    }
}
