//! # kin-config
//!
//! Layered configuration loading for Kindred using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KINDRED_*` prefix, `__` as separator)
//! 2. Local `kindred.toml` in the working directory
//! 3. User-level `~/.config/kindred/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KINDRED_GENERAL__DATA_FILE` -> `general.data_file`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use kin_config::KindredConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = KindredConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = KindredConfig::load().expect("config");
//!
//! if let Some(path) = &config.general.data_file {
//!     println!("Snapshot: {}", path.display());
//! }
//! ```

mod error;
mod general;

pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output formats `general.default_format` may name.
const KNOWN_FORMATS: &[&str] = &["json", "table", "raw"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KindredConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

impl KindredConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if figment extraction fails or a field holds an
    /// invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical
    /// entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if figment extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Local config
        let local_path = PathBuf::from("kindred.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("KINDRED_").split("__"));

        figment
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let format = self.general.default_format.as_str();
        if !KNOWN_FORMATS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(format))
        {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".to_string(),
                reason: format!("'{format}' is not one of json, table, raw"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kindred").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = KindredConfig::default();
        assert!(config.general.data_file.is_none());
        assert_eq!(config.general.default_format, "json");
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = KindredConfig::figment();
        let config: KindredConfig = figment.extract().expect("should extract defaults");
        assert!(config.general.data_file.is_none());
    }

    #[test]
    fn toml_layer_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "kindred.toml",
                r#"
                [general]
                data_file = "snapshots/interactions.json"
                default_format = "table"
                "#,
            )?;

            let config: KindredConfig = KindredConfig::figment().extract()?;
            assert_eq!(
                config.general.data_file,
                Some(PathBuf::from("snapshots/interactions.json"))
            );
            assert_eq!(config.general.default_format, "table");
            Ok(())
        });
    }

    #[test]
    fn load_rejects_an_unknown_default_format() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "kindred.toml",
                r#"
                [general]
                default_format = "yaml"
                "#,
            )?;

            let error = KindredConfig::load().expect_err("yaml should be rejected");
            assert!(matches!(error, ConfigError::InvalidValue { .. }));
            Ok(())
        });
    }

    #[test]
    fn env_layer_wins_over_toml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "kindred.toml",
                r#"
                [general]
                default_format = "table"
                "#,
            )?;
            jail.set_env("KINDRED_GENERAL__DEFAULT_FORMAT", "raw");

            let config: KindredConfig = KindredConfig::figment().extract()?;
            assert_eq!(config.general.default_format, "raw");
            Ok(())
        });
    }
}
