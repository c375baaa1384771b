//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default output format for CLI commands.
fn default_format() -> String {
    String::from("json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path to the interaction snapshot file. Unset means the built-in
    /// sample dataset is used.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Default output format ("json", "table", "raw").
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            default_format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.data_file.is_none());
        assert_eq!(config.default_format, "json");
    }
}
