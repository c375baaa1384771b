use std::path::PathBuf;

use anyhow::Context;
use clap::ValueEnum;

use kin_config::KindredConfig;
use kin_store::MemoryStore;

use crate::cli::{GlobalFlags, OutputFormat};

/// Load layered configuration, including `.env` support.
pub fn load_config() -> anyhow::Result<KindredConfig> {
    KindredConfig::load_with_dotenv().context("failed to load kindred configuration")
}

/// Output format to use when `--format` is not given.
///
/// Config loading already rejects unknown values; a config constructed
/// directly falls back to JSON.
pub fn default_format(config: &KindredConfig) -> OutputFormat {
    OutputFormat::from_str(&config.general.default_format, true).unwrap_or(OutputFormat::Json)
}

/// Build the interaction store from the `--data` flag or configuration.
///
/// No snapshot path anywhere means the built-in sample dataset.
pub fn build_store(flags: &GlobalFlags, config: &KindredConfig) -> anyhow::Result<MemoryStore> {
    let path: Option<PathBuf> = flags
        .data
        .clone()
        .or_else(|| config.general.data_file.clone());

    match path {
        Some(path) => MemoryStore::from_json_file(&path).with_context(|| {
            format!(
                "failed to load interaction snapshot from {}",
                path.display()
            )
        }),
        None => Ok(MemoryStore::sample()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use kin_store::InteractionStore;

    use super::*;

    fn flags(data: Option<PathBuf>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            data,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn default_format_parses_known_values() {
        let mut config = KindredConfig::default();
        config.general.default_format = "table".to_string();
        assert_eq!(default_format(&config), OutputFormat::Table);

        config.general.default_format = "RAW".to_string();
        assert_eq!(default_format(&config), OutputFormat::Raw);
    }

    #[test]
    fn default_format_falls_back_to_json_on_unknown_value() {
        let mut config = KindredConfig::default();
        config.general.default_format = "yaml".to_string();
        assert_eq!(default_format(&config), OutputFormat::Json);
    }

    #[tokio::test]
    async fn build_store_without_a_path_uses_the_sample_dataset() {
        let store =
            build_store(&flags(None), &KindredConfig::default()).expect("store should build");
        let likes = store.likes_of("user_1").await.expect("lookup should work");
        assert!(!likes.is_empty());
    }

    #[tokio::test]
    async fn data_flag_overrides_the_configured_snapshot() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{
                "generated_at": "2025-06-01T00:00:00Z",
                "users": [{{"id": "solo", "likes": ["p1"]}}],
                "posts": [{{"id": "p1", "business_id": "b1"}}],
                "businesses": [{{"id": "b1", "name": "Solo Spot", "category": "cafe"}}]
            }}"#
        )
        .expect("write snapshot");

        let mut config = KindredConfig::default();
        config.general.data_file = Some(PathBuf::from("/nonexistent/elsewhere.json"));

        let store = build_store(&flags(Some(file.path().to_path_buf())), &config)
            .expect("store should build from the flag path");
        let likes = store.likes_of("solo").await.expect("lookup should work");
        assert_eq!(likes.len(), 1);
    }

    #[test]
    fn build_store_reports_missing_snapshot_path() {
        let result = build_store(
            &flags(Some(PathBuf::from("/nonexistent/snapshot.json"))),
            &KindredConfig::default(),
        );
        let error = result.expect_err("missing file should fail");
        assert!(format!("{error:#}").contains("/nonexistent/snapshot.json"));
    }
}
