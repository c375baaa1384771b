use anyhow::bail;

use kin_core::responses::{RecommendationsResponse, SimilarityResponse, StatsResponse};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output;

const KNOWN_SCHEMAS: &[&str] = &["recommendations", "similarity", "stats"];

/// Handle `kin schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    match args.name.as_deref() {
        Some("recommendations") => output::output(
            &schemars::schema_for!(RecommendationsResponse),
            flags.format,
        ),
        Some("similarity") => {
            output::output(&schemars::schema_for!(SimilarityResponse), flags.format)
        }
        Some("stats") => output::output(&schemars::schema_for!(StatsResponse), flags.format),
        Some(other) => bail!(
            "unknown schema '{other}' (known: {})",
            KNOWN_SCHEMAS.join(", ")
        ),
        None => {
            let mut all = serde_json::Map::new();
            all.insert(
                "recommendations".to_string(),
                serde_json::to_value(schemars::schema_for!(RecommendationsResponse))?,
            );
            all.insert(
                "similarity".to_string(),
                serde_json::to_value(schemars::schema_for!(SimilarityResponse))?,
            );
            all.insert(
                "stats".to_string(),
                serde_json::to_value(schemars::schema_for!(StatsResponse))?,
            );
            output::output(&all, flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::OutputFormat;

    use super::*;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            data: None,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn known_schema_names_render() {
        for name in KNOWN_SCHEMAS {
            let args = SchemaArgs {
                name: Some((*name).to_string()),
            };
            assert!(handle(&args, &flags()).is_ok(), "schema '{name}' failed");
        }
    }

    #[test]
    fn omitted_name_renders_all_schemas() {
        let args = SchemaArgs { name: None };
        assert!(handle(&args, &flags()).is_ok());
    }

    #[test]
    fn unknown_schema_name_is_an_error() {
        let args = SchemaArgs {
            name: Some("bogus".to_string()),
        };
        let error = handle(&args, &flags()).expect_err("unknown name should fail");
        assert!(error.to_string().contains("bogus"));
    }
}
