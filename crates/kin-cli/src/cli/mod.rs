use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `kin` binary.
#[derive(Debug, Parser)]
#[command(
    name = "kin",
    version,
    about = "Kindred - collaborative-filtering recommendations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to config, then json)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Interaction snapshot file (overrides the configured data_file)
    #[arg(short, long, global = true)]
    pub data: Option<std::path::PathBuf>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// `default_format` is what the configuration resolved to; an explicit
    /// `--format` flag always wins.
    #[must_use]
    pub fn global_flags(&self, default_format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(default_format),
            data: self.data.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
