//! Command-line interface for the readmeriser binary.

use clap::{Parser, ValueEnum};
use readmeriser_core::LogFormat;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "readmeriser")]
#[command(about = "Generate README.md files from a web form using a chat-completion model")]
#[command(version)]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, default_value = "readmeriser.toml")]
    pub config: PathBuf,

    /// Listen address (overrides configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides configuration and PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,

    /// Validate configuration and exit without serving
    #[arg(long)]
    pub check: bool,
}

/// Log format choices on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
