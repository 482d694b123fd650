//! CLI error types.

use std::path::PathBuf;

use hm_config::ConfigError;
use hm_page::PageError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Page(#[from] PageError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read input file: {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read CSS file: {}: {source}", path.display())]
    ReadCss {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file: {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No input file specified and no data piped to stdin")]
    NoInput,

    #[error("{0}")]
    Usage(String),
}
