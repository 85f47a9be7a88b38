use std::path::PathBuf;

use thiserror::Error;

use gilded_rose_core::DomainError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read item file {path}: {source}")]
    ReadItems {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed item list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to render report: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}
