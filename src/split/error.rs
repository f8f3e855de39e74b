use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    TemplateError(#[from] indicatif::style::TemplateError),

    #[error("No files are referenced in the CUE sheet")]
    NoFileReferencedInCueSheet,

    #[error("Could not run {tool}: {source}")]
    ToolNotRunnable {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed with {status}")]
    ExternalToolFailure { tool: String, status: ExitStatus },

    #[error("Splitter did not produce {0}")]
    MissingSplitOutput(PathBuf),
}

pub type SplitResult<T> = Result<T, SplitError>;
