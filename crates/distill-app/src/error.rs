//! Errors surfaced by the command-line front end.

use distill_core::DistillError;
use distill_insight::AnalysisError;

/// Everything that can stop a `distill` invocation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported file type: {0} (expected .txt)")]
    UnsupportedFileType(String),
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("{0}")]
    Config(#[from] DistillError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("worker failed: {0}")]
    Worker(String),
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Worker(err.to_string())
    }
}

impl AppError {
    /// Machine-readable tag used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Io(_) => "io",
            AppError::UnsupportedFileType(_) => "unsupported_file_type",
            AppError::Analysis(e) => e.kind(),
            AppError::Config(_) => "config",
            AppError::Serialization(_) => "serialization",
            AppError::Worker(_) => "worker",
        }
    }
}
