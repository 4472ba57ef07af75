use thiserror::Error;

/// Errors raised outside the analysis pipeline.
///
/// The analysis crate reports pipeline failures through its own type; the
/// application crate wraps both.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DistillError {
    /// The config file could not be parsed as TOML.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A parsed setting is out of range.
    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DistillError {
    pub(crate) fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        DistillError::InvalidSetting {
            key,
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for DistillError {
    fn from(err: toml::de::Error) -> Self {
        DistillError::Config(err.message().to_string())
    }
}

impl From<serde_json::Error> for DistillError {
    fn from(err: serde_json::Error) -> Self {
        DistillError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DistillError>;
