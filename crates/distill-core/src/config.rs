use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{DistillError, Result};
use crate::types::{LengthTier, QuestionCount};

/// Smallest option count a multiple-choice question can have.
pub const MIN_OPTION_COUNT: usize = 2;
/// Largest option count, one per letter `A` to `Z`.
pub const MAX_OPTION_COUNT: usize = 26;

/// Top-level configuration for the Distill toolkit.
///
/// Loaded from `~/.distill/config.toml` by default. Every section is optional;
/// missing sections and fields fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistillConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
}

impl DistillConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DistillConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be used.
    ///
    /// A missing file is the normal case and is only logged at debug level.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(DistillError::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Check values that the type system cannot enforce.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_OPTION_COUNT..=MAX_OPTION_COUNT).contains(&self.quiz.option_count) {
            return Err(DistillError::invalid(
                "quiz.option_count",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_OPTION_COUNT, MAX_OPTION_COUNT, self.quiz.option_count
                ),
            ));
        }
        if self.quiz.blank_marker.trim().is_empty() {
            return Err(DistillError::invalid("quiz.blank_marker", "must not be blank"));
        }
        Ok(())
    }
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Summarization settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Tier used when no length flag is given.
    pub default_tier: LengthTier,
}

/// Quiz generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Question count used when `--count` is not given.
    pub default_count: QuestionCount,
    /// Options per question, correct answer included.
    pub option_count: usize,
    /// Replaces the answer term in the question stem.
    pub blank_marker: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_count: QuestionCount::Five,
            option_count: 4,
            blank_marker: "____".to_string(),
        }
    }
}
