//! CLI argument definitions for the Distill application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use distill_core::{DistillConfig, LengthTier, QuestionCount};

/// Distill: summarize documents and generate multiple-choice quizzes, offline.
#[derive(Parser, Debug)]
#[command(name = "distill", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize one or more .txt files.
    Summarize(SummarizeArgs),
    /// Generate a multiple-choice quiz from one or more .txt files.
    Quiz(QuizArgs),
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Files to summarize.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub length: LengthFlags,
}

/// Mutually exclusive summary length flags.
#[derive(Args, Debug, Default)]
#[group(required = false, multiple = false)]
pub struct LengthFlags {
    /// Short summary.
    #[arg(long)]
    pub short: bool,
    /// Medium summary (default).
    #[arg(long)]
    pub medium: bool,
    /// Long summary.
    #[arg(long)]
    pub long: bool,
}

impl LengthFlags {
    /// The tier picked on the command line, if any.
    pub fn selected(&self) -> Option<LengthTier> {
        if self.short {
            Some(LengthTier::Short)
        } else if self.medium {
            Some(LengthTier::Medium)
        } else if self.long {
            Some(LengthTier::Long)
        } else {
            None
        }
    }
}

#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Files to build quizzes from.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Number of questions (5, 10, or 20).
    #[arg(long, value_parser = parse_question_count)]
    pub count: Option<QuestionCount>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_question_count(s: &str) -> Result<QuestionCount, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("{:?} is not a number (expected 5, 10 or 20)", s))?;
    QuestionCount::try_from(n)
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > DISTILL_CONFIG env var > ~/.distill/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("DISTILL_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config: &DistillConfig) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config.general.log_level.clone())
    }
}

impl SummarizeArgs {
    /// Priority: length flag > config file default tier.
    pub fn resolve_tier(&self, config: &DistillConfig) -> LengthTier {
        self.length
            .selected()
            .unwrap_or(config.summary.default_tier)
    }
}

impl QuizArgs {
    /// Priority: --count flag > config file default count.
    pub fn resolve_count(&self, config: &DistillConfig) -> QuestionCount {
        self.count.unwrap_or(config.quiz.default_count)
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".distill").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".distill").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(args)
    }

    #[test]
    fn test_summarize_defaults_to_config_tier() {
        let args = parse(&["distill", "summarize", "notes.txt"]).unwrap();
        let Command::Summarize(ref cmd) = args.command else {
            panic!("expected summarize");
        };
        assert_eq!(cmd.paths, vec![PathBuf::from("notes.txt")]);
        assert_eq!(cmd.length.selected(), None);

        let mut config = DistillConfig::default();
        assert_eq!(cmd.resolve_tier(&config), LengthTier::Medium);
        config.summary.default_tier = LengthTier::Long;
        assert_eq!(cmd.resolve_tier(&config), LengthTier::Long);
    }

    #[test]
    fn test_summarize_length_flags() {
        for (flag, tier) in [
            ("--short", LengthTier::Short),
            ("--medium", LengthTier::Medium),
            ("--long", LengthTier::Long),
        ] {
            let args = parse(&["distill", "summarize", "a.txt", flag]).unwrap();
            let Command::Summarize(cmd) = args.command else {
                panic!("expected summarize");
            };
            assert_eq!(cmd.resolve_tier(&DistillConfig::default()), tier);
        }
    }

    #[test]
    fn test_summarize_length_flags_are_exclusive() {
        assert!(parse(&["distill", "summarize", "a.txt", "--short", "--long"]).is_err());
    }

    #[test]
    fn test_summarize_requires_path() {
        assert!(parse(&["distill", "summarize"]).is_err());
    }

    #[test]
    fn test_quiz_count_parsing() {
        let args = parse(&["distill", "quiz", "a.txt", "b.txt", "--count", "10"]).unwrap();
        let Command::Quiz(cmd) = args.command else {
            panic!("expected quiz");
        };
        assert_eq!(cmd.paths.len(), 2);
        assert_eq!(cmd.resolve_count(&DistillConfig::default()), QuestionCount::Ten);
    }

    #[test]
    fn test_quiz_count_defaults_to_config() {
        let args = parse(&["distill", "quiz", "a.txt"]).unwrap();
        let Command::Quiz(cmd) = args.command else {
            panic!("expected quiz");
        };
        let mut config = DistillConfig::default();
        config.quiz.default_count = QuestionCount::Twenty;
        assert_eq!(cmd.resolve_count(&config), QuestionCount::Twenty);
    }

    #[test]
    fn test_quiz_rejects_unsupported_count() {
        assert!(parse(&["distill", "quiz", "a.txt", "--count", "7"]).is_err());
        assert!(parse(&["distill", "quiz", "a.txt", "--count", "ten"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&[
            "distill", "quiz", "a.txt", "--format", "json", "-l", "debug", "-c", "/tmp/d.toml",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.resolve_config_path(), PathBuf::from("/tmp/d.toml"));
        assert_eq!(args.resolve_log_level(&DistillConfig::default()), "debug");
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        let args = parse(&["distill", "summarize", "a.txt"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.resolve_log_level(&DistillConfig::default()), "warn");
    }
}
