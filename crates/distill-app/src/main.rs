//! Distill application binary.
//!
//! 1. Parse the command line
//! 2. Load configuration from TOML (defaults when absent)
//! 3. Initialize tracing on stderr
//! 4. Summarize or quiz every input file, one worker per file
//! 5. Print the reports as text or JSON on stdout (JSON failures go to stdout
//!    as an `{"error": ...}` object)

mod batch;
mod cli;
mod error;
mod loader;
mod render;

use std::process::ExitCode;

use clap::Parser;
use distill_core::DistillConfig;
use distill_insight::QuizSettings;

use crate::batch::{process_batch, Job};
use crate::cli::{CliArgs, Command, OutputFormat};
use crate::error::AppError;

fn env_filter(fallback: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback))
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    let format = args.format;

    // Config first: its log level seeds the subscriber. Until then a
    // bootstrap subscriber at the CLI level reports config problems.
    let config_file = args.resolve_config_path();
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.log_level.as_deref().unwrap_or("warn")))
        .with_writer(std::io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || {
        DistillConfig::load_or_default(&config_file)
    });

    let level = args.resolve_log_level(&config);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&level))
        .with_writer(std::io::stderr)
        .init();

    match run(args, config).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, kind = e.kind(), "distill failed");
            match format {
                OutputFormat::Json => match render::render_error_json(&e) {
                    Ok(json) => print!("{}", json),
                    Err(_) => eprintln!("error: {}", e),
                },
                OutputFormat::Text => eprintln!("error: {}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs, config: DistillConfig) -> Result<String, AppError> {
    let (paths, job) = match args.command {
        Command::Summarize(ref cmd) => {
            let tier = cmd.resolve_tier(&config);
            tracing::info!(files = cmd.paths.len(), tier = %tier, "Summarizing");
            (cmd.paths.clone(), Job::Summarize(tier))
        }
        Command::Quiz(ref cmd) => {
            let count = cmd.resolve_count(&config);
            tracing::info!(files = cmd.paths.len(), count = %count, "Generating quiz");
            let job = Job::Quiz {
                count,
                settings: QuizSettings::from(&config.quiz),
            };
            (cmd.paths.clone(), job)
        }
    };

    let reports = process_batch(paths, job).await?;
    render::render(&reports, args.format)
}
