//! Turning batch reports into terminal output.

use chrono::Utc;
use distill_insight::{AnalysisError, Quiz, SummaryResult};
use serde::Serialize;

use crate::batch::{FileReport, Outcome};
use crate::cli::OutputFormat;
use crate::error::AppError;

/// Render every report in the requested format.
pub fn render(reports: &[FileReport], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => render_json(reports),
    }
}

fn render_text(reports: &[FileReport]) -> String {
    let with_headers = reports.len() > 1;
    let mut sections = Vec::with_capacity(reports.len());
    for report in reports {
        let body = match &report.outcome {
            Outcome::Summary(summary) => format_summary(summary),
            Outcome::Quiz(quiz) => format_quiz(quiz),
        };
        if with_headers {
            sections.push(format!("== {} ==\n{}", report.path.display(), body));
        } else {
            sections.push(body);
        }
    }
    sections.join("\n")
}

/// Selected sentences on one line, as they appear in the document.
pub fn format_summary(summary: &SummaryResult) -> String {
    format!("{}\n", summary.text())
}

/// `Q{n}. stem`, lettered options, then the answer letter.
pub fn format_quiz(quiz: &Quiz) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (i, question) in quiz.iter().enumerate() {
        lines.push(format!("Q{}. {}", i + 1, question.stem));
        for option in &question.options {
            lines.push(format!("  {}. {}", option.letter, option.text));
        }
        lines.push(format!("Answer: {}", question.correct_letter()));
        lines.push(String::new());
    }
    format!("{}\n", lines.join("\n").trim_end())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    generated_at: String,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

fn render_json(reports: &[FileReport]) -> Result<String, AppError> {
    let generated_at = Utc::now().to_rfc3339();
    let docs: Vec<JsonReport<'_>> = reports
        .iter()
        .map(|r| JsonReport {
            path: r.path.display().to_string(),
            generated_at: generated_at.clone(),
            outcome: &r.outcome,
        })
        .collect();

    let json = if docs.len() == 1 {
        serde_json::to_string_pretty(&docs[0])?
    } else {
        serde_json::to_string_pretty(&docs)?
    };
    Ok(format!("{}\n", json))
}

#[derive(Serialize)]
struct JsonError {
    error: JsonErrorBody,
}

#[derive(Serialize)]
struct JsonErrorBody {
    kind: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    requested: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    available: Option<usize>,
    generated_at: String,
}

/// Failure as a JSON object: `{"error": {"kind": ..., "message": ...}}`.
pub fn render_error_json(err: &AppError) -> Result<String, AppError> {
    let (requested, available) = match err {
        AppError::Analysis(AnalysisError::InsufficientContent {
            requested,
            available,
        }) => (Some(*requested), Some(*available)),
        _ => (None, None),
    };
    let doc = JsonError {
        error: JsonErrorBody {
            kind: err.kind(),
            message: err.to_string(),
            requested,
            available,
            generated_at: Utc::now().to_rfc3339(),
        },
    };
    Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?))
}
