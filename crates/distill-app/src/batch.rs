//! Concurrent processing of several input files.
//!
//! Each file gets its own blocking worker; the analysis itself holds no shared
//! state, so workers never coordinate.

use std::path::PathBuf;
use std::sync::Arc;

use distill_core::{LengthTier, QuestionCount};
use distill_insight::{Quiz, QuizAssembler, QuizSettings, Summarizer, SummaryResult};
use serde::Serialize;

use crate::error::AppError;
use crate::loader::load_text;

/// What to do with every file of a batch.
#[derive(Debug, Clone)]
pub enum Job {
    Summarize(LengthTier),
    Quiz {
        count: QuestionCount,
        settings: QuizSettings,
    },
}

/// Result for one file.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Summary(SummaryResult),
    Quiz(Quiz),
}

/// One processed file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Run `job` over every path, one worker per file.
///
/// Reports come back in input order. When any file fails, the error of the
/// earliest failing path is returned after every worker has finished.
pub async fn process_batch(paths: Vec<PathBuf>, job: Job) -> Result<Vec<FileReport>, AppError> {
    let job = Arc::new(job);
    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            let job = Arc::clone(&job);
            tokio::task::spawn_blocking(move || {
                let outcome = process_file(&path, &job);
                (path, outcome)
            })
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    let mut first_error: Option<AppError> = None;
    for handle in handles {
        let (path, outcome) = handle.await?;
        match outcome {
            Ok(outcome) => {
                tracing::info!(path = %path.display(), "File processed");
                reports.push(FileReport { path, outcome });
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "File failed");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(reports),
    }
}

fn process_file(path: &std::path::Path, job: &Job) -> Result<Outcome, AppError> {
    let text = load_text(path)?;
    match job {
        Job::Summarize(tier) => {
            let summary = Summarizer::new().summarize(&text, *tier)?;
            Ok(Outcome::Summary(summary))
        }
        Job::Quiz { count, settings } => {
            let assembler = QuizAssembler::with_settings(settings.clone())?;
            Ok(Outcome::Quiz(assembler.generate(&text, *count)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use distill_insight::AnalysisError;

    const DOC: &str = "Glaciers carve valleys over centuries. \
        Meltwater from glaciers feeds rivers. \
        Rivers deposit sediment in valleys. \
        Sediment builds fertile plains. \
        Farmers plant crops on fertile plains.";

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_summarize_batch_keeps_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(&dir, "a.txt", DOC);
        let b = write_file(&dir, "b.txt", "One short note. Another short note.");

        let reports = process_batch(vec![a.clone(), b.clone()], Job::Summarize(LengthTier::Short))
            .await
            .unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].path, a);
        assert_eq!(reports[1].path, b);
        match &reports[0].outcome {
            Outcome::Summary(s) => assert_eq!(s.len(), 1),
            other => panic!("expected summary, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_quiz_batch() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(&dir, "a.txt", DOC);
        let job = Job::Quiz {
            count: QuestionCount::Five,
            settings: QuizSettings::default(),
        };
        let reports = process_batch(vec![a], job).await.unwrap();
        match &reports[0].outcome {
            Outcome::Quiz(q) => assert_eq!(q.len(), 5),
            other => panic!("expected quiz, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_batch_returns_earliest_error() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_file(&dir, "good.txt", DOC);
        let empty = write_file(&dir, "empty.txt", "   ");
        let pdf = write_file(&dir, "paper.pdf", DOC);

        let err = process_batch(vec![good, empty, pdf], Job::Summarize(LengthTier::Medium))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Analysis(AnalysisError::EmptyDocument)));
    }

    #[tokio::test]
    async fn test_quiz_batch_insufficient_content() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(&dir, "a.txt", "Tiny text here.");
        let job = Job::Quiz {
            count: QuestionCount::Ten,
            settings: QuizSettings::default(),
        };
        let err = process_batch(vec![a], job).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Analysis(AnalysisError::InsufficientContent { requested: 10, .. })
        ));
    }

    #[test]
    fn test_outcome_serializes_with_kind_tag() {
        let outcome = Outcome::Summary(SummaryResult {
            tier: LengthTier::Short,
            sentences: vec![],
        });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "summary");
        assert_eq!(json["tier"], "short");
    }
}
