//! Per-record outcomes and the run summary.

use crate::bank::{QuestionRecord, RecordError};
use crate::error::{QbError, Result};
use crate::output::WrittenFiles;
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a record was not generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No route is configured for the record's kind.
    UnknownKind(String),
    /// The record is missing something its kind needs.
    Invalid(RecordError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownKind(kind) => write!(f, "no renderer for type '{}'", kind),
            SkipReason::Invalid(err) => write!(f, "{}", err),
        }
    }
}

/// What happened to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Folder written.
    Written(WrittenFiles),
    /// Rendered successfully; nothing written (`--dry-run`).
    Rendered { dir: PathBuf },
    /// Not generated; the run continues.
    Skipped(SkipReason),
    /// Rendering or writing failed; the run continues.
    Failed(String),
}

/// Outcome of one record, with enough context to find it in its bank.
#[derive(Debug, Clone)]
pub struct RecordReport {
    pub source: PathBuf,
    pub line: usize,
    pub id: String,
    pub title: String,
    pub outcome: Outcome,
}

impl RecordReport {
    pub fn new(source: &Path, record: &QuestionRecord, outcome: Outcome) -> Self {
        Self {
            source: source.to_path_buf(),
            line: record.line(),
            id: record.id().to_string(),
            title: record.title().to_string(),
            outcome,
        }
    }

    fn location(&self) -> String {
        format!(
            "{}:{} (id {:?}, title {:?})",
            self.source.display(),
            self.line,
            self.id,
            self.title
        )
    }
}

/// Results of a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub records: Vec<RecordReport>,
    /// Records not selected by the filter.
    pub filtered_out: usize,
}

impl RunReport {
    pub fn push(&mut self, report: RecordReport) {
        self.records.push(report);
    }

    pub fn generated_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Written(_) | Outcome::Rendered { .. }))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped(_)))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.records.iter().filter(|r| pred(&r.outcome)).count()
    }

    /// Human-readable summary, one line per skipped or failed record.
    pub fn summary(&self, dry_run: bool) -> String {
        let verb = if dry_run { "Rendered" } else { "Generated" };
        let mut out = format!(
            "{} {} question folder(s): {} skipped, {} failed, {} filtered out\n",
            verb,
            self.generated_count(),
            self.skipped_count(),
            self.failed_count(),
            self.filtered_out
        );

        for report in &self.records {
            match &report.outcome {
                Outcome::Skipped(reason) => {
                    out.push_str(&format!("  skipped {}: {}\n", report.location(), reason));
                }
                Outcome::Failed(error) => {
                    out.push_str(&format!("  FAILED  {}: {}\n", report.location(), error));
                }
                Outcome::Written(_) | Outcome::Rendered { .. } => {}
            }
        }

        out
    }

    /// Turn the report into the run's result: an error if any record failed.
    pub fn into_result(self) -> Result<Self> {
        match self.failed_count() {
            0 => Ok(self),
            n => Err(QbError::RecordsFailed(n)),
        }
    }
}
