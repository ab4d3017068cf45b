//! Question folder output.
//!
//! Each rendered record becomes a folder `<topic>/<kind>/<title>` holding:
//!
//! - `question.html` - rendered markup
//! - `info.json` - rendered metadata
//! - `server.py` - rendered answer-check code (code-bearing kinds only)

mod naming;

pub use naming::question_dir;

use crate::error::{QbError, Result};
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};

pub const MARKUP_FILE: &str = "question.html";
pub const METADATA_FILE: &str = "info.json";
pub const CODE_FILE: &str = "server.py";

/// Rendered content for one question folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionArtifacts {
    pub markup: String,
    pub metadata: String,
    pub code: Option<String>,
}

impl QuestionArtifacts {
    /// File names and contents, in write order.
    fn files(&self) -> Vec<(&'static str, &str)> {
        let mut files = vec![
            (MARKUP_FILE, self.markup.as_str()),
            (METADATA_FILE, self.metadata.as_str()),
        ];
        if let Some(code) = &self.code {
            files.push((CODE_FILE, code.as_str()));
        }
        files
    }
}

/// Files written for one question folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Create `dir` (if needed) and write the artifacts into it.
///
/// Re-running over an existing folder overwrites its files. A stale
/// `server.py` from an earlier run is left in place when no code is rendered.
/// If a write fails, the error lists the files that were already written.
pub fn write_question_folder(dir: &Path, artifacts: &QuestionArtifacts) -> Result<WrittenFiles> {
    std::fs::create_dir_all(dir).map_err(|e| {
        QbError::WriteError(format!(
            "failed to create question folder '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut written = Vec::new();
    for (name, content) in artifacts.files() {
        let path = dir.join(name);
        if let Err(e) = atomic_write_file(&path, content) {
            return Err(QbError::WriteError(format!(
                "{} in '{}' (already written: {})",
                write_error_detail(e),
                dir.display(),
                describe_written(&written)
            )));
        }
        log::debug!("wrote {}", path.display());
        written.push(path);
    }

    Ok(WrittenFiles {
        dir: dir.to_path_buf(),
        files: written,
    })
}

fn write_error_detail(err: QbError) -> String {
    match err {
        QbError::WriteError(detail) => detail,
        other => other.to_string(),
    }
}

fn describe_written(written: &[PathBuf]) -> String {
    if written.is_empty() {
        return "none".to_string();
    }
    written
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}
