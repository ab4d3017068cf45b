//! CLI argument parsing for qbgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Cross-argument rules (which filters each mode needs) are checked by
//! `RecordFilter::from_args` so they report through the normal error path.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Qbgen: generate assessment question folders from markdown question banks.
///
/// Each question becomes a `<topic>/<type>/<title>` folder holding
/// `question.html`, `info.json`, and `server.py` for kinds with
/// server-side answer checking.
#[derive(Parser, Debug)]
#[command(name = "qbgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Which records to generate.
    #[arg(long, value_enum)]
    pub mode: Mode,

    /// Topic to generate (required for `topic` and `topic_qtype`).
    #[arg(long)]
    pub topic: Option<String>,

    /// Question type to generate (required for `topic_qtype`).
    #[arg(long)]
    pub qtype: Option<String>,

    /// Config file (defaults to ./qbgen.yaml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Root directory for generated folders (overrides config).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Template definition file (overrides config).
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Question bank file; repeat for several (overrides config).
    #[arg(long = "bank")]
    pub banks: Vec<PathBuf>,

    /// Render everything but write nothing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Record selection mode.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every record in every bank.
    All,
    /// Records of one topic.
    Topic,
    /// Records of one topic and one question type.
    #[value(name = "topic_qtype")]
    TopicQtype,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
