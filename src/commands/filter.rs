//! Record selection by topic and question type.

use crate::bank::QuestionRecord;
use crate::cli::Mode;
use crate::error::{QbError, Result};

/// Which records a run generates.
///
/// Topic and type comparisons ignore case and surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    All,
    Topic(String),
    TopicAndKind { topic: String, kind: String },
}

impl RecordFilter {
    /// Build a filter from CLI arguments, checking that the mode's required
    /// values are present.
    pub fn from_args(mode: Mode, topic: Option<&str>, qtype: Option<&str>) -> Result<Self> {
        match mode {
            Mode::All => {
                if topic.is_some() || qtype.is_some() {
                    log::warn!("--topic and --qtype are ignored with --mode all");
                }
                Ok(RecordFilter::All)
            }
            Mode::Topic => {
                if qtype.is_some() {
                    log::warn!("--qtype is ignored with --mode topic");
                }
                Ok(RecordFilter::Topic(require("topic", "topic", topic)?))
            }
            Mode::TopicQtype => Ok(RecordFilter::TopicAndKind {
                topic: require("topic", "topic_qtype", topic)?,
                kind: require("qtype", "topic_qtype", qtype)?,
            }),
        }
    }

    /// Whether the record is selected.
    pub fn matches(&self, record: &QuestionRecord) -> bool {
        match self {
            RecordFilter::All => true,
            RecordFilter::Topic(topic) => normalize(record.topic()) == *topic,
            RecordFilter::TopicAndKind { topic, kind } => {
                normalize(record.topic()) == *topic && normalize(record.kind()) == *kind
            }
        }
    }
}

fn require(flag: &str, mode: &str, value: Option<&str>) -> Result<String> {
    match value.map(normalize) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(QbError::UserError(format!(
            "--{} is required with --mode {}",
            flag, mode
        ))),
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
