//! Question bank model.
//!
//! A question bank is a markdown file of `###`-delimited blocks, each holding
//! `key: value` lines:
//!
//! ```text
//! ###
//! id: 1
//! type: MCQ
//! question: 2+2=?
//! option1: 3
//! *option2: 4
//! title: Sum
//! topic: Math
//! tags: easy, arithmetic
//! ```
//!
//! Keys starting with `option` or `*` are choice options; a leading `*`
//! marks a correct choice. Every other key is a scalar field.

mod context;
mod ids;
mod parser;
#[cfg(test)]
mod tests;

pub use context::QuestionContext;
pub use ids::{IdGenerator, UuidGenerator};
pub use parser::load_bank;

#[cfg(test)]
pub use ids::SequentialIds;
#[cfg(test)]
pub use parser::parse_bank;

use crate::config::KindRoute;
use thiserror::Error;

/// Scalar key holding the record identifier.
pub const ID_KEY: &str = "id";
/// Scalar key holding the question kind.
pub const KIND_KEY: &str = "type";
/// Scalar key holding the prompt text.
pub const PROMPT_KEY: &str = "question";
/// Scalar key holding the title.
pub const TITLE_KEY: &str = "title";
/// Scalar key holding the topic.
pub const TOPIC_KEY: &str = "topic";
/// Scalar key holding the comma-separated tags.
pub const TAGS_KEY: &str = "tags";
/// Scalar key holding the expected answer.
pub const ANSWER_KEY: &str = "answer";

/// Prefix that marks an option label as a correct choice.
pub const CORRECT_MARKER: char = '*';

/// One choice option, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Label as written in the source (e.g., `option1`, `*option2`).
    pub label: String,
    /// Option text.
    pub text: String,
}

impl ChoiceOption {
    /// Whether the label carries the correct-answer marker.
    pub fn is_correct(&self) -> bool {
        self.label.starts_with(CORRECT_MARKER)
    }
}

/// A parsed question record.
///
/// Missing scalar fields read as empty strings; [`QuestionRecord::validate`]
/// decides whether a record can be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    line: usize,
    instance_id: String,
    fields: Vec<(String, String)>,
    options: Vec<ChoiceOption>,
}

/// Why a record cannot be rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required scalar field is absent or empty.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A choice kind without any options.
    #[error("kind '{0}' requires at least one option")]
    NoOptions(String),

    /// An answer kind without an answer.
    #[error("kind '{0}' requires an 'answer' field")]
    MissingAnswer(String),

    /// A field used as a folder name has no usable characters.
    #[error("field '{0}' cannot be used as a folder name")]
    UnusableName(&'static str),
}

impl QuestionRecord {
    /// 1-based line number of the block's `###` marker.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Unique identifier assigned at parse time.
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Look up a scalar field.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All scalar fields in source order.
    #[cfg(test)]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Choice options in source order.
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    pub fn id(&self) -> &str {
        self.field(ID_KEY).unwrap_or_default()
    }

    pub fn kind(&self) -> &str {
        self.field(KIND_KEY).unwrap_or_default()
    }

    pub fn prompt(&self) -> &str {
        self.field(PROMPT_KEY).unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.field(TITLE_KEY).unwrap_or_default()
    }

    pub fn topic(&self) -> &str {
        self.field(TOPIC_KEY).unwrap_or_default()
    }

    pub fn tags(&self) -> Option<&str> {
        self.field(TAGS_KEY)
    }

    pub fn answer(&self) -> Option<&str> {
        self.field(ANSWER_KEY)
    }

    /// Check that the record has everything its kind needs to be rendered.
    pub fn validate(&self, route: &KindRoute) -> Result<(), RecordError> {
        for key in [KIND_KEY, PROMPT_KEY, TITLE_KEY, TOPIC_KEY] {
            if self.field(key).is_none_or(|v| v.trim().is_empty()) {
                return Err(RecordError::MissingField(key));
            }
        }

        if route.choice && self.options.is_empty() {
            return Err(RecordError::NoOptions(self.kind().to_string()));
        }

        if route.answer && self.answer().is_none() {
            return Err(RecordError::MissingAnswer(self.kind().to_string()));
        }

        Ok(())
    }

    /// Serialize the record back into question bank block format.
    ///
    /// Scalar fields come first in source order, followed by the options.
    #[cfg(test)]
    pub fn to_block_text(&self) -> String {
        let mut out = String::from("###\n");
        for (key, value) in &self.fields {
            out.push_str(&format!("{}: {}\n", key, value));
        }
        for option in &self.options {
            out.push_str(&format!("{}: {}\n", option.label, option.text));
        }
        out
    }
}
