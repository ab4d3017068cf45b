//! Template context extraction for question records.
//!
//! # Variables
//!
//! - `question`, or `question1`/`question2` when the prompt holds a blank
//! - `title`, `type`, `topic`, `id`, `uuid`
//! - `answer` (answer kinds only)
//! - `tags` as a JSON array
//! - `option{i}`/`flag{i}` for each option, 1-indexed in source order

use super::QuestionRecord;
use crate::config::KindRoute;
use std::collections::HashMap;

/// Marker that splits a fill-in-the-blank prompt.
pub const BLANK_MARKER: &str = "___";

/// Separator between tags in the `tags` field.
const TAG_SEPARATOR: &str = ", ";

/// The prompt, split around the blank when it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptParts {
    Whole(String),
    Blank { before: String, after: String },
}

impl PromptParts {
    /// Split a prompt once on the blank marker.
    pub fn from_prompt(prompt: &str) -> Self {
        match prompt.split_once(BLANK_MARKER) {
            Some((before, after)) => PromptParts::Blank {
                before: before.trim().to_string(),
                after: after.trim().to_string(),
            },
            None => PromptParts::Whole(prompt.trim().to_string()),
        }
    }
}

/// Everything a template can reference about one record.
#[derive(Debug, Clone)]
pub struct QuestionContext {
    pub prompt: PromptParts,
    pub title: String,
    pub kind: String,
    pub topic: String,
    pub id: String,
    /// Per-run unique id, exposed as `uuid`.
    pub instance_id: String,
    pub answer: Option<String>,
    pub tags: Vec<String>,
    /// Option text and whether it is a correct choice, in source order.
    pub options: Vec<(String, bool)>,
}

impl QuestionContext {
    /// Extract context from a record rendered through `route`.
    pub fn from_record(record: &QuestionRecord, route: &KindRoute) -> Self {
        let tags = record
            .tags()
            .map(|tags| tags.split(TAG_SEPARATOR).map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            prompt: PromptParts::from_prompt(record.prompt()),
            title: record.title().to_string(),
            kind: record.kind().to_string(),
            topic: record.topic().to_string(),
            id: record.id().to_string(),
            instance_id: record.instance_id().to_string(),
            answer: route
                .answer
                .then(|| record.answer().unwrap_or_default().to_string()),
            tags,
            options: record
                .options()
                .iter()
                .map(|o| (o.text.trim().to_string(), o.is_correct()))
                .collect(),
        }
    }

    /// Convert the context to template variables.
    pub fn to_template_vars(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        match &self.prompt {
            PromptParts::Whole(prompt) => {
                vars.insert("question".to_string(), prompt.clone());
            }
            PromptParts::Blank { before, after } => {
                vars.insert("question1".to_string(), before.clone());
                vars.insert("question2".to_string(), after.clone());
            }
        }

        vars.insert("title".to_string(), self.title.clone());
        vars.insert("type".to_string(), self.kind.clone());
        vars.insert("topic".to_string(), self.topic.clone());
        vars.insert("id".to_string(), self.id.clone());
        vars.insert("uuid".to_string(), self.instance_id.clone());

        if let Some(answer) = &self.answer {
            vars.insert("answer".to_string(), answer.clone());
        }

        vars.insert(
            "tags".to_string(),
            serde_json::Value::from(self.tags.clone()).to_string(),
        );

        for (i, (text, correct)) in self.options.iter().enumerate() {
            vars.insert(format!("option{}", i + 1), text.clone());
            vars.insert(format!("flag{}", i + 1), correct.to_string());
        }

        vars
    }
}
