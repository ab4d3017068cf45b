//! Configuration types and defaults for qbgen.
//!
//! This module defines the routing types and default value functions used by
//! the Config struct.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Name of the config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "qbgen.yaml";

/// How records of one question kind are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindRoute {
    /// Type code of the markup template (e.g., `MC`, `SI`).
    pub template: String,

    /// Records of this kind need at least one option.
    #[serde(default)]
    pub choice: bool,

    /// Records of this kind need an `answer` field, which is exposed to
    /// templates.
    #[serde(default)]
    pub answer: bool,
}

impl KindRoute {
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
            choice: false,
            answer: false,
        }
    }
}

/// Default kind routes: multiple choice and string input.
pub fn default_kinds() -> BTreeMap<String, KindRoute> {
    BTreeMap::from([
        (
            "MCQ".to_string(),
            KindRoute {
                choice: true,
                ..KindRoute::new("MC")
            },
        ),
        (
            "String Input".to_string(),
            KindRoute {
                answer: true,
                ..KindRoute::new("SI")
            },
        ),
    ])
}

/// Type codes whose bodies carry a markup and a code template.
pub fn default_code_templates() -> Vec<String> {
    vec!["SI".to_string(), "DD".to_string()]
}

pub(super) fn default_template_file() -> PathBuf {
    PathBuf::from("template.md")
}

pub(super) fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

pub(super) fn default_metadata_template() -> String {
    "IJ".to_string()
}

pub(super) fn default_banks() -> Vec<PathBuf> {
    vec![
        PathBuf::from("question_bank.md"),
        PathBuf::from("question_bank2.md"),
    ]
}
