//! Template loading and rendering.
//!
//! This module provides:
//!
//! - **Engine**: `{{ variable }}` substitution with strict error reporting
//! - **Library**: parsing of the template definition file and dispatch by
//!   type code, including the markup/code split for code-bearing templates
//!
//! # Template Definition Format
//!
//! Sections are separated by lines containing only `###`. Each section is a
//! type code, an `@`, and the template body:
//!
//! ~~~text
//! MC@<pl-multiple-choice answers-name="ans">
//!   <pl-answer correct="{{ flag1 }}">{{ option1 }}</pl-answer>
//! </pl-multiple-choice>
//! ###
//! SI@<pl-string-input answers-name="ans"></pl-string-input>
//! ```
//! def grade(data):
//!     data["correct_answers"]["ans"] = "{{ answer }}"
//! ```
//! ~~~

mod engine;
mod library;

pub use engine::render_template;
pub use library::{CODE_DELIMITER, TemplateLibrary};

#[cfg(test)]
pub use engine::vars;

use std::fmt;

/// Error type for template loading and rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder referenced a variable that is not in the context.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// Byte offset of the placeholder in the template.
        position: usize,
    },
    /// A `{{` was found without a matching `}}`.
    UnterminatedPlaceholder {
        /// Byte offset of the opening `{{`.
        position: usize,
    },
    /// A placeholder with no name (e.g., `{{ }}`).
    EmptyVariableName {
        /// Byte offset of the empty placeholder.
        position: usize,
    },
    /// No template was defined for the requested type code.
    UnknownTemplate {
        /// The requested type code.
        code: String,
    },
    /// A code-bearing template has no code delimiter.
    MissingCodeSection {
        /// The type code whose body lacks the delimiter.
        code: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnterminatedPlaceholder { position } => {
                write!(f, "unterminated '{{{{' at position {} in template", position)
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty placeholder '{{{{ }}}}' at position {} in template",
                    position
                )
            }
            TemplateError::UnknownTemplate { code } => {
                write!(f, "no template defined for type code '{}'", code)
            }
            TemplateError::MissingCodeSection { code } => {
                write!(
                    f,
                    "template '{}' must contain a '{}' delimiter separating markup from code",
                    code, CODE_DELIMITER
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}
