//! Template definition file parsing and dispatch by type code.

use super::{TemplateError, render_template};
use crate::error::{QbError, Result};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Line that separates sections of the template definition file.
const SECTION_SEPARATOR: &str = "###";

/// Separates the type code from the template body within a section.
const CODE_MARKER: char = '@';

/// Separates the markup template from the code template in code-bearing bodies.
pub const CODE_DELIMITER: &str = "```";

/// Output of rendering one type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Rendered markup (or the whole document for single-body templates).
    pub markup: String,
    /// Rendered answer-check code, present only for code-bearing templates.
    pub code: Option<String>,
}

/// Raw template bodies keyed by type code.
///
/// Read-only after loading.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: HashMap<String, String>,
    code_templates: BTreeSet<String>,
}

impl TemplateLibrary {
    /// Load a template definition file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            QbError::InputError(format!(
                "failed to read template file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::parse(&content))
    }

    /// Parse template definitions from text.
    ///
    /// Sections without an `@` marker are discarded. A later section with the
    /// same type code replaces an earlier one.
    pub fn parse(text: &str) -> Self {
        let mut templates = HashMap::new();

        for section in split_sections(text) {
            if section.trim().is_empty() {
                continue;
            }
            let Some((code, body)) = section.split_once(CODE_MARKER) else {
                log::warn!(
                    "ignoring template section without '{}' marker: {:?}",
                    CODE_MARKER,
                    first_line(&section)
                );
                continue;
            };

            let code = code.trim().to_string();
            let body = strip_trailing_separators(body.trim());
            log::debug!("loaded template '{}' ({} bytes)", code, body.len());
            if templates.insert(code.clone(), body).is_some() {
                log::warn!("template '{}' defined more than once; using the last", code);
            }
        }

        Self {
            templates,
            code_templates: BTreeSet::new(),
        }
    }

    /// Mark type codes whose bodies carry a second, code template.
    pub fn with_code_templates<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.code_templates = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a template is defined for the type code.
    pub fn contains(&self, code: &str) -> bool {
        self.templates.contains_key(code)
    }

    /// Defined type codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Whether the type code renders a markup and a code artifact.
    pub fn is_code_bearing(&self, code: &str) -> bool {
        self.code_templates.contains(code)
    }

    /// Render the template registered under `code` with the given variables.
    ///
    /// Code-bearing templates are split once on the code delimiter and both
    /// halves are rendered independently. Any further delimiters in the code
    /// half are closing fences and are removed.
    pub fn render(
        &self,
        code: &str,
        variables: &HashMap<String, String>,
    ) -> std::result::Result<Rendered, TemplateError> {
        let body = self
            .templates
            .get(code)
            .ok_or_else(|| TemplateError::UnknownTemplate {
                code: code.to_string(),
            })?;

        if !self.is_code_bearing(code) {
            return Ok(Rendered {
                markup: render_template(body, variables)?,
                code: None,
            });
        }

        let (markup, code_body) =
            body.split_once(CODE_DELIMITER)
                .ok_or_else(|| TemplateError::MissingCodeSection {
                    code: code.to_string(),
                })?;
        let code_body = code_body.replace(CODE_DELIMITER, "");

        Ok(Rendered {
            markup: render_template(markup, variables)?,
            code: Some(render_template(&code_body, variables)?),
        })
    }
}

/// Split text into sections at lines consisting only of the separator.
fn split_sections(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim_end() == SECTION_SEPARATOR {
            sections.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    sections.push(current);

    sections
}

fn strip_trailing_separators(body: &str) -> String {
    let mut body = body;
    while let Some(rest) = body.strip_suffix(SECTION_SEPARATOR) {
        body = rest.trim_end();
    }
    body.to_string()
}

fn first_line(text: &str) -> &str {
    text.trim().lines().next().unwrap_or_default()
}
