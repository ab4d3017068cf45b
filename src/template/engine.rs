//! Placeholder substitution engine.
//!
//! # Syntax
//!
//! - `{{name}}` or `{{ name }}` - Substitutes the value of variable `name`
//! - Everything else, including single `{` and `}`, is copied literally
//!
//! Single braces are left alone because the metadata templates are JSON
//! documents and the markup templates embed CSS and script blocks.
//!
//! # Error Handling
//!
//! Undefined variables cause an error rather than silent substitution with
//! empty strings, so a misspelled placeholder never reaches a written file.

use super::TemplateError;
use std::collections::HashMap;

/// Render a template string by substituting `{{ variable }}` placeholders.
///
/// # Examples
///
/// ```ignore
/// let vars = vars([("title", "Sum")]);
/// let result = render_template("<h1>{{ title }}</h1>", &vars)?;
/// assert_eq!(result, "<h1>Sum</h1>");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '{' || !matches!(chars.peek(), Some((_, '{'))) {
            result.push(ch);
            continue;
        }
        chars.next(); // consume the second {

        let mut var_name = String::new();
        loop {
            match chars.next() {
                Some((_, '}')) if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    break;
                }
                Some((_, c)) => var_name.push(c),
                None => {
                    return Err(TemplateError::UnterminatedPlaceholder { position: pos });
                }
            }
        }

        let var_name = var_name.trim();
        if var_name.is_empty() {
            return Err(TemplateError::EmptyVariableName { position: pos });
        }

        match variables.get(var_name) {
            Some(value) => result.push_str(value),
            None => {
                return Err(TemplateError::UndefinedVariable {
                    name: var_name.to_string(),
                    position: pos,
                });
            }
        }
    }

    Ok(result)
}

/// Helper to create a variables map from a list of key-value pairs.
#[cfg(test)]
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
