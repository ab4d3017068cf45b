//! Directory naming for question folders.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static UNSAFE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\s/\\:*?"<>|\x00-\x1f]+"#).expect("Invalid path component regex")
});

/// Make a free-text value usable as a single path component.
///
/// Trims the value and replaces each run of whitespace, path separators,
/// reserved characters (`:*?"<>|`) or control characters with one `_`. Returns `None` when nothing usable
/// remains (empty, `.` or `..`).
pub fn sanitize_component(value: &str) -> Option<String> {
    let sanitized = UNSAFE_RUN.replace_all(value.trim(), "_");

    match &*sanitized {
        "" | "." | ".." => None,
        s => Some(s.to_string()),
    }
}

/// Build `<root>/<topic>/<kind>/<title>` from sanitized components.
///
/// On failure, returns the name of the component that could not be used.
pub fn question_dir(
    root: &Path,
    topic: &str,
    kind: &str,
    title: &str,
) -> Result<PathBuf, &'static str> {
    let topic = sanitize_component(topic).ok_or("topic")?;
    let kind = sanitize_component(kind).ok_or("type")?;
    let title = sanitize_component(title).ok_or("title")?;
    Ok(root.join(topic).join(kind).join(title))
}
