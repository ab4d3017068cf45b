//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{DEFAULT_CONFIG_FILE, KindRoute};
use crate::error::{QbError, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Relative paths in the file are resolved against the file's directory.
    /// The result is not validated; callers validate once command-line
    /// overrides have been applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            QbError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content)?;
        let base = path.parent().unwrap_or(Path::new(""));
        Ok(config.resolve_paths(base))
    }

    /// Load the config for a run.
    ///
    /// An explicitly requested file must exist. Without one, `qbgen.yaml` in
    /// the current directory is used if present, otherwise the defaults.
    pub fn load_for_run(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Self::load(default_path)
        } else {
            log::debug!("no {} found, using default configuration", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    /// Values are not validated here; see [`Config::validate`].
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml)
            .map_err(|e| QbError::UserError(format!("failed to parse config YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `banks` must not be empty
    /// - `metadata_template` must be non-empty
    /// - every kind must route to a non-empty template code
    pub fn validate(&self) -> Result<()> {
        if self.banks.is_empty() {
            return Err(QbError::UserError(
                "config validation failed: banks must list at least one question bank".to_string(),
            ));
        }

        if self.metadata_template.trim().is_empty() {
            return Err(QbError::UserError(
                "config validation failed: metadata_template must be non-empty".to_string(),
            ));
        }

        for (kind, route) in &self.kinds {
            if route.template.trim().is_empty() {
                return Err(QbError::UserError(format!(
                    "config validation failed: kind '{}' has an empty template code",
                    kind
                )));
            }
        }

        Ok(())
    }

    /// Look up how records of `kind` are rendered.
    pub fn route(&self, kind: &str) -> Option<&KindRoute> {
        self.kinds.get(kind)
    }

    /// Resolve relative paths against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };

        self.template_file = resolve(self.template_file);
        self.output_dir = resolve(self.output_dir);
        self.banks = self.banks.into_iter().map(resolve).collect();
        self
    }
}
