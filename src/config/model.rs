//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration for a generator run.
///
/// This struct represents the contents of `qbgen.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Inputs
    // =========================================================================
    /// Template definition file.
    #[serde(default = "default_template_file")]
    pub template_file: PathBuf,

    /// Question bank files, processed in order.
    #[serde(default = "default_banks")]
    pub banks: Vec<PathBuf>,

    // =========================================================================
    // Output
    // =========================================================================
    /// Root directory under which `<topic>/<kind>/<title>` folders are created.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    // =========================================================================
    // Rendering
    // =========================================================================
    /// Type code of the template rendered into `info.json` for every record.
    #[serde(default = "default_metadata_template")]
    pub metadata_template: String,

    /// Routing from question kind (the `type` field) to templates.
    /// Kinds not listed here are skipped.
    #[serde(default = "default_kinds")]
    pub kinds: BTreeMap<String, KindRoute>,

    /// Type codes whose bodies hold markup and code separated by a fence.
    #[serde(default = "default_code_templates")]
    pub code_templates: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_file: default_template_file(),
            banks: default_banks(),
            output_dir: default_output_dir(),
            metadata_template: default_metadata_template(),
            kinds: default_kinds(),
            code_templates: default_code_templates(),
        }
    }
}
