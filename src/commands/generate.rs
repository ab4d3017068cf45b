//! The generation pipeline: record -> context -> templates -> folder.

use super::filter::RecordFilter;
use super::report::{Outcome, RecordReport, RunReport, SkipReason};
use crate::bank::{
    IdGenerator, KIND_KEY, QuestionContext, QuestionRecord, RecordError, load_bank,
};
use crate::config::{Config, KindRoute};
use crate::error::{QbError, Result};
use crate::output::{QuestionArtifacts, question_dir, write_question_folder};
use crate::template::TemplateLibrary;
use std::path::Path;

/// Renders and writes records with one config and template library.
pub struct Generator<'a> {
    config: &'a Config,
    library: &'a TemplateLibrary,
    dry_run: bool,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config, library: &'a TemplateLibrary, dry_run: bool) -> Self {
        Self {
            config,
            library,
            dry_run,
        }
    }

    /// Check that the templates the config refers to exist.
    ///
    /// A missing metadata template would fail every record, so it is an
    /// error. A missing kind template only fails records of that kind.
    pub fn check_templates(&self) -> Result<()> {
        if !self.library.contains(&self.config.metadata_template) {
            return Err(QbError::InputError(format!(
                "metadata template '{}' is not defined (defined: {})",
                self.config.metadata_template,
                self.library.codes().join(", ")
            )));
        }

        for (kind, route) in &self.config.kinds {
            if !self.library.contains(&route.template) {
                log::warn!(
                    "template '{}' for type '{}' is not defined; those records will fail",
                    route.template,
                    kind
                );
            }
        }

        Ok(())
    }

    /// Run one record through the pipeline.
    pub fn process(&self, record: &QuestionRecord) -> Outcome {
        let kind = record.kind();
        if kind.trim().is_empty() {
            return Outcome::Skipped(SkipReason::Invalid(RecordError::MissingField(KIND_KEY)));
        }
        let Some(route) = self.config.route(kind) else {
            return Outcome::Skipped(SkipReason::UnknownKind(kind.to_string()));
        };
        if let Err(e) = record.validate(route) {
            return Outcome::Skipped(SkipReason::Invalid(e));
        }

        let root = &self.config.output_dir;
        let dir = match question_dir(root, record.topic(), kind, record.title()) {
            Ok(dir) => dir,
            Err(field) => {
                return Outcome::Skipped(SkipReason::Invalid(RecordError::UnusableName(field)));
            }
        };

        let artifacts = match self.render(record, route) {
            Ok(artifacts) => artifacts,
            Err(e) => return Outcome::Failed(e),
        };

        if self.dry_run {
            return Outcome::Rendered { dir };
        }

        match write_question_folder(&dir, &artifacts) {
            Ok(written) => Outcome::Written(written),
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }

    fn render(
        &self,
        record: &QuestionRecord,
        route: &KindRoute,
    ) -> std::result::Result<QuestionArtifacts, String> {
        let vars = QuestionContext::from_record(record, route).to_template_vars();

        let question = self
            .library
            .render(&route.template, &vars)
            .map_err(|e| format!("template '{}': {}", route.template, e))?;
        let metadata = self
            .library
            .render(&self.config.metadata_template, &vars)
            .map_err(|e| format!("template '{}': {}", self.config.metadata_template, e))?;

        Ok(QuestionArtifacts {
            markup: question.markup,
            metadata: metadata.markup,
            code: question.code,
        })
    }
}

/// Load every configured bank, then generate the records the filter selects.
///
/// Banks are all read before anything is written, so an unreadable bank
/// aborts the run without partial output.
pub fn generate(
    generator: &Generator<'_>,
    filter: &RecordFilter,
    ids: &mut impl IdGenerator,
) -> Result<RunReport> {
    let mut banks: Vec<(&Path, Vec<QuestionRecord>)> = Vec::new();
    for path in &generator.config.banks {
        banks.push((path.as_path(), load_bank(path, ids)?));
    }

    let mut report = RunReport::default();
    for (source, records) in &banks {
        for record in records {
            if !filter.matches(record) {
                report.filtered_out += 1;
                continue;
            }

            let outcome = generator.process(record);
            log_outcome(record, &outcome);
            report.push(RecordReport::new(source, record, outcome));
        }
    }

    Ok(report)
}

fn log_outcome(record: &QuestionRecord, outcome: &Outcome) {
    match outcome {
        Outcome::Written(written) => log::info!("generated {}", written.dir.display()),
        Outcome::Rendered { dir } => log::info!("rendered {} (dry run)", dir.display()),
        Outcome::Skipped(reason) => {
            log::warn!("skipping record at line {}: {}", record.line(), reason)
        }
        Outcome::Failed(error) => {
            log::error!("record at line {} failed: {}", record.line(), error)
        }
    }
}
