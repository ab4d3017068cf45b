//! Command implementation for qbgen.
//!
//! A run checks the CLI filter, loads the config and template library,
//! generates every selected record, and prints the run report.

mod filter;
mod generate;
mod report;


pub use filter::RecordFilter;
pub use generate::{Generator, generate};

use crate::bank::UuidGenerator;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::template::TemplateLibrary;

/// Run the generator for the parsed command line.
///
/// Skipped records are reported but do not fail the run; any failed record
/// makes the run return [`crate::error::QbError::RecordsFailed`] after the
/// summary is printed.
pub fn run(cli: Cli) -> Result<()> {
    let filter = RecordFilter::from_args(cli.mode, cli.topic.as_deref(), cli.qtype.as_deref())?;

    let mut config = Config::load_for_run(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);
    config.validate()?;

    let library =
        TemplateLibrary::load(&config.template_file)?.with_code_templates(&config.code_templates);
    let generator = Generator::new(&config, &library, cli.dry_run);
    generator.check_templates()?;

    let report = generate(&generator, &filter, &mut UuidGenerator)?;
    print!("{}", report.summary(cli.dry_run));
    report.into_result().map(|_| ())
}

/// Apply command-line overrides on top of the loaded config.
///
/// Override paths are taken as given (relative to the working directory).
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(templates) = &cli.templates {
        config.template_file = templates.clone();
    }
    if let Some(output_dir) = &cli.output_dir {
        config.output_dir = output_dir.clone();
    }
    if !cli.banks.is_empty() {
        config.banks = cli.banks.clone();
    }
}
