//! `sde classify` command implementation.

use clap::Args;
use sde_config::CliSettings;

use super::{GlobalArgs, classifier};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the classify command.
#[derive(Args)]
pub(crate) struct ClassifyArgs {
    /// Reference strings to classify.
    #[arg(required = true)]
    references: Vec<String>,
}

impl ClassifyArgs {
    /// Print kind, reference and normal form, one reference per line.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let config = global.load_config(CliSettings::default())?;
        let classifier = classifier(&config);
        let output = Output::new();

        for raw in &self.references {
            output.result(&format!(
                "{}\t{raw}\t{}",
                classifier.classify(raw),
                classifier.normalize(raw)
            ));
        }
        Ok(())
    }
}
