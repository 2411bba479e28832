//! `sde hyper` command implementation.

use std::path::PathBuf;

use clap::Args;
use sde_config::CliSettings;
use sde_hyper::{Hyper, RoleRegistry, dialect_by_name};
use sde_refs::Resolver;

use super::{GlobalArgs, classifier, load_project, title_cache};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the hyper command.
#[derive(Args)]
pub(crate) struct HyperArgs {
    /// Project snapshot used to derive reference titles, YAML or JSON.
    #[arg(short, long)]
    project: Option<PathBuf>,

    /// Document the role appears in (default: root document).
    #[arg(short, long)]
    docname: Option<String>,

    /// Role name.
    #[arg(short, long, default_value = "hyper")]
    role: String,

    /// Markup dialect of the output: myst or rst.
    #[arg(long, default_value = "myst")]
    dialect: String,

    /// Role text, e.g. "Title <target> {type=button}".
    text: String,
}

impl HyperArgs {
    /// Print the markup the role occurrence expands to.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let config = global.load_config(CliSettings::default())?;
        let output = Output::new();

        let dialect = dialect_by_name(&self.dialect)
            .ok_or_else(|| CliError::Validation(format!("Unknown dialect: {}", self.dialect)))?;
        let registry = RoleRegistry::default();
        let classifier = classifier(&config);
        let titles = title_cache(&config);
        let project = self.project.as_deref().map(load_project).transpose()?;
        let docname = self.docname.as_deref().unwrap_or(&config.linktree.root_doc);

        let resolver = project.as_ref().map(|project| {
            Resolver::new(&classifier, project, project, docname)
                .with_strip_from_label(config.linktree.strip_from_label.as_deref())
        });

        let mut hyper = Hyper::new(&registry)
            .with_dialect(dialect)
            .with_classifier(classifier.clone());
        if let Some(titles) = &titles {
            hyper = hyper.with_titles(titles);
        }
        if let Some(resolver) = &resolver {
            hyper = hyper.with_resolver(resolver);
        }

        output.result(&hyper.render(&self.role, &self.text)?);
        Ok(())
    }
}
