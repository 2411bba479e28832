//! `sde resolve` command implementation.

use std::path::PathBuf;

use clap::Args;
use sde_config::CliSettings;
use sde_refs::{IndirectTargets, Resolver};

use super::{GlobalArgs, classifier, load_project, title_cache};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Project snapshot, YAML or JSON.
    #[arg(short, long)]
    project: PathBuf,

    /// Document the references appear in (default: root document).
    #[arg(short, long)]
    docname: Option<String>,

    /// Markdown file whose link definitions back indirect references.
    #[arg(short, long)]
    markdown: Option<PathBuf>,

    /// References to resolve.
    #[arg(required = true)]
    references: Vec<String>,
}

impl ResolveArgs {
    /// Print URI and label of every reference. Unresolved references are
    /// reported and make the command fail after all were tried.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let config = global.load_config(CliSettings::default())?;
        let output = Output::new();

        let project = load_project(&self.project)?;
        let classifier = classifier(&config);
        let titles = title_cache(&config);
        let indirect = match &self.markdown {
            Some(path) => IndirectTargets::from_markdown(&std::fs::read_to_string(path)?),
            None => IndirectTargets::new(),
        };
        let docname = self.docname.as_deref().unwrap_or(&config.linktree.root_doc);

        let mut resolver = Resolver::new(&classifier, &project, &project, docname)
            .with_indirect_targets(&indirect)
            .with_strip_from_label(config.linktree.strip_from_label.as_deref());
        if let Some(titles) = &titles {
            resolver = resolver.with_titles(titles);
        }

        let mut failed = 0;
        for raw in &self.references {
            match resolver.resolve_str(raw, None) {
                Ok(link) => output.result(&format!("{raw}\t{}\t{}", link.uri, link.label)),
                Err(err) => {
                    output.warning(&err.to_string());
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(CliError::Unresolved(failed));
        }
        Ok(())
    }
}
