//! `sde linktree` command implementation.

use std::path::PathBuf;

use clap::Args;
use rayon::prelude::*;
use sde_config::{CliSettings, Config};
use sde_linktree::{
    Host, LinkTree, LinkTreeError, LinkTreeWarning, StaticProject, fill_demo_tree,
    fill_project_tree,
};
use sde_refs::Classifier;

use super::{GlobalArgs, classifier, load_project};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the linktree command.
#[derive(Args)]
pub(crate) struct LinkTreeArgs {
    /// Project snapshot, YAML or JSON.
    #[arg(short, long)]
    project: PathBuf,

    /// Page to render the tree for (default: root document).
    #[arg(short, long, conflicts_with = "all")]
    docname: Option<String>,

    /// Render the demo tree instead of the project toctree.
    #[arg(long)]
    demo: bool,

    /// Render the tree of every document.
    #[arg(long)]
    all: bool,

    /// Toctree depth, -1 for unlimited (overrides config).
    #[arg(long, allow_negative_numbers = true)]
    maxdepth: Option<i32>,
}

/// Per-page inputs shared by all pages of a run.
struct TreeSettings {
    demo: bool,
    max_depth: i32,
    project_name: Option<String>,
    strip_from_label: Option<String>,
    classifier: Classifier,
}

impl TreeSettings {
    fn from_config(config: &Config, demo: bool) -> Self {
        Self {
            demo,
            max_depth: config.linktree.maxdepth,
            project_name: config.linktree.project.clone(),
            strip_from_label: config.linktree.strip_from_label.clone(),
            classifier: classifier(config),
        }
    }
}

/// A rendered tree and what came up while building it.
#[derive(Debug)]
struct RenderedPage {
    html: String,
    warnings: Vec<LinkTreeWarning>,
}

impl LinkTreeArgs {
    /// Render the tree of one page, or of all pages in parallel.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let config = global.load_config(CliSettings {
            maxdepth: self.maxdepth,
            ..CliSettings::default()
        })?;
        let output = Output::new();
        let project = load_project(&self.project)?;
        let settings = TreeSettings::from_config(&config, self.demo);

        if !self.all {
            let docname = self.docname.as_deref().unwrap_or(&config.linktree.root_doc);
            let page = render_page(&project, docname, &settings)?;
            report(&output, docname, &page);
            output.result(page.html.trim_end());
            return Ok(());
        }

        let docnames: Vec<&str> = project.docnames().collect();
        tracing::info!(documents = docnames.len(), "Rendering link trees");
        let pages = docnames
            .par_iter()
            .map(|docname| render_page(&project, docname, &settings).map(|page| (*docname, page)))
            .collect::<Result<Vec<_>, LinkTreeError>>()?;

        for (docname, page) in &pages {
            report(&output, docname, page);
            output.result(&format!("<!-- {docname} -->"));
            output.result(page.html.trim_end());
        }
        output.info(&format!("Rendered {} link trees", pages.len()));
        Ok(())
    }
}

fn render_page(
    project: &StaticProject,
    docname: &str,
    settings: &TreeSettings,
) -> Result<RenderedPage, LinkTreeError> {
    let mut context = project.context(docname);
    if let Some(name) = &settings.project_name {
        context = context.with_project(name.clone());
    }

    let mut tree = LinkTree::from_context(Host::from_project(project), &context)
        .with_classifier(settings.classifier.clone());
    tree.remove_from_title(settings.strip_from_label.as_deref());
    if settings.demo {
        fill_demo_tree(&mut tree)?;
    } else {
        fill_project_tree(&mut tree, settings.max_depth)?;
    }
    let html = tree.render_html();
    Ok(RenderedPage {
        html,
        warnings: tree.warnings(),
    })
}

fn report(output: &Output, docname: &str, page: &RenderedPage) {
    for warning in &page.warnings {
        output.warning(&format!("{docname}: {warning}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = "
project: Acme
documents:
  index: {title: Home, toctree: [guide]}
  guide: {title: Guide, toctree: [guide/setup]}
  guide/setup: {title: Setup}
";

    const DEMO_PROJECT: &str = r#"
project: CrateDB
documents:
  index: {title: Home, toctree: [gridtable, infocard]}
  gridtable: {title: Grid Table}
  infocard: {title: Info Card}
inventories:
  sd:
    index: {uri: "https://sphinx-design.readthedocs.io/en/latest/index.html", display: "sphinx-design | CrateDB"}
    badges: {uri: "https://sphinx-design.readthedocs.io/en/latest/badges_buttons.html", display: Badges}
  myst:
    syntax/images_and_figures: {uri: "https://myst-parser.readthedocs.io/en/latest/syntax/images_and_figures.html"}
    syntax/referencing: {uri: "https://myst-parser.readthedocs.io/en/latest/syntax/cross-referencing.html"}
"#;

    fn settings(max_depth: i32) -> TreeSettings {
        TreeSettings {
            max_depth,
            ..TreeSettings::from_config(&Config::default(), false)
        }
    }

    #[test]
    fn test_render_page_links_relative_to_page() {
        let project = StaticProject::from_yaml(PROJECT).unwrap();
        let page = render_page(&project, "guide/setup", &settings(-1)).unwrap();
        assert!(page.html.contains(r#"href="../index.html">Acme</a>"#));
        assert!(page.html.contains(r#"href="../guide.html">Guide</a>"#));
        assert!(page.html.contains(r#"href="setup.html">Setup</a>"#));
        assert!(page.warnings.is_empty());
    }

    #[test]
    fn test_render_page_max_depth() {
        let project = StaticProject::from_yaml(PROJECT).unwrap();
        let page = render_page(&project, "index", &settings(1)).unwrap();
        assert!(page.html.contains(">Guide</a>"));
        assert!(!page.html.contains(">Setup</a>"));
    }

    #[test]
    fn test_render_page_project_name_override() {
        let project = StaticProject::from_yaml(PROJECT).unwrap();
        let settings = TreeSettings {
            project_name: Some("Other".to_owned()),
            ..settings(-1)
        };
        let page = render_page(&project, "index", &settings).unwrap();
        assert!(page.html.contains(">Other</a>"));
        assert!(page.html.starts_with(r#"<ul class="current">"#));
    }

    #[test]
    fn test_render_page_without_project_name() {
        let project = StaticProject::from_yaml("documents:\n  index: {title: Home}\n").unwrap();
        let err = render_page(&project, "index", &settings(-1)).unwrap_err();
        assert!(matches!(err, LinkTreeError::MissingContext("project")));
    }

    #[test]
    fn test_render_page_strips_configured_label_suffix() {
        let project = StaticProject::from_yaml(DEMO_PROJECT).unwrap();
        let config = Config::from_toml("[linktree]\nstrip_from_label = \" | CrateDB\"\n").unwrap();
        let settings = TreeSettings::from_config(&config, true);

        let page = render_page(&project, "index", &settings).unwrap();
        assert!(page.html.contains(
            r#"href="https://sphinx-design.readthedocs.io/en/latest/index.html">sphinx-design</a>"#
        ));
        assert!(!page.html.contains("| CrateDB"));
    }

    #[test]
    fn test_render_page_uses_configured_schemes() {
        let project = StaticProject::from_yaml(DEMO_PROJECT).unwrap();
        let config = Config::from_toml("[references]\nurl_schemes = [\"https\", \"sd\"]\n").unwrap();
        let settings = TreeSettings::from_config(&config, true);

        let page = render_page(&project, "index", &settings).unwrap();
        assert!(page.html.contains(r#"href="sd:index">sd:index</a>"#));
        assert!(!page.html.contains("sphinx-design.readthedocs.io/en/latest/index.html"));
    }
}
