//! CLI command implementations.

pub(crate) mod classify;
pub(crate) mod hyper;
pub(crate) mod linktree;
pub(crate) mod resolve;
pub(crate) mod title;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use sde_config::{CliSettings, Config};
use sde_linktree::StaticProject;
use sde_refs::Classifier;
use sde_title::{HttpTitleFetcher, TitleCache};

use crate::error::CliError;

pub(crate) use classify::ClassifyArgs;
pub(crate) use hyper::HyperArgs;
pub(crate) use linktree::LinkTreeArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use title::TitleArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover design-elements.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable page title lookups (overrides config).
    #[arg(long, global = true)]
    pub no_titles: bool,
}

impl GlobalArgs {
    /// Load the configuration with command specific overrides.
    pub(crate) fn load_config(&self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            titles_enabled: if self.no_titles {
                Some(false)
            } else {
                settings.titles_enabled
            },
            ..settings
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        tracing::info!(
            path = ?config.config_path,
            titles = config.titles.enabled,
            "Loaded configuration"
        );
        Ok(config)
    }
}

/// Classifier configured with the scheme sets from `config`.
pub(crate) fn classifier(config: &Config) -> Classifier {
    Classifier::new(
        config.references.url_schemes.iter().map(String::as_str),
        config.references.internal_schemes.iter().map(String::as_str),
    )
}

/// Title cache backed by HTTP, unless lookups are disabled.
pub(crate) fn title_cache(config: &Config) -> Option<TitleCache> {
    if !config.titles.enabled {
        return None;
    }
    let timeout = config.titles.timeout_secs.map(Duration::from_secs);
    Some(TitleCache::with_capacity(
        HttpTitleFetcher::new(timeout),
        config.titles.capacity,
    ))
}

pub(crate) fn load_project(path: &Path) -> Result<StaticProject, CliError> {
    Ok(StaticProject::load(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sde_refs::ReferenceKind;

    #[test]
    fn test_classifier_from_config() {
        let config = Config::from_toml(
            "[references]\nurl_schemes = [\"https\"]\ninternal_schemes = [\"inv\", \"doc\"]\n",
        )
        .unwrap();
        let classifier = classifier(&config);
        assert_eq!(classifier.classify("doc:guide"), ReferenceKind::Namespaced);
        assert_eq!(classifier.classify("http:guide"), ReferenceKind::CrossProject);
        assert_eq!(classifier.classify("https://example.org"), ReferenceKind::Url);
    }

    #[test]
    fn test_title_cache_disabled() {
        let config = Config::from_toml("[titles]\nenabled = false\n").unwrap();
        assert!(title_cache(&config).is_none());
    }
}
