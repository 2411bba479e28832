//! `sde title` command implementation.

use clap::Args;
use rayon::prelude::*;
use sde_config::CliSettings;

use super::{GlobalArgs, title_cache};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the title command.
#[derive(Args)]
pub(crate) struct TitleArgs {
    /// URLs of the pages.
    #[arg(required = true)]
    urls: Vec<String>,
}

impl TitleArgs {
    /// Fetch titles in parallel and print them in argument order.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let config = global.load_config(CliSettings::default())?;
        let output = Output::new();

        let titles: Vec<String> = match title_cache(&config) {
            Some(cache) => self.urls.par_iter().map(|url| cache.get_title(url)).collect(),
            None => {
                output.warning("Page title lookups are disabled");
                self.urls.clone()
            }
        };

        for (url, title) in self.urls.iter().zip(titles) {
            output.result(&format!("{url}\t{title}"));
        }
        Ok(())
    }
}
