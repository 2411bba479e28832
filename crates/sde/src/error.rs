//! CLI error types.

use sde_config::ConfigError;
use sde_hyper::HyperError;
use sde_linktree::{LinkTreeError, ProjectError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Project(#[from] ProjectError),

    #[error("{0}")]
    LinkTree(#[from] LinkTreeError),

    #[error("{0}")]
    Hyper(#[from] HyperError),

    #[error("{0} reference(s) could not be resolved")]
    Unresolved(usize),

    #[error("{0}")]
    Validation(String),
}
