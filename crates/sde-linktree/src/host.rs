//! Collaborators provided by the documentation build.

use sde_refs::{DocumentIndex, Inventory};

use crate::node::Node;

/// Failure of a [`ToctreeGenerator`].
#[derive(Debug, thiserror::Error)]
pub enum ToctreeError {
    /// The root document is not part of the project.
    #[error("unknown document: {0}")]
    UnknownDocument(String),
    /// Host-specific failure.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// The host's native hierarchical document tree.
pub trait ToctreeGenerator {
    /// Nested listing of the descendants of `root`, down to `max_depth`
    /// levels. `-1` means unlimited. An empty result is not an error.
    fn generate(&self, root: &str, max_depth: i32) -> Result<Vec<Node>, ToctreeError>;

    /// Like [`generate`](Self::generate), with links relative to the page
    /// being rendered instead of `root`.
    fn generate_for_page(
        &self,
        root: &str,
        _page: &str,
        max_depth: i32,
    ) -> Result<Vec<Node>, ToctreeError> {
        self.generate(root, max_depth)
    }
}

/// Serializes link tree nodes into markup.
pub trait PageRenderer {
    fn render_fragment(&self, nodes: &[Node]) -> String;
}

/// Adjusts a rendered fragment to the markup the theme expects.
pub trait NavigationFixup {
    fn fixup(&self, html: String) -> String;
}

/// Leaves rendered fragments untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughFixup;

impl NavigationFixup for PassthroughFixup {
    fn fixup(&self, html: String) -> String {
        html
    }
}

/// Handles to the host's read-only collaborators.
#[derive(Clone, Copy)]
pub struct Host<'a> {
    pub index: &'a dyn DocumentIndex,
    pub inventory: &'a dyn Inventory,
    pub toctree: &'a dyn ToctreeGenerator,
}

impl std::fmt::Debug for Host<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}

impl<'a> Host<'a> {
    pub fn new(
        index: &'a dyn DocumentIndex,
        inventory: &'a dyn Inventory,
        toctree: &'a dyn ToctreeGenerator,
    ) -> Self {
        Self {
            index,
            inventory,
            toctree,
        }
    }

    /// Use one object for all three collaborators.
    pub fn from_project<P>(project: &'a P) -> Self
    where
        P: DocumentIndex + Inventory + ToctreeGenerator,
    {
        Self::new(project, project, project)
    }
}
