//! Read-only contracts for the host's indexes.
//!
//! The documentation build owns both indexes; this crate only reads them.
//! They are snapshots for the duration of a build, so implementations need
//! no interior mutability.

/// Where a label points inside the current project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Document containing the label.
    pub docname: String,
    /// Fragment identifier within the document, if the label is not the
    /// document itself.
    pub anchor: Option<String>,
    /// Title of the labelled section, when known.
    pub title: Option<String>,
}

impl Location {
    /// Location of a whole document.
    #[must_use]
    pub fn document(docname: impl Into<String>) -> Self {
        Self {
            docname: docname.into(),
            anchor: None,
            title: None,
        }
    }
}

/// The current project's index of documents and labels.
pub trait DocumentIndex {
    /// Title of a document.
    fn title_of(&self, docname: &str) -> Option<String>;

    /// Location of a label.
    fn location_of(&self, label: &str) -> Option<Location>;

    /// Relative URI from the page rendering `from` to the document `to`.
    ///
    /// Path algebra is the host's business; callers pass the result through.
    fn path_between(&self, from: &str, to: &str) -> String;
}

/// An entry of an external project's inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryEntry {
    /// Absolute URI of the target.
    pub uri: String,
    /// Display text recorded for the target.
    pub display: String,
}

/// Labels exported by external projects, loaded once per build.
pub trait Inventory {
    /// Look up `label` in the named inventory, or in any inventory when
    /// `inventory` is `None`.
    fn resolve(&self, inventory: Option<&str>, label: &str) -> Option<InventoryEntry>;
}
