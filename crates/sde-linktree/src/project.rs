//! In-memory project snapshot.
//!
//! [`StaticProject`] holds everything a documentation build would know
//! about a project: document titles, labels, toctrees and the inventories of
//! other projects. It implements all host collaborators, so link trees and
//! references can be produced outside a running build.
//!
//! ```yaml
//! project: CrateDB
//! root_doc: index
//! documents:
//!   index:
//!     title: Home
//!     toctree: [guide, install/linux]
//!   guide:
//!     title: Guide
//!     labels:
//!       guide-intro: {title: Introduction}
//!   install/linux:
//!     title: Linux
//! inventories:
//!   sd:
//!     index: {uri: "https://sphinx-design.readthedocs.io/en/latest/index.html", display: sphinx-design}
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use sde_refs::{DocumentIndex, Inventory, InventoryEntry, Location};
use serde::Deserialize;

use crate::host::{ToctreeError, ToctreeGenerator};
use crate::node::{Link, ListItem, Node};
use crate::tree::PageContext;

/// Failure loading a project snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid YAML project file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid JSON project file: {0}")]
    Json(#[from] serde_json::Error),
}

/// A project's documents and the inventories it links to.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticProject {
    /// Project name, used to mark the current section.
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default = "default_root_doc")]
    pub root_doc: String,
    #[serde(default)]
    pub documents: BTreeMap<String, Document>,
    /// Inventory name to label to entry.
    #[serde(default)]
    pub inventories: BTreeMap<String, BTreeMap<String, InventoryItem>>,
}

fn default_root_doc() -> String {
    "index".to_owned()
}

/// A document of the project.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    pub title: String,
    /// Child documents, in navigation order.
    #[serde(default)]
    pub toctree: Vec<String>,
    /// Labels defined in the document.
    #[serde(default)]
    pub labels: BTreeMap<String, Label>,
}

/// A labelled section. The anchor defaults to the label name.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Label {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub anchor: Option<String>,
}

/// An inventory entry. The display text defaults to the label.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryItem {
    pub uri: String,
    #[serde(default)]
    pub display: Option<String>,
}

impl StaticProject {
    pub fn from_yaml(text: &str) -> Result<Self, ProjectError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json(text: &str) -> Result<Self, ProjectError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a `.json` file, or YAML for any other extension.
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let text = std::fs::read_to_string(path).map_err(|source| ProjectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let project = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&text)?
        } else {
            Self::from_yaml(&text)?
        };
        tracing::debug!(
            path = %path.display(),
            documents = project.documents.len(),
            inventories = project.inventories.len(),
            "Loaded project"
        );
        Ok(project)
    }

    /// Document names in sorted order.
    pub fn docnames(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Page context for rendering `pagename` in this project.
    pub fn context(&self, pagename: &str) -> PageContext {
        let mut context = PageContext::new(pagename).with_root_doc(self.root_doc.clone());
        context.project.clone_from(&self.project);
        context
    }

    fn toctree_items(
        &self,
        page: &str,
        parent: &Document,
        level: u32,
        max_depth: i32,
        ancestors: &mut Vec<String>,
    ) -> Vec<ListItem> {
        let mut items = Vec::new();
        for child in &parent.toctree {
            if ancestors.contains(child) {
                tracing::warn!(docname = %child, "Circular toctree reference, skipping");
                continue;
            }
            let Some(document) = self.documents.get(child) else {
                tracing::warn!(docname = %child, "Toctree contains reference to nonexisting document");
                continue;
            };

            let mut item = ListItem::new(Link {
                uri: Some(self.path_between(page, child)),
                label: Some(document.title.clone()),
                internal: true,
            })
            .at_level(level);

            if max_depth < 1 || level < max_depth.unsigned_abs() {
                ancestors.push(child.clone());
                let children = self.toctree_items(page, document, level + 1, max_depth, ancestors);
                ancestors.pop();
                if !children.is_empty() {
                    item.children.push(Node::list(children));
                }
            }
            items.push(item);
        }
        items
    }
}

impl DocumentIndex for StaticProject {
    fn title_of(&self, docname: &str) -> Option<String> {
        self.documents.get(docname).map(|d| d.title.clone())
    }

    fn location_of(&self, label: &str) -> Option<Location> {
        self.documents.iter().find_map(|(docname, document)| {
            document.labels.get(label).map(|entry| Location {
                docname: docname.clone(),
                anchor: Some(entry.anchor.clone().unwrap_or_else(|| label.to_owned())),
                title: entry.title.clone(),
            })
        })
    }

    fn path_between(&self, from: &str, to: &str) -> String {
        page_path(from, to)
    }
}

impl Inventory for StaticProject {
    fn resolve(&self, inventory: Option<&str>, label: &str) -> Option<InventoryEntry> {
        let entry = |item: &InventoryItem| InventoryEntry {
            uri: item.uri.clone(),
            display: item.display.clone().unwrap_or_else(|| label.to_owned()),
        };
        match inventory {
            Some(name) => self.inventories.get(name)?.get(label).map(entry),
            None => self
                .inventories
                .values()
                .find_map(|items| items.get(label))
                .map(entry),
        }
    }
}

impl ToctreeGenerator for StaticProject {
    fn generate(&self, root: &str, max_depth: i32) -> Result<Vec<Node>, ToctreeError> {
        self.generate_for_page(root, root, max_depth)
    }

    fn generate_for_page(
        &self,
        root: &str,
        page: &str,
        max_depth: i32,
    ) -> Result<Vec<Node>, ToctreeError> {
        let document = self
            .documents
            .get(root)
            .ok_or_else(|| ToctreeError::UnknownDocument(root.to_owned()))?;
        let mut ancestors = vec![root.to_owned()];
        let items = self.toctree_items(page, document, 1, max_depth, &mut ancestors);
        if items.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![Node::list(items)])
    }
}

/// Relative URL from the page of document `from` to the page of `to`.
///
/// Pages live at `<docname>.html`, so the last segment of `from` is the
/// file and the rest its directory.
fn page_path(from: &str, to: &str) -> String {
    let from_segs: Vec<&str> = from.split('/').filter(|s| !s.is_empty()).collect();
    let to_page = format!("{to}.html");
    let to_segs: Vec<&str> = to_page.split('/').filter(|s| !s.is_empty()).collect();

    let from_dir = from_segs.split_last().map_or(&[][..], |(_, dir)| dir);
    let to_dir = to_segs.split_last().map_or(&[][..], |(_, dir)| dir);
    let common = from_dir
        .iter()
        .zip(to_dir)
        .take_while(|(a, b)| a == b)
        .count();

    let mut path = "../".repeat(from_dir.len() - common);
    path.push_str(&to_segs[common..].join("/"));
    path
}
