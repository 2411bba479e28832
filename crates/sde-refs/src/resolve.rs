//! Reference resolution against the host's indexes.
//!
//! [`Resolver`] turns a classified [`Reference`] into a [`ResolvedLink`]:
//!
//! | Kind          | Looked up in         | Label when none is given                  |
//! |---------------|----------------------|-------------------------------------------|
//! | URL           | (identity)           | page title via [`TitleCache`], else URL   |
//! | anchor, label | [`DocumentIndex`]    | section or document title                 |
//! | cross-project | [`Inventory`]        | inventory display text, prefix stripped   |
//! | namespaced    | index or inventory   | depends on the scheme                     |
//! | indirect      | [`IndirectTargets`]  | the bracketed label                       |
//!
//! Missing targets are authoring errors and fail with [`UnresolvedReference`].
//! Title lookups for URLs are optional enrichment and never fail.

use sde_title::TitleCache;

use crate::classify::{Classifier, Reference, ReferenceKind};
use crate::host::{DocumentIndex, Inventory, InventoryEntry, Location};
use crate::indirect::IndirectTargets;

/// A concrete link target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Target URI, relative for project-local targets.
    pub uri: String,
    /// Display label.
    pub label: String,
    /// Whether the target belongs to the current project.
    pub internal: bool,
}

/// Why a reference could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnresolvedReason {
    /// Label or document missing from the document index.
    #[error("not found in the document index")]
    NotInDocumentIndex,
    /// Label missing from the inventory.
    #[error("not found in inventory '{}'", .0.as_deref().unwrap_or("*"))]
    NotInInventory(Option<String>),
    /// No link definition for an indirect label.
    #[error("no link definition in this document")]
    NoLinkDefinition,
    /// Internal scheme without a resolution rule.
    #[error("no resolver for scheme '{0}'")]
    UnsupportedScheme(String),
}

/// A reference whose target does not exist.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unable to resolve {kind} reference '{reference}': {reason}")]
pub struct UnresolvedReference {
    /// The reference as written.
    pub reference: String,
    /// Its classified kind.
    pub kind: ReferenceKind,
    /// What was missing.
    pub reason: UnresolvedReason,
}

/// Resolves references for one page of the current build.
///
/// Borrowing the indexes keeps the resolver cheap to create per page and
/// lets pages be resolved in parallel against one shared snapshot.
///
/// # Example
///
/// ```
/// use sde_refs::{Classifier, DocumentIndex, Inventory, InventoryEntry, Location, Resolver};
///
/// struct Project;
///
/// impl DocumentIndex for Project {
///     fn title_of(&self, docname: &str) -> Option<String> {
///         (docname == "guide").then(|| "Guide Title".to_owned())
///     }
///     fn location_of(&self, _label: &str) -> Option<Location> {
///         None
///     }
///     fn path_between(&self, _from: &str, to: &str) -> String {
///         format!("{to}.html")
///     }
/// }
///
/// impl Inventory for Project {
///     fn resolve(&self, _inventory: Option<&str>, _label: &str) -> Option<InventoryEntry> {
///         None
///     }
/// }
///
/// let classifier = Classifier::default();
/// let resolver = Resolver::new(&classifier, &Project, &Project, "index");
///
/// let link = resolver.resolve_str("guide", None).unwrap();
/// assert_eq!(link.uri, "guide.html");
/// assert_eq!(link.label, "Guide Title");
/// ```
pub struct Resolver<'a> {
    classifier: &'a Classifier,
    index: &'a dyn DocumentIndex,
    inventory: &'a dyn Inventory,
    current_doc: &'a str,
    titles: Option<&'a TitleCache>,
    indirect: Option<&'a IndirectTargets>,
    strip_from_label: Option<&'a str>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver for the page `current_doc`.
    pub fn new(
        classifier: &'a Classifier,
        index: &'a dyn DocumentIndex,
        inventory: &'a dyn Inventory,
        current_doc: &'a str,
    ) -> Self {
        Self {
            classifier,
            index,
            inventory,
            current_doc,
            titles: None,
            indirect: None,
            strip_from_label: None,
        }
    }

    /// Derive missing URL labels from page titles.
    #[must_use]
    pub fn with_titles(mut self, titles: &'a TitleCache) -> Self {
        self.titles = Some(titles);
        self
    }

    /// Resolve indirect references against the page's link definitions.
    #[must_use]
    pub fn with_indirect_targets(mut self, targets: &'a IndirectTargets) -> Self {
        self.indirect = Some(targets);
        self
    }

    /// Remove `text` from labels taken from inventories.
    #[must_use]
    pub fn with_strip_from_label(mut self, text: Option<&'a str>) -> Self {
        self.strip_from_label = text;
        self
    }

    /// The classifier used by [`resolve_str`](Self::resolve_str).
    pub fn classifier(&self) -> &Classifier {
        self.classifier
    }

    /// Classify and resolve `raw`.
    pub fn resolve_str(
        &self,
        raw: &str,
        label: Option<&str>,
    ) -> Result<ResolvedLink, UnresolvedReference> {
        self.resolve(&self.classifier.parse(raw), label)
    }

    /// Resolve a classified reference. An explicit `label` always wins.
    pub fn resolve(
        &self,
        reference: &Reference,
        label: Option<&str>,
    ) -> Result<ResolvedLink, UnresolvedReference> {
        let unresolved = |reason| UnresolvedReference {
            reference: reference.raw().to_owned(),
            kind: reference.kind(),
            reason,
        };

        match reference.kind() {
            ReferenceKind::Url => Ok(self.resolve_url(reference.raw(), label)),
            ReferenceKind::Anchor | ReferenceKind::Label => self
                .resolve_local(reference.target(), label)
                .ok_or_else(|| unresolved(UnresolvedReason::NotInDocumentIndex)),
            ReferenceKind::CrossProject => {
                let inventory = reference.prefix().unwrap_or_default();
                let entry = self
                    .inventory
                    .resolve(Some(inventory), reference.target())
                    .or_else(|| self.inventory.resolve(None, reference.raw()))
                    .ok_or_else(|| {
                        unresolved(UnresolvedReason::NotInInventory(Some(inventory.to_owned())))
                    })?;
                Ok(self.inventory_link(entry, label))
            }
            ReferenceKind::Namespaced => self.resolve_namespaced(reference, label, unresolved),
            ReferenceKind::Indirect => {
                let name = reference.target();
                let uri = self
                    .indirect
                    .and_then(|targets| targets.get(name))
                    .ok_or_else(|| unresolved(UnresolvedReason::NoLinkDefinition))?;
                Ok(ResolvedLink {
                    uri: uri.to_owned(),
                    label: label.unwrap_or(name).to_owned(),
                    internal: false,
                })
            }
        }
    }

    fn resolve_url(&self, url: &str, label: Option<&str>) -> ResolvedLink {
        let label = match (label, self.titles) {
            (Some(label), _) => label.to_owned(),
            (None, Some(titles)) => titles.get_title(url),
            (None, None) => url.to_owned(),
        };
        ResolvedLink {
            uri: url.to_owned(),
            label,
            internal: false,
        }
    }

    /// Look up a label, falling back to a document of the same name.
    fn resolve_local(&self, target: &str, label: Option<&str>) -> Option<ResolvedLink> {
        let location = self.index.location_of(target).or_else(|| {
            self.index
                .title_of(target)
                .is_some()
                .then(|| Location::document(target))
        })?;
        Some(self.local_link(&location, target, label))
    }

    fn local_link(&self, location: &Location, fallback: &str, label: Option<&str>) -> ResolvedLink {
        let mut uri = self.index.path_between(self.current_doc, &location.docname);
        if let Some(anchor) = &location.anchor {
            uri.push('#');
            uri.push_str(anchor);
        }
        let label = label
            .map(str::to_owned)
            .or_else(|| location.title.clone())
            .or_else(|| self.index.title_of(&location.docname))
            .unwrap_or_else(|| fallback.to_owned());
        ResolvedLink {
            uri,
            label,
            internal: true,
        }
    }

    fn inventory_link(&self, entry: InventoryEntry, label: Option<&str>) -> ResolvedLink {
        let label = match label {
            Some(label) => label.to_owned(),
            None => match self.strip_from_label {
                Some(strip) => entry.display.replace(strip, "").trim().to_owned(),
                None => entry.display,
            },
        };
        ResolvedLink {
            uri: entry.uri,
            label,
            internal: false,
        }
    }

    fn resolve_namespaced(
        &self,
        reference: &Reference,
        label: Option<&str>,
        unresolved: impl Fn(UnresolvedReason) -> UnresolvedReference,
    ) -> Result<ResolvedLink, UnresolvedReference> {
        let scheme = reference.prefix().unwrap_or_default();
        let rest = reference.target();
        match scheme {
            "inv" => {
                let (inventory, name) = parse_inv_target(rest);
                let entry = self
                    .inventory
                    .resolve(inventory, name)
                    .ok_or_else(|| {
                        unresolved(UnresolvedReason::NotInInventory(inventory.map(str::to_owned)))
                    })?;
                Ok(self.inventory_link(entry, label))
            }
            "project" => {
                let (path, anchor) = match rest.split_once('#') {
                    Some((path, anchor)) => (path, Some(anchor)),
                    None => (rest, None),
                };
                let docname = if path.is_empty() {
                    self.current_doc
                } else {
                    strip_source_suffix(path.trim_start_matches('/'))
                };
                if self.index.title_of(docname).is_none() {
                    return Err(unresolved(UnresolvedReason::NotInDocumentIndex));
                }
                let location = Location {
                    docname: docname.to_owned(),
                    anchor: anchor.map(str::to_owned),
                    title: None,
                };
                Ok(self.local_link(&location, docname, label))
            }
            "path" => Ok(ResolvedLink {
                uri: rest.to_owned(),
                label: label.unwrap_or(rest).to_owned(),
                internal: true,
            }),
            other => Err(unresolved(UnresolvedReason::UnsupportedScheme(
                other.to_owned(),
            ))),
        }
    }
}

/// Split `project[:domain:type]#label` into the inventory and label.
///
/// An empty or `*` project means any inventory. Without `#`, the whole text
/// is the label.
fn parse_inv_target(rest: &str) -> (Option<&str>, &str) {
    let Some((qualifier, name)) = rest.split_once('#') else {
        return (None, rest);
    };
    let project = qualifier.split(':').next().unwrap_or_default();
    let inventory = (!project.is_empty() && project != "*").then_some(project);
    (inventory, name)
}

/// Drop a source file suffix to obtain the docname.
fn strip_source_suffix(path: &str) -> &str {
    [".md", ".rst", ".txt"]
        .iter()
        .find_map(|suffix| path.strip_suffix(suffix))
        .unwrap_or(path)
}
