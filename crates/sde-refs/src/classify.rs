//! Reference classification and normalization.
//!
//! A reference is the short string an author writes as a link target. Its
//! kind is decided by checking these rules in order, first match wins:
//!
//! 1. `[label]` - indirect reference, defined elsewhere in the document
//! 2. `#label` - same-document anchor
//! 3. `<internal scheme>:...` - namespaced reference (`inv:`, `path:`, `project:`)
//! 4. `<url scheme>:...` - URL (`http:`, `https:`, `mailto:`, `ftp:`)
//! 5. `inventory:label` - traditional cross-project reference (exactly one `:`)
//! 6. anything else - plain local label
//!
//! The order matters: `inv:project#label` would also pass rule 5's shape test.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Leading scheme token, e.g. `https` in `https://example.org`.
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z][a-zA-Z0-9+.-]*):").unwrap());

/// Scheme of normalized cross-project references.
pub const INVENTORY_SCHEME: &str = "inv";

/// Kind of a reference, a pure function of its text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `[label]`, resolved out-of-band from a link definition.
    Indirect,
    /// `#label` within the current project.
    Anchor,
    /// MyST-style reference with an internal scheme, e.g. `inv:guide#install`.
    Namespaced,
    /// Absolute URL, including `mailto:`.
    Url,
    /// `inventory:label` addressing another project's inventory.
    CrossProject,
    /// Bare label within the current project.
    Label,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Indirect => "indirect",
            Self::Anchor => "anchor",
            Self::Namespaced => "namespaced",
            Self::Url => "url",
            Self::CrossProject => "cross-project",
            Self::Label => "label",
        };
        f.write_str(name)
    }
}

/// A classified reference. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    raw: String,
    kind: ReferenceKind,
}

impl Reference {
    /// The text as written by the author.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Classified kind.
    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    /// The part of the reference that names the target.
    ///
    /// - indirect: the label between the brackets
    /// - anchor: the label after `#`
    /// - namespaced: everything after `scheme:`
    /// - cross-project: the label after `inventory:`
    /// - URL and plain label: the whole text
    pub fn target(&self) -> &str {
        match self.kind {
            ReferenceKind::Indirect => &self.raw[1..self.raw.len() - 1],
            ReferenceKind::Anchor => &self.raw[1..],
            ReferenceKind::Namespaced | ReferenceKind::CrossProject => self
                .raw
                .split_once(':')
                .map_or(self.raw.as_str(), |(_, rest)| rest),
            ReferenceKind::Url | ReferenceKind::Label => &self.raw,
        }
    }

    /// Scheme of a namespaced reference or URL, inventory name of a
    /// cross-project reference.
    pub fn prefix(&self) -> Option<&str> {
        match self.kind {
            ReferenceKind::Namespaced | ReferenceKind::Url | ReferenceKind::CrossProject => {
                self.raw.split_once(':').map(|(prefix, _)| prefix)
            }
            _ => None,
        }
    }
}

/// Classifies reference strings against configured scheme sets.
///
/// # Example
///
/// ```
/// use sde_refs::{Classifier, ReferenceKind};
///
/// let classifier = Classifier::default();
///
/// assert_eq!(classifier.classify("[foo]"), ReferenceKind::Indirect);
/// assert_eq!(classifier.classify("http://x"), ReferenceKind::Url);
/// assert_eq!(classifier.classify("guide:install"), ReferenceKind::CrossProject);
/// assert_eq!(classifier.normalize("guide:install"), "inv:guide#install");
/// assert_eq!(classifier.normalize("install"), "#install");
/// ```
#[derive(Clone, Debug)]
pub struct Classifier {
    url_schemes: Vec<String>,
    internal_schemes: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(["http", "https", "mailto", "ftp"], ["inv", "path", "project"])
    }
}

impl Classifier {
    /// Create a classifier from external URL schemes and internal
    /// (namespaced reference) schemes.
    ///
    /// `inv` is always internal: [`normalize`](Self::normalize) writes
    /// cross-project references in that form and must read them back.
    #[must_use]
    pub fn new<U, I>(url_schemes: U, internal_schemes: I) -> Self
    where
        U: IntoIterator,
        U::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut internal_schemes: Vec<String> =
            internal_schemes.into_iter().map(Into::into).collect();
        if !internal_schemes.iter().any(|s| s == INVENTORY_SCHEME) {
            internal_schemes.push(INVENTORY_SCHEME.to_owned());
        }
        Self {
            url_schemes: url_schemes.into_iter().map(Into::into).collect(),
            internal_schemes,
        }
    }

    /// Determine the kind of `raw`. Total and deterministic.
    pub fn classify(&self, raw: &str) -> ReferenceKind {
        if is_indirect(raw) {
            return ReferenceKind::Indirect;
        }
        if raw.starts_with('#') {
            return ReferenceKind::Anchor;
        }
        match scheme_of(raw) {
            Some(scheme) if self.internal_schemes.iter().any(|s| s == scheme) => {
                return ReferenceKind::Namespaced;
            }
            Some(scheme) if self.url_schemes.iter().any(|s| s == scheme) => {
                return ReferenceKind::Url;
            }
            _ => {}
        }
        if is_cross_project_shape(raw) {
            return ReferenceKind::CrossProject;
        }
        ReferenceKind::Label
    }

    /// Classify `raw` into a [`Reference`].
    pub fn parse(&self, raw: &str) -> Reference {
        Reference {
            raw: raw.to_owned(),
            kind: self.classify(raw),
        }
    }

    /// Project `raw` onto its canonical MyST form.
    ///
    /// - `inventory:label` becomes `inv:inventory#label`
    /// - a plain `label` becomes `#label`
    /// - everything else passes through unchanged
    pub fn normalize(&self, raw: &str) -> String {
        match self.classify(raw) {
            ReferenceKind::CrossProject => match raw.split_once(':') {
                Some((inventory, label)) => format!("{INVENTORY_SCHEME}:{inventory}#{label}"),
                None => raw.to_owned(),
            },
            ReferenceKind::Label => format!("#{raw}"),
            ReferenceKind::Indirect
            | ReferenceKind::Anchor
            | ReferenceKind::Namespaced
            | ReferenceKind::Url => raw.to_owned(),
        }
    }

    /// Whether `raw` is a URL according to its scheme.
    pub fn is_url(&self, raw: &str) -> bool {
        self.classify(raw) == ReferenceKind::Url
    }

    /// Whether `raw` is a MyST reference: an anchor or a namespaced reference.
    pub fn is_myst_reference(&self, raw: &str) -> bool {
        matches!(
            self.classify(raw),
            ReferenceKind::Anchor | ReferenceKind::Namespaced
        )
    }

    /// Whether `raw` is a traditional `inventory:label` reference.
    pub fn is_cross_project(&self, raw: &str) -> bool {
        self.classify(raw) == ReferenceKind::CrossProject
    }

    /// Whether `raw` is an indirect `[label]` reference.
    pub fn is_indirect(&self, raw: &str) -> bool {
        is_indirect(raw)
    }
}

/// Leading scheme token of `raw`, if it has one.
pub fn scheme_of(raw: &str) -> Option<&str> {
    SCHEME_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn is_indirect(raw: &str) -> bool {
    raw.len() >= 2 && raw.starts_with('[') && raw.ends_with(']')
}

/// Exactly one `:` with non-empty text on both sides.
fn is_cross_project_shape(raw: &str) -> bool {
    let mut parts = raw.split(':');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(left), Some(right), None) if !left.is_empty() && !right.is_empty()
    )
}
