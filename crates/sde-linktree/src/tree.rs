//! Link tree builder.
//!
//! A link tree is a navigation tree like a toctree, but assembled in code:
//! captions, hand-picked page links, inventory references, plain URLs and
//! whole project sections filled from the host's toctree.
//!
//! # Example
//!
//! ```
//! use sde_linktree::{Host, LinkTree, PageContext, StaticProject};
//!
//! let project = StaticProject::from_yaml(
//!     "project: Demo\ndocuments:\n  index: {title: Home}\n  guide: {title: Guide}\n",
//! )
//! .unwrap();
//! let context = PageContext::new("index").with_project("Demo");
//!
//! let mut tree = LinkTree::from_context(Host::from_project(&project), &context);
//! tree.title("Pages");
//! tree.add([tree.doc("guide", None), tree.link("https://example.com", None)]);
//!
//! let html = tree.render_html();
//! assert!(html.contains(r#"<a class="reference internal" href="guide.html">Guide</a>"#));
//! ```

use std::cell::RefCell;
use std::fmt;

use sde_refs::{Classifier, Resolver, UnresolvedReference};

use crate::host::{Host, NavigationFixup, PageRenderer, PassthroughFixup, ToctreeError};
use crate::node::{BulletList, CURRENT, CURRENT_PAGE, Link, ListItem, Node};
use crate::render::HtmlPageRenderer;

/// Failure while assembling a link tree.
#[derive(Debug, thiserror::Error)]
pub enum LinkTreeError {
    /// The toctree generator failed.
    #[error("Error producing a toc tree for document: {docname}")]
    Toctree {
        docname: String,
        #[source]
        source: ToctreeError,
    },
    /// A toctree was requested without a page context.
    #[error("Unable to compute toctree without docname")]
    MissingDocname,
    /// A required page context value is absent.
    #[error("Page context is missing '{0}'")]
    MissingContext(&'static str),
    /// An inventory or local reference does not resolve.
    #[error(transparent)]
    Unresolved(#[from] UnresolvedReference),
    /// The `linktree` directive was given body content.
    #[error("The 'linktree' directive currently does not accept content. The offending node is:\n{0}")]
    DirectiveContent(String),
    /// Unknown or malformed directive option.
    #[error("Invalid 'linktree' option '{name}': {message}")]
    InvalidOption { name: String, message: String },
}

/// Non-fatal conditions met while assembling a tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTreeWarning {
    /// The toctree generator returned nothing for `docname`.
    EmptyNavigation { docname: String },
    /// No title is known for the document, its label stays empty.
    MissingTitle { docname: String },
    /// A second section matched the current project and lost its marking.
    DuplicateCurrent { name: String },
}

impl fmt::Display for LinkTreeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNavigation { docname } => write!(f, "toctree is empty: {docname}"),
            Self::MissingTitle { docname } => {
                write!(f, "Unable to derive label, document does not exist: {docname}")
            }
            Self::DuplicateCurrent { name } => {
                write!(f, "Another section is already current: {name}")
            }
        }
    }
}

/// Values of the page being rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Document being rendered.
    pub pagename: Option<String>,
    /// Name of the current project.
    pub project: Option<String>,
    /// Root document of the current project.
    pub root_doc: Option<String>,
}

impl PageContext {
    pub fn new(pagename: impl Into<String>) -> Self {
        Self {
            pagename: Some(pagename.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    #[must_use]
    pub fn with_root_doc(mut self, root_doc: impl Into<String>) -> Self {
        self.root_doc = Some(root_doc.into());
        self
    }
}

/// A navigation tree under construction for one page render.
///
/// Insertion order is display order. The tree is owned by the render call
/// that created it.
pub struct LinkTree<'a> {
    host: Host<'a>,
    classifier: Classifier,
    docname: Option<String>,
    project_name: Option<String>,
    root_doc: String,
    strip_from_label: Option<String>,
    nodes: Vec<Node>,
    has_current_section: bool,
    warnings: RefCell<Vec<LinkTreeWarning>>,
}

impl<'a> LinkTree<'a> {
    /// Tree for `docname` without project context.
    pub fn new(host: Host<'a>, docname: Option<&str>) -> Self {
        if docname.is_none() {
            tracing::info!("Running without page context, links to documents stay empty");
        }
        tracing::info!(docname = docname.unwrap_or_default(), "Producing link tree");
        Self {
            host,
            classifier: Classifier::default(),
            docname: docname.map(str::to_owned),
            project_name: None,
            root_doc: "index".to_owned(),
            strip_from_label: None,
            nodes: Vec::new(),
            has_current_section: false,
            warnings: RefCell::new(Vec::new()),
        }
    }

    /// Tree for the page described by `context`.
    pub fn from_context(host: Host<'a>, context: &PageContext) -> Self {
        let mut tree = Self::new(host, context.pagename.as_deref());
        tree.project_name.clone_from(&context.project);
        if let Some(root_doc) = &context.root_doc {
            tree.root_doc.clone_from(root_doc);
        }
        tree
    }

    /// Replace the classifier used by [`reference`](Self::reference).
    #[must_use]
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Render the tree for another page.
    pub fn set_docname(&mut self, docname: &str) {
        self.docname = Some(docname.to_owned());
    }

    /// Set the text stripped from labels taken from inventories.
    pub fn remove_from_title(&mut self, text: Option<&str>) {
        self.strip_from_label = text.map(str::to_owned);
    }

    pub fn docname(&self) -> Option<&str> {
        self.docname.as_deref()
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    pub fn root_doc(&self) -> &str {
        &self.root_doc
    }

    /// Top-level nodes in display order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Warnings collected so far.
    pub fn warnings(&self) -> Vec<LinkTreeWarning> {
        self.warnings.borrow().clone()
    }

    /// Append a caption.
    pub fn title(&mut self, text: &str) -> &mut Self {
        self.nodes.push(Node::caption(text));
        self
    }

    /// Append nodes in order.
    pub fn add(&mut self, nodes: impl IntoIterator<Item = Node>) -> &mut Self {
        self.nodes.extend(nodes);
        self
    }

    /// Create a section for project `name`, titled `title` or the title of
    /// the document `name`.
    ///
    /// The section is marked `current` when `name` is the tree's project.
    pub fn new_section(&self, name: &str, title: Option<&str>) -> ProjectSection<'a> {
        let title = title
            .map(str::to_owned)
            .or_else(|| self.host.index.title_of(name));
        tracing::info!(name, title = title.as_deref().unwrap_or_default(), "New project section");

        let mut warnings = Vec::new();
        if title.is_none() {
            tracing::warn!(name, "Unable to derive link label, document does not exist");
            warnings.push(LinkTreeWarning::MissingTitle {
                docname: name.to_owned(),
            });
        }

        let current = self.project_name.as_deref() == Some(name);
        let entry = ListItem::new(Link {
            uri: self.path_to(&self.root_doc),
            label: title.clone(),
            internal: true,
        })
        .at_level(1);

        ProjectSection {
            host: self.host,
            page: self.docname.clone(),
            name: name.to_owned(),
            title,
            current,
            entry,
            inner: Vec::new(),
            warnings,
        }
    }

    /// Append a section. Only the first section matching the current
    /// project keeps its `current` class.
    pub fn add_section(&mut self, mut section: ProjectSection<'a>) -> &mut Self {
        if section.current && self.has_current_section {
            tracing::warn!(name = %section.name, "Another section is already current");
            section.current = false;
            section.warnings.push(LinkTreeWarning::DuplicateCurrent {
                name: section.name.clone(),
            });
        }
        self.has_current_section |= section.current;
        self.warnings.borrow_mut().append(&mut section.warnings);
        self.nodes.push(section.into_node());
        self
    }

    /// Create and append a section for the tree's docname.
    pub fn project(&mut self, title: Option<&str>) -> Result<&mut Self, LinkTreeError> {
        let name = self.docname.clone().ok_or(LinkTreeError::MissingDocname)?;
        let section = self.new_section(&name, title);
        Ok(self.add_section(section))
    }

    /// Item linking to document `name`.
    ///
    /// Without `label`, the document title is used. Items pointing at the
    /// page being rendered are marked `current` and `current-page`.
    pub fn doc_item(&self, name: &str, label: Option<&str>) -> ListItem {
        let label = label.map(str::to_owned).or_else(|| {
            let title = self.host.index.title_of(name);
            if title.is_none() {
                tracing::warn!(docname = name, "Unable to derive label from document");
                self.warnings
                    .borrow_mut()
                    .push(LinkTreeWarning::MissingTitle {
                        docname: name.to_owned(),
                    });
            }
            title
        });
        let item = ListItem::new(Link {
            uri: self.path_to(name),
            label,
            internal: true,
        });
        if self.docname.as_deref() == Some(name) {
            item.with_class(CURRENT).with_class(CURRENT_PAGE)
        } else {
            item
        }
    }

    /// Item linking to a URL, labelled with the URL unless `label` is given.
    pub fn link_item(&self, uri: &str, label: Option<&str>) -> ListItem {
        ListItem::new(Link {
            uri: Some(uri.to_owned()),
            label: Some(label.unwrap_or(uri).to_owned()),
            internal: true,
        })
    }

    /// Item linking to a resolved reference, typically `inventory:label`.
    pub fn reference_item(
        &self,
        target: &str,
        label: Option<&str>,
    ) -> Result<ListItem, LinkTreeError> {
        let current = self.docname.as_deref().unwrap_or(&self.root_doc);
        let resolved = Resolver::new(
            &self.classifier,
            self.host.index,
            self.host.inventory,
            current,
        )
        .with_strip_from_label(self.strip_from_label.as_deref())
        .resolve_str(target, label)?;
        Ok(ListItem::new(Link {
            uri: Some(resolved.uri),
            label: Some(resolved.label),
            internal: true,
        }))
    }

    /// [`doc_item`](Self::doc_item) wrapped in its own list.
    pub fn doc(&self, name: &str, label: Option<&str>) -> Node {
        Node::list([self.doc_item(name, label)])
    }

    /// [`link_item`](Self::link_item) wrapped in its own list.
    pub fn link(&self, uri: &str, label: Option<&str>) -> Node {
        Node::list([self.link_item(uri, label)])
    }

    /// [`reference_item`](Self::reference_item) wrapped in its own list.
    pub fn reference(&self, target: &str, label: Option<&str>) -> Result<Node, LinkTreeError> {
        Ok(Node::list([self.reference_item(target, label)?]))
    }

    /// Render with `renderer`, then pass the fragment through `fixup`.
    ///
    /// Only the first item marked `current-page` keeps its marking. Later
    /// ones also lose the `current` class [`doc_item`](Self::doc_item) set
    /// alongside it. The `current` class of a section's list is not touched
    /// here, so a page item in the current section carries `current` too.
    pub fn render(&mut self, renderer: &dyn PageRenderer, fixup: &dyn NavigationFixup) -> String {
        let mut seen = false;
        for node in &mut self.nodes {
            keep_first_current_page(node, &mut seen);
        }
        fixup.fixup(renderer.render_fragment(&self.nodes))
    }

    /// Render as toctree HTML without fixups.
    pub fn render_html(&mut self) -> String {
        self.render(&HtmlPageRenderer, &PassthroughFixup)
    }

    fn path_to(&self, docname: &str) -> Option<String> {
        self.docname
            .as_deref()
            .map(|from| self.host.index.path_between(from, docname))
    }
}

fn keep_first_current_page(node: &mut Node, seen: &mut bool) {
    let children = match node {
        Node::Caption(_) => return,
        Node::List(list) => &mut list.children,
        Node::Item(item) => {
            if item.has_class(CURRENT_PAGE) {
                if *seen {
                    item.remove_class(CURRENT_PAGE);
                    item.remove_class(CURRENT);
                }
                *seen = true;
            }
            &mut item.children
        }
    };
    for child in children {
        keep_first_current_page(child, seen);
    }
}

/// A section of the link tree representing a whole project.
///
/// Renders as a list with one level-1 entry linking to the project's root
/// document; added items and the toctree nest below it. The `current`
/// class goes on the section's list only.
#[derive(Debug)]
pub struct ProjectSection<'a> {
    host: Host<'a>,
    page: Option<String>,
    name: String,
    title: Option<String>,
    current: bool,
    entry: ListItem,
    inner: Vec<Node>,
    warnings: Vec<LinkTreeWarning>,
}

impl ProjectSection<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether this section renders the current project.
    pub fn is_current(&self) -> bool {
        self.current
    }

    pub fn warnings(&self) -> &[LinkTreeWarning] {
        &self.warnings
    }

    /// Append items in call order.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = ListItem>) -> &mut Self {
        self.inner.extend(items.into_iter().map(Node::Item));
        self
    }

    /// Append arbitrary nodes in call order.
    pub fn add(&mut self, nodes: impl IntoIterator<Item = Node>) -> &mut Self {
        self.inner.extend(nodes);
        self
    }

    /// Merge the host's toctree of `root` below this section. Links are
    /// relative to the tree's page when it has one.
    ///
    /// An empty toctree is recorded as a warning.
    pub fn build_toctree(&mut self, root: &str, max_depth: i32) -> Result<&mut Self, LinkTreeError> {
        tracing::info!(docname = root, max_depth, "Generating toctree");
        let generated = match &self.page {
            Some(page) => self.host.toctree.generate_for_page(root, page, max_depth),
            None => self.host.toctree.generate(root, max_depth),
        }
        .map_err(|source| LinkTreeError::Toctree {
            docname: root.to_owned(),
            source,
        })?;
        if generated.is_empty() {
            tracing::warn!(docname = root, "toctree is empty");
            self.warnings.push(LinkTreeWarning::EmptyNavigation {
                docname: root.to_owned(),
            });
        }
        for node in generated {
            match node {
                Node::List(list) => self.inner.extend(list.children),
                other => self.inner.push(other),
            }
        }
        Ok(self)
    }

    /// The section's list, holding its entry item.
    ///
    /// `current` goes on the list and never on the entry. Page items nested
    /// below may still carry their own `current`.
    fn into_node(self) -> Node {
        let mut entry = self.entry;
        if !self.inner.is_empty() {
            entry.children.push(Node::List(BulletList {
                classes: Vec::new(),
                children: self.inner,
            }));
        }
        Node::List(BulletList {
            classes: if self.current {
                vec![CURRENT.to_owned()]
            } else {
                Vec::new()
            },
            children: vec![Node::Item(entry)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ToctreeGenerator;
    use pretty_assertions::assert_eq;
    use sde_refs::{DocumentIndex, Inventory, InventoryEntry, Location};

    struct Fake {
        fail_toctree: bool,
    }

    impl DocumentIndex for Fake {
        fn title_of(&self, docname: &str) -> Option<String> {
            match docname {
                "index" => Some("Home".to_owned()),
                "guide" => Some("Guide".to_owned()),
                "CrateDB" => Some("CrateDB".to_owned()),
                _ => None,
            }
        }

        fn location_of(&self, _label: &str) -> Option<Location> {
            None
        }

        fn path_between(&self, _from: &str, to: &str) -> String {
            format!("{to}.html")
        }
    }

    impl Inventory for Fake {
        fn resolve(&self, inventory: Option<&str>, label: &str) -> Option<InventoryEntry> {
            (inventory == Some("sd") && label == "index").then(|| InventoryEntry {
                uri: "https://sphinx-design.readthedocs.io/en/latest/index.html".to_owned(),
                display: "sphinx-design - Sphinx Design".to_owned(),
            })
        }
    }

    impl ToctreeGenerator for Fake {
        fn generate(&self, root: &str, _max_depth: i32) -> Result<Vec<Node>, ToctreeError> {
            if self.fail_toctree {
                return Err(ToctreeError::UnknownDocument(root.to_owned()));
            }
            if root == "index" {
                Ok(vec![Node::list([ListItem::new(Link {
                    uri: Some("guide.html".to_owned()),
                    label: Some("Guide".to_owned()),
                    internal: true,
                })
                .at_level(1)])])
            } else {
                Ok(Vec::new())
            }
        }
    }

    const FAKE: Fake = Fake {
        fail_toctree: false,
    };

    fn tree(fake: &Fake) -> LinkTree<'_> {
        let context = PageContext::new("index").with_project("CrateDB");
        LinkTree::from_context(Host::from_project(fake), &context)
    }

    fn count_current(tree: &LinkTree<'_>) -> usize {
        tree.nodes().iter().map(|n| n.count_class(CURRENT)).sum()
    }

    #[test]
    fn test_from_context() {
        let context = PageContext::new("guide")
            .with_project("CrateDB")
            .with_root_doc("start");
        let tree = LinkTree::from_context(Host::from_project(&FAKE), &context);
        assert_eq!(tree.docname(), Some("guide"));
        assert_eq!(tree.project_name(), Some("CrateDB"));
        assert_eq!(tree.root_doc(), "start");
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut tree = tree(&FAKE);
        let mut section = tree.new_section("CrateDB", None);
        section.add_items([
            tree.link_item("https://z.example", None),
            tree.link_item("https://a.example", None),
            tree.link_item("https://m.example", None),
        ]);
        tree.add_section(section);

        let html = tree.render_html();
        let z = html.find("z.example").unwrap();
        let a = html.find("a.example").unwrap();
        let m = html.find("m.example").unwrap();
        assert!(z < a && a < m);
    }

    #[test]
    fn test_section_title_from_index() {
        let tree = tree(&FAKE);
        let section = tree.new_section("guide", None);
        assert_eq!(section.title(), Some("Guide"));
        assert!(section.warnings().is_empty());
    }

    #[test]
    fn test_section_without_title_warns() {
        let mut tree = tree(&FAKE);
        let section = tree.new_section("unknown", None);
        assert_eq!(section.title(), None);
        tree.add_section(section);
        assert_eq!(
            tree.warnings(),
            vec![LinkTreeWarning::MissingTitle {
                docname: "unknown".to_owned()
            }]
        );
    }

    #[test]
    fn test_current_section_by_exact_name() {
        let tree = tree(&FAKE);
        assert!(tree.new_section("CrateDB", None).is_current());
        assert!(!tree.new_section("cratedb", None).is_current());
        assert!(!tree.new_section("CrateDB Cloud", None).is_current());
    }

    #[test]
    fn test_current_exclusivity() {
        for count in [0, 1, 5] {
            let mut tree = tree(&FAKE);
            for _ in 0..count {
                let section = tree.new_section("CrateDB", Some("CrateDB"));
                tree.add_section(section);
            }
            let section = tree.new_section("Other", Some("Other"));
            tree.add_section(section);

            assert_eq!(count_current(&tree), usize::from(count > 0));
        }
    }

    #[test]
    fn test_current_section_holding_current_page() {
        let mut tree = tree(&FAKE);
        let mut section = tree.new_section("CrateDB", None);
        section.add_items([tree.doc_item("guide", None), tree.doc_item("index", None)]);
        tree.add_section(section);

        let html = tree.render_html();
        assert!(html.starts_with(r#"<ul class="current">"#));
        assert_eq!(html.matches("current-page").count(), 1);
        assert_eq!(count_current(&tree), 2);
    }

    #[test]
    fn test_duplicate_current_is_warned() {
        let mut tree = tree(&FAKE);
        for _ in 0..2 {
            let section = tree.new_section("CrateDB", None);
            tree.add_section(section);
        }
        assert_eq!(
            tree.warnings(),
            vec![LinkTreeWarning::DuplicateCurrent {
                name: "CrateDB".to_owned()
            }]
        );
        assert_eq!(
            tree.warnings()[0].to_string(),
            "Another section is already current: CrateDB"
        );
    }

    #[test]
    fn test_current_page_kept_once() {
        let mut tree = tree(&FAKE);
        tree.add([tree.doc("index", None), tree.doc("index", Some("Again"))]);
        let html = tree.render_html();
        assert_eq!(html.matches("current-page").count(), 1);
        assert_eq!(tree.nodes().iter().map(|n| n.count_class(CURRENT)).sum::<usize>(), 1);
    }

    #[test]
    fn test_doc_item() {
        let tree = tree(&FAKE);
        let item = tree.doc_item("guide", None);
        assert_eq!(item.link.uri.as_deref(), Some("guide.html"));
        assert_eq!(item.link.label.as_deref(), Some("Guide"));
        assert!(item.classes.is_empty());

        let item = tree.doc_item("index", None);
        assert_eq!(item.classes, vec![CURRENT, CURRENT_PAGE]);
    }

    #[test]
    fn test_doc_item_missing_title() {
        let tree = tree(&FAKE);
        let item = tree.doc_item("missing", None);
        assert_eq!(item.link.label, None);
        assert_eq!(
            tree.warnings(),
            vec![LinkTreeWarning::MissingTitle {
                docname: "missing".to_owned()
            }]
        );
    }

    #[test]
    fn test_doc_without_page_context() {
        let mut tree = LinkTree::new(Host::from_project(&FAKE), None);
        tree.add([tree.doc("gridtable", None)]);
        let html = tree.render_html();
        assert!(html.contains(r##"<li class="toctree-l2"><a class="reference internal" href="#"></a></li>"##));
    }

    #[test]
    fn test_link_item_defaults_label_to_uri() {
        let tree = tree(&FAKE);
        let item = tree.link_item("https://example.com", None);
        assert_eq!(item.link.label.as_deref(), Some("https://example.com"));
        let item = tree.link_item("https://example.com", Some("Example"));
        assert_eq!(item.link.label.as_deref(), Some("Example"));
    }

    #[test]
    fn test_reference_item() {
        let mut tree = tree(&FAKE);
        let item = tree.reference_item("sd:index", None).unwrap();
        assert_eq!(item.link.label.as_deref(), Some("sphinx-design - Sphinx Design"));

        tree.remove_from_title(Some(" - Sphinx Design"));
        let item = tree.reference_item("sd:index", None).unwrap();
        assert_eq!(item.link.label.as_deref(), Some("sphinx-design"));

        let item = tree.reference_item("sd:index", Some("SD")).unwrap();
        assert_eq!(item.link.label.as_deref(), Some("SD"));
    }

    #[test]
    fn test_reference_unresolved_is_error() {
        let tree = tree(&FAKE);
        let err = tree.reference("sd:missing", None).unwrap_err();
        assert!(matches!(err, LinkTreeError::Unresolved(_)));
    }

    #[test]
    fn test_build_toctree_merges_generated_nodes() {
        let mut tree = tree(&FAKE);
        let mut section = tree.new_section("CrateDB", None);
        section.build_toctree("index", -1).unwrap();
        tree.add_section(section);

        let html = tree.render_html();
        assert_eq!(
            html,
            "<ul class=\"current\">\n\
             <li class=\"toctree-l1\"><a class=\"reference internal\" href=\"index.html\">CrateDB</a><ul>\n\
             <li class=\"toctree-l1\"><a class=\"reference internal\" href=\"guide.html\">Guide</a></li>\n\
             </ul>\n\
             </li>\n\
             </ul>\n"
        );
        assert!(tree.warnings().is_empty());
    }

    #[test]
    fn test_empty_toctree_is_warning() {
        let mut tree = tree(&FAKE);
        let mut section = tree.new_section("CrateDB", None);
        section.build_toctree("guide", -1).unwrap();
        tree.add_section(section);
        assert_eq!(
            tree.warnings(),
            vec![LinkTreeWarning::EmptyNavigation {
                docname: "guide".to_owned()
            }]
        );
    }

    #[test]
    fn test_toctree_failure_is_error() {
        let fake = Fake { fail_toctree: true };
        let tree = tree(&fake);
        let mut section = tree.new_section("CrateDB", None);
        let err = section.build_toctree("index", -1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error producing a toc tree for document: index"
        );
    }

    #[test]
    fn test_render_calls_fixup() {
        struct Marker;
        impl NavigationFixup for Marker {
            fn fixup(&self, html: String) -> String {
                format!("<nav>{html}</nav>")
            }
        }

        let mut tree = tree(&FAKE);
        tree.title("Links");
        let html = tree.render(&HtmlPageRenderer, &Marker);
        assert!(html.starts_with("<nav><p class=\"caption\""));
        assert!(html.ends_with("</nav>"));
    }

    #[test]
    fn test_project_requires_docname() {
        let mut tree = LinkTree::new(Host::from_project(&FAKE), None);
        assert!(matches!(tree.project(None), Err(LinkTreeError::MissingDocname)));
    }
}
