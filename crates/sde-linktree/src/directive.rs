//! The `linktree` directive.
//!
//! ```markdown
//! :::{linktree}
//! :docname: index
//! :title: Overview
//! :maxdepth: 2
//! :::
//! ```
//!
//! Renders the toctree of `docname` (default: the current page) as one
//! project section, wrapped in a `sidebar-tree` section so it renders like
//! the sidebar navigation.

use crate::host::{Host, NavigationFixup, PageRenderer};
use crate::tree::{LinkTree, LinkTreeError};

/// Options of a `linktree` directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkTreeOptions {
    /// Document whose toctree is rendered.
    pub docname: Option<String>,
    /// Section title, by default the document title.
    pub title: Option<String>,
    /// Depth limit, `-1` for unlimited.
    pub maxdepth: i32,
}

impl Default for LinkTreeOptions {
    fn default() -> Self {
        Self {
            docname: None,
            title: None,
            maxdepth: -1,
        }
    }
}

impl LinkTreeOptions {
    /// Parse `name`/`value` option pairs.
    pub fn parse<'o>(
        options: impl IntoIterator<Item = (&'o str, &'o str)>,
    ) -> Result<Self, LinkTreeError> {
        let mut parsed = Self::default();
        for (name, value) in options {
            let value = value.trim();
            match name {
                "docname" => parsed.docname = Some(value.to_owned()),
                "title" => parsed.title = Some(value.to_owned()),
                "maxdepth" => {
                    parsed.maxdepth = value.parse().map_err(|_| LinkTreeError::InvalidOption {
                        name: name.to_owned(),
                        message: format!("expected an integer, got '{value}'"),
                    })?;
                }
                _ => {
                    return Err(LinkTreeError::InvalidOption {
                        name: name.to_owned(),
                        message: "unknown option".to_owned(),
                    });
                }
            }
        }
        Ok(parsed)
    }
}

/// A parsed `linktree` directive occurrence.
#[derive(Clone, Debug)]
pub struct LinkTreeDirective {
    options: LinkTreeOptions,
}

impl LinkTreeDirective {
    /// Accept a directive occurrence. Body content is rejected, `block_text`
    /// is quoted in the error.
    pub fn new(
        options: LinkTreeOptions,
        content: &str,
        block_text: &str,
    ) -> Result<Self, LinkTreeError> {
        if !content.trim().is_empty() {
            tracing::error!(block = block_text, "linktree directive with content");
            return Err(LinkTreeError::DirectiveContent(block_text.to_owned()));
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &LinkTreeOptions {
        &self.options
    }

    /// Build the tree for the page `docname`.
    pub fn produce<'a>(&self, host: Host<'a>, docname: &str) -> Result<LinkTree<'a>, LinkTreeError> {
        let docname = self.options.docname.as_deref().unwrap_or(docname);
        let mut tree = LinkTree::new(host, Some(docname));
        let mut section = tree.new_section(docname, self.options.title.as_deref());
        section.build_toctree(docname, self.options.maxdepth)?;
        tree.add_section(section);
        Ok(tree)
    }

    /// Build and render the tree, wrapped in a `sidebar-tree` section.
    pub fn render(
        &self,
        host: Host<'_>,
        docname: &str,
        renderer: &dyn PageRenderer,
        fixup: &dyn NavigationFixup,
    ) -> Result<String, LinkTreeError> {
        let mut tree = self.produce(host, docname)?;
        let html = tree.render(renderer, fixup);
        Ok(format!("<section class=\"sidebar-tree\">\n{html}</section>\n"))
    }
}
