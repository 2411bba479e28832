//! Programmable navigation link trees.
//!
//! A [`LinkTree`] is similar to a toctree, but assembled in code from
//! captions, links to documents, inventory references, URLs and project
//! sections that embed the host's toctree. The host build provides its
//! indexes and toctree generator through [`Host`]; [`StaticProject`] is an
//! in-memory implementation loaded from YAML or JSON.
//!
//! Rendering goes through a [`PageRenderer`] ([`HtmlPageRenderer`] by
//! default) and then a [`NavigationFixup`] that adapts the fragment to the
//! theme.

mod directive;
mod host;
mod node;
mod presets;
mod project;
mod render;
mod tree;

pub use directive::{LinkTreeDirective, LinkTreeOptions};
pub use host::{Host, NavigationFixup, PageRenderer, PassthroughFixup, ToctreeError, ToctreeGenerator};
pub use node::{BulletList, CURRENT, CURRENT_PAGE, Link, ListItem, Node};
pub use presets::{default_tree, demo_tree, fill_demo_tree, fill_project_tree, project_tree};
pub use project::{Document, InventoryItem, Label, ProjectError, StaticProject};
pub use render::{HtmlPageRenderer, escape_html};
pub use tree::{LinkTree, LinkTreeError, LinkTreeWarning, PageContext, ProjectSection};
