//! Ready-made link trees.

use crate::host::Host;
use crate::tree::{LinkTree, LinkTreeError, PageContext};

/// The default link tree: one section for the current project holding its
/// whole toctree.
pub fn default_tree<'a>(
    host: Host<'a>,
    context: &PageContext,
    docname: Option<&str>,
) -> Result<LinkTree<'a>, LinkTreeError> {
    project_tree(host, context, docname, -1)
}

/// Like [`default_tree`], with the toctree cut at `max_depth` levels.
pub fn project_tree<'a>(
    host: Host<'a>,
    context: &PageContext,
    docname: Option<&str>,
    max_depth: i32,
) -> Result<LinkTree<'a>, LinkTreeError> {
    let mut tree = LinkTree::from_context(host, context);
    if let Some(docname) = docname {
        tree.set_docname(docname);
    }
    fill_project_tree(&mut tree, max_depth)?;
    Ok(tree)
}

/// Append the section of the tree's project, filled from the toctree of
/// its root document.
pub fn fill_project_tree(tree: &mut LinkTree<'_>, max_depth: i32) -> Result<(), LinkTreeError> {
    let project = tree
        .project_name()
        .ok_or(LinkTreeError::MissingContext("project"))?
        .to_owned();
    let root = tree.root_doc().to_owned();
    let mut section = tree.new_section(&project, Some(&project));
    section.build_toctree(&root, max_depth)?;
    tree.add_section(section);
    Ok(())
}

/// A showcase tree: project-local page links, inventory references and
/// plain URL links.
pub fn demo_tree<'a>(host: Host<'a>, context: &PageContext) -> Result<LinkTree<'a>, LinkTreeError> {
    let mut tree = LinkTree::from_context(host, context);
    fill_demo_tree(&mut tree)?;
    Ok(tree)
}

/// Append the showcase captions and links of [`demo_tree`].
pub fn fill_demo_tree(tree: &mut LinkTree<'_>) -> Result<(), LinkTreeError> {
    let pages = [tree.doc("gridtable", None), tree.doc("infocard", None)];
    tree.title("Project-local page links").add(pages);

    let references = [
        tree.reference("sd:index", None)?,
        tree.reference("sd:badges", Some("sphinx{design} badges"))?,
        tree.reference("myst:syntax/images_and_figures", Some("MyST » Images and figures"))?,
        tree.reference("myst:syntax/referencing", Some("MyST » Cross references"))?,
    ];
    tree.title("Intersphinx links").add(references);

    let links = [
        tree.link("https://example.com", None),
        tree.link(
            "https://example.com",
            Some("A link to example.com, using a custom label ⚽."),
        ),
    ];
    tree.title("URL links").add(links);

    Ok(())
}
