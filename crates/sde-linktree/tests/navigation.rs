use pretty_assertions::assert_eq;
use sde_linktree::{CURRENT, CURRENT_PAGE, Host, LinkTree, LinkTreeWarning, StaticProject, default_tree};
use sde_refs::Classifier;

const PROJECT: &str = r#"
project: CrateDB
documents:
  index:
    title: CrateDB
    toctree: [install/index, guide]
  install/index:
    title: Install
    toctree: [install/linux, install/docker]
  install/linux:
    title: Linux
    labels:
      install-steps: {title: Installation steps}
  install/docker:
    title: Docker
  guide:
    title: Guide
inventories:
  guide:
    document: {uri: "https://cratedb.com/docs/guide/document.html", display: "Document Store - CrateDB Guide"}
"#;

fn project() -> StaticProject {
    StaticProject::from_yaml(PROJECT).unwrap()
}

#[test]
fn test_multi_project_sidebar() {
    let project = project();
    let context = project.context("install/linux");
    let mut tree = LinkTree::from_context(Host::from_project(&project), &context);
    tree.remove_from_title(Some(" - CrateDB Guide"));

    let mut section = tree.new_section("CrateDB", Some("CrateDB"));
    section.build_toctree("index", 2).unwrap();
    tree.add_section(section);

    let mut section = tree.new_section("Guide", Some("CrateDB Guide"));
    section.add_items([
        tree.reference_item("guide:document", None).unwrap(),
        tree.doc_item("install/linux", Some("You are here")),
    ]);
    tree.add_section(section);

    let html = tree.render_html();

    assert_eq!(html.matches(r#"<ul class="current">"#).count(), 1);
    assert!(html.contains(r#"href="../index.html">CrateDB</a>"#));
    assert!(html.contains(r#"href="linux.html">Linux</a>"#));
    assert!(html.contains(r#"href="../guide.html">Guide</a>"#));
    assert!(html.contains(
        r#"<li class="toctree-l2 current current-page"><a class="reference internal" href="linux.html">You are here</a></li>"#
    ));
    assert!(html.contains(
        r#"href="https://cratedb.com/docs/guide/document.html">Document Store</a>"#
    ));
    assert!(tree.warnings().is_empty());
}

#[test]
fn test_current_section_counts() {
    let project = project();
    for sections in [0_usize, 1, 4] {
        let mut tree = LinkTree::from_context(Host::from_project(&project), &project.context("guide"));
        for _ in 0..sections {
            let section = tree.new_section("CrateDB", Some("CrateDB"));
            tree.add_section(section);
        }
        let current: usize = tree.nodes().iter().map(|n| n.count_class(CURRENT)).sum();
        assert_eq!(current, usize::from(sections > 0));
        assert_eq!(
            tree.warnings().len(),
            sections.saturating_sub(1),
            "one duplicate warning per extra current section"
        );
    }
}

#[test]
fn test_current_page_marked_once_across_sections() {
    let project = project();
    let mut tree = LinkTree::from_context(Host::from_project(&project), &project.context("guide"));
    for name in ["A", "B"] {
        let mut section = tree.new_section(name, Some(name));
        section.add_items([tree.doc_item("guide", None)]);
        tree.add_section(section);
    }

    tree.render_html();

    let marked: usize = tree.nodes().iter().map(|n| n.count_class(CURRENT_PAGE)).sum();
    assert_eq!(marked, 1);
}

#[test]
fn test_default_tree_for_every_page() {
    let project = project();
    for docname in project.docnames() {
        let mut tree =
            default_tree(Host::from_project(&project), &project.context(docname), None).unwrap();
        let html = tree.render_html();
        assert!(html.contains("Docker"), "{docname}: {html}");
        assert!(!tree.warnings().contains(&LinkTreeWarning::EmptyNavigation {
            docname: "index".to_owned()
        }));
    }
}

#[test]
fn test_custom_classifier_for_references() {
    let project = project();
    let mut tree = LinkTree::from_context(Host::from_project(&project), &project.context("index"))
        .with_classifier(Classifier::new(["https"], ["inv"]));

    let node = tree.reference("inv:guide#document", Some("Documents")).unwrap();
    tree.add([node]);

    let html = tree.render_html();
    assert!(html.contains(r#"href="https://cratedb.com/docs/guide/document.html">Documents</a>"#));
}
