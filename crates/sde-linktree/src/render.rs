//! Default HTML rendering of link trees.
//!
//! Produces the toctree markup of Sphinx-style themes:
//!
//! ```html
//! <p class="caption" role="heading"><span class="caption-text">Guides</span></p>
//! <ul>
//! <li class="toctree-l2"><a class="reference internal" href="guide.html">Guide</a></li>
//! </ul>
//! ```

use std::fmt::Write;

use crate::host::PageRenderer;
use crate::node::{BulletList, ListItem, Node};

/// Renders nodes as toctree HTML.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlPageRenderer;

impl PageRenderer for HtmlPageRenderer {
    fn render_fragment(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            render_node(&mut out, node);
        }
        out
    }
}

fn render_node(out: &mut String, node: &Node) {
    match node {
        Node::Caption(text) => {
            let _ = writeln!(
                out,
                r#"<p class="caption" role="heading"><span class="caption-text">{}</span></p>"#,
                escape_html(text)
            );
        }
        Node::List(list) => render_list(out, list),
        Node::Item(item) => render_item(out, item),
    }
}

fn render_list(out: &mut String, list: &BulletList) {
    if list.classes.is_empty() {
        out.push_str("<ul>\n");
    } else {
        let _ = writeln!(out, r#"<ul class="{}">"#, escape_html(&list.classes.join(" ")));
    }
    for child in &list.children {
        render_node(out, child);
    }
    out.push_str("</ul>\n");
}

fn render_item(out: &mut String, item: &ListItem) {
    let kind = if item.link.internal {
        "internal"
    } else {
        "external"
    };
    let _ = write!(
        out,
        r#"<li class="{}"><a class="reference {kind}" href="{}">{}</a>"#,
        escape_html(&item.effective_classes().join(" ")),
        escape_html(item.link.uri.as_deref().unwrap_or("#")),
        escape_html(item.link.label.as_deref().unwrap_or_default()),
    );
    for child in &item.children {
        render_node(out, child);
    }
    out.push_str("</li>\n");
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Link;
    use pretty_assertions::assert_eq;

    fn link(uri: &str, label: &str) -> ListItem {
        ListItem::new(Link {
            uri: Some(uri.to_owned()),
            label: Some(label.to_owned()),
            internal: true,
        })
    }

    #[test]
    fn test_caption_and_list() {
        let nodes = vec![
            Node::caption("URL links"),
            Node::list([link("https://example.com", "https://example.com")]),
        ];

        let html = HtmlPageRenderer.render_fragment(&nodes);

        assert_eq!(
            html,
            "<p class=\"caption\" role=\"heading\"><span class=\"caption-text\">URL links</span></p>\n\
             <ul>\n\
             <li class=\"toctree-l2\"><a class=\"reference internal\" href=\"https://example.com\">https://example.com</a></li>\n\
             </ul>\n"
        );
    }

    #[test]
    fn test_nested_items_and_classes() {
        let mut parent = link("index.html", "CrateDB").at_level(1).with_class("current");
        parent.children.push(Node::list([link("guide.html", "Guide")]));
        let nodes = vec![Node::List(BulletList {
            classes: vec!["current".to_owned()],
            children: vec![parent.into()],
        })];

        let html = HtmlPageRenderer.render_fragment(&nodes);

        assert_eq!(
            html,
            "<ul class=\"current\">\n\
             <li class=\"toctree-l1 current\"><a class=\"reference internal\" href=\"index.html\">CrateDB</a><ul>\n\
             <li class=\"toctree-l2\"><a class=\"reference internal\" href=\"guide.html\">Guide</a></li>\n\
             </ul>\n\
             </li>\n\
             </ul>\n"
        );
    }

    #[test]
    fn test_missing_uri_and_label() {
        let item = ListItem::new(Link::default());
        let html = HtmlPageRenderer.render_fragment(&[Node::list([item])]);
        assert!(html.contains(r##"<li class="toctree-l2"><a class="reference external" href="#"></a></li>"##));
    }

    #[test]
    fn test_escapes_labels_and_uris() {
        let item = link("a.html?x=1&y=\"2\"", "<Tom & Jerry>");
        let html = HtmlPageRenderer.render_fragment(&[Node::list([item])]);
        assert!(html.contains(r#"href="a.html?x=1&amp;y=&quot;2&quot;""#));
        assert!(html.contains("&lt;Tom &amp; Jerry&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("it's"), "it&#x27;s");
        assert_eq!(escape_html("plain"), "plain");
    }
}
