//! Markup dialect adapters.
//!
//! Role output is markup that the host parses in place of the role. The
//! caller picks the dialect of the document being processed.

use sde_refs::{Classifier, INVENTORY_SCHEME, Reference, ReferenceKind};

use crate::options::{HyperOptions, is_truthy};
use crate::role::HyperError;

/// Writes the markup constructs role output is made of.
pub trait MarkupDialect: Send + Sync {
    fn name(&self) -> &'static str;

    /// Link to a URL, anchor or namespaced reference.
    fn link(&self, label: &str, reference: &Reference) -> String;

    /// Link resolved through the link definition `name`.
    fn indirect_link(&self, label: &str, name: &str) -> String;

    /// Inline role.
    fn role(&self, role: &str, content: &str) -> String;

    /// Directive block.
    fn directive(
        &self,
        name: &str,
        argument: &str,
        options: &HyperOptions,
        body: &str,
    ) -> Result<String, HyperError>;
}

/// MyST Markdown.
#[derive(Clone, Copy, Debug, Default)]
pub struct Myst;

impl MarkupDialect for Myst {
    fn name(&self) -> &'static str {
        "myst"
    }

    fn link(&self, label: &str, reference: &Reference) -> String {
        format!("[{label}]({})", reference.raw())
    }

    fn indirect_link(&self, label: &str, name: &str) -> String {
        format!("[{label}][{name}]")
    }

    fn role(&self, role: &str, content: &str) -> String {
        format!("{{{role}}}`{content}`")
    }

    fn directive(
        &self,
        name: &str,
        argument: &str,
        options: &HyperOptions,
        body: &str,
    ) -> Result<String, HyperError> {
        let mut out = format!(":::{{{name}}}");
        if !argument.is_empty() {
            out.push(' ');
            out.push_str(argument);
        }
        out.push('\n');
        if !options.is_empty() {
            out.push_str("---\n");
            out.push_str(&options.to_yaml()?);
            out.push_str("---\n");
        }
        if !body.is_empty() {
            out.push_str(body);
            out.push('\n');
        }
        out.push_str(":::");
        Ok(out)
    }
}

/// reStructuredText.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rst;

impl MarkupDialect for Rst {
    fn name(&self) -> &'static str {
        "rst"
    }

    /// URLs become anonymous hyperlinks. Internal targets use the role
    /// Sphinx resolves them with:
    ///
    /// - `#label` and `inv:inventory#label` become `:ref:`
    /// - `project:page.md` becomes `:doc:` with the suffix dropped, or
    ///   `:ref:` when it carries an anchor
    /// - `path:file` becomes `:download:`
    fn link(&self, label: &str, reference: &Reference) -> String {
        let target = reference.target();
        match (reference.kind(), reference.prefix()) {
            (ReferenceKind::Url, _) => format!("`{label} <{}>`__", reference.raw()),
            (ReferenceKind::Namespaced, Some(INVENTORY_SCHEME)) => {
                let target = target.replacen('#', ":", 1);
                self.role("ref", &format!("{label} <{target}>"))
            }
            (ReferenceKind::Namespaced, Some("project")) => match target.split_once('#') {
                Some((_, anchor)) => self.role("ref", &format!("{label} <{anchor}>")),
                None => {
                    let page = match target.rsplit_once('.') {
                        Some((stem, suffix)) if !suffix.contains('/') => stem,
                        _ => target,
                    };
                    let page = page.trim_start_matches('/');
                    self.role("doc", &format!("{label} </{page}>"))
                }
            },
            (ReferenceKind::Namespaced, Some("path")) => {
                self.role("download", &format!("{label} <{target}>"))
            }
            _ => self.role("ref", &format!("{label} <{target}>")),
        }
    }

    fn indirect_link(&self, label: &str, name: &str) -> String {
        format!("`{label} <{name}_>`_")
    }

    fn role(&self, role: &str, content: &str) -> String {
        format!(":{role}:`{content}`")
    }

    fn directive(
        &self,
        name: &str,
        argument: &str,
        options: &HyperOptions,
        body: &str,
    ) -> Result<String, HyperError> {
        let mut out = format!(".. {name}::");
        if !argument.is_empty() {
            out.push(' ');
            out.push_str(argument);
        }
        out.push('\n');
        for (key, value) in options.iter() {
            if value.is_empty() || is_truthy(value) {
                out.push_str(&format!("   :{key}:\n"));
            } else {
                out.push_str(&format!("   :{key}: {value}\n"));
            }
        }
        if !body.is_empty() {
            out.push('\n');
            for line in body.lines() {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str("   ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
        Ok(out)
    }
}

/// Dialect by name: `myst` or `rst`.
pub fn dialect_by_name(name: &str) -> Option<&'static dyn MarkupDialect> {
    match name {
        "myst" | "md" | "markdown" => Some(&Myst),
        "rst" | "restructuredtext" => Some(&Rst),
        _ => None,
    }
}

/// Markdown link for any kind of reference.
///
/// Plain and cross-project labels are rewritten to their MyST form,
/// indirect references become reference-style links.
///
/// ```
/// use sde_hyper::link_to_markdown;
///
/// assert_eq!(link_to_markdown("guide:document", None, None), "[](inv:guide#document)");
/// assert_eq!(link_to_markdown("[document]", None, None), "[][document]");
/// assert_eq!(
///     link_to_markdown("document", Some("label"), Some("title")),
///     r#"[label](#document "title")"#
/// );
/// ```
pub fn link_to_markdown(reference: &str, label: Option<&str>, title: Option<&str>) -> String {
    let classifier = Classifier::default();
    let label = label.unwrap_or_default();
    if classifier.is_indirect(reference) {
        return format!("[{label}]{reference}");
    }
    let mut target = classifier.normalize(reference);
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        target.push_str(&format!(" \"{title}\""));
    }
    format!("[{label}]({target})")
}
