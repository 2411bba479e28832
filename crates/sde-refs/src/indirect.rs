//! Targets of indirect `[label]` references.
//!
//! Markdown defines these out-of-band, usually at the end of the page:
//!
//! ```markdown
//! See {hyper}`the example <[example]>`.
//!
//! [example]: https://example.org/
//! ```

use std::collections::HashMap;

use pulldown_cmark::Parser;

/// Link reference definitions of one document, keyed case-insensitively.
#[derive(Clone, Debug, Default)]
pub struct IndirectTargets {
    targets: HashMap<String, String>,
}

impl IndirectTargets {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the link reference definitions of a Markdown document.
    ///
    /// # Example
    ///
    /// ```
    /// use sde_refs::IndirectTargets;
    ///
    /// let targets = IndirectTargets::from_markdown("Text.\n\n[Example]: https://example.org/\n");
    /// assert_eq!(targets.get("example"), Some("https://example.org/"));
    /// ```
    #[must_use]
    pub fn from_markdown(markdown: &str) -> Self {
        let parser = Parser::new(markdown);
        let mut targets = Self::new();
        for (label, definition) in parser.reference_definitions().iter() {
            targets.insert(label, definition.dest.to_string());
        }
        tracing::debug!(count = targets.len(), "collected link definitions");
        targets
    }

    /// Define or replace a target.
    pub fn insert(&mut self, label: &str, uri: impl Into<String>) {
        self.targets.insert(label.to_lowercase(), uri.into());
    }

    /// URI defined for `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.targets.get(&label.to_lowercase()).map(String::as_str)
    }

    /// Number of defined targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no targets are defined.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_definitions() {
        let markdown = "\
{hyper}`Example Domain <[foobar]>`

[foobar]: https://example.org/
[Guide]: https://cratedb.com/docs/guide/ \"The Guide\"
";
        let targets = IndirectTargets::from_markdown(markdown);

        assert_eq!(targets.len(), 2);
        assert_eq!(targets.get("foobar"), Some("https://example.org/"));
        assert_eq!(targets.get("guide"), Some("https://cratedb.com/docs/guide/"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut targets = IndirectTargets::new();
        targets.insert("FooBar", "https://example.org/");
        assert_eq!(targets.get("foobar"), Some("https://example.org/"));
        assert_eq!(targets.get("FOOBAR"), Some("https://example.org/"));
    }

    #[test]
    fn test_no_definitions() {
        let targets = IndirectTargets::from_markdown("# Title\n\nJust [text](https://x).\n");
        assert!(targets.is_empty());
        assert_eq!(targets.get("text"), None);
    }

    #[test]
    fn test_later_insert_replaces() {
        let mut targets = IndirectTargets::new();
        targets.insert("a", "https://one.example");
        targets.insert("A", "https://two.example");
        assert_eq!(targets.len(), 1);
        assert_eq!(targets.get("a"), Some("https://two.example"));
    }
}
