//! Role text grammar.
//!
//! ```text
//! Title <target> {options}
//! target {options}
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::options::HyperOptions;

static TITLE_AND_OPTIONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<title>.+?)\s*<(?P<target>.+?)>(?:\s*\{(?P<options>.+)\})?$").unwrap()
});

static OPTIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(?P<target>.+?)\s*(?:\{(?P<options>.+)\})?$").unwrap());

/// Parsed role text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleText {
    /// Explicit title, if written.
    pub title: Option<String>,
    pub target: String,
    pub options: HyperOptions,
}

impl RoleText {
    /// Parse role text. `None` when no target can be found.
    ///
    /// # Example
    ///
    /// ```
    /// use sde_hyper::RoleText;
    ///
    /// let text = RoleText::parse("Navigate to Tutorial <fts-analyzer> {type=shield}").unwrap();
    /// assert_eq!(text.title.as_deref(), Some("Navigate to Tutorial"));
    /// assert_eq!(text.target, "fts-analyzer");
    /// assert_eq!(text.options.get("type"), Some("shield"));
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (title, captures) = match TITLE_AND_OPTIONS_RE.captures(text) {
            Some(captures) => (captures.name("title").map(|m| m.as_str().to_owned()), captures),
            None => (None, OPTIONS_RE.captures(text)?),
        };
        let target = captures.name("target")?.as_str().trim().to_owned();
        if target.is_empty() {
            return None;
        }
        let options = captures
            .name("options")
            .map(|m| HyperOptions::decode(m.as_str()))
            .unwrap_or_default();
        Some(Self {
            title: title.filter(|t| !t.is_empty()),
            target,
            options,
        })
    }
}
