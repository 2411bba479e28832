//! Role processing.
//!
//! A role occurrence is parsed, its title derived when none is written,
//! and the result turned into markup of the selected dialect: a plain
//! link, or one of the special types.

use sde_refs::{Classifier, Reference, ReferenceKind, Resolver};
use sde_title::TitleCache;

use crate::dialect::{MarkupDialect, Myst};
use crate::options::{HyperOptions, is_truthy};
use crate::registry::RoleRegistry;
use crate::text::RoleText;

/// Rendering types selected with the `type` option.
pub const SPECIAL_TYPES: [&str; 4] = ["badge", "button", "card", "shield"];

/// Error produced while rendering a role occurrence.
#[derive(Debug, thiserror::Error)]
pub enum HyperError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unable to resolve reference: {0:?}")]
    Unparsable(String),

    #[error("Hyperref type not implemented: {type_name}. Viable choices: {}", viable_choices())]
    UnsupportedType { type_name: String },

    #[error("Invalid option '{name}': {message}")]
    InvalidOption { name: String, message: String },

    #[error("Unable to serialize directive options: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn viable_choices() -> String {
    let quoted: Vec<String> = SPECIAL_TYPES.iter().map(|t| format!("'{t}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// `url` for web links, `ref` for everything else.
pub fn link_type(link: &str) -> &'static str {
    if link.starts_with("http://") || link.starts_with("https://") {
        "url"
    } else {
        "ref"
    }
}

/// Renders occurrences of the registered roles.
///
/// # Example
///
/// ```
/// use sde_hyper::{Hyper, RoleRegistry};
///
/// let registry = RoleRegistry::default();
/// let hyper = Hyper::new(&registry);
///
/// let out = hyper.render("hyper", "Example <https://example.org>").unwrap();
/// assert_eq!(out, "[Example](https://example.org)");
/// ```
pub struct Hyper<'a> {
    registry: &'a RoleRegistry,
    classifier: Classifier,
    dialect: &'a dyn MarkupDialect,
    titles: Option<&'a TitleCache>,
    resolver: Option<&'a Resolver<'a>>,
}

impl<'a> Hyper<'a> {
    /// Processor emitting MyST markup with the default classifier.
    pub fn new(registry: &'a RoleRegistry) -> Self {
        Self {
            registry,
            classifier: Classifier::default(),
            dialect: &Myst,
            titles: None,
            resolver: None,
        }
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: &'a dyn MarkupDialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Classifier used when no resolver is attached.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Derive URL titles from the fetched page.
    #[must_use]
    pub fn with_titles(mut self, titles: &'a TitleCache) -> Self {
        self.titles = Some(titles);
        self
    }

    /// Derive reference titles from the resolved target. The resolver's
    /// classifier takes over.
    #[must_use]
    pub fn with_resolver(mut self, resolver: &'a Resolver<'a>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn dialect(&self) -> &dyn MarkupDialect {
        self.dialect
    }

    fn classifier(&self) -> &Classifier {
        self.resolver.map_or(&self.classifier, Resolver::classifier)
    }

    /// Render the text of a `role` occurrence.
    pub fn render(&self, role: &str, text: &str) -> Result<String, HyperError> {
        let hyper_role = self
            .registry
            .get(role)
            .ok_or_else(|| HyperError::UnknownRole(role.to_owned()))?;
        let parsed = RoleText::parse(text).ok_or_else(|| HyperError::Unparsable(text.to_owned()))?;

        let mut options = hyper_role.defaults().clone();
        options.merge(parsed.options);

        let reference = self.classifier().parse(&parsed.target);
        let mut title = parsed.title.or_else(|| self.derive_title(&reference));

        if options.remove("short-title").is_some()
            && let Some(full) = title.as_mut()
            && let Some((short, _)) = full.split_once(" - ")
        {
            *full = short.to_owned();
        }

        let occurrence = Occurrence {
            reference: &reference,
            title: title.as_deref(),
        };
        if options.is_empty() {
            return Ok(self.plain(&occurrence));
        }

        let type_name = options.remove("type");
        match type_name.as_deref() {
            Some("button") => self.button(&occurrence, options),
            Some("shield") => self.shield(&occurrence, options),
            Some("badge") => Ok(self.badge(&occurrence, options)),
            Some("card") => self.card(&occurrence, options),
            other => Err(HyperError::UnsupportedType {
                type_name: other.unwrap_or("None").to_owned(),
            }),
        }
    }

    fn derive_title(&self, reference: &Reference) -> Option<String> {
        let target = reference.raw();
        match reference.kind() {
            ReferenceKind::Url => Some(
                self.titles
                    .map_or_else(|| target.to_owned(), |titles| titles.get_title(target)),
            ),
            ReferenceKind::CrossProject | ReferenceKind::Namespaced => self.resolved_title(reference),
            ReferenceKind::Anchor => self
                .resolved_title(reference)
                .or_else(|| Some(target.to_owned())),
            _ => Some(target.to_owned()),
        }
    }

    fn resolved_title(&self, reference: &Reference) -> Option<String> {
        let resolver = self.resolver?;
        match resolver.resolve(reference, None) {
            Ok(link) => Some(link.label),
            Err(err) => {
                tracing::debug!(reference = reference.raw(), error = %err, "No title for reference");
                None
            }
        }
    }

    fn plain(&self, occurrence: &Occurrence<'_>) -> String {
        let reference = occurrence.reference;
        let target = reference.raw();
        match reference.kind() {
            ReferenceKind::Url | ReferenceKind::Anchor | ReferenceKind::Namespaced => {
                self.dialect.link(occurrence.label(), reference)
            }
            ReferenceKind::Indirect => {
                let label = occurrence.label().trim_matches(['[', ']']);
                self.dialect.indirect_link(label, reference.target())
            }
            ReferenceKind::CrossProject | ReferenceKind::Label => match occurrence.title {
                Some(title) => self.dialect.role("ref", &format!("{title}<{target}>")),
                None => self.dialect.role("ref", target),
            },
        }
    }

    fn button(
        &self,
        occurrence: &Occurrence<'_>,
        mut options: HyperOptions,
    ) -> Result<String, HyperError> {
        options.set_default("color", "primary");
        let no_text = options.remove("notext").is_some_and(|value| is_truthy(&value));

        let name = if occurrence.reference.kind() == ReferenceKind::Url {
            "button-link"
        } else {
            "button-ref"
        };
        let mut content = match occurrence.title {
            Some(title) if !no_text => title.to_owned(),
            _ => String::new(),
        };
        if let Some(icon) = options.remove("icon") {
            let Some((icon_set, icon_name)) = icon.split_once(':') else {
                return Err(HyperError::InvalidOption {
                    name: "icon".to_owned(),
                    message: format!("expected '<set>:<name>', got '{icon}'"),
                });
            };
            let icon = self.dialect.role(icon_set, icon_name);
            content = format!("{icon} {content}").trim_end().to_owned();
        }

        self.dialect
            .directive(name, occurrence.reference.raw(), &options, &content)
    }

    fn shield(
        &self,
        occurrence: &Occurrence<'_>,
        mut options: HyperOptions,
    ) -> Result<String, HyperError> {
        let target = occurrence.reference.raw();
        options.set_default("message", occurrence.label());
        for key in ["message", "label"] {
            if let Some(value) = options.get(key) {
                let value = occurrence.substitute(value);
                options.insert(key, value);
            }
        }
        let link = options.set_default("link", target).to_owned();
        options.set_default("link-type", link_type(&link));
        let message = options.get("message").unwrap_or_default().to_owned();
        options.set_default("link-title", message);

        self.dialect.directive("shield", "", &options, "")
    }

    fn badge(&self, occurrence: &Occurrence<'_>, mut options: HyperOptions) -> String {
        let color = options.remove("color").unwrap_or_else(|| "primary".to_owned());
        let flavor = if occurrence.reference.kind() == ReferenceKind::Url {
            "link"
        } else {
            "ref"
        };
        if !options.is_empty() {
            tracing::debug!(
                reference = occurrence.reference.raw(),
                ignored = ?options.iter().map(|(k, _)| k).collect::<Vec<_>>(),
                "Badges take no further options"
            );
        }
        let content = format!("{} <{}>", occurrence.label(), occurrence.reference.raw());
        self.dialect.role(&format!("bdg-{flavor}-{color}"), &content)
    }

    fn card(
        &self,
        occurrence: &Occurrence<'_>,
        mut options: HyperOptions,
    ) -> Result<String, HyperError> {
        let target = occurrence.reference.raw();
        let heading = options.remove("title").unwrap_or_default();
        let header = options.remove("header");
        let footer = options.remove("footer");

        let link = options.set_default("link", target).to_owned();
        options.set_default("link-type", link_type(&link));

        let mut body = String::new();
        if let Some(header) = header {
            body.push_str(&header);
            body.push_str("\n^^^\n");
        }
        body.push_str(occurrence.label());
        if let Some(footer) = footer {
            body.push_str("\n+++\n");
            body.push_str(&footer);
        }

        self.dialect.directive("card", &heading, &options, &body)
    }
}

struct Occurrence<'r> {
    reference: &'r Reference,
    title: Option<&'r str>,
}

impl Occurrence<'_> {
    /// Title, falling back to the target.
    fn label(&self) -> &str {
        self.title.unwrap_or(self.reference.raw())
    }

    /// Expand `%(title)s` and `%(target)s`.
    fn substitute(&self, template: &str) -> String {
        template
            .replace("%(title)s", self.title.unwrap_or_default())
            .replace("%(target)s", self.reference.raw())
    }
}
