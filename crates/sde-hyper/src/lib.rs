//! The `hyper` role family.
//!
//! One role, many looks: the same reference can render as a plain link, a
//! button, a badge, a shield or a card.
//!
//! ```text
//! {hyper}`https://example.org`
//! {hyper}`Navigate to Tutorial <fts-analyzer> {type=shield,color=darkcyan}`
//! {hyper-open}`guide:install`
//! ```
//!
//! Roles are registered in a [`RoleRegistry`] with their default options.
//! [`Hyper`] parses an occurrence, derives a missing title from the title
//! cache or the reference resolver, and writes markup in the
//! [`MarkupDialect`] of the document being processed.

mod dialect;
mod options;
mod registry;
mod role;
mod text;

pub use dialect::{MarkupDialect, Myst, Rst, dialect_by_name, link_to_markdown};
pub use options::{HyperOptions, is_truthy};
pub use registry::{HyperRole, RoleRegistry};
pub use role::{Hyper, HyperError, SPECIAL_TYPES, link_type};
pub use text::RoleText;
