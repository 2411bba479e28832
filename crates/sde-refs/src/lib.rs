//! Reference classification and resolution.
//!
//! Authors write link targets as short strings: `#install`, `guide:index`,
//! `inv:guide#index`, `https://example.org`, `[example]`. This crate decides
//! what each string is ([`Classifier`]) and what it points at ([`Resolver`]).
//!
//! The host documentation build provides the indexes through the
//! [`DocumentIndex`] and [`Inventory`] traits. Resolution is read-only, so
//! one snapshot can serve any number of pages.

mod classify;
mod host;
mod indirect;
mod resolve;

pub use classify::{Classifier, INVENTORY_SCHEME, Reference, ReferenceKind, scheme_of};
pub use host::{DocumentIndex, Inventory, InventoryEntry, Location};
pub use indirect::IndirectTargets;
pub use resolve::{ResolvedLink, Resolver, UnresolvedReason, UnresolvedReference};
