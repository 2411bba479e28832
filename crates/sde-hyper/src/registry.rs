//! Role registry.
//!
//! Every role of the family shares one implementation and differs only in
//! its default options.

use std::collections::BTreeMap;

use crate::options::HyperOptions;

/// Built-in roles and their default options.
const BUILTIN_ROLES: &[(&str, &str)] = &[
    ("hyper", ""),
    (
        "hyper-navigate",
        "type=shield,label=Navigate to,message=%(title)s,short-title=true,color=darkcyan",
    ),
    (
        "hyper-open",
        "type=shield,label=Open,message=%(title)s,short-title=true,color=darkblue",
    ),
    (
        "hyper-tutorial",
        "type=shield,label=Navigate to,message=Tutorial,color=darkcyan,logo=Markdown",
    ),
    (
        "hyper-read-more",
        "type=shield,label=Read More,color=yellow,logo=Markdown",
    ),
    (
        "hyper-readme-github",
        "type=shield,message=Open README,color=darkblue,logo=GitHub",
    ),
    (
        "hyper-nb-colab",
        "type=shield,label=Open,message=Notebook on Colab,color=blue,logo=Google Colab",
    ),
    (
        "hyper-nb-binder",
        "type=shield,label=Open,message=Notebook on Binder,color=lightblue,logo=binder",
    ),
    (
        "hyper-nb-github",
        "type=shield,label=Open,message=Notebook on GitHub,color=darkgreen,logo=GitHub",
    ),
];

/// A named role and the options it starts from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HyperRole {
    name: String,
    defaults: HyperOptions,
}

impl HyperRole {
    pub fn new(name: impl Into<String>, defaults: HyperOptions) -> Self {
        Self {
            name: name.into(),
            defaults,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn defaults(&self) -> &HyperOptions {
        &self.defaults
    }
}

/// Roles by name, populated once at setup and read per occurrence.
#[derive(Clone, Debug)]
pub struct RoleRegistry {
    roles: BTreeMap<String, HyperRole>,
}

impl Default for RoleRegistry {
    /// Registry holding the built-in roles.
    fn default() -> Self {
        BUILTIN_ROLES
            .iter()
            .fold(Self::empty(), |registry, (name, defaults)| {
                registry.with_role(HyperRole::new(*name, HyperOptions::decode(defaults)))
            })
    }
}

impl RoleRegistry {
    /// Registry without any roles.
    pub fn empty() -> Self {
        Self {
            roles: BTreeMap::new(),
        }
    }

    /// Add or replace a role.
    #[must_use]
    pub fn with_role(mut self, role: HyperRole) -> Self {
        self.register(role);
        self
    }

    pub fn register(&mut self, role: HyperRole) {
        self.roles.insert(role.name.clone(), role);
    }

    pub fn get(&self, name: &str) -> Option<&HyperRole> {
        self.roles.get(name)
    }

    /// Registered role names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
