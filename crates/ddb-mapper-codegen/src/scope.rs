//! Visibility scopes
//!
//! A [`Scope`] is the set of modules that can name an item. Generated items
//! must never be wider than the record they expose, and in file mode they
//! live in another module than the record, so their modifier is spelled as
//! an absolute `pub(in path)` instead of being copied from the record.
//!
//! Module paths are crate-rooted (`crate::model`). An empty path stands for
//! the record's own, unknown, module, which is how the derive sees it.

use crate::declaration::SourceVisibility;
use std::fmt;

/// Modules that can name an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// `pub`
    Everywhere,
    /// The module and all of its descendants.
    Module(String),
}

impl Scope {
    pub fn crate_wide() -> Self {
        Scope::Module("crate".to_string())
    }

    /// Scope of an item declared in `namespace` with `visibility`.
    pub fn of(visibility: &SourceVisibility, namespace: &str) -> Self {
        match visibility {
            SourceVisibility::Public => Scope::Everywhere,
            SourceVisibility::Crate => Scope::crate_wide(),
            SourceVisibility::Private => Scope::Module(namespace.to_string()),
            SourceVisibility::Restricted(vis) => Scope::Module(restricted_root(vis, namespace)),
        }
    }

    /// Whether items in this scope can be named from `module`.
    pub fn contains(&self, module: &str) -> bool {
        match self {
            Scope::Everywhere => true,
            Scope::Module(root) => is_within(module, root),
        }
    }

    /// Whether this scope reaches some module that `other` does not.
    pub fn is_wider_than(&self, other: &Scope) -> bool {
        match (self, other) {
            (_, Scope::Everywhere) => false,
            (Scope::Everywhere, Scope::Module(_)) => true,
            (Scope::Module(this), Scope::Module(other)) => {
                this != other && !is_within(this, other)
            }
        }
    }

    /// Modifier granting exactly this scope, with a trailing space.
    pub fn modifier(&self) -> String {
        match self {
            Scope::Everywhere => "pub ".to_string(),
            Scope::Module(root) if root == "crate" => "pub(crate) ".to_string(),
            Scope::Module(root) => format!("pub(in {root}) "),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Everywhere => write!(f, "everywhere"),
            Scope::Module(root) if root.is_empty() => write!(f, "the record's module"),
            Scope::Module(root) => write!(f, "`{root}`"),
        }
    }
}

/// Whether `module` is `root` or one of its descendants.
///
/// Every module of the crate is within `crate`.
pub fn is_within(module: &str, root: &str) -> bool {
    root == "crate"
        || module == root
        || module
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with("::"))
}

/// Absolute root of `pub(super)`, `pub(self)` or `pub(in path)`, seen from
/// `namespace`.
fn restricted_root(vis: &str, namespace: &str) -> String {
    let inner = vis
        .trim()
        .strip_prefix("pub(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(vis)
        .trim();
    let path = inner.strip_prefix("in ").unwrap_or(inner).trim();

    let mut root = String::new();
    for (index, segment) in path.split("::").map(str::trim).enumerate() {
        root = match segment {
            "crate" if index == 0 => "crate".to_string(),
            "self" if index == 0 => namespace.to_string(),
            "super" if index == 0 => parent(namespace),
            "super" => parent(&root),
            _ if index == 0 => join(namespace, segment),
            _ => join(&root, segment),
        };
    }
    root
}

fn parent(module: &str) -> String {
    match module.rsplit_once("::") {
        Some((parent, _)) => parent.to_string(),
        None if module == "crate" => module.to_string(),
        // The derive does not know its module, so neither does its parent.
        None => String::new(),
    }
}

fn join(module: &str, segment: &str) -> String {
    if module.is_empty() {
        segment.to_string()
    } else {
        format!("{module}::{segment}")
    }
}
