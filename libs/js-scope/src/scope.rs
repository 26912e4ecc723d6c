//! # Lexical Scope
//!
//! A single level of the scope tree: its own identifier table and the
//! temporaries declared in it.
//!
//! ## Visibility Rules
//!
//! - An identifier is visible if the scope or any ancestor owns it
//! - The root additionally sees every reserved global identifier
//! - Temporaries are owned by a scope but never visible by identifier

use crate::ids::{NameId, ScopeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What introduced a scope. Only informative; lookup rules do not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeKind {
    /// Program-wide scope (the root and the top scope of a program).
    Global,
    /// Parameters and locals of a function.
    Function,
    /// The exception parameter of a `catch` clause.
    Catch,
    /// A block-level scope introduced by a pass.
    Block,
    /// Property names of an object.
    Object,
}

/// A node of the scope tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    parent: Option<ScopeId>,
    kind: ScopeKind,
    description: String,
    is_root: bool,
    /// Identifier table; ordered so enumeration is deterministic.
    names: BTreeMap<String, NameId>,
    /// Temporaries in declaration order.
    temporaries: Vec<NameId>,
}

impl Scope {
    pub(crate) fn root(description: impl Into<String>) -> Self {
        Self {
            parent: None,
            kind: ScopeKind::Global,
            description: description.into(),
            is_root: true,
            names: BTreeMap::new(),
            temporaries: Vec::new(),
        }
    }

    pub(crate) fn child(parent: ScopeId, kind: ScopeKind, description: impl Into<String>) -> Self {
        Self {
            parent: Some(parent),
            kind,
            description: description.into(),
            is_root: false,
            names: BTreeMap::new(),
            temporaries: Vec::new(),
        }
    }

    /// Returns the enclosing scope, `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Returns what introduced this scope.
    #[inline]
    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// Returns the human readable description given at creation.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true for the root scope of an arena.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Iterates the identifier table in identifier order.
    pub fn own_names(&self) -> impl Iterator<Item = (&str, NameId)> + '_ {
        self.names.iter().map(|(ident, id)| (ident.as_str(), *id))
    }

    /// Returns the temporaries declared in this scope, oldest first.
    #[inline]
    pub fn temporary_names(&self) -> &[NameId] {
        &self.temporaries
    }

    pub(crate) fn lookup(&self, ident: &str) -> Option<NameId> {
        self.names.get(ident).copied()
    }

    pub(crate) fn contains(&self, ident: &str) -> bool {
        self.names.contains_key(ident)
    }

    pub(crate) fn register(&mut self, ident: String, id: NameId) {
        self.names.insert(ident, id);
    }

    pub(crate) fn register_temporary(&mut self, id: NameId) {
        self.temporaries.push(id);
    }
}
