//! # Scope Arena
//!
//! Owns every scope and name of one compilation unit and implements
//! declaration, lookup and fresh-name allocation.
//!
//! ## Example
//!
//! ```rust
//! use js_scope::{ScopeKind, Scopes};
//!
//! let mut scopes = Scopes::new();
//! let outer = scopes.new_scope(scopes.root(), ScopeKind::Function, "outer");
//! let inner = scopes.new_scope(outer, ScopeKind::Function, "inner");
//!
//! let a = scopes.declare_name(outer, "a");
//! assert_eq!(scopes.find_name(inner, "a"), Some(a));
//! assert_eq!(scopes.find_own_name(inner, "a"), None);
//!
//! // `a` is visible from `inner`, so the fresh name moves on.
//! let fresh = scopes.declare_fresh_name(inner, "a");
//! assert_eq!(scopes.ident(fresh), "a_0");
//! ```

use crate::error::ScopeError;
use crate::fresh::FreshCandidates;
use crate::ids::{NameId, ScopeId};
use crate::name::Name;
use crate::scope::{Scope, ScopeKind};
use config::constants::{is_reserved_identifier, ROOT_SCOPE_DESCRIPTION};
use config::NamingConfig;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Old-to-new name handles produced by [`Scopes::copy_own_names`].
pub type NameMapping = HashMap<NameId, NameId>;

// =============================================================================
// SCOPE ARENA
// =============================================================================

/// Arena of scopes and names.
///
/// Index 0 is always the root scope. Handles stay valid for the lifetime of
/// the arena; nothing is ever removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scopes {
    scopes: Vec<Scope>,
    names: Vec<Name>,
    #[serde(with = "naming")]
    config: NamingConfig,
}

/// Serde form of [`NamingConfig`], validated again on the way in.
mod naming {
    use config::NamingConfig;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Naming {
        separator: char,
        temporary_prefix: String,
    }

    pub fn serialize<S: Serializer>(config: &NamingConfig, serializer: S) -> Result<S::Ok, S::Error> {
        Naming {
            separator: config.separator,
            temporary_prefix: config.temporary_prefix.clone(),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NamingConfig, D::Error> {
        let naming = Naming::deserialize(deserializer)?;
        NamingConfig::new(naming.separator, naming.temporary_prefix).map_err(D::Error::custom)
    }
}

impl Scopes {
    /// Creates an arena holding only the root scope.
    pub fn new() -> Self {
        Self::with_config(NamingConfig::default())
    }

    /// Creates an arena that allocates names with `config`.
    pub fn with_config(config: NamingConfig) -> Self {
        Self {
            scopes: vec![Scope::root(ROOT_SCOPE_DESCRIPTION)],
            names: Vec::new(),
            config,
        }
    }

    /// Returns the root scope.
    #[inline]
    pub fn root(&self) -> ScopeId {
        ScopeId::new(0)
    }

    /// Returns the naming settings of this arena.
    #[inline]
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Creates a child scope of `parent`.
    pub fn new_scope(&mut self, parent: ScopeId, kind: ScopeKind, description: impl Into<String>) -> ScopeId {
        let id = ScopeId::new(self.scopes.len());
        let scope = Scope::child(parent, kind, description);
        trace!("new {:?} scope {} `{}` under {}", kind, id, scope.description(), parent);
        self.scopes.push(scope);
        id
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Returns the scope behind a handle.
    #[inline]
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    /// Returns the name behind a handle.
    #[inline]
    pub fn name(&self, id: NameId) -> &Name {
        &self.names[id.index()]
    }

    /// Returns the identifier of a name.
    #[inline]
    pub fn ident(&self, id: NameId) -> &str {
        self.name(id).ident()
    }

    /// Returns true if the name was declared as a temporary.
    #[inline]
    pub fn is_temporary(&self, id: NameId) -> bool {
        self.name(id).is_temporary()
    }

    /// Returns the parent of a scope.
    #[inline]
    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.scope(id).parent()
    }

    /// Iterates `id` and then its ancestors up to the root.
    pub fn ancestors(&self, id: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(id), move |current| self.parent(*current))
    }

    /// Returns the temporaries declared in a scope.
    #[inline]
    pub fn temporary_names(&self, id: ScopeId) -> &[NameId] {
        self.scope(id).temporary_names()
    }

    /// Number of scopes in the arena, the root included.
    #[inline]
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Number of names in the arena.
    #[inline]
    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// Returns true if `scope` itself owns `ident`.
    ///
    /// The root also answers true for reserved identifiers it has not
    /// materialized yet.
    pub fn has_own_name(&self, scope: ScopeId, ident: &str) -> bool {
        let scope = self.scope(scope);
        scope.contains(ident) || (scope.is_root() && is_reserved_identifier(ident))
    }

    /// Returns true if `ident` is visible from `scope` (own table or any ancestor).
    pub fn has_name(&self, scope: ScopeId, ident: &str) -> bool {
        self.ancestors(scope).any(|id| self.has_own_name(id, ident))
    }

    /// Looks `ident` up in `scope` only.
    ///
    /// The root materializes a name for a reserved identifier on first lookup.
    pub fn find_own_name(&mut self, scope: ScopeId, ident: &str) -> Option<NameId> {
        let entry = self.scope(scope);
        if let Some(id) = entry.lookup(ident) {
            return Some(id);
        }
        if entry.is_root() && is_reserved_identifier(ident) {
            trace!("materializing reserved identifier `{}`", ident);
            return Some(self.create_name(scope, ident.to_string(), false));
        }
        None
    }

    /// Looks `ident` up in `scope` and then its ancestors.
    pub fn find_name(&mut self, scope: ScopeId, ident: &str) -> Option<NameId> {
        let owner = self.ancestors(scope).find(|id| self.has_own_name(*id, ident))?;
        self.find_own_name(owner, ident)
    }

    // =========================================================================
    // DECLARATION
    // =========================================================================

    /// Returns the name `ident` owned by `scope`, creating it if needed.
    ///
    /// Parent scopes are not consulted; shadowing is the caller's concern.
    pub fn declare_name(&mut self, scope: ScopeId, ident: &str) -> NameId {
        match self.find_own_name(scope, ident) {
            Some(id) => id,
            None => self.create_name(scope, ident.to_string(), false),
        }
    }

    /// Declares a name derived from `suggested` that is not visible from `scope`.
    ///
    /// `suggested` is used as is when free. Otherwise a numeric suffix
    /// (`_<n>` or `$<n>`) is continued, or `<sep>0`, `<sep>1`, ... is appended.
    /// An empty suggestion falls back to the configured temporary prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use js_scope::Scopes;
    ///
    /// let mut scopes = Scopes::new();
    /// let root = scopes.root();
    /// scopes.declare_name(root, "a_0");
    /// let fresh = scopes.declare_fresh_name(root, "a_0");
    /// assert_eq!(scopes.ident(fresh), "a_1");
    /// ```
    pub fn declare_fresh_name(&mut self, scope: ScopeId, suggested: &str) -> NameId {
        let prefix;
        let suggested = if suggested.is_empty() {
            prefix = self.config.temporary_prefix.clone();
            prefix.as_str()
        } else {
            suggested
        };
        let mut rejected = 0usize;
        let mut chosen = None;
        for candidate in FreshCandidates::new(suggested, self.config.separator) {
            if !self.has_name(scope, &candidate) {
                chosen = Some(candidate);
                break;
            }
            rejected += 1;
        }
        // The candidate sequence only ends once the u64 counter is exhausted.
        let ident = chosen.unwrap_or_else(|| format!("{}{}{}", suggested, self.config.separator, u64::MAX));
        if rejected > 0 {
            debug!("fresh name `{}` for `{}` after {} taken candidates", ident, suggested, rejected);
        }
        self.create_name(scope, ident, false)
    }

    /// Declares a temporary name in `scope`.
    ///
    /// Temporaries are kept out of the identifier table: they are never
    /// returned by lookup and never block another declaration.
    pub fn declare_temporary_name(&mut self, scope: ScopeId, suggested: &str) -> NameId {
        self.create_name(scope, suggested.to_string(), true)
    }

    /// Declares a temporary with the configured default prefix.
    pub fn declare_temporary(&mut self, scope: ScopeId) -> NameId {
        let prefix = self.config.temporary_prefix.clone();
        self.declare_temporary_name(scope, &prefix)
    }

    /// Imports the own names and temporaries of `source` into `target`.
    ///
    /// Every imported name is a new name owned by `target`, with the same
    /// identifier and temporary flag as its original. Nothing is imported if
    /// any identifier already exists in `target`.
    ///
    /// Returns the mapping from `source` names to their copies.
    pub fn copy_own_names(&mut self, target: ScopeId, source: ScopeId) -> Result<NameMapping, ScopeError> {
        let entries: Vec<(String, NameId)> = self
            .scope(source)
            .own_names()
            .map(|(ident, id)| (ident.to_string(), id))
            .collect();

        if let Some((ident, _)) = entries.iter().find(|(ident, _)| self.has_own_name(target, ident)) {
            return Err(ScopeError::DuplicateName {
                ident: ident.clone(),
                scope: self.scope(target).description().to_string(),
            });
        }

        let temporaries = self.scope(source).temporary_names().to_vec();
        let mut mapping = NameMapping::with_capacity(entries.len() + temporaries.len());
        for (ident, old) in entries {
            let new = self.create_name(target, ident, false);
            mapping.insert(old, new);
        }
        for old in temporaries {
            let ident = self.ident(old).to_string();
            let new = self.create_name(target, ident, true);
            mapping.insert(old, new);
        }
        trace!("copied {} names from {} into {}", mapping.len(), source, target);
        Ok(mapping)
    }

    fn create_name(&mut self, scope: ScopeId, ident: String, temporary: bool) -> NameId {
        let id = NameId::new(self.names.len());
        if temporary {
            self.scopes[scope.index()].register_temporary(id);
        } else {
            self.scopes[scope.index()].register(ident.clone(), id);
        }
        self.names.push(Name::new(ident, temporary, scope));
        id
    }
}

impl Default for Scopes {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
