//! Interned symbol owned by a scope.

use crate::ids::ScopeId;
use serde::{Deserialize, Serialize};

/// A symbol created by a scope.
///
/// The identifier and the temporary flag are fixed at creation. Names are
/// only ever constructed by [`Scopes`](crate::Scopes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    ident: String,
    temporary: bool,
    scope: ScopeId,
}

impl Name {
    pub(crate) fn new(ident: String, temporary: bool, scope: ScopeId) -> Self {
        Self {
            ident,
            temporary,
            scope,
        }
    }

    /// Returns the identifier text.
    #[inline]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Returns true for names that do not take part in identifier lookup.
    #[inline]
    pub fn is_temporary(&self) -> bool {
        self.temporary
    }

    /// Returns the scope that owns this name.
    #[inline]
    pub fn scope(&self) -> ScopeId {
        self.scope
    }
}
