//! # Scope Errors
//!
//! Error types for bulk scope operations. Lookups report misses with
//! `Option::None` and never produce an error.

use thiserror::Error;

/// Errors raised by scope operations that modify several names at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// The target scope already owns a name with this identifier.
    #[error("name `{ident}` is already declared in scope `{scope}`")]
    DuplicateName {
        /// Identifier that exists in both scopes.
        ident: String,
        /// Description of the target scope.
        scope: String,
    },
}

// =============================================================================
// TESTS
// =============================================================================
