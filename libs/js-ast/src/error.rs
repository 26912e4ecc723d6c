//! # Usage Errors
//!
//! Faults raised when a pass uses the IR against its contract. They are
//! reported at the call site and are not meant to be retried.

use crate::context::ContextKind;
use thiserror::Error;

/// Contract violations by a pass author.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A list-only operation was invoked on a single-child or lvalue slot.
    #[error("`{operation}` requires a list context, but the node occupies a {kind} slot")]
    NotAListContext {
        /// The rejected operation.
        operation: &'static str,
        /// Kind of the slot the node occupies.
        kind: ContextKind,
    },

    /// A replacement was offered to a slot that cannot hold it.
    #[error("the replacement cannot be placed in a {slot} slot")]
    ReplacementNotAllowed {
        /// Description of the slot.
        slot: &'static str,
    },

    /// A statement was hoisted while no statement list was being traversed.
    #[error("no statement list encloses the current node")]
    NoStatementLevel,

    /// A source location was attached to an expression statement.
    #[error("source location of an expression statement belongs to its expression")]
    SourceOnExpressionStatement,
}

// =============================================================================
// TESTS
// =============================================================================
