//! # JS AST Crate
//!
//! Intermediate representation for JavaScript-like code produced by a
//! compiler backend: a typed node tree, a read-only visitor, a rewriting
//! traversal and the program containers. Identifiers are [`NameId`]s into
//! a [`Scopes`](js_scope::Scopes) arena owned by the [`Program`] or
//! [`Fragment`].
//!
//! ## Architecture
//!
//! ```text
//! backend → Program / Fragment (nodes + Scopes) → passes → printer
//!                                      ▲
//!                  Visitor (read) / VisitorWithContext (rewrite)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use js_ast::{DeepCopy, Function, Parameter, Statement};
//! use js_scope::{ScopeKind, Scopes};
//!
//! let mut scopes = Scopes::new();
//! let scope = scopes.new_scope(scopes.root(), ScopeKind::Function, "f");
//! let a = scopes.declare_name(scope, "a");
//! let function = Function::new(scope)
//!     .with_parameters(vec![Parameter::new(a)])
//!     .with_body(Statement::ret(None).into_block());
//!
//! let copy = function.copy(&mut scopes);
//! assert_ne!(copy.scope, function.scope);
//! assert_ne!(copy.parameters[0].name, a);
//! assert_eq!(scopes.ident(copy.parameters[0].name), "a");
//! ```
//!
//! ## Design Principles
//!
//! - **Owned tree**: Every child is owned by exactly one parent
//! - **Recorded edits**: Rewrites are requested through a [`Context`] and
//!   applied by the traversal once the node's visit ends
//! - **Arena names**: Nodes hold ids, never references into scopes

pub mod context;
pub mod copy;
pub mod error;
pub mod meta;
pub mod nodes;
pub mod ops;
pub mod program;
pub mod visitor;

// Re-exports for convenience
pub use context::traverse;
pub use context::{Context, ContextKind, StatementLevel, StatementLevels, VisitorWithContext};
pub use copy::{CopyContext, DeepCopy};
pub use error::UsageError;
pub use js_scope::{NameId, ScopeId};
pub use meta::{Comment, CommentKind, MetaValue, Metadata, NodeMeta, SideEffectKind, SourceLocation};
pub use nodes::*;
pub use ops::{BinaryOperator, UnaryOperator};
pub use program::{Fragment, FragmentBody, ImportedModule, Program};
pub use visitor::Visitor;

#[cfg(test)]
mod tests;
