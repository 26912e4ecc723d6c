//! # JS Scope Crate
//!
//! Symbol identity and hierarchical name allocation for the JS IR.
//!
//! ## Architecture
//!
//! ```text
//! Scopes (arena)
//!   ├── Scope  (parent, kind, own identifier table, temporaries)
//!   └── Name   (identifier, temporary flag, owning scope)
//! ```
//!
//! Names and scopes are addressed through copyable handles ([`NameId`],
//! [`ScopeId`]). IR nodes store handles, so many nodes can reference the same
//! declared symbol while the arena remains the single owner.
//!
//! ## Usage
//!
//! ```rust
//! use js_scope::{ScopeKind, Scopes};
//!
//! let mut scopes = Scopes::new();
//! let function = scopes.new_scope(scopes.root(), ScopeKind::Function, "f");
//!
//! let x = scopes.declare_name(function, "x");
//! let fresh = scopes.declare_fresh_name(function, "x");
//! assert_eq!(scopes.ident(x), "x");
//! assert_eq!(scopes.ident(fresh), "x_0");
//! ```
//!
//! ## Design Principles
//!
//! - **Handles, not references**: equality of names is handle equality
//! - **Single owner**: a name lives in exactly one scope's table
//! - **Deterministic**: fresh names depend only on what is visible

pub mod error;
pub mod fresh;
pub mod ids;
pub mod name;
pub mod scope;
pub mod scopes;

// Re-exports for convenience
pub use error::ScopeError;
pub use ids::{NameId, ScopeId};
pub use name::Name;
pub use scope::{Scope, ScopeKind};
pub use scopes::{NameMapping, Scopes};
