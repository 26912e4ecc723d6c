//! # IR Nodes
//!
//! The tree is two closed families, [`Expression`] and [`Statement`], plus
//! the auxiliary nodes that only appear in fixed positions (parameters,
//! property initializers, switch members, catch clauses, var declarations).
//!
//! Every node struct carries a private [`NodeMeta`] reached through the
//! [`Node`] trait. Nodes own their children exclusively; symbols are shared
//! through [`NameId`](js_scope::NameId) handles instead.

use crate::error::UsageError;
use crate::meta::{Metadata, NodeMeta, SourceLocation};

/// Implements [`Node`] by exposing the `meta` field.
macro_rules! impl_node {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $crate::nodes::Node for $ty {
                #[inline]
                fn meta(&self) -> &$crate::meta::NodeMeta {
                    &self.meta
                }

                #[inline]
                fn meta_mut(&mut self) -> &mut $crate::meta::NodeMeta {
                    &mut self.meta
                }
            }
        )*
    };
}

/// Implements `From<Struct> for Enum` for each `Variant(Struct)` pair.
macro_rules! impl_from_variant {
    ($target:ident { $($variant:ident($ty:ident)),* $(,)? }) => {
        $(
            impl From<$ty> for $target {
                fn from(node: $ty) -> Self {
                    $target::$variant(node)
                }
            }
        )*
    };
}

pub mod expression;
pub mod parts;
pub mod statement;

pub use expression::*;
pub use parts::*;
pub use statement::*;

// =============================================================================
// NODE TRAIT
// =============================================================================

/// Attachments shared by every node.
pub trait Node {
    fn meta(&self) -> &NodeMeta;

    fn meta_mut(&mut self) -> &mut NodeMeta;

    fn source(&self) -> Option<&SourceLocation> {
        self.meta().source()
    }

    /// Attaches the source location this node was generated from.
    ///
    /// # Errors
    ///
    /// [`UsageError::SourceOnExpressionStatement`] for expression statements,
    /// whose location is the one of their expression.
    fn set_source(&mut self, source: SourceLocation) -> Result<(), UsageError> {
        self.meta_mut().set_source(Some(source));
        Ok(())
    }

    fn clear_source(&mut self) {
        self.meta_mut().set_source(None);
    }

    fn metadata(&self) -> &Metadata {
        self.meta().metadata()
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        self.meta_mut().metadata_mut()
    }
}
