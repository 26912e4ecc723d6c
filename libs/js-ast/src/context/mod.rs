//! # Rewrite Contexts
//!
//! A [`Context`] describes the slot a node occupies while a
//! [`VisitorWithContext`] visits it, and records the edits the pass makes
//! to that slot.
//!
//! ## Slots
//!
//! | Kind                  | `replace_me` | `add_previous` / `add_next` / `remove_me` |
//! |-----------------------|--------------|-------------------------------------------|
//! | [`ContextKind::List`]   | yes          | yes                                       |
//! | [`ContextKind::Single`] | yes          | [`UsageError::NotAListContext`]           |
//! | [`ContextKind::Lvalue`] | yes          | [`UsageError::NotAListContext`]           |
//!
//! Some slots hold only part of a node family: a `for` initializer is a
//! `var` declaration or an expression statement. Replacing such a node with
//! anything else fails with [`UsageError::ReplacementNotAllowed`].
//!
//! Edits are recorded, not applied: the slot is rewritten once the node's
//! `end_visit_*` returned. Nodes inserted with `add_previous` are skipped;
//! nodes inserted with `add_next` are visited next, before the following
//! original sibling.
//!
//! ## Statement levels
//!
//! Every statement of a statement list being traversed opens a statement
//! level. [`Context::statement_level`] reaches the innermost one, so an
//! expression pass can hoist declarations in front of the statement that
//! contains the expression.

pub mod traverse;
pub mod visitor;

pub use visitor::VisitorWithContext;

use crate::error::UsageError;
use crate::nodes::Statement;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CONTEXT KIND
// =============================================================================

/// The kind of slot a node occupies in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextKind {
    /// An element of a list; siblings can be inserted and the node removed.
    List,
    /// A single-child field.
    Single,
    /// A single-child field that is written to: assignment targets,
    /// operands of `++`/`--`/`delete`, and `for-in` targets.
    Lvalue,
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContextKind::List => "list",
            ContextKind::Single => "single",
            ContextKind::Lvalue => "lvalue",
        })
    }
}

// =============================================================================
// SPLICE
// =============================================================================

/// Edits recorded against one slot.
#[derive(Debug)]
pub(crate) struct Splice<T> {
    previous: Vec<T>,
    next: Vec<T>,
    replacement: Option<T>,
    removed: bool,
}

impl<T> Default for Splice<T> {
    fn default() -> Self {
        Self {
            previous: Vec::new(),
            next: Vec::new(),
            replacement: None,
            removed: false,
        }
    }
}

impl<T> Splice<T> {
    pub(crate) fn take_replacement(&mut self) -> Option<T> {
        self.replacement.take()
    }

    /// Applies the edits to `list[index]` and returns the index of the next
    /// element to visit: the first inserted next sibling, if any.
    ///
    /// Inserted nodes keep their call order: all previous siblings end up
    /// directly before the slot, all next siblings directly after it.
    pub(crate) fn apply(self, list: &mut Vec<T>, index: usize) -> usize {
        let Splice {
            previous,
            next,
            replacement,
            removed,
        } = self;

        let mut after = index;
        if removed {
            list.remove(index);
        } else {
            if let Some(node) = replacement {
                list[index] = node;
            }
            after += 1;
        }

        let (before_count, after_count) = (previous.len(), next.len());
        for (offset, node) in next.into_iter().enumerate() {
            list.insert(after + offset, node);
        }
        for (offset, node) in previous.into_iter().enumerate() {
            list.insert(index + offset, node);
        }
        if removed || before_count + after_count > 0 {
            trace!(
                "spliced list at {}: {} before, {} after, removed: {}",
                index,
                before_count,
                after_count,
                removed
            );
        }
        after + before_count
    }
}

// =============================================================================
// STATEMENT LEVELS
// =============================================================================

/// Stack of the statements currently being traversed, innermost last.
#[derive(Debug, Default)]
pub struct StatementLevels {
    levels: Vec<Splice<Statement>>,
}

impl StatementLevels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of statement lists currently open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// The innermost enclosing statement.
    ///
    /// # Errors
    ///
    /// [`UsageError::NoStatementLevel`] if no statement list is being traversed.
    pub fn current(&mut self) -> Result<StatementLevel<'_>, UsageError> {
        self.levels
            .last_mut()
            .map(|splice| StatementLevel { splice })
            .ok_or(UsageError::NoStatementLevel)
    }

    pub(crate) fn push(&mut self) {
        self.levels.push(Splice::default());
    }

    pub(crate) fn pop(&mut self) -> Splice<Statement> {
        self.levels.pop().unwrap_or_default()
    }

    /// Splice of the innermost statement. Only called while a level is open.
    pub(crate) fn top(&mut self) -> &mut Splice<Statement> {
        if self.levels.is_empty() {
            self.push();
        }
        let last = self.levels.len() - 1;
        &mut self.levels[last]
    }
}

/// Handle to the innermost statement of a statement list being traversed.
pub struct StatementLevel<'a> {
    splice: &'a mut Splice<Statement>,
}

impl StatementLevel<'_> {
    /// Inserts `statement` before the current statement.
    pub fn add_previous(&mut self, statement: Statement) {
        self.splice.previous.push(statement);
    }

    /// Inserts `statement` after the current statement.
    pub fn add_next(&mut self, statement: Statement) {
        self.splice.next.push(statement);
    }
}

// =============================================================================
// CONTEXT
// =============================================================================

/// Where a context records its edits.
enum Target<'a, T> {
    /// A splice owned by the traversal of the slot.
    Own(&'a mut Splice<T>),
    /// The innermost statement level; statement list elements share it with
    /// everything hoisted from inside them.
    Level(fn(&mut StatementLevels) -> &mut Splice<T>),
}

/// Nodes a narrowed slot can hold.
struct Restriction<T> {
    slot: &'static str,
    accepts: fn(&T) -> bool,
}

/// The slot of the node being visited.
pub struct Context<'a, T> {
    kind: ContextKind,
    target: Target<'a, T>,
    levels: &'a mut StatementLevels,
    restriction: Option<Restriction<T>>,
}

impl<'a, T> Context<'a, T> {
    pub(crate) fn own(kind: ContextKind, splice: &'a mut Splice<T>, levels: &'a mut StatementLevels) -> Self {
        Self {
            kind,
            target: Target::Own(splice),
            levels,
            restriction: None,
        }
    }

    /// Narrows the slot to the nodes `accepts` admits.
    pub(crate) fn restricted(mut self, slot: &'static str, accepts: fn(&T) -> bool) -> Self {
        self.restriction = Some(Restriction { slot, accepts });
        self
    }

    fn splice(&mut self) -> &mut Splice<T> {
        match &mut self.target {
            Target::Own(splice) => &mut **splice,
            Target::Level(select) => (*select)(&mut *self.levels),
        }
    }

    fn require_list(&self, operation: &'static str) -> Result<(), UsageError> {
        match self.kind {
            ContextKind::List => Ok(()),
            kind => Err(UsageError::NotAListContext { operation, kind }),
        }
    }

    #[inline]
    pub fn kind(&self) -> ContextKind {
        self.kind
    }

    #[inline]
    pub fn is_lvalue(&self) -> bool {
        self.kind == ContextKind::Lvalue
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        self.kind == ContextKind::List
    }

    /// Replaces the node with `node` once its visit ends.
    ///
    /// The replacement is not visited; the children of the original node are
    /// still traversed unless `visit_*` returned false. A later call wins.
    ///
    /// # Errors
    ///
    /// [`UsageError::ReplacementNotAllowed`] if the slot cannot hold `node`;
    /// nothing is recorded then.
    pub fn replace_me(&mut self, node: T) -> Result<(), UsageError> {
        if let Some(restriction) = &self.restriction {
            if !(restriction.accepts)(&node) {
                return Err(UsageError::ReplacementNotAllowed {
                    slot: restriction.slot,
                });
            }
        }
        self.splice().replacement = Some(node);
        Ok(())
    }

    /// Inserts `node` before this node. Only valid in a list.
    pub fn add_previous(&mut self, node: T) -> Result<(), UsageError> {
        self.require_list("add_previous")?;
        self.splice().previous.push(node);
        Ok(())
    }

    /// Inserts `node` after this node. Only valid in a list.
    pub fn add_next(&mut self, node: T) -> Result<(), UsageError> {
        self.require_list("add_next")?;
        self.splice().next.push(node);
        Ok(())
    }

    /// Removes this node from its list. Takes precedence over `replace_me`.
    pub fn remove_me(&mut self) -> Result<(), UsageError> {
        self.require_list("remove_me")?;
        self.splice().removed = true;
        Ok(())
    }

    /// The innermost statement of the statement lists being traversed.
    pub fn statement_level(&mut self) -> Result<StatementLevel<'_>, UsageError> {
        self.levels.current()
    }

    /// Statement levels to hand to [`traverse`] functions when a pass
    /// recurses into a subtree by hand.
    #[inline]
    pub fn levels(&mut self) -> &mut StatementLevels {
        &mut *self.levels
    }
}

impl<'a> Context<'a, Statement> {
    /// Context of a statement list element; edits go to its statement level.
    pub(crate) fn statement(levels: &'a mut StatementLevels) -> Self {
        Self {
            kind: ContextKind::List,
            target: Target::Level(StatementLevels::top),
            levels,
            restriction: None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
