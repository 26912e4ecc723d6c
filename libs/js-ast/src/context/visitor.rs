//! # Mutating Visitor
//!
//! [`VisitorWithContext`] has a `visit_*` / `end_visit_*` pair per node kind.
//! `visit_*` runs before the children and returns whether to descend;
//! `end_visit_*` runs after them. Both receive the [`Context`] of the node's
//! slot, through which the pass rewrites the tree.
//!
//! ## Example
//!
//! ```rust
//! use js_ast::{Context, Expression, IntLiteral, VisitorWithContext};
//!
//! /// Replaces every integer literal with its double.
//! struct Double;
//!
//! impl VisitorWithContext for Double {
//!     fn end_visit_int(&mut self, x: &mut IntLiteral, ctx: &mut Context<'_, Expression>) {
//!         ctx.replace_me(Expression::int(x.value * 2)).expect("any expression fits");
//!     }
//! }
//!
//! let mut expr = Expression::invoke(Expression::this(), vec![Expression::int(21)]);
//! Double.accept_expression(&mut expr);
//! match expr {
//!     Expression::Invocation(call) => assert_eq!(call.arguments[0], Expression::int(42)),
//!     _ => unreachable!(),
//! }
//! ```

use crate::context::traverse;
use crate::context::{Context, StatementLevels};
use crate::nodes::*;
use crate::program::{Fragment, Program};

/// A pass that may rewrite the tree while walking it.
///
/// Children are visited in the order documented on
/// [`Visitor`](crate::Visitor). Lvalue slots (assignment targets, operands of
/// `++`/`--`/`delete`, `for-in` targets) get a [`ContextKind::Lvalue`](crate::ContextKind::Lvalue)
/// context.
pub trait VisitorWithContext {
    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    fn visit_array_access(&mut self, _x: &mut ArrayAccess, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_array_access(&mut self, _x: &mut ArrayAccess, _ctx: &mut Context<'_, Expression>) {}

    fn visit_array_literal(&mut self, _x: &mut ArrayLiteral, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_array_literal(&mut self, _x: &mut ArrayLiteral, _ctx: &mut Context<'_, Expression>) {}

    fn visit_binary(&mut self, _x: &mut BinaryOperation, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_binary(&mut self, _x: &mut BinaryOperation, _ctx: &mut Context<'_, Expression>) {}

    fn visit_conditional(&mut self, _x: &mut Conditional, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_conditional(&mut self, _x: &mut Conditional, _ctx: &mut Context<'_, Expression>) {}

    fn visit_function(&mut self, _x: &mut Function, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_function(&mut self, _x: &mut Function, _ctx: &mut Context<'_, Expression>) {}

    fn visit_invocation(&mut self, _x: &mut Invocation, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_invocation(&mut self, _x: &mut Invocation, _ctx: &mut Context<'_, Expression>) {}

    fn visit_name_ref(&mut self, _x: &mut NameRef, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_name_ref(&mut self, _x: &mut NameRef, _ctx: &mut Context<'_, Expression>) {}

    fn visit_new(&mut self, _x: &mut New, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_new(&mut self, _x: &mut New, _ctx: &mut Context<'_, Expression>) {}

    fn visit_object_literal(&mut self, _x: &mut ObjectLiteral, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_object_literal(&mut self, _x: &mut ObjectLiteral, _ctx: &mut Context<'_, Expression>) {}

    fn visit_prefix(&mut self, _x: &mut PrefixOperation, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_prefix(&mut self, _x: &mut PrefixOperation, _ctx: &mut Context<'_, Expression>) {}

    fn visit_postfix(&mut self, _x: &mut PostfixOperation, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_postfix(&mut self, _x: &mut PostfixOperation, _ctx: &mut Context<'_, Expression>) {}

    fn visit_null(&mut self, _x: &mut NullLiteral, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_null(&mut self, _x: &mut NullLiteral, _ctx: &mut Context<'_, Expression>) {}

    fn visit_boolean(&mut self, _x: &mut BooleanLiteral, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_boolean(&mut self, _x: &mut BooleanLiteral, _ctx: &mut Context<'_, Expression>) {}

    fn visit_int(&mut self, _x: &mut IntLiteral, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_int(&mut self, _x: &mut IntLiteral, _ctx: &mut Context<'_, Expression>) {}

    fn visit_double(&mut self, _x: &mut DoubleLiteral, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_double(&mut self, _x: &mut DoubleLiteral, _ctx: &mut Context<'_, Expression>) {}

    fn visit_string(&mut self, _x: &mut StringLiteral, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_string(&mut self, _x: &mut StringLiteral, _ctx: &mut Context<'_, Expression>) {}

    fn visit_regexp(&mut self, _x: &mut RegExpLiteral, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_regexp(&mut self, _x: &mut RegExpLiteral, _ctx: &mut Context<'_, Expression>) {}

    fn visit_this(&mut self, _x: &mut ThisRef, _ctx: &mut Context<'_, Expression>) -> bool {
        true
    }
    fn end_visit_this(&mut self, _x: &mut ThisRef, _ctx: &mut Context<'_, Expression>) {}

    // =========================================================================
    // STATEMENTS
    // =========================================================================

    fn visit_block(&mut self, _x: &mut Block, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_block(&mut self, _x: &mut Block, _ctx: &mut Context<'_, Statement>) {}

    fn visit_break(&mut self, _x: &mut Break, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_break(&mut self, _x: &mut Break, _ctx: &mut Context<'_, Statement>) {}

    fn visit_continue(&mut self, _x: &mut Continue, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_continue(&mut self, _x: &mut Continue, _ctx: &mut Context<'_, Statement>) {}

    fn visit_debugger(&mut self, _x: &mut Debugger, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_debugger(&mut self, _x: &mut Debugger, _ctx: &mut Context<'_, Statement>) {}

    fn visit_empty(&mut self, _x: &mut Empty, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_empty(&mut self, _x: &mut Empty, _ctx: &mut Context<'_, Statement>) {}

    fn visit_expression_statement(
        &mut self,
        _x: &mut ExpressionStatement,
        _ctx: &mut Context<'_, Statement>,
    ) -> bool {
        true
    }
    fn end_visit_expression_statement(
        &mut self,
        _x: &mut ExpressionStatement,
        _ctx: &mut Context<'_, Statement>,
    ) {
    }

    fn visit_for(&mut self, _x: &mut For, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_for(&mut self, _x: &mut For, _ctx: &mut Context<'_, Statement>) {}

    fn visit_for_in(&mut self, _x: &mut ForIn, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_for_in(&mut self, _x: &mut ForIn, _ctx: &mut Context<'_, Statement>) {}

    fn visit_if(&mut self, _x: &mut If, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_if(&mut self, _x: &mut If, _ctx: &mut Context<'_, Statement>) {}

    fn visit_label(&mut self, _x: &mut Label, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_label(&mut self, _x: &mut Label, _ctx: &mut Context<'_, Statement>) {}

    fn visit_return(&mut self, _x: &mut Return, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_return(&mut self, _x: &mut Return, _ctx: &mut Context<'_, Statement>) {}

    fn visit_switch(&mut self, _x: &mut Switch, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_switch(&mut self, _x: &mut Switch, _ctx: &mut Context<'_, Statement>) {}

    fn visit_throw(&mut self, _x: &mut Throw, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_throw(&mut self, _x: &mut Throw, _ctx: &mut Context<'_, Statement>) {}

    fn visit_try(&mut self, _x: &mut Try, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_try(&mut self, _x: &mut Try, _ctx: &mut Context<'_, Statement>) {}

    fn visit_vars(&mut self, _x: &mut Vars, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_vars(&mut self, _x: &mut Vars, _ctx: &mut Context<'_, Statement>) {}

    fn visit_while(&mut self, _x: &mut While, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_while(&mut self, _x: &mut While, _ctx: &mut Context<'_, Statement>) {}

    fn visit_do_while(&mut self, _x: &mut DoWhile, _ctx: &mut Context<'_, Statement>) -> bool {
        true
    }
    fn end_visit_do_while(&mut self, _x: &mut DoWhile, _ctx: &mut Context<'_, Statement>) {}

    // =========================================================================
    // AUXILIARY NODES
    // =========================================================================

    fn visit_parameter(&mut self, _x: &mut Parameter, _ctx: &mut Context<'_, Parameter>) -> bool {
        true
    }
    fn end_visit_parameter(&mut self, _x: &mut Parameter, _ctx: &mut Context<'_, Parameter>) {}

    fn visit_property_initializer(
        &mut self,
        _x: &mut PropertyInitializer,
        _ctx: &mut Context<'_, PropertyInitializer>,
    ) -> bool {
        true
    }
    fn end_visit_property_initializer(
        &mut self,
        _x: &mut PropertyInitializer,
        _ctx: &mut Context<'_, PropertyInitializer>,
    ) {
    }

    fn visit_case(&mut self, _x: &mut SwitchCase, _ctx: &mut Context<'_, SwitchMember>) -> bool {
        true
    }
    fn end_visit_case(&mut self, _x: &mut SwitchCase, _ctx: &mut Context<'_, SwitchMember>) {}

    fn visit_default(&mut self, _x: &mut SwitchDefault, _ctx: &mut Context<'_, SwitchMember>) -> bool {
        true
    }
    fn end_visit_default(&mut self, _x: &mut SwitchDefault, _ctx: &mut Context<'_, SwitchMember>) {}

    fn visit_catch(&mut self, _x: &mut Catch, _ctx: &mut Context<'_, Catch>) -> bool {
        true
    }
    fn end_visit_catch(&mut self, _x: &mut Catch, _ctx: &mut Context<'_, Catch>) {}

    fn visit_var(&mut self, _x: &mut Var, _ctx: &mut Context<'_, Var>) -> bool {
        true
    }
    fn end_visit_var(&mut self, _x: &mut Var, _ctx: &mut Context<'_, Var>) {}

    // =========================================================================
    // ENTRY POINTS
    // =========================================================================

    /// Traverses an expression in a single-child slot.
    fn accept_expression(&mut self, expression: &mut Expression)
    where
        Self: Sized,
    {
        traverse::accept_expression(self, &mut StatementLevels::new(), expression);
    }

    /// Traverses a statement in a single-statement slot.
    fn accept_statement(&mut self, statement: &mut Statement)
    where
        Self: Sized,
    {
        traverse::accept_statement(self, &mut StatementLevels::new(), statement);
    }

    /// Traverses a statement list.
    fn accept_statements(&mut self, statements: &mut Vec<Statement>)
    where
        Self: Sized,
    {
        traverse::accept_statements(self, &mut StatementLevels::new(), statements);
    }

    /// Traverses a block in a block-typed slot.
    fn accept_block(&mut self, block: &mut Block)
    where
        Self: Sized,
    {
        traverse::accept_block(self, &mut StatementLevels::new(), block);
    }

    /// Traverses the global block of a program.
    fn accept_program(&mut self, program: &mut Program)
    where
        Self: Sized,
    {
        traverse::accept_program(self, program);
    }

    /// Traverses every block of a fragment, then its import table.
    fn accept_fragment(&mut self, fragment: &mut Fragment)
    where
        Self: Sized,
    {
        traverse::accept_fragment(self, fragment);
    }
}
