//! # Read-only Visitor
//!
//! Double dispatch over the IR: `node.accept(visitor)` calls the visitor's
//! `visit_*` method for the node's kind, whose default implementation calls
//! `node.accept_children(visitor)`. Overriding a `visit_*` method without
//! calling `accept_children` prunes the subtree.
//!
//! Expressions and statements pass through [`Visitor::visit_expression`] and
//! [`Visitor::visit_statement`] first, which dispatch to the kind-specific
//! method by default.
//!
//! ## Child order
//!
//! | Node                  | Children, in order                              |
//! |-----------------------|-------------------------------------------------|
//! | array access          | array, index                                    |
//! | array literal         | elements                                        |
//! | binary operation      | left, right                                     |
//! | conditional           | test, then, else                                |
//! | function              | parameters, body                                |
//! | invocation / new      | qualifier or constructor, arguments             |
//! | name reference        | qualifier                                       |
//! | object literal        | property initializers (label, value)            |
//! | prefix / postfix      | operand                                         |
//! | block                 | statements                                      |
//! | for                   | init, condition, increment, body                |
//! | for-in                | target expression, object, body                 |
//! | if                    | test, then, else                                |
//! | switch                | expression, members (case test, statements)     |
//! | try                   | try block, catches, finally block               |
//! | catch                 | parameter, condition, body                      |
//! | vars                  | declarations (initializer)                      |
//! | while                 | condition, body                                 |
//! | do-while              | body, condition                                 |
//! | fragment              | import block, declarations, initializers, export block, import table |
//!
//! ## Example
//!
//! ```rust
//! use js_ast::{BinaryOperator, Expression, IntLiteral, Visitor};
//!
//! #[derive(Default)]
//! struct Ints(Vec<i32>);
//!
//! impl Visitor for Ints {
//!     fn visit_int(&mut self, x: &IntLiteral) {
//!         self.0.push(x.value);
//!     }
//! }
//!
//! let expr = Expression::binary(BinaryOperator::Add, Expression::int(1), Expression::int(2));
//! let mut ints = Ints::default();
//! expr.accept(&mut ints);
//! assert_eq!(ints.0, vec![1, 2]);
//! ```

use crate::nodes::*;
use crate::program::{Fragment, Program};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;

/// A read-only pass over the tree.
pub trait Visitor {
    /// Called for every expression before its kind-specific method.
    fn visit_expression(&mut self, x: &Expression) {
        x.dispatch(self);
    }

    /// Called for every statement before its kind-specific method.
    fn visit_statement(&mut self, x: &Statement) {
        x.dispatch(self);
    }

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    fn visit_array_access(&mut self, x: &ArrayAccess) {
        x.accept_children(self);
    }

    fn visit_array_literal(&mut self, x: &ArrayLiteral) {
        x.accept_children(self);
    }

    fn visit_binary(&mut self, x: &BinaryOperation) {
        x.accept_children(self);
    }

    fn visit_conditional(&mut self, x: &Conditional) {
        x.accept_children(self);
    }

    fn visit_function(&mut self, x: &Function) {
        x.accept_children(self);
    }

    fn visit_invocation(&mut self, x: &Invocation) {
        x.accept_children(self);
    }

    fn visit_name_ref(&mut self, x: &NameRef) {
        x.accept_children(self);
    }

    fn visit_new(&mut self, x: &New) {
        x.accept_children(self);
    }

    fn visit_object_literal(&mut self, x: &ObjectLiteral) {
        x.accept_children(self);
    }

    fn visit_prefix(&mut self, x: &PrefixOperation) {
        x.accept_children(self);
    }

    fn visit_postfix(&mut self, x: &PostfixOperation) {
        x.accept_children(self);
    }

    fn visit_null(&mut self, _x: &NullLiteral) {}

    fn visit_boolean(&mut self, _x: &BooleanLiteral) {}

    fn visit_int(&mut self, _x: &IntLiteral) {}

    fn visit_double(&mut self, _x: &DoubleLiteral) {}

    fn visit_string(&mut self, _x: &StringLiteral) {}

    fn visit_regexp(&mut self, _x: &RegExpLiteral) {}

    fn visit_this(&mut self, _x: &ThisRef) {}

    // =========================================================================
    // STATEMENTS
    // =========================================================================

    fn visit_block(&mut self, x: &Block) {
        x.accept_children(self);
    }

    fn visit_break(&mut self, _x: &Break) {}

    fn visit_continue(&mut self, _x: &Continue) {}

    fn visit_debugger(&mut self, _x: &Debugger) {}

    fn visit_empty(&mut self, _x: &Empty) {}

    fn visit_expression_statement(&mut self, x: &ExpressionStatement) {
        x.accept_children(self);
    }

    fn visit_for(&mut self, x: &For) {
        x.accept_children(self);
    }

    fn visit_for_in(&mut self, x: &ForIn) {
        x.accept_children(self);
    }

    fn visit_if(&mut self, x: &If) {
        x.accept_children(self);
    }

    fn visit_label(&mut self, x: &Label) {
        x.accept_children(self);
    }

    fn visit_return(&mut self, x: &Return) {
        x.accept_children(self);
    }

    fn visit_switch(&mut self, x: &Switch) {
        x.accept_children(self);
    }

    fn visit_throw(&mut self, x: &Throw) {
        x.accept_children(self);
    }

    fn visit_try(&mut self, x: &Try) {
        x.accept_children(self);
    }

    fn visit_vars(&mut self, x: &Vars) {
        x.accept_children(self);
    }

    fn visit_while(&mut self, x: &While) {
        x.accept_children(self);
    }

    fn visit_do_while(&mut self, x: &DoWhile) {
        x.accept_children(self);
    }

    // =========================================================================
    // AUXILIARY NODES AND CONTAINERS
    // =========================================================================

    fn visit_parameter(&mut self, _x: &Parameter) {}

    fn visit_property_initializer(&mut self, x: &PropertyInitializer) {
        x.accept_children(self);
    }

    fn visit_case(&mut self, x: &SwitchCase) {
        x.accept_children(self);
    }

    fn visit_default(&mut self, x: &SwitchDefault) {
        x.accept_children(self);
    }

    fn visit_catch(&mut self, x: &Catch) {
        x.accept_children(self);
    }

    fn visit_var(&mut self, x: &Var) {
        x.accept_children(self);
    }

    fn visit_program(&mut self, x: &Program) {
        x.accept_children(self);
    }

    fn visit_fragment(&mut self, x: &Fragment) {
        x.accept_children(self);
    }
}

// =============================================================================
// ACCEPT
// =============================================================================

/// Implements `accept` by calling the given `visit_*` method.
macro_rules! impl_accept {
    ($($ty:ident => $visit:ident),* $(,)?) => {
        $(
            impl $ty {
                /// Calls the visitor's method for this node kind.
                pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
                    visitor.$visit(self);
                }
            }
        )*
    };
}

impl_accept!(
    ArrayAccess => visit_array_access,
    ArrayLiteral => visit_array_literal,
    BinaryOperation => visit_binary,
    Conditional => visit_conditional,
    Function => visit_function,
    Invocation => visit_invocation,
    NameRef => visit_name_ref,
    New => visit_new,
    ObjectLiteral => visit_object_literal,
    PrefixOperation => visit_prefix,
    PostfixOperation => visit_postfix,
    NullLiteral => visit_null,
    BooleanLiteral => visit_boolean,
    IntLiteral => visit_int,
    DoubleLiteral => visit_double,
    StringLiteral => visit_string,
    RegExpLiteral => visit_regexp,
    ThisRef => visit_this,
    Block => visit_block,
    Break => visit_break,
    Continue => visit_continue,
    Debugger => visit_debugger,
    Empty => visit_empty,
    ExpressionStatement => visit_expression_statement,
    For => visit_for,
    ForIn => visit_for_in,
    If => visit_if,
    Label => visit_label,
    Return => visit_return,
    Switch => visit_switch,
    Throw => visit_throw,
    Try => visit_try,
    Vars => visit_vars,
    While => visit_while,
    DoWhile => visit_do_while,
    Parameter => visit_parameter,
    PropertyInitializer => visit_property_initializer,
    SwitchCase => visit_case,
    SwitchDefault => visit_default,
    Catch => visit_catch,
    Var => visit_var,
);

impl Expression {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_expression(self);
    }

    /// Calls the kind-specific `visit_*` method, bypassing `visit_expression`.
    pub fn dispatch<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match self {
            Expression::ArrayAccess(x) => x.accept(visitor),
            Expression::ArrayLiteral(x) => x.accept(visitor),
            Expression::Binary(x) => x.accept(visitor),
            Expression::Conditional(x) => x.accept(visitor),
            Expression::Function(x) => x.accept(visitor),
            Expression::Invocation(x) => x.accept(visitor),
            Expression::NameRef(x) => x.accept(visitor),
            Expression::New(x) => x.accept(visitor),
            Expression::ObjectLiteral(x) => x.accept(visitor),
            Expression::Prefix(x) => x.accept(visitor),
            Expression::Postfix(x) => x.accept(visitor),
            Expression::Null(x) => x.accept(visitor),
            Expression::Boolean(x) => x.accept(visitor),
            Expression::Int(x) => x.accept(visitor),
            Expression::Double(x) => x.accept(visitor),
            Expression::String(x) => x.accept(visitor),
            Expression::RegExp(x) => x.accept(visitor),
            Expression::This(x) => x.accept(visitor),
        })
    }
}

impl Statement {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_statement(self);
    }

    /// Calls the kind-specific `visit_*` method, bypassing `visit_statement`.
    pub fn dispatch<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match self {
            Statement::Block(x) => x.accept(visitor),
            Statement::Break(x) => x.accept(visitor),
            Statement::Continue(x) => x.accept(visitor),
            Statement::Debugger(x) => x.accept(visitor),
            Statement::Empty(x) => x.accept(visitor),
            Statement::Expression(x) => x.accept(visitor),
            Statement::For(x) => x.accept(visitor),
            Statement::ForIn(x) => x.accept(visitor),
            Statement::If(x) => x.accept(visitor),
            Statement::Label(x) => x.accept(visitor),
            Statement::Return(x) => x.accept(visitor),
            Statement::Switch(x) => x.accept(visitor),
            Statement::Throw(x) => x.accept(visitor),
            Statement::Try(x) => x.accept(visitor),
            Statement::Vars(x) => x.accept(visitor),
            Statement::While(x) => x.accept(visitor),
            Statement::DoWhile(x) => x.accept(visitor),
        })
    }
}

impl SwitchMember {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            SwitchMember::Case(x) => x.accept(visitor),
            SwitchMember::Default(x) => x.accept(visitor),
        }
    }
}

// =============================================================================
// ACCEPT CHILDREN
// =============================================================================

fn accept_all<V: Visitor + ?Sized>(expressions: &[Expression], visitor: &mut V) {
    for expression in expressions {
        expression.accept(visitor);
    }
}

fn accept_statements<V: Visitor + ?Sized>(statements: &[Statement], visitor: &mut V) {
    for statement in statements {
        statement.accept(visitor);
    }
}

impl ArrayAccess {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.array.accept(visitor);
        self.index.accept(visitor);
    }
}

impl ArrayLiteral {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        accept_all(&self.elements, visitor);
    }
}

impl BinaryOperation {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.left.accept(visitor);
        self.right.accept(visitor);
    }
}

impl Conditional {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.test.accept(visitor);
        self.then_expr.accept(visitor);
        self.else_expr.accept(visitor);
    }
}

impl Function {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        for parameter in &self.parameters {
            parameter.accept(visitor);
        }
        self.body.accept(visitor);
    }
}

impl Invocation {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.qualifier.accept(visitor);
        accept_all(&self.arguments, visitor);
    }
}

impl NameRef {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        if let Some(qualifier) = &self.qualifier {
            qualifier.accept(visitor);
        }
    }
}

impl New {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.constructor.accept(visitor);
        accept_all(&self.arguments, visitor);
    }
}

impl ObjectLiteral {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        for property in &self.properties {
            property.accept(visitor);
        }
    }
}

impl PrefixOperation {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.arg.accept(visitor);
    }
}

impl PostfixOperation {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.arg.accept(visitor);
    }
}

impl Block {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        accept_statements(&self.statements, visitor);
    }
}

impl ExpressionStatement {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.expression.accept(visitor);
    }
}

impl For {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match &self.init {
            Some(ForInit::Vars(vars)) => vars.accept(visitor),
            Some(ForInit::Expression(expression)) => expression.accept(visitor),
            None => {}
        }
        if let Some(condition) = &self.condition {
            condition.accept(visitor);
        }
        if let Some(increment) = &self.increment {
            increment.accept(visitor);
        }
        self.body.accept(visitor);
    }
}

impl ForIn {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        if let Some(iter_expr) = &self.iter_expr {
            iter_expr.accept(visitor);
        }
        self.object_expr.accept(visitor);
        self.body.accept(visitor);
    }
}

impl If {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.test.accept(visitor);
        self.then_stmt.accept(visitor);
        if let Some(else_stmt) = &self.else_stmt {
            else_stmt.accept(visitor);
        }
    }
}

impl Label {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.statement.accept(visitor);
    }
}

impl Return {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        if let Some(expression) = &self.expression {
            expression.accept(visitor);
        }
    }
}

impl Switch {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.expression.accept(visitor);
        for member in &self.cases {
            member.accept(visitor);
        }
    }
}

impl Throw {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.expression.accept(visitor);
    }
}

impl Try {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.try_block.accept(visitor);
        for catch in &self.catches {
            catch.accept(visitor);
        }
        if let Some(finally_block) = &self.finally_block {
            finally_block.accept(visitor);
        }
    }
}

impl Vars {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        for var in &self.vars {
            var.accept(visitor);
        }
    }
}

impl While {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.condition.accept(visitor);
        self.body.accept(visitor);
    }
}

impl DoWhile {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.body.accept(visitor);
        self.condition.accept(visitor);
    }
}

impl PropertyInitializer {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.label.accept(visitor);
        self.value.accept(visitor);
    }
}

impl SwitchCase {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.test.accept(visitor);
        accept_statements(&self.statements, visitor);
    }
}

impl SwitchDefault {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        accept_statements(&self.statements, visitor);
    }
}

impl Catch {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.parameter.accept(visitor);
        if let Some(condition) = &self.condition {
            condition.accept(visitor);
        }
        self.body.accept(visitor);
    }
}

impl Var {
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        if let Some(initializer) = &self.initializer {
            initializer.accept(visitor);
        }
    }
}
