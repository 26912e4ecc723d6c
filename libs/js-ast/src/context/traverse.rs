//! # Traversal Engine
//!
//! Drives a [`VisitorWithContext`] over the tree and applies the edits it
//! records. The `accept_*` functions take the [`StatementLevels`] of the
//! running traversal; a pass that recurses by hand from inside a visit
//! passes [`Context::levels`] along so hoisting keeps working.
//!
//! ## Statement slots
//!
//! A single-statement slot (loop body, `if` branch, labelled statement) is
//! traversed as a one-element statement list and collapsed back with
//! [`Statement::from_statements`]. Inserting or removing there is therefore
//! allowed and produces a block.

use crate::context::{Context, ContextKind, Splice, StatementLevels, VisitorWithContext};
use crate::nodes::*;
use crate::program::{Fragment, FragmentBody, Program};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use log::trace;
use stacker::maybe_grow;

#[inline]
fn grow<R>(f: impl FnOnce() -> R) -> R {
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, f)
}

// =============================================================================
// SLOTS
// =============================================================================

/// Traverses an expression in a single-child slot.
pub fn accept_expression<V>(v: &mut V, levels: &mut StatementLevels, expression: &mut Expression)
where
    V: VisitorWithContext + ?Sized,
{
    accept_expression_slot(v, levels, expression, ContextKind::Single);
}

/// Traverses an expression that is written to.
pub fn accept_lvalue<V>(v: &mut V, levels: &mut StatementLevels, expression: &mut Expression)
where
    V: VisitorWithContext + ?Sized,
{
    accept_expression_slot(v, levels, expression, ContextKind::Lvalue);
}

fn accept_expression_slot<V>(
    v: &mut V,
    levels: &mut StatementLevels,
    expression: &mut Expression,
    kind: ContextKind,
) where
    V: VisitorWithContext + ?Sized,
{
    let mut splice = Splice::default();
    grow(|| expression.traverse(v, &mut Context::own(kind, &mut splice, levels)));
    if let Some(replacement) = splice.take_replacement() {
        trace!("replaced {} with {}", expression.kind_name(), replacement.kind_name());
        *expression = replacement;
    }
}

fn accept_optional_expression<V>(v: &mut V, levels: &mut StatementLevels, expression: &mut Option<Expression>)
where
    V: VisitorWithContext + ?Sized,
{
    if let Some(expression) = expression {
        accept_expression(v, levels, expression);
    }
}

/// Traverses a statement in a single-statement slot.
pub fn accept_statement<V>(v: &mut V, levels: &mut StatementLevels, statement: &mut Statement)
where
    V: VisitorWithContext + ?Sized,
{
    let mut statements = vec![std::mem::replace(statement, Statement::empty())];
    accept_statements(v, levels, &mut statements);
    *statement = Statement::from_statements(statements);
}

/// Traverses a block in a block-typed slot (function bodies, `try` parts,
/// catch bodies). A replacement that is not a block is wrapped in one.
pub fn accept_block<V>(v: &mut V, levels: &mut StatementLevels, block: &mut Block)
where
    V: VisitorWithContext + ?Sized,
{
    let mut splice = Splice::default();
    grow(|| block.traverse(v, &mut Context::own(ContextKind::Single, &mut splice, levels)));
    if let Some(replacement) = splice.take_replacement() {
        *block = replacement.into_block();
    }
}

fn accept_parameter<V>(v: &mut V, levels: &mut StatementLevels, parameter: &mut Parameter)
where
    V: VisitorWithContext + ?Sized,
{
    let mut splice = Splice::default();
    parameter.traverse(v, &mut Context::own(ContextKind::Single, &mut splice, levels));
    if let Some(replacement) = splice.take_replacement() {
        *parameter = replacement;
    }
}

fn accept_for_init<V>(v: &mut V, levels: &mut StatementLevels, init: &mut ForInit)
where
    V: VisitorWithContext + ?Sized,
{
    let replacement = match init {
        ForInit::Expression(expression) => {
            accept_expression(v, levels, expression);
            return;
        }
        ForInit::Vars(vars) => {
            let mut splice = Splice::default();
            let mut ctx = Context::own(ContextKind::Single, &mut splice, levels)
                .restricted("for-loop initializer", ForInit::admits);
            vars.traverse(v, &mut ctx);
            splice.take_replacement()
        }
    };
    // The restricted context only records statements `ForInit` admits.
    if let Some(Ok(replacement)) = replacement.map(ForInit::try_from) {
        trace!("replaced for-loop initializer");
        *init = replacement;
    }
}

// =============================================================================
// LISTS
// =============================================================================

fn accept_list<T, V, F>(v: &mut V, levels: &mut StatementLevels, list: &mut Vec<T>, mut traverse_one: F)
where
    V: VisitorWithContext + ?Sized,
    F: FnMut(&mut T, &mut V, &mut Context<'_, T>),
{
    let mut index = 0;
    while index < list.len() {
        let mut splice = Splice::default();
        traverse_one(
            &mut list[index],
            v,
            &mut Context::own(ContextKind::List, &mut splice, levels),
        );
        index = splice.apply(list, index);
    }
}

/// Traverses an expression list (arguments, array elements).
pub fn accept_expressions<V>(v: &mut V, levels: &mut StatementLevels, expressions: &mut Vec<Expression>)
where
    V: VisitorWithContext + ?Sized,
{
    accept_list(v, levels, expressions, |expression, v, ctx| {
        grow(|| expression.traverse(v, ctx))
    });
}

/// Traverses a statement list.
///
/// Each element opens a statement level. Its own edits and everything
/// hoisted into that level from inside it are applied together, in call
/// order, once the element's visit ends.
pub fn accept_statements<V>(v: &mut V, levels: &mut StatementLevels, statements: &mut Vec<Statement>)
where
    V: VisitorWithContext + ?Sized,
{
    let mut index = 0;
    while index < statements.len() {
        levels.push();
        let statement = &mut statements[index];
        grow(|| statement.traverse(v, &mut Context::statement(levels)));
        let splice = levels.pop();
        index = splice.apply(statements, index);
    }
}

fn accept_parameters<V>(v: &mut V, levels: &mut StatementLevels, parameters: &mut Vec<Parameter>)
where
    V: VisitorWithContext + ?Sized,
{
    accept_list(v, levels, parameters, |parameter, v, ctx| parameter.traverse(v, ctx));
}

// =============================================================================
// CONTAINERS
// =============================================================================

/// Traverses the global block of a program.
///
/// Passes that hold the scope arena use [`Program::split_mut`] and
/// [`VisitorWithContext::accept_block`] instead.
pub fn accept_program<V>(v: &mut V, program: &mut Program)
where
    V: VisitorWithContext + ?Sized,
{
    let (_, block) = program.split_mut();
    accept_block(v, &mut StatementLevels::new(), block);
}

/// Traverses the blocks and import table of a fragment.
pub fn accept_fragment<V>(v: &mut V, fragment: &mut Fragment)
where
    V: VisitorWithContext + ?Sized,
{
    let (_, body) = fragment.split_mut();
    accept_fragment_body(v, body);
}

/// Traverses the parts of a fragment split from its arena: import block,
/// declarations, initializers, exports, then the import table in tag order.
pub fn accept_fragment_body<V>(v: &mut V, body: FragmentBody<'_>)
where
    V: VisitorWithContext + ?Sized,
{
    let mut levels = StatementLevels::new();
    accept_block(v, &mut levels, body.imports_block);
    accept_block(v, &mut levels, body.declarations);
    accept_block(v, &mut levels, body.initializers);
    accept_block(v, &mut levels, body.exports);
    for expression in body.imports.values_mut() {
        accept_expression(v, &mut levels, expression);
    }
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

impl Expression {
    pub(crate) fn traverse<V>(&mut self, v: &mut V, ctx: &mut Context<'_, Expression>)
    where
        V: VisitorWithContext + ?Sized,
    {
        match self {
            Expression::ArrayAccess(x) => x.traverse(v, ctx),
            Expression::ArrayLiteral(x) => x.traverse(v, ctx),
            Expression::Binary(x) => x.traverse(v, ctx),
            Expression::Conditional(x) => x.traverse(v, ctx),
            Expression::Function(x) => x.traverse(v, ctx),
            Expression::Invocation(x) => x.traverse(v, ctx),
            Expression::NameRef(x) => x.traverse(v, ctx),
            Expression::New(x) => x.traverse(v, ctx),
            Expression::ObjectLiteral(x) => x.traverse(v, ctx),
            Expression::Prefix(x) => x.traverse(v, ctx),
            Expression::Postfix(x) => x.traverse(v, ctx),
            Expression::Null(x) => {
                v.visit_null(x, ctx);
                v.end_visit_null(x, ctx);
            }
            Expression::Boolean(x) => {
                v.visit_boolean(x, ctx);
                v.end_visit_boolean(x, ctx);
            }
            Expression::Int(x) => {
                v.visit_int(x, ctx);
                v.end_visit_int(x, ctx);
            }
            Expression::Double(x) => {
                v.visit_double(x, ctx);
                v.end_visit_double(x, ctx);
            }
            Expression::String(x) => {
                v.visit_string(x, ctx);
                v.end_visit_string(x, ctx);
            }
            Expression::RegExp(x) => {
                v.visit_regexp(x, ctx);
                v.end_visit_regexp(x, ctx);
            }
            Expression::This(x) => {
                v.visit_this(x, ctx);
                v.end_visit_this(x, ctx);
            }
        }
    }
}

impl ArrayAccess {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Expression>) {
        if v.visit_array_access(self, ctx) {
            accept_expression(v, ctx.levels(), &mut self.array);
            accept_expression(v, ctx.levels(), &mut self.index);
        }
        v.end_visit_array_access(self, ctx);
    }
}

impl ArrayLiteral {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Expression>) {
        if v.visit_array_literal(self, ctx) {
            accept_expressions(v, ctx.levels(), &mut self.elements);
        }
        v.end_visit_array_literal(self, ctx);
    }
}

impl BinaryOperation {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Expression>) {
        if v.visit_binary(self, ctx) {
            if self.op.is_assignment() {
                accept_lvalue(v, ctx.levels(), &mut self.left);
            } else {
                accept_expression(v, ctx.levels(), &mut self.left);
            }
            accept_expression(v, ctx.levels(), &mut self.right);
        }
        v.end_visit_binary(self, ctx);
    }
}

impl Conditional {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Expression>) {
        if v.visit_conditional(self, ctx) {
            accept_expression(v, ctx.levels(), &mut self.test);
            accept_expression(v, ctx.levels(), &mut self.then_expr);
            accept_expression(v, ctx.levels(), &mut self.else_expr);
        }
        v.end_visit_conditional(self, ctx);
    }
}

impl Function {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Expression>) {
        if v.visit_function(self, ctx) {
            accept_parameters(v, ctx.levels(), &mut self.parameters);
            accept_block(v, ctx.levels(), &mut self.body);
        }
        v.end_visit_function(self, ctx);
    }
}

impl Invocation {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Expression>) {
        if v.visit_invocation(self, ctx) {
            accept_expression(v, ctx.levels(), &mut self.qualifier);
            accept_expressions(v, ctx.levels(), &mut self.arguments);
        }
        v.end_visit_invocation(self, ctx);
    }
}

impl NameRef {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Expression>) {
        if v.visit_name_ref(self, ctx) {
            if let Some(qualifier) = &mut self.qualifier {
                accept_expression(v, ctx.levels(), qualifier);
            }
        }
        v.end_visit_name_ref(self, ctx);
    }
}

impl New {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Expression>) {
        if v.visit_new(self, ctx) {
            accept_expression(v, ctx.levels(), &mut self.constructor);
            accept_expressions(v, ctx.levels(), &mut self.arguments);
        }
        v.end_visit_new(self, ctx);
    }
}

impl ObjectLiteral {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Expression>) {
        if v.visit_object_literal(self, ctx) {
            accept_list(v, ctx.levels(), &mut self.properties, |property, v, ctx| {
                property.traverse(v, ctx)
            });
        }
        v.end_visit_object_literal(self, ctx);
    }
}

impl PrefixOperation {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Expression>) {
        if v.visit_prefix(self, ctx) {
            if self.op.is_modifying() {
                accept_lvalue(v, ctx.levels(), &mut self.arg);
            } else {
                accept_expression(v, ctx.levels(), &mut self.arg);
            }
        }
        v.end_visit_prefix(self, ctx);
    }
}

impl PostfixOperation {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Expression>) {
        if v.visit_postfix(self, ctx) {
            if self.op.is_modifying() {
                accept_lvalue(v, ctx.levels(), &mut self.arg);
            } else {
                accept_expression(v, ctx.levels(), &mut self.arg);
            }
        }
        v.end_visit_postfix(self, ctx);
    }
}

// =============================================================================
// STATEMENTS
// =============================================================================

impl Statement {
    pub(crate) fn traverse<V>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>)
    where
        V: VisitorWithContext + ?Sized,
    {
        match self {
            Statement::Block(x) => x.traverse(v, ctx),
            Statement::Break(x) => {
                v.visit_break(x, ctx);
                v.end_visit_break(x, ctx);
            }
            Statement::Continue(x) => {
                v.visit_continue(x, ctx);
                v.end_visit_continue(x, ctx);
            }
            Statement::Debugger(x) => {
                v.visit_debugger(x, ctx);
                v.end_visit_debugger(x, ctx);
            }
            Statement::Empty(x) => {
                v.visit_empty(x, ctx);
                v.end_visit_empty(x, ctx);
            }
            Statement::Expression(x) => x.traverse(v, ctx),
            Statement::For(x) => x.traverse(v, ctx),
            Statement::ForIn(x) => x.traverse(v, ctx),
            Statement::If(x) => x.traverse(v, ctx),
            Statement::Label(x) => x.traverse(v, ctx),
            Statement::Return(x) => x.traverse(v, ctx),
            Statement::Switch(x) => x.traverse(v, ctx),
            Statement::Throw(x) => x.traverse(v, ctx),
            Statement::Try(x) => x.traverse(v, ctx),
            Statement::Vars(x) => x.traverse(v, ctx),
            Statement::While(x) => x.traverse(v, ctx),
            Statement::DoWhile(x) => x.traverse(v, ctx),
        }
    }
}

impl Block {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_block(self, ctx) {
            accept_statements(v, ctx.levels(), &mut self.statements);
        }
        v.end_visit_block(self, ctx);
    }
}

impl ExpressionStatement {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_expression_statement(self, ctx) {
            accept_expression(v, ctx.levels(), &mut self.expression);
        }
        v.end_visit_expression_statement(self, ctx);
    }
}

impl For {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_for(self, ctx) {
            if let Some(init) = &mut self.init {
                accept_for_init(v, ctx.levels(), init);
            }
            accept_optional_expression(v, ctx.levels(), &mut self.condition);
            accept_optional_expression(v, ctx.levels(), &mut self.increment);
            accept_statement(v, ctx.levels(), &mut self.body);
        }
        v.end_visit_for(self, ctx);
    }
}

impl ForIn {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_for_in(self, ctx) {
            if let Some(iter_expr) = &mut self.iter_expr {
                accept_lvalue(v, ctx.levels(), iter_expr);
            }
            accept_expression(v, ctx.levels(), &mut self.object_expr);
            accept_statement(v, ctx.levels(), &mut self.body);
        }
        v.end_visit_for_in(self, ctx);
    }
}

impl If {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_if(self, ctx) {
            accept_expression(v, ctx.levels(), &mut self.test);
            accept_statement(v, ctx.levels(), &mut self.then_stmt);
            if let Some(else_stmt) = &mut self.else_stmt {
                accept_statement(v, ctx.levels(), else_stmt);
            }
        }
        v.end_visit_if(self, ctx);
    }
}

impl Label {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_label(self, ctx) {
            accept_statement(v, ctx.levels(), &mut self.statement);
        }
        v.end_visit_label(self, ctx);
    }
}

impl Return {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_return(self, ctx) {
            accept_optional_expression(v, ctx.levels(), &mut self.expression);
        }
        v.end_visit_return(self, ctx);
    }
}

impl Switch {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_switch(self, ctx) {
            accept_expression(v, ctx.levels(), &mut self.expression);
            accept_list(v, ctx.levels(), &mut self.cases, |member, v, ctx| member.traverse(v, ctx));
        }
        v.end_visit_switch(self, ctx);
    }
}

impl Throw {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_throw(self, ctx) {
            accept_expression(v, ctx.levels(), &mut self.expression);
        }
        v.end_visit_throw(self, ctx);
    }
}

impl Try {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_try(self, ctx) {
            accept_block(v, ctx.levels(), &mut self.try_block);
            accept_list(v, ctx.levels(), &mut self.catches, |catch, v, ctx| catch.traverse(v, ctx));
            if let Some(finally_block) = &mut self.finally_block {
                accept_block(v, ctx.levels(), finally_block);
            }
        }
        v.end_visit_try(self, ctx);
    }
}

impl Vars {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_vars(self, ctx) {
            accept_list(v, ctx.levels(), &mut self.vars, |var, v, ctx| var.traverse(v, ctx));
        }
        v.end_visit_vars(self, ctx);
    }
}

impl While {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_while(self, ctx) {
            accept_expression(v, ctx.levels(), &mut self.condition);
            accept_statement(v, ctx.levels(), &mut self.body);
        }
        v.end_visit_while(self, ctx);
    }
}

impl DoWhile {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Statement>) {
        if v.visit_do_while(self, ctx) {
            accept_statement(v, ctx.levels(), &mut self.body);
            accept_expression(v, ctx.levels(), &mut self.condition);
        }
        v.end_visit_do_while(self, ctx);
    }
}

// =============================================================================
// AUXILIARY NODES
// =============================================================================

impl Parameter {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Parameter>) {
        v.visit_parameter(self, ctx);
        v.end_visit_parameter(self, ctx);
    }
}

impl PropertyInitializer {
    fn traverse<V: VisitorWithContext + ?Sized>(
        &mut self,
        v: &mut V,
        ctx: &mut Context<'_, PropertyInitializer>,
    ) {
        if v.visit_property_initializer(self, ctx) {
            accept_expression(v, ctx.levels(), &mut self.label);
            accept_expression(v, ctx.levels(), &mut self.value);
        }
        v.end_visit_property_initializer(self, ctx);
    }
}

impl SwitchMember {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, SwitchMember>) {
        match self {
            SwitchMember::Case(case) => {
                if v.visit_case(case, ctx) {
                    accept_expression(v, ctx.levels(), &mut case.test);
                    accept_statements(v, ctx.levels(), &mut case.statements);
                }
                v.end_visit_case(case, ctx);
            }
            SwitchMember::Default(default) => {
                if v.visit_default(default, ctx) {
                    accept_statements(v, ctx.levels(), &mut default.statements);
                }
                v.end_visit_default(default, ctx);
            }
        }
    }
}

impl Catch {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Catch>) {
        if v.visit_catch(self, ctx) {
            accept_parameter(v, ctx.levels(), &mut self.parameter);
            accept_optional_expression(v, ctx.levels(), &mut self.condition);
            accept_block(v, ctx.levels(), &mut self.body);
        }
        v.end_visit_catch(self, ctx);
    }
}

impl Var {
    fn traverse<V: VisitorWithContext + ?Sized>(&mut self, v: &mut V, ctx: &mut Context<'_, Var>) {
        if v.visit_var(self, ctx) {
            accept_optional_expression(v, ctx.levels(), &mut self.initializer);
        }
        v.end_visit_var(self, ctx);
    }
}
