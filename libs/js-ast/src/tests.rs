//! # AST Tests
//!
//! Cross-module tests: node attachments, serialization of whole
//! containers and the rewriting traversal of programs and fragments.

use crate::{
    BinaryOperator, Comment, Context, DeepCopy, Expression, Fragment, IntLiteral, Node, Program,
    SideEffectKind, SourceLocation, Statement, StringLiteral, UsageError, Vars, Visitor,
    VisitorWithContext,
};

/// Tests that expression statements report the location of their expression.
#[test]
fn test_expression_statement_source_comes_from_expression() {
    let mut expression = Expression::int(1);
    expression
        .set_source(SourceLocation::new("a.kt", 3, 7))
        .expect("expressions accept a source");
    let mut statement = expression.make_statement();

    assert_eq!(statement.source().map(|s| s.line), Some(3));
    let result = statement.set_source(SourceLocation::new("a.kt", 9, 0));
    assert_eq!(result, Err(UsageError::SourceOnExpressionStatement));
    assert_eq!(statement.source().map(|s| s.line), Some(3));
}

#[test]
fn test_source_on_other_statements() {
    let mut statement = Statement::ret(None);
    assert!(statement.source().is_none());
    statement
        .set_source(SourceLocation::new("b.kt", 1, 1))
        .expect("return accepts a source");
    assert_eq!(statement.source().map(|s| s.file.as_str()), Some("b.kt"));
    statement.clear_source();
    assert!(statement.source().is_none());
}

#[test]
fn test_metadata_through_enum() {
    let mut expression = Expression::invoke(Expression::this(), Vec::new());
    assert_eq!(expression.metadata().side_effects(), SideEffectKind::Affects);
    expression.metadata_mut().set_side_effects(SideEffectKind::Pure);
    expression.metadata_mut().set_synthetic(true);

    assert_eq!(expression.metadata().side_effects(), SideEffectKind::Pure);
    assert!(expression.metadata().is_synthetic());
}

/// Tests that comments and metadata survive a deep copy.
#[test]
fn test_copy_keeps_attachments() {
    let mut program = Program::new();
    let mut expression = Expression::string("x");
    expression.meta_mut().add_leading_comment(Comment::single_line("why"));
    expression.metadata_mut().set_synthetic(true);

    let copy = expression.copy(program.scopes_mut());
    assert_eq!(copy, expression);
    assert_eq!(copy.meta().leading_comments().len(), 1);
    assert!(copy.metadata().is_synthetic());
}

#[test]
fn test_program_serde_roundtrip() {
    let mut program = Program::new();
    let top = program.top_scope();
    let x = program.scopes_mut().declare_name(top, "x");
    program
        .global_block_mut()
        .push(Vars::single(x, Some(Expression::int(1))));
    program.global_block_mut().push(Statement::ret(Some(Expression::binary(
        BinaryOperator::Add,
        Expression::name(x),
        Expression::int(2),
    ))));

    let json = serde_json::to_string(&program).expect("serialize");
    let back: Program = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back.global_block(), program.global_block());
    assert_eq!(back.top_scope(), top);
    assert_eq!(back.scopes().ident(x), "x");
}

// =============================================================================
// CONTAINER TRAVERSAL
// =============================================================================

struct IncrementInts;

impl VisitorWithContext for IncrementInts {
    fn end_visit_int(&mut self, x: &mut IntLiteral, ctx: &mut Context<'_, Expression>) {
        ctx.replace_me(Expression::int(x.value + 1)).expect("expression slot");
    }
}

#[derive(Default)]
struct CollectInts(Vec<i32>);

impl Visitor for CollectInts {
    fn visit_int(&mut self, x: &IntLiteral) {
        self.0.push(x.value);
    }
}

#[derive(Default)]
struct CollectStrings(Vec<String>);

impl Visitor for CollectStrings {
    fn visit_string(&mut self, x: &StringLiteral) {
        self.0.push(x.value.clone());
    }
}

#[test]
fn test_program_rewrite() {
    let mut program = Program::new();
    program.global_block_mut().push(Expression::int(1));
    program.global_block_mut().push(Expression::int(5));

    IncrementInts.accept_program(&mut program);

    let mut ints = CollectInts::default();
    program.accept(&mut ints);
    assert_eq!(ints.0, vec![2, 6]);
}

#[test]
fn test_fragment_visit_order() {
    let mut fragment = Fragment::new("p");
    fragment.exports.push(Expression::string("exports"));
    fragment.initializers.push(Expression::string("initializers"));
    fragment.declarations.push(Expression::string("declarations"));
    fragment.imports_block.push(Expression::string("imports"));
    fragment.add_import("b", Expression::string("import b"));
    fragment.add_import("a", Expression::string("import a"));

    let mut strings = CollectStrings::default();
    fragment.accept(&mut strings);
    assert_eq!(
        strings.0,
        vec!["imports", "declarations", "initializers", "exports", "import a", "import b"]
    );
}

#[test]
fn test_fragment_rewrite_reaches_import_table() {
    let mut fragment = Fragment::new("p");
    fragment.declarations.push(Expression::int(10));
    fragment.add_import("m", Expression::int(20));

    IncrementInts.accept_fragment(&mut fragment);

    assert_eq!(fragment.imports.get("m"), Some(&Expression::int(21)));
    let mut ints = CollectInts::default();
    fragment.accept(&mut ints);
    assert_eq!(ints.0, vec![11, 21]);
}
