use js_ast::{
    BinaryOperator, Block, Catch, Conditional, DoWhile, Expression, For, ForInit, Function, If,
    IntLiteral, Parameter, Statement, StringLiteral, Try, Vars, Visitor,
};
use js_scope::{ScopeKind, Scopes};

/// Records every literal in visit order.
#[derive(Default)]
struct Literals {
    seen: Vec<String>,
    prune_functions: bool,
}

impl Visitor for Literals {
    fn visit_int(&mut self, x: &IntLiteral) {
        self.seen.push(x.value.to_string());
    }

    fn visit_string(&mut self, x: &StringLiteral) {
        self.seen.push(x.value.clone());
    }

    fn visit_function(&mut self, x: &Function) {
        if !self.prune_functions {
            x.accept_children(self);
        }
    }
}

fn literals(statement: &Statement, prune_functions: bool) -> Vec<String> {
    let mut visitor = Literals {
        prune_functions,
        ..Literals::default()
    };
    statement.accept(&mut visitor);
    visitor.seen
}

#[test]
fn for_children_in_source_order() {
    let mut scopes = Scopes::new();
    let i = scopes.declare_name(scopes.root(), "i");
    let statement: Statement = For::new(
        Some(ForInit::Vars(Vars::single(i, Some(Expression::int(1))))),
        Some(Expression::int(2)),
        Some(Expression::int(3)),
        Expression::string("body").make_statement(),
    )
    .into();

    assert_eq!(literals(&statement, false), vec!["1", "2", "3", "body"]);
}

#[test]
fn do_while_visits_body_before_condition() {
    let statement: Statement = DoWhile::new(Expression::string("body").make_statement(), Expression::int(0)).into();
    assert_eq!(literals(&statement, false), vec!["body", "0"]);
}

#[test]
fn if_visits_test_then_else() {
    let statement: Statement = If::new(
        Expression::string("test"),
        Expression::string("then").make_statement(),
        Some(Expression::string("else").make_statement()),
    )
    .into();
    assert_eq!(literals(&statement, false), vec!["test", "then", "else"]);
}

#[test]
fn conditional_visits_test_then_else() {
    let conditional: Expression = Conditional::new(
        Expression::string("test"),
        Expression::string("then"),
        Expression::string("else"),
    )
    .into();
    assert_eq!(literals(&conditional.make_statement(), false), vec!["test", "then", "else"]);
}

#[test]
fn try_visits_block_catches_then_finally() {
    let mut scopes = Scopes::new();
    let catches: Vec<Catch> = ["first", "second"]
        .into_iter()
        .map(|label| {
            let scope = scopes.new_scope(scopes.root(), ScopeKind::Catch, "catch");
            let e = scopes.declare_name(scope, "e");
            Catch::new(scope, Parameter::new(e), Block::new(vec![Expression::string(label).make_statement()]))
                .with_condition(Expression::string(format!("{label} condition")))
        })
        .collect();
    let statement: Statement = Try::new(
        Block::new(vec![Expression::string("try").make_statement()]),
        catches,
        Some(Block::new(vec![Expression::string("finally").make_statement()])),
    )
    .into();

    assert_eq!(
        literals(&statement, false),
        vec!["try", "first condition", "first", "second condition", "second", "finally"]
    );
}

#[test]
fn invocation_visits_qualifier_before_arguments() {
    let call = Expression::invoke(
        Expression::invoke(Expression::string("callee"), vec![Expression::int(0)]),
        vec![Expression::int(1), Expression::string("two")],
    );
    assert_eq!(literals(&call.make_statement(), false), vec!["callee", "0", "1", "two"]);
}

#[test]
fn skipping_accept_children_prunes_the_subtree() {
    let mut scopes = Scopes::new();
    let scope = scopes.new_scope(scopes.root(), ScopeKind::Function, "f");
    let function = Function::new(scope).with_body(Block::new(vec![Statement::ret(Some(Expression::string("inner")))]));
    let statement = Expression::invoke(function.into(), vec![Expression::string("arg")]).make_statement();

    assert_eq!(literals(&statement, false), vec!["inner", "arg"]);
    assert_eq!(literals(&statement, true), vec!["arg"]);
}

/// Counts expressions through the generic hook only.
#[derive(Default)]
struct Depth {
    current: usize,
    max: usize,
}

impl Visitor for Depth {
    fn visit_expression(&mut self, x: &Expression) {
        self.current += 1;
        self.max = self.max.max(self.current);
        x.dispatch(self);
        self.current -= 1;
    }
}

#[test]
fn generic_hook_sees_every_expression() {
    let nested = (0..4).fold(Expression::int(0), |acc, n| {
        Expression::binary(BinaryOperator::Sub, acc, Expression::int(n))
    });
    let mut depth = Depth::default();
    nested.accept(&mut depth);
    assert_eq!(depth.max, 5);
    assert_eq!(depth.current, 0);
}
