use js_ast::{
    BinaryOperator, Block, Catch, Context, ContextKind, Expression, ExpressionStatement, For, ForIn,
    ForInit, Function, If, IntLiteral, NameId, NameRef, ObjectLiteral, Parameter, PropertyInitializer,
    Statement, StringLiteral, Switch, SwitchCase, SwitchDefault, SwitchMember, Try, UnaryOperator,
    UsageError, Var, Vars, VisitorWithContext,
};
use js_scope::{ScopeKind, Scopes};

fn text(value: &str) -> Statement {
    Expression::string(value).make_statement()
}

fn texts(statements: &[Statement]) -> Vec<String> {
    statements
        .iter()
        .map(|statement| match statement {
            Statement::Expression(x) => match &x.expression {
                Expression::String(s) => s.value.clone(),
                other => panic!("unexpected expression {other:?}"),
            },
            other => panic!("unexpected statement {other:?}"),
        })
        .collect()
}

fn is_text(x: &ExpressionStatement, value: &str) -> bool {
    matches!(&x.expression, Expression::String(s) if s.value == value)
}

/// Edits the statement whose text matches `target` and records every
/// string literal it visits.
struct EditAt {
    target: &'static str,
    edit: fn(&mut Context<'_, Statement>),
    visited: Vec<String>,
}

impl EditAt {
    fn new(target: &'static str, edit: fn(&mut Context<'_, Statement>)) -> Self {
        Self {
            target,
            edit,
            visited: Vec::new(),
        }
    }
}

impl VisitorWithContext for EditAt {
    fn visit_string(&mut self, x: &mut StringLiteral, _ctx: &mut Context<'_, Expression>) -> bool {
        self.visited.push(x.value.clone());
        true
    }

    fn end_visit_expression_statement(&mut self, x: &mut ExpressionStatement, ctx: &mut Context<'_, Statement>) {
        if is_text(x, self.target) {
            (self.edit)(ctx);
        }
    }
}

// =============================================================================
// STATEMENT LISTS
// =============================================================================

#[test]
fn inserted_previous_is_skipped_and_next_is_visited() {
    let mut statements = vec![text("A"), text("B"), text("C")];
    let mut pass = EditAt::new("B", |ctx| {
        ctx.add_previous(text("X")).expect("list");
        ctx.add_next(text("Y")).expect("list");
    });
    pass.accept_statements(&mut statements);

    assert_eq!(texts(&statements), vec!["A", "X", "B", "Y", "C"]);
    assert_eq!(pass.visited, vec!["A", "B", "Y", "C"]);
}

#[test]
fn several_insertions_keep_call_order() {
    let mut statements = vec![text("A"), text("B")];
    let mut pass = EditAt::new("A", |ctx| {
        ctx.add_next(text("N1")).expect("list");
        ctx.add_previous(text("P1")).expect("list");
        ctx.add_next(text("N2")).expect("list");
        ctx.add_previous(text("P2")).expect("list");
    });
    pass.accept_statements(&mut statements);

    assert_eq!(texts(&statements), vec!["P1", "P2", "A", "N1", "N2", "B"]);
    assert_eq!(pass.visited, vec!["A", "N1", "N2", "B"]);
}

#[test]
fn removed_statement_continues_with_next_sibling() {
    let mut statements = vec![text("A"), text("B"), text("C")];
    let mut pass = EditAt::new("B", |ctx| ctx.remove_me().expect("list"));
    pass.accept_statements(&mut statements);

    assert_eq!(texts(&statements), vec!["A", "C"]);
    assert_eq!(pass.visited, vec!["A", "B", "C"]);
}

#[test]
fn replacement_is_not_visited() {
    let mut statements = vec![text("A"), text("B"), text("C")];
    let mut pass = EditAt::new("B", |ctx| ctx.replace_me(text("Z")).expect("list"));
    pass.accept_statements(&mut statements);

    assert_eq!(texts(&statements), vec!["A", "Z", "C"]);
    assert_eq!(pass.visited, vec!["A", "B", "C"]);
}

#[test]
fn remove_wins_over_replace() {
    let mut statements = vec![text("A"), text("B")];
    let mut pass = EditAt::new("A", |ctx| {
        ctx.replace_me(text("Z")).expect("list");
        ctx.remove_me().expect("list");
    });
    pass.accept_statements(&mut statements);

    assert_eq!(texts(&statements), vec!["B"]);
}

fn case_bodies(statement: &Statement) -> Vec<Vec<String>> {
    match statement {
        Statement::Switch(x) => x.cases.iter().map(|member| texts(member.statements())).collect(),
        other => panic!("expected switch, got {other:?}"),
    }
}

fn switch_on_zero() -> Statement {
    Switch::new(
        Expression::int(0),
        vec![
            SwitchCase::new(Expression::int(0), vec![text("A"), text("B")]).into(),
            SwitchMember::Default(SwitchDefault::new(vec![text("C")])),
        ],
    )
    .into()
}

#[test]
fn case_body_accepts_insertions() {
    let mut statement = switch_on_zero();
    let mut pass = EditAt::new("A", |ctx| ctx.add_next(text("N")).expect("case body"));
    pass.accept_statement(&mut statement);

    assert_eq!(case_bodies(&statement), vec![vec!["A", "N", "B"], vec!["C"]]);
    assert_eq!(pass.visited, vec!["A", "N", "B", "C"]);
}

#[test]
fn case_body_statement_can_remove_itself() {
    let mut statement = switch_on_zero();
    EditAt::new("B", |ctx| ctx.remove_me().expect("case body")).accept_statement(&mut statement);
    EditAt::new("C", |ctx| ctx.remove_me().expect("default body")).accept_statement(&mut statement);

    assert_eq!(case_bodies(&statement), vec![vec!["A"], vec![]]);
}

// =============================================================================
// AUXILIARY LISTS
// =============================================================================

/// Removes the catch for `target`, or inserts `extra` after it.
struct EditCatches {
    target: NameId,
    extra: Option<Catch>,
    visited: Vec<NameId>,
}

impl VisitorWithContext for EditCatches {
    fn visit_catch(&mut self, x: &mut Catch, _ctx: &mut Context<'_, Catch>) -> bool {
        self.visited.push(x.parameter.name);
        true
    }

    fn end_visit_catch(&mut self, x: &mut Catch, ctx: &mut Context<'_, Catch>) {
        if x.parameter.name != self.target {
            return;
        }
        match self.extra.take() {
            Some(extra) => ctx.add_next(extra).expect("catch list"),
            None => ctx.remove_me().expect("catch list"),
        }
    }
}

fn new_catch(scopes: &mut Scopes, ident: &str) -> (Catch, NameId) {
    let scope = scopes.new_scope(scopes.root(), ScopeKind::Catch, "catch");
    let name = scopes.declare_name(scope, ident);
    (Catch::new(scope, Parameter::new(name), Block::empty()), name)
}

fn catch_names(statement: &Statement) -> Vec<NameId> {
    match statement {
        Statement::Try(x) => x.catches.iter().map(|c| c.parameter.name).collect(),
        other => panic!("expected try, got {other:?}"),
    }
}

#[test]
fn catch_list_edits() {
    let mut scopes = Scopes::new();
    let (first, e1) = new_catch(&mut scopes, "e1");
    let (second, e2) = new_catch(&mut scopes, "e2");
    let (third, e3) = new_catch(&mut scopes, "e3");
    let mut statement: Statement = Try::new(Block::empty(), vec![first, second, third], None).into();

    let mut removal = EditCatches {
        target: e2,
        extra: None,
        visited: Vec::new(),
    };
    removal.accept_statement(&mut statement);
    assert_eq!(catch_names(&statement), vec![e1, e3]);
    assert_eq!(removal.visited, vec![e1, e2, e3]);

    let (extra, e4) = new_catch(&mut scopes, "e4");
    let mut insertion = EditCatches {
        target: e1,
        extra: Some(extra),
        visited: Vec::new(),
    };
    insertion.accept_statement(&mut statement);
    assert_eq!(catch_names(&statement), vec![e1, e4, e3]);
    assert_eq!(insertion.visited, vec![e1, e4, e3]);
}

/// Drops the property labelled `drop` and adds `c: 3` after the one labelled `a`.
struct EditProperties {
    drop: &'static str,
}

fn label_is(x: &PropertyInitializer, value: &str) -> bool {
    matches!(&x.label, Expression::String(s) if s.value == value)
}

impl VisitorWithContext for EditProperties {
    fn end_visit_property_initializer(
        &mut self,
        x: &mut PropertyInitializer,
        ctx: &mut Context<'_, PropertyInitializer>,
    ) {
        if label_is(x, self.drop) {
            ctx.remove_me().expect("property list");
        } else if label_is(x, "a") {
            ctx.add_next(PropertyInitializer::new(Expression::string("c"), Expression::int(3)))
                .expect("property list");
        }
    }
}

#[test]
fn object_literal_property_edits() {
    let mut object: Expression = ObjectLiteral::new(vec![
        PropertyInitializer::new(Expression::string("a"), Expression::int(1)),
        PropertyInitializer::new(Expression::string("b"), Expression::int(2)),
    ])
    .into();

    EditProperties { drop: "b" }.accept_expression(&mut object);

    let expected: Expression = ObjectLiteral::new(vec![
        PropertyInitializer::new(Expression::string("a"), Expression::int(1)),
        PropertyInitializer::new(Expression::string("c"), Expression::int(3)),
    ])
    .into();
    assert_eq!(object, expected);
}

/// Drops the declaration of `drop` and declares `add` after `after`.
struct EditVars {
    drop: NameId,
    after: NameId,
    add: NameId,
}

impl VisitorWithContext for EditVars {
    fn end_visit_var(&mut self, x: &mut Var, ctx: &mut Context<'_, Var>) {
        if x.name == self.drop {
            ctx.remove_me().expect("declaration list");
        } else if x.name == self.after {
            ctx.add_next(Var::new(self.add, Some(Expression::int(3))))
                .expect("declaration list");
        }
    }
}

#[test]
fn declaration_list_edits() {
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let [x, y, z] = ["x", "y", "z"].map(|ident| scopes.declare_name(root, ident));
    let mut statements = vec![Vars::new(vec![Var::new(x, None), Var::new(y, Some(Expression::int(2)))]).into()];

    EditVars { drop: x, after: y, add: z }.accept_statements(&mut statements);

    let expected: Statement = Vars::new(vec![
        Var::new(y, Some(Expression::int(2))),
        Var::new(z, Some(Expression::int(3))),
    ])
    .into();
    assert_eq!(statements, vec![expected]);
}

// =============================================================================
// FOR-LOOP INITIALIZER
// =============================================================================

/// Replaces every `var` statement with `replacement` and records the outcome.
struct ReplaceVars {
    replacement: fn() -> Statement,
    results: Vec<Result<(), UsageError>>,
}

impl VisitorWithContext for ReplaceVars {
    fn end_visit_vars(&mut self, _x: &mut Vars, ctx: &mut Context<'_, Statement>) {
        self.results.push(ctx.replace_me((self.replacement)()));
    }
}

fn counting_loop(scopes: &mut Scopes) -> Statement {
    let i = scopes.declare_name(scopes.root(), "i");
    For::new(
        Some(ForInit::Vars(Vars::single(i, Some(Expression::int(0))))),
        None,
        None,
        Statement::empty(),
    )
    .into()
}

fn loop_init(statement: &Statement) -> Option<&ForInit> {
    match statement {
        Statement::For(x) => x.init.as_ref(),
        other => panic!("expected for, got {other:?}"),
    }
}

#[test]
fn for_initializer_rejects_foreign_statements() {
    let mut scopes = Scopes::new();
    let mut statement = counting_loop(&mut scopes);
    let mut pass = ReplaceVars {
        replacement: || Statement::ret(None),
        results: Vec::new(),
    };
    pass.accept_statement(&mut statement);

    assert_eq!(
        pass.results,
        vec![Err(UsageError::ReplacementNotAllowed {
            slot: "for-loop initializer",
        })]
    );
    assert!(matches!(loop_init(&statement), Some(ForInit::Vars(_))));
}

#[test]
fn for_initializer_accepts_an_expression_statement() {
    let mut scopes = Scopes::new();
    let mut statement = counting_loop(&mut scopes);
    let mut pass = ReplaceVars {
        replacement: || Expression::int(5).make_statement(),
        results: Vec::new(),
    };
    pass.accept_statement(&mut statement);

    assert_eq!(pass.results, vec![Ok(())]);
    assert_eq!(loop_init(&statement), Some(&ForInit::Expression(Expression::int(5))));
}

#[test]
fn for_initializer_rejects_list_edits() {
    struct AppendVars(Vec<UsageError>);

    impl VisitorWithContext for AppendVars {
        fn end_visit_vars(&mut self, _x: &mut Vars, ctx: &mut Context<'_, Statement>) {
            if let Err(err) = ctx.add_next(Statement::empty()) {
                self.0.push(err);
            }
        }
    }

    let mut scopes = Scopes::new();
    let mut statement = counting_loop(&mut scopes);
    let mut pass = AppendVars(Vec::new());
    pass.accept_statement(&mut statement);

    assert_eq!(
        pass.0,
        vec![UsageError::NotAListContext {
            operation: "add_next",
            kind: ContextKind::Single,
        }]
    );
}

// =============================================================================
// SINGLE STATEMENT SLOTS
// =============================================================================

fn if_with_then(then_stmt: Statement) -> Statement {
    If::new(Expression::boolean(true), then_stmt, None).into()
}

fn then_branch(statement: &Statement) -> &Statement {
    match statement {
        Statement::If(x) => &*x.then_stmt,
        other => panic!("expected if, got {other:?}"),
    }
}

#[test]
fn removing_the_only_branch_statement_leaves_an_empty_block() {
    let mut statement = if_with_then(text("T"));
    EditAt::new("T", |ctx| ctx.remove_me().expect("branch is a list slot")).accept_statement(&mut statement);

    match then_branch(&statement) {
        Statement::Block(block) => assert!(block.is_empty()),
        other => panic!("expected empty block, got {other:?}"),
    }
}

#[test]
fn inserting_into_a_branch_produces_a_block() {
    let mut statement = if_with_then(text("T"));
    EditAt::new("T", |ctx| ctx.add_next(text("U")).expect("branch is a list slot"))
        .accept_statement(&mut statement);

    match then_branch(&statement) {
        Statement::Block(block) => assert_eq!(texts(&block.statements), vec!["T", "U"]),
        other => panic!("expected block, got {other:?}"),
    }
}

#[test]
fn replacing_a_branch_statement_keeps_it_unwrapped() {
    let mut statement = if_with_then(text("T"));
    EditAt::new("T", |ctx| ctx.replace_me(text("R")).expect("branch")).accept_statement(&mut statement);

    assert_eq!(texts(std::slice::from_ref(then_branch(&statement))), vec!["R"]);
}

// =============================================================================
// EXPRESSION SLOTS
// =============================================================================

#[derive(Default)]
struct InsertAfterOne {
    visited: Vec<i32>,
    errors: Vec<UsageError>,
}

impl VisitorWithContext for InsertAfterOne {
    fn end_visit_int(&mut self, x: &mut IntLiteral, ctx: &mut Context<'_, Expression>) {
        self.visited.push(x.value);
        if x.value == 1 {
            if let Err(err) = ctx.add_next(Expression::int(9)) {
                self.errors.push(err);
            }
        }
    }
}

#[test]
fn argument_lists_accept_insertions() {
    let mut call = Expression::invoke(Expression::this(), vec![Expression::int(1), Expression::int(2)]);
    let mut pass = InsertAfterOne::default();
    pass.accept_expression(&mut call);

    assert!(pass.errors.is_empty());
    assert_eq!(pass.visited, vec![1, 9, 2]);
    match call {
        Expression::Invocation(call) => assert_eq!(
            call.arguments,
            vec![Expression::int(1), Expression::int(9), Expression::int(2)]
        ),
        other => panic!("expected invocation, got {other:?}"),
    }
}

#[test]
fn single_expression_slot_rejects_list_edits() {
    let mut sum = Expression::binary(BinaryOperator::Add, Expression::int(1), Expression::int(2));
    let mut pass = InsertAfterOne::default();
    pass.accept_expression(&mut sum);

    assert_eq!(
        pass.errors,
        vec![UsageError::NotAListContext {
            operation: "add_next",
            kind: ContextKind::Single,
        }]
    );
    assert_eq!(
        sum,
        Expression::binary(BinaryOperator::Add, Expression::int(1), Expression::int(2))
    );
}

#[derive(Default)]
struct NameKinds(Vec<ContextKind>);

impl VisitorWithContext for NameKinds {
    fn visit_name_ref(&mut self, _x: &mut NameRef, ctx: &mut Context<'_, Expression>) -> bool {
        self.0.push(ctx.kind());
        true
    }
}

#[test]
fn written_operands_get_lvalue_contexts() {
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let x = scopes.declare_name(root, "x");

    let mut statements = vec![
        Expression::assign(Expression::name(x), Expression::name(x)).make_statement(),
        Expression::binary(BinaryOperator::AsgAdd, Expression::name(x), Expression::int(1)).make_statement(),
        Expression::postfix(UnaryOperator::Inc, Expression::name(x)).make_statement(),
        Expression::prefix(UnaryOperator::Neg, Expression::name(x)).make_statement(),
        ForIn::with_target(Expression::name(x), Expression::this(), Statement::empty()).into(),
    ];
    let mut kinds = NameKinds::default();
    kinds.accept_statements(&mut statements);

    use ContextKind::{Lvalue, Single};
    assert_eq!(kinds.0, vec![Lvalue, Single, Lvalue, Lvalue, Single, Lvalue]);
}

#[test]
fn lvalue_slot_rejects_list_edits() {
    struct RemoveNames(Vec<UsageError>);

    impl VisitorWithContext for RemoveNames {
        fn end_visit_name_ref(&mut self, _x: &mut NameRef, ctx: &mut Context<'_, Expression>) {
            if let Err(err) = ctx.remove_me() {
                self.0.push(err);
            }
        }
    }

    let mut expression = Expression::prefix(UnaryOperator::Inc, NameRef::ident("i").into());
    let mut pass = RemoveNames(Vec::new());
    pass.accept_expression(&mut expression);

    assert_eq!(
        pass.0,
        vec![UsageError::NotAListContext {
            operation: "remove_me",
            kind: ContextKind::Lvalue,
        }]
    );
}

// =============================================================================
// HOISTING
// =============================================================================

/// Hoists a marker statement in front of the statement containing each int.
#[derive(Default)]
struct HoistInts {
    errors: Vec<UsageError>,
}

impl VisitorWithContext for HoistInts {
    fn end_visit_int(&mut self, x: &mut IntLiteral, ctx: &mut Context<'_, Expression>) {
        let marker = text(&format!("before {}", x.value));
        match ctx.statement_level() {
            Ok(mut level) => level.add_previous(marker),
            Err(err) => self.errors.push(err),
        }
    }
}

#[test]
fn hoisting_targets_the_enclosing_statement() {
    let mut statements = vec![
        text("A"),
        Statement::ret(Some(Expression::binary(
            BinaryOperator::Add,
            Expression::int(1),
            Expression::int(2),
        ))),
    ];
    let mut pass = HoistInts::default();
    pass.accept_statements(&mut statements);

    assert!(pass.errors.is_empty());
    assert_eq!(texts(&statements[..3]), vec!["A", "before 1", "before 2"]);
    assert!(matches!(statements[3], Statement::Return(_)));
}

#[test]
fn hoisting_inside_a_function_stays_in_its_body() {
    let mut scopes = Scopes::new();
    let scope = scopes.new_scope(scopes.root(), ScopeKind::Function, "f");
    let function = Function::new(scope).with_body(Statement::ret(Some(Expression::int(7))).into_block());
    let mut statements = vec![Expression::from(function).make_statement()];

    let mut pass = HoistInts::default();
    pass.accept_statements(&mut statements);

    assert_eq!(statements.len(), 1);
    let body = match &statements[0] {
        Statement::Expression(x) => match &x.expression {
            Expression::Function(f) => &f.body.statements,
            other => panic!("expected function, got {other:?}"),
        },
        other => panic!("expected expression statement, got {other:?}"),
    };
    assert_eq!(body.len(), 2);
    assert_eq!(texts(&body[..1]), vec!["before 7"]);
}

#[test]
fn hoisting_without_a_statement_fails() {
    let mut expression = Expression::int(3);
    let mut pass = HoistInts::default();
    pass.accept_expression(&mut expression);

    assert_eq!(pass.errors, vec![UsageError::NoStatementLevel]);
}
