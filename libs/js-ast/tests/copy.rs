use js_ast::{
    BinaryOperator, Block, Catch, CopyContext, DeepCopy, Expression, Function, Parameter, Statement,
    Try, Vars,
};
use js_scope::{ScopeId, ScopeKind, Scopes};

fn function_with_params(scopes: &mut Scopes, parent: ScopeId, idents: &[&str]) -> Function {
    let scope = scopes.new_scope(parent, ScopeKind::Function, "f");
    let parameters: Vec<Parameter> = idents
        .iter()
        .map(|ident| Parameter::new(scopes.declare_name(scope, ident)))
        .collect();
    let sum = parameters
        .iter()
        .map(|p| Expression::name(p.name))
        .reduce(|left, right| Expression::binary(BinaryOperator::Add, left, right))
        .unwrap_or_else(|| Expression::int(0));
    Function::new(scope)
        .with_parameters(parameters)
        .with_body(Block::new(vec![Statement::ret(Some(sum))]))
}

#[test]
fn copy_is_structurally_equal_without_owned_scopes() {
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let x = scopes.declare_name(root, "x");
    let original: Statement = Vars::single(
        x,
        Some(Expression::invoke(
            Expression::qualified(Expression::this(), "f"),
            vec![Expression::int(1), Expression::string("s"), Expression::name(x)],
        )),
    )
    .into();

    let copy = original.copy(&mut scopes);
    assert_eq!(copy, original);
}

#[test]
fn copied_function_gets_new_scope_and_parameter_names() {
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let original = function_with_params(&mut scopes, root, &["a", "b"]);

    let copy = original.copy(&mut scopes);

    assert_ne!(copy.scope, original.scope);
    assert_eq!(scopes.parent(copy.scope), Some(root));
    assert_eq!(scopes.scope(copy.scope).kind(), ScopeKind::Function);

    let original_names: Vec<_> = original.parameters.iter().map(|p| p.name).collect();
    let copied_names: Vec<_> = copy.parameters.iter().map(|p| p.name).collect();
    assert_ne!(copied_names[0], copied_names[1]);
    for (old, new) in original_names.iter().zip(&copied_names) {
        assert_ne!(old, new);
        assert_eq!(scopes.ident(*old), scopes.ident(*new));
    }

    // References in the body follow the parameters.
    let expected = Block::new(vec![Statement::ret(Some(Expression::binary(
        BinaryOperator::Add,
        Expression::name(copied_names[0]),
        Expression::name(copied_names[1]),
    )))]);
    assert_eq!(copy.body, expected);
}

#[test]
fn mutating_the_copy_leaves_the_original_alone() {
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let original = function_with_params(&mut scopes, root, &["a"]);
    let snapshot = original.copy(&mut scopes);

    let mut copy = original.copy(&mut scopes);
    copy.body.push(Statement::empty());
    copy.parameters.clear();

    assert_eq!(original.parameters.len(), 1);
    assert_eq!(original.body.statements.len(), 1);
    assert_eq!(snapshot.parameters.len(), 1);
}

#[test]
fn outer_names_are_shared_by_the_copy() {
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let outer = scopes.declare_name(root, "outer");
    let scope = scopes.new_scope(root, ScopeKind::Function, "g");
    let original = Function::new(scope).with_body(Block::new(vec![Statement::ret(Some(Expression::name(outer)))]));

    let copy = original.copy(&mut scopes);
    assert_eq!(copy.body, original.body);
}

#[test]
fn nested_function_scope_is_reparented_to_the_copy() {
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let outer_scope = scopes.new_scope(root, ScopeKind::Function, "outer");
    let inner = function_with_params(&mut scopes, outer_scope, &["i"]);
    let outer = Function::new(outer_scope).with_body(Block::new(vec![Statement::ret(Some(inner.into()))]));

    let mut cx = CopyContext::new(&mut scopes);
    let copy = outer.deep_copy(&mut cx);
    assert_eq!(cx.name_mapping().len(), 1);

    let inner_copy = match &copy.body.statements[0] {
        Statement::Return(ret) => match &ret.expression {
            Some(Expression::Function(f)) => f,
            other => panic!("expected function, got {other:?}"),
        },
        other => panic!("expected return, got {other:?}"),
    };
    assert_eq!(scopes.parent(inner_copy.scope), Some(copy.scope));
    assert_ne!(copy.scope, outer_scope);
}

#[test]
fn catch_parameter_is_renamed_with_its_scope() {
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let catch_scope = scopes.new_scope(root, ScopeKind::Catch, "catch");
    let e = scopes.declare_name(catch_scope, "e");
    let catch = Catch::new(
        catch_scope,
        Parameter::new(e),
        Block::new(vec![Statement::from(Expression::name(e))]),
    );
    let original: Statement = Try::new(Block::empty(), vec![catch], None).into();

    let copy = original.copy(&mut scopes);
    let copied_catch = match &copy {
        Statement::Try(x) => &x.catches[0],
        other => panic!("expected try, got {other:?}"),
    };
    assert_ne!(copied_catch.scope, catch_scope);
    assert_ne!(copied_catch.parameter.name, e);
    assert_eq!(scopes.ident(copied_catch.parameter.name), "e");
    assert_eq!(
        copied_catch.body,
        Block::new(vec![Statement::from(Expression::name(copied_catch.parameter.name))])
    );
}

#[test]
fn intermediate_block_scope_is_copied_with_its_names() {
    let mut scopes = Scopes::new();
    let root = scopes.root();
    let outer_scope = scopes.new_scope(root, ScopeKind::Function, "outer");
    let block_scope = scopes.new_scope(outer_scope, ScopeKind::Block, "block");
    let b = scopes.declare_name(block_scope, "b");
    let inner_scope = scopes.new_scope(block_scope, ScopeKind::Function, "inner");
    let inner = Function::new(inner_scope).with_body(Block::new(vec![Statement::ret(Some(Expression::name(b)))]));
    let outer = Function::new(outer_scope).with_body(Block::new(vec![Statement::ret(Some(inner.into()))]));

    let copy = outer.copy(&mut scopes);

    let inner_copy = match &copy.body.statements[0] {
        Statement::Return(ret) => match &ret.expression {
            Some(Expression::Function(f)) => f,
            other => panic!("expected function, got {other:?}"),
        },
        other => panic!("expected return, got {other:?}"),
    };
    let block_copy = scopes.parent(inner_copy.scope).expect("copied inner scope has a parent");
    assert_ne!(block_copy, block_scope);
    assert_eq!(scopes.parent(block_copy), Some(copy.scope));
    assert_eq!(scopes.scope(block_copy).kind(), ScopeKind::Block);

    let b_copy = scopes.find_own_name(block_copy, "b").expect("block names are copied");
    assert_ne!(b_copy, b);
    assert_eq!(
        inner_copy.body,
        Block::new(vec![Statement::ret(Some(Expression::name(b_copy)))])
    );
}
