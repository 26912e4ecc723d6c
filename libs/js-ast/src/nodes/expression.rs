//! # Expressions
//!
//! One struct per expression kind, collected in the closed [`Expression`]
//! enum. Constructors start every node with empty attachments.

use crate::meta::{NodeMeta, SourceLocation};
use crate::nodes::parts::{Parameter, PropertyInitializer};
use crate::nodes::statement::{Block, ExpressionStatement, Statement};
use crate::nodes::Node;
use crate::error::UsageError;
use crate::ops::{BinaryOperator, UnaryOperator};
use js_scope::{NameId, ScopeId};
use serde::{Deserialize, Serialize};

// =============================================================================
// ACCESS AND CALLS
// =============================================================================

/// `array[index]`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayAccess {
    pub array: Box<Expression>,
    pub index: Box<Expression>,
    meta: NodeMeta,
}

impl ArrayAccess {
    pub fn new(array: Expression, index: Expression) -> Self {
        Self {
            array: Box::new(array),
            index: Box::new(index),
            meta: NodeMeta::default(),
        }
    }
}

/// `qualifier(arguments...)`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    pub qualifier: Box<Expression>,
    pub arguments: Vec<Expression>,
    meta: NodeMeta,
}

impl Invocation {
    pub fn new(qualifier: Expression, arguments: Vec<Expression>) -> Self {
        Self {
            qualifier: Box::new(qualifier),
            arguments,
            meta: NodeMeta::default(),
        }
    }
}

/// `new constructor(arguments...)`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct New {
    pub constructor: Box<Expression>,
    pub arguments: Vec<Expression>,
    meta: NodeMeta,
}

impl New {
    pub fn new(constructor: Expression, arguments: Vec<Expression>) -> Self {
        Self {
            constructor: Box::new(constructor),
            arguments,
            meta: NodeMeta::default(),
        }
    }
}

/// What a [`NameRef`] points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefTarget {
    /// A declared symbol.
    Name(NameId),
    /// A bare identifier, typically a property name after a qualifier.
    Ident(String),
}

/// Reference to a name, optionally qualified: `qualifier.target`.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct NameRef {
    pub target: RefTarget,
    pub qualifier: Option<Box<Expression>>,
    meta: NodeMeta,
}

impl NameRef {
    pub fn new(name: NameId) -> Self {
        Self {
            target: RefTarget::Name(name),
            qualifier: None,
            meta: NodeMeta::default(),
        }
    }

    pub fn ident(ident: impl Into<String>) -> Self {
        Self {
            target: RefTarget::Ident(ident.into()),
            qualifier: None,
            meta: NodeMeta::default(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: Expression) -> Self {
        self.qualifier = Some(Box::new(qualifier));
        self
    }

    /// The referenced symbol, if this is not a bare identifier.
    pub fn name(&self) -> Option<NameId> {
        match self.target {
            RefTarget::Name(name) => Some(name),
            RefTarget::Ident(_) => None,
        }
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// `left op right`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperation {
    pub op: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    meta: NodeMeta,
}

impl BinaryOperation {
    pub fn new(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
            meta: NodeMeta::default(),
        }
    }
}

/// `test ? then_expr : else_expr`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    pub test: Box<Expression>,
    pub then_expr: Box<Expression>,
    pub else_expr: Box<Expression>,
    meta: NodeMeta,
}

impl Conditional {
    pub fn new(test: Expression, then_expr: Expression, else_expr: Expression) -> Self {
        Self {
            test: Box::new(test),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
            meta: NodeMeta::default(),
        }
    }
}

/// `op arg`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PrefixOperation {
    pub op: UnaryOperator,
    pub arg: Box<Expression>,
    meta: NodeMeta,
}

impl PrefixOperation {
    pub fn new(op: UnaryOperator, arg: Expression) -> Self {
        Self {
            op,
            arg: Box::new(arg),
            meta: NodeMeta::default(),
        }
    }
}

/// `arg op`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PostfixOperation {
    pub op: UnaryOperator,
    pub arg: Box<Expression>,
    meta: NodeMeta,
}

impl PostfixOperation {
    pub fn new(op: UnaryOperator, arg: Expression) -> Self {
        Self {
            op,
            arg: Box::new(arg),
            meta: NodeMeta::default(),
        }
    }
}

// =============================================================================
// COMPOUND LITERALS
// =============================================================================

/// `[elements...]`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
    meta: NodeMeta,
}

impl ArrayLiteral {
    pub fn new(elements: Vec<Expression>) -> Self {
        Self {
            elements,
            meta: NodeMeta::default(),
        }
    }
}

/// `{ label: value, ... }`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectLiteral {
    pub properties: Vec<PropertyInitializer>,
    /// Rendering hint: one property per line.
    pub multiline: bool,
    meta: NodeMeta,
}

impl ObjectLiteral {
    pub fn new(properties: Vec<PropertyInitializer>) -> Self {
        Self {
            properties,
            multiline: false,
            meta: NodeMeta::default(),
        }
    }
}

/// `function name(parameters...) { body }`
///
/// The function owns a scope for its parameters and locals. That scope is
/// duplicated when the function is deep-copied.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: Option<NameId>,
    pub scope: ScopeId,
    pub parameters: Vec<Parameter>,
    pub body: Block,
    meta: NodeMeta,
}

impl Function {
    /// Creates an anonymous function with no parameters and an empty body.
    pub fn new(scope: ScopeId) -> Self {
        Self {
            name: None,
            scope,
            parameters: Vec::new(),
            body: Block::empty(),
            meta: NodeMeta::default(),
        }
    }

    pub fn with_name(mut self, name: NameId) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_body(mut self, body: Block) -> Self {
        self.body = body;
        self
    }
}

// =============================================================================
// LEAVES
// =============================================================================

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NullLiteral {
    meta: NodeMeta,
}

impl NullLiteral {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
    meta: NodeMeta,
}

impl BooleanLiteral {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            meta: NodeMeta::default(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct IntLiteral {
    pub value: i32,
    meta: NodeMeta,
}

impl IntLiteral {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            meta: NodeMeta::default(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DoubleLiteral {
    pub value: f64,
    meta: NodeMeta,
}

impl DoubleLiteral {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            meta: NodeMeta::default(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
    meta: NodeMeta,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            meta: NodeMeta::default(),
        }
    }
}

/// `/pattern/flags`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct RegExpLiteral {
    pub pattern: String,
    pub flags: Option<String>,
    meta: NodeMeta,
}

impl RegExpLiteral {
    pub fn new(pattern: impl Into<String>, flags: Option<String>) -> Self {
        Self {
            pattern: pattern.into(),
            flags,
            meta: NodeMeta::default(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThisRef {
    meta: NodeMeta,
}

impl ThisRef {
    pub fn new() -> Self {
        Self::default()
    }
}

impl_node!(
    ArrayAccess,
    Invocation,
    New,
    NameRef,
    BinaryOperation,
    Conditional,
    PrefixOperation,
    PostfixOperation,
    ArrayLiteral,
    ObjectLiteral,
    Function,
    NullLiteral,
    BooleanLiteral,
    IntLiteral,
    DoubleLiteral,
    StringLiteral,
    RegExpLiteral,
    ThisRef,
);

// =============================================================================
// EXPRESSION
// =============================================================================

/// Any expression.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    ArrayAccess(ArrayAccess),
    ArrayLiteral(ArrayLiteral),
    Binary(BinaryOperation),
    Conditional(Conditional),
    Function(Function),
    Invocation(Invocation),
    NameRef(NameRef),
    New(New),
    ObjectLiteral(ObjectLiteral),
    Prefix(PrefixOperation),
    Postfix(PostfixOperation),
    Null(NullLiteral),
    Boolean(BooleanLiteral),
    Int(IntLiteral),
    Double(DoubleLiteral),
    String(StringLiteral),
    RegExp(RegExpLiteral),
    This(ThisRef),
}

impl_from_variant!(Expression {
    ArrayAccess(ArrayAccess),
    ArrayLiteral(ArrayLiteral),
    Binary(BinaryOperation),
    Conditional(Conditional),
    Function(Function),
    Invocation(Invocation),
    NameRef(NameRef),
    New(New),
    ObjectLiteral(ObjectLiteral),
    Prefix(PrefixOperation),
    Postfix(PostfixOperation),
    Null(NullLiteral),
    Boolean(BooleanLiteral),
    Int(IntLiteral),
    Double(DoubleLiteral),
    String(StringLiteral),
    RegExp(RegExpLiteral),
    This(ThisRef),
});

/// Binds the inner struct of any expression variant to `$node`.
macro_rules! with_expression {
    ($value:expr, $node:ident => $body:expr) => {
        match $value {
            Expression::ArrayAccess($node) => $body,
            Expression::ArrayLiteral($node) => $body,
            Expression::Binary($node) => $body,
            Expression::Conditional($node) => $body,
            Expression::Function($node) => $body,
            Expression::Invocation($node) => $body,
            Expression::NameRef($node) => $body,
            Expression::New($node) => $body,
            Expression::ObjectLiteral($node) => $body,
            Expression::Prefix($node) => $body,
            Expression::Postfix($node) => $body,
            Expression::Null($node) => $body,
            Expression::Boolean($node) => $body,
            Expression::Int($node) => $body,
            Expression::Double($node) => $body,
            Expression::String($node) => $body,
            Expression::RegExp($node) => $body,
            Expression::This($node) => $body,
        }
    };
}

impl Node for Expression {
    fn meta(&self) -> &NodeMeta {
        with_expression!(self, node => node.meta())
    }

    fn meta_mut(&mut self) -> &mut NodeMeta {
        with_expression!(self, node => node.meta_mut())
    }

    fn source(&self) -> Option<&SourceLocation> {
        with_expression!(self, node => node.source())
    }

    fn set_source(&mut self, source: SourceLocation) -> Result<(), UsageError> {
        with_expression!(self, node => node.set_source(source))
    }
}

impl Expression {
    pub fn name(name: NameId) -> Self {
        NameRef::new(name).into()
    }

    pub fn qualified(qualifier: Expression, ident: impl Into<String>) -> Self {
        NameRef::ident(ident).with_qualifier(qualifier).into()
    }

    pub fn int(value: i32) -> Self {
        IntLiteral::new(value).into()
    }

    pub fn double(value: f64) -> Self {
        DoubleLiteral::new(value).into()
    }

    pub fn string(value: impl Into<String>) -> Self {
        StringLiteral::new(value).into()
    }

    pub fn boolean(value: bool) -> Self {
        BooleanLiteral::new(value).into()
    }

    pub fn null() -> Self {
        NullLiteral::new().into()
    }

    pub fn this() -> Self {
        ThisRef::new().into()
    }

    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        BinaryOperation::new(op, left, right).into()
    }

    pub fn assign(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Asg, left, right)
    }

    pub fn invoke(qualifier: Expression, arguments: Vec<Expression>) -> Self {
        Invocation::new(qualifier, arguments).into()
    }

    pub fn prefix(op: UnaryOperator, arg: Expression) -> Self {
        PrefixOperation::new(op, arg).into()
    }

    pub fn postfix(op: UnaryOperator, arg: Expression) -> Self {
        PostfixOperation::new(op, arg).into()
    }

    /// Wraps the expression into an expression statement.
    pub fn make_statement(self) -> Statement {
        ExpressionStatement::new(self).into()
    }

    /// True for nodes without children: literals, `this` and unqualified names.
    pub fn is_leaf(&self) -> bool {
        match self {
            Expression::Null(_)
            | Expression::Boolean(_)
            | Expression::Int(_)
            | Expression::Double(_)
            | Expression::String(_)
            | Expression::RegExp(_)
            | Expression::This(_) => true,
            Expression::NameRef(name_ref) => name_ref.qualifier.is_none(),
            _ => false,
        }
    }

    /// Short kind label used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::ArrayAccess(_) => "array access",
            Expression::ArrayLiteral(_) => "array literal",
            Expression::Binary(_) => "binary operation",
            Expression::Conditional(_) => "conditional",
            Expression::Function(_) => "function",
            Expression::Invocation(_) => "invocation",
            Expression::NameRef(_) => "name reference",
            Expression::New(_) => "new",
            Expression::ObjectLiteral(_) => "object literal",
            Expression::Prefix(_) => "prefix operation",
            Expression::Postfix(_) => "postfix operation",
            Expression::Null(_) => "null",
            Expression::Boolean(_) => "boolean",
            Expression::Int(_) => "int",
            Expression::Double(_) => "double",
            Expression::String(_) => "string",
            Expression::RegExp(_) => "regexp",
            Expression::This(_) => "this",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
