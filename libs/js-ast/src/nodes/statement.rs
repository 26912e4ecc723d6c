//! # Statements
//!
//! One struct per statement kind, collected in the closed [`Statement`]
//! enum. Single-statement slots (loop bodies, `if` branches, labelled
//! statements) hold a boxed [`Statement`]; a pass that produces several
//! statements for such a slot gets them wrapped in a [`Block`] by
//! [`Statement::from_statements`].

use crate::error::UsageError;
use crate::meta::{NodeMeta, SourceLocation};
use crate::nodes::expression::Expression;
use crate::nodes::parts::{Catch, SwitchMember, Var};
use crate::nodes::Node;
use js_scope::NameId;
use serde::{Deserialize, Serialize};

// =============================================================================
// BLOCKS AND SIMPLE STATEMENTS
// =============================================================================

/// `{ statements... }`
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    meta: NodeMeta,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            meta: NodeMeta::default(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn push(&mut self, statement: impl Into<Statement>) {
        self.statements.push(statement.into());
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Break {
    pub label: Option<NameId>,
    meta: NodeMeta,
}

impl Break {
    pub fn new(label: Option<NameId>) -> Self {
        Self {
            label,
            meta: NodeMeta::default(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Continue {
    pub label: Option<NameId>,
    meta: NodeMeta,
}

impl Continue {
    pub fn new(label: Option<NameId>) -> Self {
        Self {
            label,
            meta: NodeMeta::default(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Debugger {
    meta: NodeMeta,
}

impl Debugger {
    pub fn new() -> Self {
        Self::default()
    }
}

/// `;`
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {
    meta: NodeMeta,
}

impl Empty {
    pub fn new() -> Self {
        Self::default()
    }
}

/// An expression evaluated for its effects.
///
/// Carries no source location of its own; [`Node::source`] reports the one
/// of the wrapped expression.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
    meta: NodeMeta,
}

impl ExpressionStatement {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression,
            meta: NodeMeta::default(),
        }
    }
}

impl Node for ExpressionStatement {
    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut NodeMeta {
        &mut self.meta
    }

    fn source(&self) -> Option<&SourceLocation> {
        self.expression.source()
    }

    fn set_source(&mut self, _source: SourceLocation) -> Result<(), UsageError> {
        Err(UsageError::SourceOnExpressionStatement)
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Return {
    pub expression: Option<Expression>,
    meta: NodeMeta,
}

impl Return {
    pub fn new(expression: Option<Expression>) -> Self {
        Self {
            expression,
            meta: NodeMeta::default(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Throw {
    pub expression: Expression,
    meta: NodeMeta,
}

impl Throw {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression,
            meta: NodeMeta::default(),
        }
    }
}

/// `var a = 1, b;`
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vars {
    pub vars: Vec<Var>,
    /// Rendering hint: one declaration per line.
    pub multiline: bool,
    meta: NodeMeta,
}

impl Vars {
    pub fn new(vars: Vec<Var>) -> Self {
        Self {
            vars,
            multiline: false,
            meta: NodeMeta::default(),
        }
    }

    /// A `var` statement declaring a single name.
    pub fn single(name: NameId, initializer: Option<Expression>) -> Self {
        Self::new(vec![Var::new(name, initializer)])
    }
}

// =============================================================================
// CONTROL FLOW
// =============================================================================

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub test: Expression,
    pub then_stmt: Box<Statement>,
    pub else_stmt: Option<Box<Statement>>,
    meta: NodeMeta,
}

impl If {
    pub fn new(test: Expression, then_stmt: Statement, else_stmt: Option<Statement>) -> Self {
        Self {
            test,
            then_stmt: Box::new(then_stmt),
            else_stmt: else_stmt.map(Box::new),
            meta: NodeMeta::default(),
        }
    }
}

/// `name: statement`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub name: NameId,
    pub statement: Box<Statement>,
    meta: NodeMeta,
}

impl Label {
    pub fn new(name: NameId, statement: Statement) -> Self {
        Self {
            name,
            statement: Box::new(statement),
            meta: NodeMeta::default(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    pub expression: Expression,
    pub cases: Vec<SwitchMember>,
    meta: NodeMeta,
}

impl Switch {
    pub fn new(expression: Expression, cases: Vec<SwitchMember>) -> Self {
        Self {
            expression,
            cases,
            meta: NodeMeta::default(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Try {
    pub try_block: Block,
    pub catches: Vec<Catch>,
    pub finally_block: Option<Block>,
    meta: NodeMeta,
}

impl Try {
    pub fn new(try_block: Block, catches: Vec<Catch>, finally_block: Option<Block>) -> Self {
        Self {
            try_block,
            catches,
            finally_block,
            meta: NodeMeta::default(),
        }
    }
}

// =============================================================================
// LOOPS
// =============================================================================

/// First clause of a `for` loop.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum ForInit {
    Vars(Vars),
    Expression(Expression),
}

impl ForInit {
    /// Returns true if `statement` can stand as a `for` initializer.
    pub fn admits(statement: &Statement) -> bool {
        matches!(statement, Statement::Vars(_) | Statement::Expression(_))
    }
}

impl TryFrom<Statement> for ForInit {
    type Error = Statement;

    fn try_from(statement: Statement) -> Result<Self, Self::Error> {
        match statement {
            Statement::Vars(vars) => Ok(ForInit::Vars(vars)),
            Statement::Expression(statement) => Ok(ForInit::Expression(statement.expression)),
            other => Err(other),
        }
    }
}

/// `for (init; condition; increment) body`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct For {
    pub init: Option<ForInit>,
    pub condition: Option<Expression>,
    pub increment: Option<Expression>,
    pub body: Box<Statement>,
    meta: NodeMeta,
}

impl For {
    pub fn new(
        init: Option<ForInit>,
        condition: Option<Expression>,
        increment: Option<Expression>,
        body: Statement,
    ) -> Self {
        Self {
            init,
            condition,
            increment,
            body: Box::new(body),
            meta: NodeMeta::default(),
        }
    }
}

/// `for (var iter_var in object_expr) body` or `for (iter_expr in object_expr) body`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ForIn {
    pub iter_var: Option<NameId>,
    pub iter_expr: Option<Expression>,
    pub object_expr: Expression,
    pub body: Box<Statement>,
    meta: NodeMeta,
}

impl ForIn {
    pub fn new(
        iter_var: Option<NameId>,
        iter_expr: Option<Expression>,
        object_expr: Expression,
        body: Statement,
    ) -> Self {
        Self {
            iter_var,
            iter_expr,
            object_expr,
            body: Box::new(body),
            meta: NodeMeta::default(),
        }
    }

    /// Loop declaring `iter_var` as the iteration variable.
    pub fn with_var(iter_var: NameId, object_expr: Expression, body: Statement) -> Self {
        Self::new(Some(iter_var), None, object_expr, body)
    }

    /// Loop assigning to an existing target.
    pub fn with_target(iter_expr: Expression, object_expr: Expression, body: Statement) -> Self {
        Self::new(None, Some(iter_expr), object_expr, body)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct While {
    pub condition: Expression,
    pub body: Box<Statement>,
    meta: NodeMeta,
}

impl While {
    pub fn new(condition: Expression, body: Statement) -> Self {
        Self {
            condition,
            body: Box::new(body),
            meta: NodeMeta::default(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DoWhile {
    pub body: Box<Statement>,
    pub condition: Expression,
    meta: NodeMeta,
}

impl DoWhile {
    pub fn new(body: Statement, condition: Expression) -> Self {
        Self {
            body: Box::new(body),
            condition,
            meta: NodeMeta::default(),
        }
    }
}

impl_node!(
    Block, Break, Continue, Debugger, Empty, Return, Throw, Vars, If, Label, Switch, Try, For, ForIn, While,
    DoWhile,
);

// =============================================================================
// STATEMENT
// =============================================================================

/// Any statement.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Block(Block),
    Break(Break),
    Continue(Continue),
    Debugger(Debugger),
    Empty(Empty),
    Expression(ExpressionStatement),
    For(For),
    ForIn(ForIn),
    If(If),
    Label(Label),
    Return(Return),
    Switch(Switch),
    Throw(Throw),
    Try(Try),
    Vars(Vars),
    While(While),
    DoWhile(DoWhile),
}

impl_from_variant!(Statement {
    Block(Block),
    Break(Break),
    Continue(Continue),
    Debugger(Debugger),
    Empty(Empty),
    Expression(ExpressionStatement),
    For(For),
    ForIn(ForIn),
    If(If),
    Label(Label),
    Return(Return),
    Switch(Switch),
    Throw(Throw),
    Try(Try),
    Vars(Vars),
    While(While),
    DoWhile(DoWhile),
});

/// Binds the inner struct of any statement variant to `$node`.
macro_rules! with_statement {
    ($value:expr, $node:ident => $body:expr) => {
        match $value {
            Statement::Block($node) => $body,
            Statement::Break($node) => $body,
            Statement::Continue($node) => $body,
            Statement::Debugger($node) => $body,
            Statement::Empty($node) => $body,
            Statement::Expression($node) => $body,
            Statement::For($node) => $body,
            Statement::ForIn($node) => $body,
            Statement::If($node) => $body,
            Statement::Label($node) => $body,
            Statement::Return($node) => $body,
            Statement::Switch($node) => $body,
            Statement::Throw($node) => $body,
            Statement::Try($node) => $body,
            Statement::Vars($node) => $body,
            Statement::While($node) => $body,
            Statement::DoWhile($node) => $body,
        }
    };
}

impl Node for Statement {
    fn meta(&self) -> &NodeMeta {
        with_statement!(self, node => node.meta())
    }

    fn meta_mut(&mut self) -> &mut NodeMeta {
        with_statement!(self, node => node.meta_mut())
    }

    fn source(&self) -> Option<&SourceLocation> {
        with_statement!(self, node => node.source())
    }

    fn set_source(&mut self, source: SourceLocation) -> Result<(), UsageError> {
        with_statement!(self, node => node.set_source(source))
    }
}

impl From<Expression> for Statement {
    fn from(expression: Expression) -> Self {
        expression.make_statement()
    }
}

impl Statement {
    pub fn block(statements: Vec<Statement>) -> Self {
        Block::new(statements).into()
    }

    pub fn empty() -> Self {
        Empty::new().into()
    }

    pub fn ret(expression: Option<Expression>) -> Self {
        Return::new(expression).into()
    }

    /// Collapses a statement sequence into one statement.
    ///
    /// A single statement is returned unchanged; anything else (including
    /// nothing) becomes a block.
    ///
    /// # Example
    ///
    /// ```rust
    /// use js_ast::{Expression, Statement};
    ///
    /// let one = Statement::from_statements(vec![Expression::int(1).make_statement()]);
    /// assert!(matches!(one, Statement::Expression(_)));
    ///
    /// let none = Statement::from_statements(Vec::new());
    /// assert!(matches!(none, Statement::Block(ref block) if block.is_empty()));
    /// ```
    pub fn from_statements(mut statements: Vec<Statement>) -> Self {
        if statements.len() == 1 {
            if let Some(only) = statements.pop() {
                return only;
            }
        }
        Statement::block(statements)
    }

    /// Returns the statement as a block, wrapping it if necessary.
    pub fn into_block(self) -> Block {
        match self {
            Statement::Block(block) => block,
            other => Block::new(vec![other]),
        }
    }

    /// Short kind label used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Block(_) => "block",
            Statement::Break(_) => "break",
            Statement::Continue(_) => "continue",
            Statement::Debugger(_) => "debugger",
            Statement::Empty(_) => "empty",
            Statement::Expression(_) => "expression statement",
            Statement::For(_) => "for",
            Statement::ForIn(_) => "for-in",
            Statement::If(_) => "if",
            Statement::Label(_) => "label",
            Statement::Return(_) => "return",
            Statement::Switch(_) => "switch",
            Statement::Throw(_) => "throw",
            Statement::Try(_) => "try",
            Statement::Vars(_) => "vars",
            Statement::While(_) => "while",
            Statement::DoWhile(_) => "do-while",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_statements_normalization() {
        let single = Statement::from_statements(vec![Statement::empty()]);
        assert!(matches!(single, Statement::Empty(_)));

        let several = Statement::from_statements(vec![Statement::empty(), Statement::ret(None)]);
        match several {
            Statement::Block(block) => assert_eq!(block.statements.len(), 2),
            other => panic!("expected block, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_into_block_keeps_existing_block() {
        let block = Statement::block(vec![Statement::empty()]).into_block();
        assert_eq!(block.statements.len(), 1);
        let wrapped = Statement::ret(None).into_block();
        assert!(matches!(wrapped.statements.as_slice(), [Statement::Return(_)]));
    }

    #[test]
    fn test_expression_statement_source_belongs_to_expression() {
        let mut expression = Expression::int(1);
        expression
            .set_source(SourceLocation::new("a.kt", 3, 0))
            .expect("expressions accept sources");
        let mut statement = expression.make_statement();

        assert_eq!(statement.source().map(|s| s.line), Some(3));
        assert_eq!(
            statement.set_source(SourceLocation::new("b.kt", 0, 0)),
            Err(UsageError::SourceOnExpressionStatement)
        );
        assert_eq!(statement.source().map(|s| s.file.as_str()), Some("a.kt"));
    }

    #[test]
    fn test_set_source_on_other_statements() {
        let mut statement = Statement::ret(None);
        statement
            .set_source(SourceLocation::new("a.kt", 0, 0))
            .expect("return accepts a source");
        assert!(statement.source().is_some());
        statement.clear_source();
        assert!(statement.source().is_none());
    }
}
