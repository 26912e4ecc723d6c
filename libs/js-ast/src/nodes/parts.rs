//! # Auxiliary Nodes
//!
//! Nodes that only occur in fixed positions of their parent.

use crate::meta::NodeMeta;
use crate::nodes::expression::Expression;
use crate::nodes::statement::{Block, Statement};
use js_scope::{NameId, ScopeId};
use serde::{Deserialize, Serialize};

/// Formal parameter of a function or catch clause.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: NameId,
    meta: NodeMeta,
}

impl Parameter {
    pub fn new(name: NameId) -> Self {
        Self {
            name,
            meta: NodeMeta::default(),
        }
    }
}

/// `label: value` inside an object literal.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyInitializer {
    pub label: Expression,
    pub value: Expression,
    meta: NodeMeta,
}

impl PropertyInitializer {
    pub fn new(label: Expression, value: Expression) -> Self {
        Self {
            label,
            value,
            meta: NodeMeta::default(),
        }
    }
}

/// `name = initializer` inside a `var` statement.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Var {
    pub name: NameId,
    pub initializer: Option<Expression>,
    meta: NodeMeta,
}

impl Var {
    pub fn new(name: NameId, initializer: Option<Expression>) -> Self {
        Self {
            name,
            initializer,
            meta: NodeMeta::default(),
        }
    }
}

// =============================================================================
// SWITCH MEMBERS
// =============================================================================

/// `case test: statements`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    pub test: Expression,
    pub statements: Vec<Statement>,
    meta: NodeMeta,
}

impl SwitchCase {
    pub fn new(test: Expression, statements: Vec<Statement>) -> Self {
        Self {
            test,
            statements,
            meta: NodeMeta::default(),
        }
    }
}

/// `default: statements`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SwitchDefault {
    pub statements: Vec<Statement>,
    meta: NodeMeta,
}

impl SwitchDefault {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            meta: NodeMeta::default(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum SwitchMember {
    Case(SwitchCase),
    Default(SwitchDefault),
}

impl_from_variant!(SwitchMember {
    Case(SwitchCase),
    Default(SwitchDefault),
});

impl SwitchMember {
    pub fn statements(&self) -> &[Statement] {
        match self {
            SwitchMember::Case(case) => &case.statements,
            SwitchMember::Default(default) => &default.statements,
        }
    }

    pub fn statements_mut(&mut self) -> &mut Vec<Statement> {
        match self {
            SwitchMember::Case(case) => &mut case.statements,
            SwitchMember::Default(default) => &mut default.statements,
        }
    }
}

impl crate::nodes::Node for SwitchMember {
    fn meta(&self) -> &NodeMeta {
        match self {
            SwitchMember::Case(case) => &case.meta,
            SwitchMember::Default(default) => &default.meta,
        }
    }

    fn meta_mut(&mut self) -> &mut NodeMeta {
        match self {
            SwitchMember::Case(case) => &mut case.meta,
            SwitchMember::Default(default) => &mut default.meta,
        }
    }
}

// =============================================================================
// CATCH
// =============================================================================

/// `catch (parameter if condition) { body }`
///
/// Owns a scope holding the exception parameter.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Catch {
    pub scope: ScopeId,
    pub parameter: Parameter,
    pub condition: Option<Expression>,
    pub body: Block,
    meta: NodeMeta,
}

impl Catch {
    pub fn new(scope: ScopeId, parameter: Parameter, body: Block) -> Self {
        Self {
            scope,
            parameter,
            condition: None,
            body,
            meta: NodeMeta::default(),
        }
    }

    pub fn with_condition(mut self, condition: Expression) -> Self {
        self.condition = Some(condition);
        self
    }
}

impl_node!(Parameter, PropertyInitializer, Var, SwitchCase, SwitchDefault, Catch);
