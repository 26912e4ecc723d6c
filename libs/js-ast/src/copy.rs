//! # Deep Copy
//!
//! Structural duplication of subtrees. A copy shares no node with its
//! original; attachments (source, comments, metadata) are duplicated too.
//!
//! Names are handles, so a copy refers to the same symbols as the original,
//! with one exception: every function and catch clause inside the copied
//! subtree gets a fresh scope of its own. The names that scope owns are
//! re-declared in it, and references to them inside the copy are remapped.
//! Names owned by scopes outside the subtree stay shared.
//!
//! ## Example
//!
//! ```rust
//! use js_ast::{DeepCopy, Expression, Function, Parameter};
//! use js_scope::{ScopeKind, Scopes};
//!
//! let mut scopes = Scopes::new();
//! let scope = scopes.new_scope(scopes.root(), ScopeKind::Function, "f");
//! let a = scopes.declare_name(scope, "a");
//! let function = Function::new(scope).with_parameters(vec![Parameter::new(a)]);
//!
//! let copy = function.copy(&mut scopes);
//! assert_ne!(copy.scope, function.scope);
//! assert_ne!(copy.parameters[0].name, a);
//! assert_eq!(scopes.ident(copy.parameters[0].name), "a");
//! ```

use crate::meta::NodeMeta;
use crate::nodes::*;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use js_scope::{NameId, NameMapping, ScopeId, Scopes};
use log::{debug, warn};
use stacker::maybe_grow;
use std::collections::HashMap;

// =============================================================================
// COPY CONTEXT
// =============================================================================

/// State of one deep-copy operation: the scope arena and the handles
/// remapped so far.
pub struct CopyContext<'a> {
    scopes: &'a mut Scopes,
    names: NameMapping,
    copied_scopes: HashMap<ScopeId, ScopeId>,
}

impl<'a> CopyContext<'a> {
    pub fn new(scopes: &'a mut Scopes) -> Self {
        Self {
            scopes,
            names: NameMapping::new(),
            copied_scopes: HashMap::new(),
        }
    }

    /// The handle a copy uses for `name`.
    pub fn name(&self, name: NameId) -> NameId {
        self.names.get(&name).copied().unwrap_or(name)
    }

    /// The handle a copy uses for `scope`.
    pub fn scope(&self, scope: ScopeId) -> ScopeId {
        self.copied_scopes.get(&scope).copied().unwrap_or(scope)
    }

    /// Creates the copy of `original`: same kind and description, parent
    /// remapped, own names and temporaries re-declared.
    ///
    /// Scopes between `original` and the nearest copied ancestor (blocks a
    /// pass introduced, for instance) are copied along with it, so the copy
    /// never resolves names through the original subtree.
    pub fn copy_scope(&mut self, original: ScopeId) -> ScopeId {
        let parent = match self.scopes.parent(original) {
            Some(parent) => self.copied_parent(parent),
            None => self.scopes.root(),
        };
        self.duplicate(original, parent)
    }

    /// The scope a copy nested in `scope` hangs from.
    fn copied_parent(&mut self, scope: ScopeId) -> ScopeId {
        let mut between = Vec::new();
        let mut current = Some(scope);
        while let Some(id) = current {
            if let Some(&copy) = self.copied_scopes.get(&id) {
                return between
                    .into_iter()
                    .rev()
                    .fold(copy, |parent, skipped| self.duplicate(skipped, parent));
            }
            between.push(id);
            current = self.scopes.parent(id);
        }
        // No copied ancestor: the scope lies outside the copied subtree.
        scope
    }

    fn duplicate(&mut self, original: ScopeId, parent: ScopeId) -> ScopeId {
        let (kind, description) = {
            let source = self.scopes.scope(original);
            (source.kind(), source.description().to_string())
        };
        let copy = self.scopes.new_scope(parent, kind, description);

        match self.scopes.copy_own_names(copy, original) {
            Ok(mapping) => {
                debug!("copied {} into {} with {} names", original, copy, mapping.len());
                self.names.extend(mapping);
            }
            // The copy is brand new, so nothing can collide.
            Err(err) => warn!("names of {} not copied: {}", original, err),
        }
        self.copied_scopes.insert(original, copy);
        copy
    }

    /// Mapping of every name re-declared so far.
    pub fn name_mapping(&self) -> &NameMapping {
        &self.names
    }
}

// =============================================================================
// DEEP COPY
// =============================================================================

/// Structural duplication of a node and its subtree.
pub trait DeepCopy: Sized {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self;

    /// Copies the subtree, duplicating the scopes it owns in `scopes`.
    fn copy(&self, scopes: &mut Scopes) -> Self {
        self.deep_copy(&mut CopyContext::new(scopes))
    }
}

impl<T: DeepCopy> DeepCopy for Box<T> {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        Box::new((**self).deep_copy(cx))
    }
}

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        self.as_ref().map(|value| value.deep_copy(cx))
    }
}

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        self.iter().map(|value| value.deep_copy(cx)).collect()
    }
}

/// Copies the attachments of `from` onto `to`.
fn with_meta<T: Node>(mut to: T, from: &NodeMeta) -> T {
    *to.meta_mut() = from.clone();
    to
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

impl DeepCopy for Expression {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match self {
            Expression::ArrayAccess(x) => x.deep_copy(cx).into(),
            Expression::ArrayLiteral(x) => x.deep_copy(cx).into(),
            Expression::Binary(x) => x.deep_copy(cx).into(),
            Expression::Conditional(x) => x.deep_copy(cx).into(),
            Expression::Function(x) => x.deep_copy(cx).into(),
            Expression::Invocation(x) => x.deep_copy(cx).into(),
            Expression::NameRef(x) => x.deep_copy(cx).into(),
            Expression::New(x) => x.deep_copy(cx).into(),
            Expression::ObjectLiteral(x) => x.deep_copy(cx).into(),
            Expression::Prefix(x) => x.deep_copy(cx).into(),
            Expression::Postfix(x) => x.deep_copy(cx).into(),
            Expression::Null(x) => with_meta(NullLiteral::new(), x.meta()).into(),
            Expression::Boolean(x) => with_meta(BooleanLiteral::new(x.value), x.meta()).into(),
            Expression::Int(x) => with_meta(IntLiteral::new(x.value), x.meta()).into(),
            Expression::Double(x) => with_meta(DoubleLiteral::new(x.value), x.meta()).into(),
            Expression::String(x) => with_meta(StringLiteral::new(x.value.clone()), x.meta()).into(),
            Expression::RegExp(x) => {
                with_meta(RegExpLiteral::new(x.pattern.clone(), x.flags.clone()), x.meta()).into()
            }
            Expression::This(x) => with_meta(ThisRef::new(), x.meta()).into(),
        })
    }
}

impl DeepCopy for ArrayAccess {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = ArrayAccess::new(self.array.as_ref().deep_copy(cx), self.index.as_ref().deep_copy(cx));
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for ArrayLiteral {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        with_meta(ArrayLiteral::new(self.elements.deep_copy(cx)), self.meta())
    }
}

impl DeepCopy for BinaryOperation {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = BinaryOperation::new(
            self.op,
            self.left.as_ref().deep_copy(cx),
            self.right.as_ref().deep_copy(cx),
        );
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for Conditional {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = Conditional::new(
            self.test.as_ref().deep_copy(cx),
            self.then_expr.as_ref().deep_copy(cx),
            self.else_expr.as_ref().deep_copy(cx),
        );
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for Function {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let scope = cx.copy_scope(self.scope);
        let mut copy = Function::new(scope)
            .with_parameters(self.parameters.deep_copy(cx))
            .with_body(self.body.deep_copy(cx));
        copy.name = self.name.map(|name| cx.name(name));
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for Invocation {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = Invocation::new(self.qualifier.as_ref().deep_copy(cx), self.arguments.deep_copy(cx));
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for NameRef {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let mut copy = match &self.target {
            RefTarget::Name(name) => NameRef::new(cx.name(*name)),
            RefTarget::Ident(ident) => NameRef::ident(ident.clone()),
        };
        copy.qualifier = self.qualifier.deep_copy(cx);
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for New {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = New::new(self.constructor.as_ref().deep_copy(cx), self.arguments.deep_copy(cx));
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for ObjectLiteral {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let mut copy = ObjectLiteral::new(self.properties.deep_copy(cx));
        copy.multiline = self.multiline;
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for PrefixOperation {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        with_meta(PrefixOperation::new(self.op, self.arg.as_ref().deep_copy(cx)), self.meta())
    }
}

impl DeepCopy for PostfixOperation {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        with_meta(PostfixOperation::new(self.op, self.arg.as_ref().deep_copy(cx)), self.meta())
    }
}

// =============================================================================
// STATEMENTS
// =============================================================================

impl DeepCopy for Statement {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match self {
            Statement::Block(x) => x.deep_copy(cx).into(),
            Statement::Break(x) => {
                with_meta(Break::new(x.label.map(|label| cx.name(label))), x.meta()).into()
            }
            Statement::Continue(x) => {
                with_meta(Continue::new(x.label.map(|label| cx.name(label))), x.meta()).into()
            }
            Statement::Debugger(x) => with_meta(Debugger::new(), x.meta()).into(),
            Statement::Empty(x) => with_meta(Empty::new(), x.meta()).into(),
            Statement::Expression(x) => x.deep_copy(cx).into(),
            Statement::For(x) => x.deep_copy(cx).into(),
            Statement::ForIn(x) => x.deep_copy(cx).into(),
            Statement::If(x) => x.deep_copy(cx).into(),
            Statement::Label(x) => x.deep_copy(cx).into(),
            Statement::Return(x) => with_meta(Return::new(x.expression.deep_copy(cx)), x.meta()).into(),
            Statement::Switch(x) => x.deep_copy(cx).into(),
            Statement::Throw(x) => with_meta(Throw::new(x.expression.deep_copy(cx)), x.meta()).into(),
            Statement::Try(x) => x.deep_copy(cx).into(),
            Statement::Vars(x) => x.deep_copy(cx).into(),
            Statement::While(x) => x.deep_copy(cx).into(),
            Statement::DoWhile(x) => x.deep_copy(cx).into(),
        })
    }
}

impl DeepCopy for Block {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        with_meta(Block::new(self.statements.deep_copy(cx)), self.meta())
    }
}

impl DeepCopy for ExpressionStatement {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        with_meta(ExpressionStatement::new(self.expression.deep_copy(cx)), self.meta())
    }
}

impl DeepCopy for ForInit {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        match self {
            ForInit::Vars(vars) => ForInit::Vars(vars.deep_copy(cx)),
            ForInit::Expression(expression) => ForInit::Expression(expression.deep_copy(cx)),
        }
    }
}

impl DeepCopy for For {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = For::new(
            self.init.deep_copy(cx),
            self.condition.deep_copy(cx),
            self.increment.deep_copy(cx),
            self.body.as_ref().deep_copy(cx),
        );
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for ForIn {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = ForIn::new(
            self.iter_var.map(|name| cx.name(name)),
            self.iter_expr.deep_copy(cx),
            self.object_expr.deep_copy(cx),
            self.body.as_ref().deep_copy(cx),
        );
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for If {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = If::new(
            self.test.deep_copy(cx),
            self.then_stmt.as_ref().deep_copy(cx),
            self.else_stmt.as_deref().map(|else_stmt| else_stmt.deep_copy(cx)),
        );
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for Label {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = Label::new(cx.name(self.name), self.statement.as_ref().deep_copy(cx));
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for Switch {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = Switch::new(self.expression.deep_copy(cx), self.cases.deep_copy(cx));
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for Try {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = Try::new(
            self.try_block.deep_copy(cx),
            self.catches.deep_copy(cx),
            self.finally_block.deep_copy(cx),
        );
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for Vars {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let mut copy = Vars::new(self.vars.deep_copy(cx));
        copy.multiline = self.multiline;
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for While {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = While::new(self.condition.deep_copy(cx), self.body.as_ref().deep_copy(cx));
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for DoWhile {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = DoWhile::new(self.body.as_ref().deep_copy(cx), self.condition.deep_copy(cx));
        with_meta(copy, self.meta())
    }
}

// =============================================================================
// AUXILIARY NODES
// =============================================================================

impl DeepCopy for Parameter {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        with_meta(Parameter::new(cx.name(self.name)), self.meta())
    }
}

impl DeepCopy for PropertyInitializer {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let copy = PropertyInitializer::new(self.label.deep_copy(cx), self.value.deep_copy(cx));
        with_meta(copy, self.meta())
    }
}

impl DeepCopy for Var {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        with_meta(Var::new(cx.name(self.name), self.initializer.deep_copy(cx)), self.meta())
    }
}

impl DeepCopy for SwitchMember {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        match self {
            SwitchMember::Case(case) => {
                let copy = SwitchCase::new(case.test.deep_copy(cx), case.statements.deep_copy(cx));
                SwitchMember::Case(with_meta(copy, case.meta()))
            }
            SwitchMember::Default(default) => {
                let copy = SwitchDefault::new(default.statements.deep_copy(cx));
                SwitchMember::Default(with_meta(copy, default.meta()))
            }
        }
    }
}

impl DeepCopy for Catch {
    fn deep_copy(&self, cx: &mut CopyContext<'_>) -> Self {
        let scope = cx.copy_scope(self.scope);
        let mut copy = Catch::new(scope, self.parameter.deep_copy(cx), self.body.deep_copy(cx));
        copy.condition = self.condition.deep_copy(cx);
        with_meta(copy, self.meta())
    }
}
