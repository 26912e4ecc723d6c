//! # Program and Fragment
//!
//! Top-level containers. Each owns the [`Scopes`] arena its names live in,
//! so a whole compilation unit can be moved or serialized as one value.
//!
//! Passes that need the arena while rewriting split the container:
//!
//! ```rust
//! use js_ast::{Context, Program, Statement, Vars, VisitorWithContext};
//! use js_scope::{ScopeId, Scopes};
//!
//! /// Appends `var done;` after every `return`.
//! struct MarkReturns<'a> {
//!     scopes: &'a mut Scopes,
//!     scope: ScopeId,
//! }
//!
//! impl VisitorWithContext for MarkReturns<'_> {
//!     fn end_visit_return(&mut self, _x: &mut js_ast::Return, ctx: &mut Context<'_, Statement>) {
//!         let done = self.scopes.declare_fresh_name(self.scope, "done");
//!         ctx.add_next(Vars::single(done, None).into()).expect("statement list");
//!     }
//! }
//!
//! let mut program = Program::new();
//! program.global_block_mut().push(Statement::ret(None));
//! let scope = program.top_scope();
//! let (scopes, block) = program.split_mut();
//! MarkReturns { scopes, scope }.accept_block(block);
//! assert_eq!(program.global_block().statements.len(), 2);
//! ```

use crate::nodes::{Block, Expression};
use crate::visitor::Visitor;
use config::constants::{FRAGMENT_SCOPE_DESCRIPTION, MODULE_NAME_PREFIX, TOP_SCOPE_DESCRIPTION};
use js_scope::{NameId, ScopeId, ScopeKind, Scopes};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// PROGRAM
// =============================================================================

/// A whole program: the scope arena and one global statement block.
#[derive(Debug, Serialize, Deserialize)]
pub struct Program {
    scopes: Scopes,
    top_scope: ScopeId,
    global_block: Block,
}

impl Program {
    /// Creates an empty program with a `Global` top scope under the root.
    pub fn new() -> Self {
        Self::with_scopes(Scopes::new())
    }

    /// Creates an empty program whose names live in `scopes`.
    pub fn with_scopes(mut scopes: Scopes) -> Self {
        let top_scope = scopes.new_scope(scopes.root(), ScopeKind::Global, TOP_SCOPE_DESCRIPTION);
        Self {
            scopes,
            top_scope,
            global_block: Block::empty(),
        }
    }

    #[inline]
    pub fn scopes(&self) -> &Scopes {
        &self.scopes
    }

    #[inline]
    pub fn scopes_mut(&mut self) -> &mut Scopes {
        &mut self.scopes
    }

    /// The root scope, holding the reserved identifiers.
    #[inline]
    pub fn root_scope(&self) -> ScopeId {
        self.scopes.root()
    }

    /// The scope of the program's own top-level declarations.
    #[inline]
    pub fn top_scope(&self) -> ScopeId {
        self.top_scope
    }

    #[inline]
    pub fn global_block(&self) -> &Block {
        &self.global_block
    }

    #[inline]
    pub fn global_block_mut(&mut self) -> &mut Block {
        &mut self.global_block
    }

    /// Borrows the arena and the global block independently.
    pub fn split_mut(&mut self) -> (&mut Scopes, &mut Block) {
        (&mut self.scopes, &mut self.global_block)
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_program(self);
    }

    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.global_block.accept(visitor);
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// FRAGMENT
// =============================================================================

/// A module imported by a fragment and the local name it is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedModule {
    /// Id the module is required by.
    pub external_id: String,
    /// Local name holding the module object.
    pub internal_name: NameId,
}

/// One separately compiled piece of a program.
///
/// Code is split into four blocks emitted in the order imports,
/// declarations, initializers, exports. The import table maps import tags
/// to the expressions that load them.
#[derive(Debug, Serialize, Deserialize)]
pub struct Fragment {
    scopes: Scopes,
    scope: ScopeId,
    /// Fully qualified name of the package the fragment was compiled from.
    pub package_fqn: String,
    pub imports_block: Block,
    pub declarations: Block,
    pub initializers: Block,
    pub exports: Block,
    pub imports: BTreeMap<String, Expression>,
    /// Names the fragment exposes under a stable tag for linking.
    pub name_bindings: BTreeMap<String, NameId>,
    pub imported_modules: Vec<ImportedModule>,
}

/// The rewritable parts of a [`Fragment`], borrowed apart from its arena.
pub struct FragmentBody<'a> {
    pub imports_block: &'a mut Block,
    pub declarations: &'a mut Block,
    pub initializers: &'a mut Block,
    pub exports: &'a mut Block,
    pub imports: &'a mut BTreeMap<String, Expression>,
}

impl Fragment {
    pub fn new(package_fqn: impl Into<String>) -> Self {
        let mut scopes = Scopes::new();
        let scope = scopes.new_scope(scopes.root(), ScopeKind::Global, FRAGMENT_SCOPE_DESCRIPTION);
        Self {
            scopes,
            scope,
            package_fqn: package_fqn.into(),
            imports_block: Block::empty(),
            declarations: Block::empty(),
            initializers: Block::empty(),
            exports: Block::empty(),
            imports: BTreeMap::new(),
            name_bindings: BTreeMap::new(),
            imported_modules: Vec::new(),
        }
    }

    #[inline]
    pub fn scopes(&self) -> &Scopes {
        &self.scopes
    }

    #[inline]
    pub fn scopes_mut(&mut self) -> &mut Scopes {
        &mut self.scopes
    }

    /// The fragment's own scope, a child of the root.
    #[inline]
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Borrows the arena and the rewritable parts independently.
    pub fn split_mut(&mut self) -> (&mut Scopes, FragmentBody<'_>) {
        (
            &mut self.scopes,
            FragmentBody {
                imports_block: &mut self.imports_block,
                declarations: &mut self.declarations,
                initializers: &mut self.initializers,
                exports: &mut self.exports,
                imports: &mut self.imports,
            },
        )
    }

    /// Registers the expression loading the import `tag`, returning the one it replaces.
    pub fn add_import(&mut self, tag: impl Into<String>, expression: Expression) -> Option<Expression> {
        self.imports.insert(tag.into(), expression)
    }

    /// Binds `name` to `tag`, returning the name previously bound to it.
    pub fn bind_name(&mut self, tag: impl Into<String>, name: NameId) -> Option<NameId> {
        self.name_bindings.insert(tag.into(), name)
    }

    /// The local name bound to the module `external_id`, declaring one on
    /// first use.
    pub fn import_module(&mut self, external_id: &str) -> NameId {
        if let Some(module) = self.imported_modules.iter().find(|m| m.external_id == external_id) {
            return module.internal_name;
        }
        let suggested = module_name_suggestion(external_id);
        let internal_name = self.scopes.declare_fresh_name(self.scope, &suggested);
        debug!(
            "module `{}` bound to `{}`",
            external_id,
            self.scopes.ident(internal_name)
        );
        self.imported_modules.push(ImportedModule {
            external_id: external_id.to_string(),
            internal_name,
        });
        internal_name
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_fragment(self);
    }

    /// Visits the import block, declarations, initializers, exports and
    /// finally the import table expressions in tag order.
    pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.imports_block.accept(visitor);
        self.declarations.accept(visitor);
        self.initializers.accept(visitor);
        self.exports.accept(visitor);
        for expression in self.imports.values() {
            expression.accept(visitor);
        }
    }
}

fn module_name_suggestion(external_id: &str) -> String {
    let sanitized: String = external_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();
    format!("{}{}", MODULE_NAME_PREFIX, sanitized)
}

// =============================================================================
// TESTS
// =============================================================================
