//! # Node Attachments
//!
//! Source location, comments and the open metadata side-table carried by
//! every node.
//!
//! ## Example
//!
//! ```rust
//! use js_ast::meta::{keys, MetaValue, Metadata};
//!
//! let mut metadata = Metadata::default();
//! metadata.set(keys::SYNTHETIC, true);
//! assert_eq!(metadata.get(keys::SYNTHETIC), Some(&MetaValue::Bool(true)));
//! ```

use js_scope::NameId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// SOURCE LOCATION
// =============================================================================

/// Position in the original source a node was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path or identifier of the source file.
    pub file: String,
    /// Zero-based line.
    pub line: u32,
    /// Zero-based column.
    pub column: u32,
}

impl SourceLocation {
    /// Creates a location.
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line + 1, self.column + 1)
    }
}

// =============================================================================
// COMMENTS
// =============================================================================

/// Comment style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentKind {
    /// `// text`
    SingleLine,
    /// `/* text */`
    MultiLine,
}

/// A comment attached before or after a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub kind: CommentKind,
    pub text: String,
}

impl Comment {
    pub fn single_line(text: impl Into<String>) -> Self {
        Self {
            kind: CommentKind::SingleLine,
            text: text.into(),
        }
    }

    pub fn multi_line(text: impl Into<String>) -> Self {
        Self {
            kind: CommentKind::MultiLine,
            text: text.into(),
        }
    }
}

// =============================================================================
// METADATA
// =============================================================================

/// Well-known metadata keys set by later passes.
pub mod keys {
    /// `Bool`: the node was introduced by the compiler, not the user.
    pub const SYNTHETIC: &str = "synthetic";
    /// `SideEffects`: what evaluating the expression may do.
    pub const SIDE_EFFECTS: &str = "side_effects";
    /// `Name`: a local name that holds the same value as this expression.
    pub const LOCAL_ALIAS: &str = "local_alias";
}

/// Side effects of evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideEffectKind {
    /// May change observable state.
    Affects,
    /// Reads state that other code may change.
    DependsOnState,
    /// Neither reads nor writes state.
    Pure,
}

/// A metadata value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetaValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Name(NameId),
    SideEffects(SideEffectKind),
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        MetaValue::Bool(value)
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Int(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Str(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::Str(value)
    }
}

impl From<NameId> for MetaValue {
    fn from(value: NameId) -> Self {
        MetaValue::Name(value)
    }
}

impl From<SideEffectKind> for MetaValue {
    fn from(value: SideEffectKind) -> Self {
        MetaValue::SideEffects(value)
    }
}

/// Open key/value side-table attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    entries: BTreeMap<String, MetaValue>,
}

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    /// Sets `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Option<MetaValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<MetaValue> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Copies every entry of `other` into this table, overwriting equal keys.
    pub fn copy_from(&mut self, other: &Metadata) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self.get(keys::SYNTHETIC), Some(MetaValue::Bool(true)))
    }

    pub fn set_synthetic(&mut self, synthetic: bool) {
        self.set(keys::SYNTHETIC, synthetic);
    }

    /// Side effects recorded for the node; unknown nodes are assumed to affect state.
    pub fn side_effects(&self) -> SideEffectKind {
        match self.get(keys::SIDE_EFFECTS) {
            Some(MetaValue::SideEffects(kind)) => *kind,
            _ => SideEffectKind::Affects,
        }
    }

    pub fn set_side_effects(&mut self, kind: SideEffectKind) {
        self.set(keys::SIDE_EFFECTS, kind);
    }

    pub fn local_alias(&self) -> Option<NameId> {
        match self.get(keys::LOCAL_ALIAS) {
            Some(MetaValue::Name(name)) => Some(*name),
            _ => None,
        }
    }

    pub fn set_local_alias(&mut self, name: NameId) {
        self.set(keys::LOCAL_ALIAS, name);
    }
}

// =============================================================================
// NODE META
// =============================================================================

/// Everything a node carries besides its children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeMeta {
    source: Option<SourceLocation>,
    leading_comments: Vec<Comment>,
    trailing_comments: Vec<Comment>,
    metadata: Metadata,
}

impl NodeMeta {
    #[inline]
    pub fn source(&self) -> Option<&SourceLocation> {
        self.source.as_ref()
    }

    /// Attaching a source goes through [`Node::set_source`](crate::Node::set_source),
    /// which rejects nodes whose location lives elsewhere.
    pub(crate) fn set_source(&mut self, source: Option<SourceLocation>) {
        self.source = source;
    }

    #[inline]
    pub fn leading_comments(&self) -> &[Comment] {
        &self.leading_comments
    }

    #[inline]
    pub fn trailing_comments(&self) -> &[Comment] {
        &self.trailing_comments
    }

    pub fn add_leading_comment(&mut self, comment: Comment) {
        self.leading_comments.push(comment);
    }

    pub fn add_trailing_comment(&mut self, comment: Comment) {
        self.trailing_comments.push(comment);
    }

    /// Removes and returns all comments, leading first.
    pub fn take_comments(&mut self) -> (Vec<Comment>, Vec<Comment>) {
        (
            std::mem::take(&mut self.leading_comments),
            std::mem::take(&mut self.trailing_comments),
        )
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    #[inline]
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

// =============================================================================
// TESTS
// =============================================================================
