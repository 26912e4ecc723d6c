//! # Configuration Constants
//!
//! Centralized constants for the JS IR core. Naming rules, scope
//! descriptions and recursion limits are defined here.
//!
//! ## Categories
//!
//! - **Reserved identifiers**: Names the root scope resolves without declaration
//! - **Fresh names**: Separator characters and temporary prefixes
//! - **Scopes**: Descriptions of the scopes every program creates
//! - **Limits**: Stack growth for deep recursion

// =============================================================================
// RESERVED IDENTIFIERS
// =============================================================================

/// Identifiers that are always resolvable from the root scope.
///
/// Covers the JavaScript keywords, the strict-mode and future reserved words,
/// and the global objects generated code may reference. The root scope
/// materializes a name for any of these on first lookup, and fresh-name
/// allocation never hands one out.
///
/// # Example
///
/// ```rust
/// use config::constants::RESERVED_GLOBAL_IDENTIFIERS;
///
/// assert!(RESERVED_GLOBAL_IDENTIFIERS.contains(&"function"));
/// assert!(RESERVED_GLOBAL_IDENTIFIERS.contains(&"Math"));
/// ```
pub const RESERVED_GLOBAL_IDENTIFIERS: &[&str] = &[
    // keywords
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with",
    // strict mode and future reserved words
    "arguments", "await", "eval", "implements", "interface", "let", "package", "private",
    "protected", "public", "static", "yield",
    // global values and objects
    "undefined", "NaN", "Infinity", "globalThis", "Object", "Function", "Array", "String",
    "Boolean", "Number", "Math", "Date", "RegExp", "Error", "EvalError", "RangeError",
    "ReferenceError", "SyntaxError", "TypeError", "URIError", "JSON", "Symbol", "Map", "Set",
    "WeakMap", "WeakSet", "Promise", "Proxy", "Reflect", "BigInt", "ArrayBuffer", "DataView",
    "Int8Array", "Uint8Array", "Uint8ClampedArray", "Int16Array", "Uint16Array", "Int32Array",
    "Uint32Array", "Float32Array", "Float64Array", "isNaN", "isFinite", "parseInt",
    "parseFloat", "encodeURI", "encodeURIComponent", "decodeURI", "decodeURIComponent",
    "escape", "unescape", "console", "window", "document", "self", "require", "module",
    "exports", "define",
];

/// Returns true if `ident` belongs to [`RESERVED_GLOBAL_IDENTIFIERS`].
///
/// # Example
///
/// ```rust
/// use config::constants::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("undefined"));
/// assert!(!is_reserved_identifier("undefined_0"));
/// ```
#[inline]
pub fn is_reserved_identifier(ident: &str) -> bool {
    RESERVED_GLOBAL_IDENTIFIERS.contains(&ident)
}

// =============================================================================
// FRESH NAME CONSTANTS
// =============================================================================

/// Characters recognized as the separator of a numeric fresh-name suffix.
///
/// A suggestion such as `a_3` or `b$12` is read as base `a` / `b` with an
/// existing counter, so that refreshing it continues the sequence instead of
/// appending a second suffix.
///
/// # Example
///
/// ```rust
/// use config::constants::FRESH_NAME_SEPARATORS;
///
/// assert!(FRESH_NAME_SEPARATORS.contains(&'$'));
/// ```
pub const FRESH_NAME_SEPARATORS: &[char] = &['_', '$'];

/// Separator used when a suggestion carries no numeric suffix.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FRESH_NAME_SEPARATOR;
///
/// let candidate = format!("x{}{}", DEFAULT_FRESH_NAME_SEPARATOR, 0);
/// assert_eq!(candidate, "x_0");
/// ```
pub const DEFAULT_FRESH_NAME_SEPARATOR: char = '_';

/// Identifier suggested for temporaries declared without a hint.
pub const TEMPORARY_NAME_PREFIX: &str = "tmp$";

// =============================================================================
// SCOPE CONSTANTS
// =============================================================================

/// Description of the root scope of a program or fragment.
pub const ROOT_SCOPE_DESCRIPTION: &str = "<root>";

/// Description of the top scope that holds a program's own declarations.
pub const TOP_SCOPE_DESCRIPTION: &str = "Global";

/// Description of the scope owned by a compilation fragment.
pub const FRAGMENT_SCOPE_DESCRIPTION: &str = "<fragment>";

/// Prefix of the local name a fragment binds an imported module to.
///
/// The module id follows with every character that cannot appear in an
/// identifier replaced by `_`, e.g. `kotlin-stdlib` becomes `$module$kotlin_stdlib`.
pub const MODULE_NAME_PREFIX: &str = "$module$";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Remaining stack, in bytes, below which recursive traversal grows the stack.
///
/// Traversal and deep copy recurse once per tree level; generated code can
/// nest very deeply (long `else if` chains, chained binary operations).
///
/// # Example
///
/// ```rust
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
///
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 128 * 1024;

/// Size, in bytes, of each stack segment allocated by `stacker`.
pub const STACKER_STACK_SIZE_BYTES: usize = 4 * 1024 * 1024;
