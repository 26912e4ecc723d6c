//! # Config Crate
//!
//! Centralized configuration constants for the JS IR core.
//! Reserved identifiers, fresh-name separators and recursion limits are
//! defined here so the scope and AST crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{is_reserved_identifier, DEFAULT_FRESH_NAME_SEPARATOR};
//!
//! assert!(is_reserved_identifier("Object"));
//! assert!(!is_reserved_identifier("myLocal"));
//! assert_eq!(DEFAULT_FRESH_NAME_SEPARATOR, '_');
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure data, usable from every crate in the workspace
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
pub mod naming;

pub use naming::{ConfigError, NamingConfig};

#[cfg(test)]
mod tests;
