//! Naming configuration shared by the scope arena.
//!
//! Each public item documents its purpose and a minimal usage example so
//! downstream crates can stay declarative.

use std::fmt;

use crate::constants::{DEFAULT_FRESH_NAME_SEPARATOR, FRESH_NAME_SEPARATORS, TEMPORARY_NAME_PREFIX};

/// Snapshot of the naming settings a scope arena allocates with.
///
/// # Examples
/// ```
/// use config::NamingConfig;
/// let config = NamingConfig::default();
/// assert_eq!(config.separator, '_');
/// assert_eq!(config.temporary_prefix, "tmp$");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConfig {
    /// Separator placed between a base name and its counter when the
    /// suggestion has no numeric suffix of its own.
    pub separator: char,
    /// Identifier suggested for temporaries declared without a hint.
    pub temporary_prefix: String,
}

impl NamingConfig {
    /// Builds a configuration, rejecting separators the fresh-name suffix
    /// parser would not recognize and prefixes that are not identifiers.
    ///
    /// # Examples
    /// ```
    /// use config::NamingConfig;
    /// let cfg = NamingConfig::new('$', "t").expect("valid config");
    /// assert_eq!(cfg.separator, '$');
    /// assert!(NamingConfig::new('-', "t").is_err());
    /// ```
    pub fn new(separator: char, temporary_prefix: impl Into<String>) -> Result<Self, ConfigError> {
        if !FRESH_NAME_SEPARATORS.contains(&separator) {
            return Err(ConfigError::InvalidSeparator(separator));
        }
        let temporary_prefix = temporary_prefix.into();
        if !is_identifier_start(&temporary_prefix) {
            return Err(ConfigError::InvalidTemporaryPrefix(temporary_prefix));
        }
        Ok(Self {
            separator,
            temporary_prefix,
        })
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_FRESH_NAME_SEPARATOR,
            temporary_prefix: TEMPORARY_NAME_PREFIX.to_string(),
        }
    }
}

fn is_identifier_start(text: &str) -> bool {
    match text.chars().next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_' || first == '$')
                && text.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the separator is not one of the recognized suffix separators.
    InvalidSeparator(char),
    /// Raised when the temporary prefix cannot start an identifier.
    InvalidTemporaryPrefix(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSeparator(value) => {
                write!(f, "separator must be one of {FRESH_NAME_SEPARATORS:?}: {value:?}")
            }
            ConfigError::InvalidTemporaryPrefix(value) => {
                write!(f, "temporary prefix must be an identifier: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
