//! # Tests for Config Constants
//!
//! Unit tests verifying the configuration constants and the naming
//! configuration builder.

use crate::constants::*;
use crate::naming::{ConfigError, NamingConfig};

// =============================================================================
// RESERVED IDENTIFIER TESTS
// =============================================================================

#[test]
fn test_reserved_identifiers_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for ident in RESERVED_GLOBAL_IDENTIFIERS {
        assert!(seen.insert(*ident), "duplicate reserved identifier {ident}");
    }
}

#[test]
fn test_reserved_identifiers_include_keywords_and_globals() {
    for ident in ["var", "function", "this", "undefined", "Object", "Math"] {
        assert!(is_reserved_identifier(ident), "{ident} should be reserved");
    }
}

#[test]
fn test_ordinary_identifiers_are_not_reserved() {
    for ident in ["a", "tmp$", "Object_0", "foo"] {
        assert!(!is_reserved_identifier(ident), "{ident} should not be reserved");
    }
}

// =============================================================================
// FRESH NAME TESTS
// =============================================================================

#[test]
fn test_default_separator_is_recognized() {
    assert!(FRESH_NAME_SEPARATORS.contains(&DEFAULT_FRESH_NAME_SEPARATOR));
}

#[test]
fn test_temporary_prefix_is_not_reserved() {
    assert!(!is_reserved_identifier(TEMPORARY_NAME_PREFIX));
}

// =============================================================================
// NAMING CONFIG TESTS
// =============================================================================

#[test]
fn test_naming_config_default_matches_constants() {
    let cfg = NamingConfig::default();
    assert_eq!(cfg.separator, DEFAULT_FRESH_NAME_SEPARATOR);
    assert_eq!(cfg.temporary_prefix, TEMPORARY_NAME_PREFIX);
}

#[test]
fn test_naming_config_rejects_unknown_separator() {
    assert_eq!(
        NamingConfig::new('-', "tmp").unwrap_err(),
        ConfigError::InvalidSeparator('-')
    );
}

#[test]
fn test_naming_config_rejects_bad_prefix() {
    assert_eq!(
        NamingConfig::new('_', "").unwrap_err(),
        ConfigError::InvalidTemporaryPrefix(String::new())
    );
    assert_eq!(
        NamingConfig::new('_', "1tmp").unwrap_err(),
        ConfigError::InvalidTemporaryPrefix("1tmp".to_string())
    );
}

#[test]
fn test_config_error_display() {
    let msg = ConfigError::InvalidSeparator('-').to_string();
    assert!(msg.contains("separator"));
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_stack_growth_exceeds_red_zone() {
    assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
}
