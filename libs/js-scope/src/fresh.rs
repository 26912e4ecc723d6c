//! # Fresh Name Candidates
//!
//! Splits a suggested identifier into base, separator and counter, and
//! produces the candidate identifiers tried by
//! [`Scopes::declare_fresh_name`](crate::Scopes::declare_fresh_name).
//!
//! ## Example
//!
//! ```rust
//! use js_scope::fresh::FreshCandidates;
//!
//! let mut candidates = FreshCandidates::new("a_4", '_');
//! assert_eq!(candidates.next().as_deref(), Some("a_4"));
//! assert_eq!(candidates.next().as_deref(), Some("a_5"));
//! ```

use config::constants::FRESH_NAME_SEPARATORS;

/// A suggestion split at its numeric suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixSplit<'a> {
    /// Identifier without the separator and counter.
    pub base: &'a str,
    /// Separator between base and counter.
    pub separator: char,
    /// First counter to try.
    pub counter: u64,
}

/// Splits `suggested` into base, separator and counter.
///
/// A trailing `_<digits>` or `$<digits>` is read as an existing counter.
/// Anything else starts counting at zero with `default_separator`.
///
/// # Example
///
/// ```rust
/// use js_scope::fresh::split_suffix;
///
/// let split = split_suffix("value$12", '_');
/// assert_eq!((split.base, split.separator, split.counter), ("value", '$', 12));
///
/// let split = split_suffix("value", '_');
/// assert_eq!((split.base, split.separator, split.counter), ("value", '_', 0));
/// ```
pub fn split_suffix(suggested: &str, default_separator: char) -> SuffixSplit<'_> {
    let plain = SuffixSplit {
        base: suggested,
        separator: default_separator,
        counter: 0,
    };

    let digits_start = suggested.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits_start == suggested.len() || digits_start == 0 {
        return plain;
    }

    let head = &suggested[..digits_start];
    let Some(separator) = head.chars().next_back() else {
        return plain;
    };
    if !FRESH_NAME_SEPARATORS.contains(&separator) {
        return plain;
    }

    match suggested[digits_start..].parse::<u64>() {
        Ok(counter) => SuffixSplit {
            base: &head[..head.len() - separator.len_utf8()],
            separator,
            counter,
        },
        Err(_) => plain,
    }
}

/// Candidate identifiers for a fresh name, in the order they are tried.
///
/// The suggestion itself comes first, followed by `base<sep><n>` for
/// increasing `n` starting at the parsed counter. Candidates equal to the
/// suggestion are not repeated.
#[derive(Debug, Clone)]
pub struct FreshCandidates<'a> {
    suggested: &'a str,
    split: SuffixSplit<'a>,
    started: bool,
}

impl<'a> FreshCandidates<'a> {
    /// Creates the candidate sequence for `suggested`.
    pub fn new(suggested: &'a str, default_separator: char) -> Self {
        Self {
            suggested,
            split: split_suffix(suggested, default_separator),
            started: false,
        }
    }
}

impl Iterator for FreshCandidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.started {
            self.started = true;
            return Some(self.suggested.to_string());
        }
        loop {
            let counter = self.split.counter;
            self.split.counter = counter.checked_add(1)?;
            let candidate = format!("{}{}{}", self.split.base, self.split.separator, counter);
            if candidate != self.suggested {
                return Some(candidate);
            }
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
    fn test_split_plain_name() {
        let split = split_suffix("foo", '_');
        assert_eq!(split, SuffixSplit { base: "foo", separator: '_', counter: 0 });
    }

    #[test]
    fn test_split_underscore_suffix() {
        let split = split_suffix("a_0", '_');
        assert_eq!(split, SuffixSplit { base: "a", separator: '_', counter: 0 });
    }

    #[test]
    fn test_split_dollar_suffix_keeps_separator() {
        let split = split_suffix("tmp$3", '_');
        assert_eq!(split, SuffixSplit { base: "tmp", separator: '$', counter: 3 });
    }

    #[test]
    fn test_split_digits_without_separator() {
        // "a1" has no separator before the digits
        let split = split_suffix("a1", '_');
        assert_eq!(split.base, "a1");
        assert_eq!(split.counter, 0);
    }

    #[test]
    fn test_split_all_digits() {
        let split = split_suffix("123", '_');
        assert_eq!(split.base, "123");
    }

    #[test]
    fn test_split_trailing_separator_only() {
        let split = split_suffix("tmp$", '_');
        assert_eq!(split.base, "tmp$");
        assert_eq!(split.separator, '_');
    }

    #[test]
    fn test_split_bare_separator_and_digits() {
        let split = split_suffix("_7", '_');
        assert_eq!(split, SuffixSplit { base: "", separator: '_', counter: 7 });
    }

    #[test]
    fn test_split_counter_overflow_is_plain() {
        let split = split_suffix("a_99999999999999999999999", '_');
        assert_eq!(split.base, "a_99999999999999999999999");
    }

    #[test]
    fn test_candidates_start_with_suggestion() {
        let candidates: Vec<String> = FreshCandidates::new("x", '_').take(3).collect();
        assert_eq!(candidates, vec!["x", "x_0", "x_1"]);
    }

    #[test]
    fn test_candidates_skip_repeated_suggestion() {
        let candidates: Vec<String> = FreshCandidates::new("a_0", '_').take(3).collect();
        assert_eq!(candidates, vec!["a_0", "a_1", "a_2"]);
    }

    #[test]
    fn test_candidates_use_configured_separator() {
        let candidates: Vec<String> = FreshCandidates::new("t", '$').take(2).collect();
        assert_eq!(candidates, vec!["t", "t$0"]);
    }
}
