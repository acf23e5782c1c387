//! Canonical dedup keys for display names.
//!
//! Two display names a human would read as "the same label" modulo case,
//! accents, whitespace, or stray punctuation must fold to the same key.
//! Keys are for comparison and id derivation only, never for display.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Separator that replaces whitespace in canonical keys.
pub const KEY_SEPARATOR: char = '-';

/// Fold a display name into a locale-insensitive canonical key.
///
/// Pipeline: trim, lowercase, NFKD decomposition, strip combining marks,
/// collapse whitespace runs, drop everything outside Latin letters, Cyrillic
/// letters, digits, spaces and the separator, then hyphenate the spaces.
///
/// The separator stays in the retained set, so the function is idempotent:
/// `canonical_key(canonical_key(s)) == canonical_key(s)` for any input.
/// The result may be empty.
///
/// ```
/// use catalog_tools::text::canonical_key;
///
/// assert_eq!(canonical_key("  Sylomér  SR 11 "), "sylomer-sr-11");
/// assert_eq!(canonical_key("sylomer sr 11"), "sylomer-sr-11");
/// ```
#[must_use]
pub fn canonical_key(input: &str) -> String {
    let folded: String = input
        .trim()
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    collapse_whitespace(&folded)
        .chars()
        .filter(|&c| is_key_char(c))
        .map(|c| if c == ' ' { KEY_SEPARATOR } else { c })
        .collect()
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || is_cyrillic(c)
        || c == ' '
        || c == KEY_SEPARATOR
}

pub(crate) fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

/// Replace every whitespace run with a single space.
fn collapse_whitespace(input: &str) -> String {
    let mut collapsed = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.chars() {
        if c.is_whitespace() {
            if !in_run {
                collapsed.push(' ');
            }
            in_run = true;
        } else {
            collapsed.push(c);
            in_run = false;
        }
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(canonical_key("Sylomer  M"), canonical_key("sylomer m"));
        assert_eq!(canonical_key("  Sylomer\tM  "), "sylomer-m");
    }

    #[test]
    fn test_diacritics_fold_to_base_letters() {
        assert_eq!(canonical_key("Sylomér M"), canonical_key("sylomer m"));
        assert_eq!(canonical_key("Ёлка"), "елка");
        assert_eq!(canonical_key("Йод"), "иод");
    }

    #[test]
    fn test_punctuation_is_dropped() {
        assert_eq!(canonical_key("SR: 11 (green)"), "sr-11-green");
        // Punctuation vanishes without merging the words around it
        assert_eq!(canonical_key("a & b"), "a--b");
    }

    #[test]
    fn test_cyrillic_kept() {
        assert_eq!(canonical_key("Вибро Плита 25"), "вибро-плита-25");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Sylomér  SR-11", "a & b", "  ", "Ёж №5", "x\u{a0}y"] {
            let once = canonical_key(input);
            assert_eq!(canonical_key(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(canonical_key(""), "");
        assert_eq!(canonical_key("   "), "");
        assert_eq!(canonical_key("!!!"), "");
    }
}
