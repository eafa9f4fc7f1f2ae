//! Locale-aware comparison of display names.
//!
//! Names are compared in three passes, the way root-locale collation does:
//!
//! 1. base letters, with accents stripped and case folded
//! 2. accents (unaccented before accented)
//! 3. case (lowercase before uppercase)
//!
//! Each pass only runs when the previous one found the names equal.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two names for display ordering.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
}

fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

// Combining marks sort above every base letter in code point order, so a
// plain lexical comparison of the folded decomposition puts unaccented
// names first.
fn secondary_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}
