//! Diacritic and case insensitive text matching.
//!
//! Hungarian station and river names are full of accented vowels, and users
//! type searches without them. Matching runs over a folded form: NFD
//! decomposition, combining marks stripped, then lowercased, so "god" finds
//! "Göd" and "ERD" finds "Érd".

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folded form of `text` used for matching and as a collation key.
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Substring test over folded text. An empty needle matches everything,
/// which is how "no filter applied" is expressed.
pub fn matches(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}
