// Chunk: docs/chunks/text_commands - Case, sort, dedupe, join and statistics commands

//! Language-aware string ordering for line sorting.
//!
//! [`LocaleCollator`] compares in three passes, the way dictionary order
//! does: base letters first (case and accents ignored), then accents, then
//! case with lowercase first. Strings equal on all three fall back to plain
//! code point order so the result is total. Croatian sorts `č ć đ š ž` as
//! letters of their own after `c d s z`.

use std::cmp::Ordering;

use lite_pad_i18n::Language;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A total order on strings.
pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Plain code point order.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalCollator;

impl Collator for OrdinalCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Dictionary order for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleCollator {
    language: Language,
}

/// Lowercases `c` when the mapping is one character, otherwise keeps it.
pub(crate) fn simple_lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

impl LocaleCollator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Croatian letters that are not accented variants for sorting purposes.
    fn tailored(&self, c: char) -> Option<(char, u8)> {
        if self.language != Language::Hr {
            return None;
        }
        match c {
            'č' => Some(('c', 1)),
            'ć' => Some(('c', 2)),
            'đ' => Some(('d', 1)),
            'š' => Some(('s', 1)),
            'ž' => Some(('z', 1)),
            _ => None,
        }
    }

    /// Base letters, lowercased, accents stripped.
    fn primary_key(&self, s: &str) -> Vec<(char, u8)> {
        let mut key = Vec::with_capacity(s.len());
        for c in s.chars().map(simple_lowercase) {
            if let Some(weight) = self.tailored(c) {
                key.push(weight);
                continue;
            }
            key.extend(
                std::iter::once(c)
                    .nfd()
                    .filter(|d| !is_combining_mark(*d))
                    .map(|d| (d, 0)),
            );
        }
        key
    }

    /// Lowercased canonical decomposition, so accents compare after base
    /// letters.
    fn secondary_key(s: &str) -> Vec<char> {
        s.chars().map(simple_lowercase).nfd().collect()
    }

    /// `false` for lowercase so it sorts first.
    fn tertiary_key(s: &str) -> Vec<bool> {
        s.chars().map(char::is_uppercase).collect()
    }
}

impl Default for LocaleCollator {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Collator for LocaleCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.primary_key(a)
            .cmp(&self.primary_key(b))
            .then_with(|| Self::secondary_key(a).cmp(&Self::secondary_key(b)))
            .then_with(|| Self::tertiary_key(a).cmp(&Self::tertiary_key(b)))
            .then_with(|| a.cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(collator: &impl Collator, words: &[&str]) -> Vec<String> {
        let mut words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        words.sort_by(|a, b| collator.compare(a, b));
        words
    }

    #[test]
    fn test_case_insensitive_at_first_level() {
        let collator = LocaleCollator::new(Language::En);
        assert_eq!(
            sorted(&collator, &["banana", "Apple", "cherry"]),
            vec!["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        let collator = LocaleCollator::new(Language::En);
        assert_eq!(sorted(&collator, &["Apple", "apple"]), vec!["apple", "Apple"]);
    }

    #[test]
    fn test_accents_break_ties_only() {
        let collator = LocaleCollator::new(Language::Fr);
        assert_eq!(
            sorted(&collator, &["côte", "cote", "coter"]),
            vec!["cote", "côte", "coter"]
        );
    }

    #[test]
    fn test_croatian_letters_follow_their_base() {
        let words = ["čaj", "cvijet", "dan"];
        assert_eq!(
            sorted(&LocaleCollator::new(Language::Hr), &words),
            vec!["cvijet", "čaj", "dan"]
        );
        // Elsewhere č is an accented c.
        assert_eq!(
            sorted(&LocaleCollator::new(Language::En), &words),
            vec!["čaj", "cvijet", "dan"]
        );
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(
            sorted(&OrdinalCollator, &["banana", "Apple", "apple"]),
            vec!["Apple", "apple", "banana"]
        );
    }

    #[test]
    fn test_closure_collator() {
        let by_len = |a: &str, b: &str| a.len().cmp(&b.len());
        assert_eq!(sorted(&by_len, &["ccc", "a", "bb"]), vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn test_equal_strings_compare_equal() {
        let collator = LocaleCollator::default();
        assert_eq!(collator.compare("Same", "Same"), Ordering::Equal);
    }
}
