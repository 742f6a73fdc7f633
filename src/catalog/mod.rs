//! Item catalog: the fixed category lists and the merged registry.
//!
//! The registry is the ordered union of all category lists with exact-string
//! duplicates removed, preserving first-seen order. Deduplication is by byte
//! equality only; differently-composed Unicode forms of the same Hangul are
//! treated as distinct items.

mod items;

use std::collections::HashSet;

pub use items::{
    BASIC_CONSONANTS, BASIC_PHRASES, BASIC_VOWELS, COMPLEX_VOWELS,
    DOUBLE_CONSONANTS, SINO_KOREAN_NUMBERS, SYLLABLE_EXAMPLES,
};

/// All category lists in registry order, paired with a human-readable label.
pub fn categories() -> [(&'static str, &'static [&'static str]); 7] {
    [
        ("basic vowels", BASIC_VOWELS),
        ("complex vowels", COMPLEX_VOWELS),
        ("basic consonants", BASIC_CONSONANTS),
        ("double consonants", DOUBLE_CONSONANTS),
        ("syllable examples", SYLLABLE_EXAMPLES),
        ("basic phrases", BASIC_PHRASES),
        ("numbers (1-10)", SINO_KOREAN_NUMBERS),
    ]
}

/// Concatenate lists in order, dropping exact-string duplicates while
/// preserving first-seen order.
pub fn merge_unique<'a>(lists: &[&[&'a str]]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for list in lists {
        for &item in *list {
            if seen.insert(item) {
                merged.push(item);
            }
        }
    }

    merged
}

/// The full deduplicated registry of text items to synthesize.
pub fn registry() -> Vec<&'static str> {
    let lists: Vec<&[&str]> = categories().iter().map(|(_, list)| *list).collect();
    merge_unique(&lists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_merge_unique_preserves_first_seen_order() {
        let merged = merge_unique(&[&["a", "b"], &["b", "c", "a"], &["d"]]);
        assert_eq!(merged, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_merge_unique_empty_input() {
        let merged = merge_unique(&[]);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_registry_has_no_duplicates() {
        let registry = registry();
        let distinct: HashSet<&str> = registry.iter().copied().collect();
        assert_eq!(distinct.len(), registry.len());
    }

    #[test]
    fn test_registry_size() {
        // 130 raw entries across all categories; the numbers 이, 사, 오, 구
        // also appear as syllable examples, so the registry holds 126.
        let raw: usize = categories().iter().map(|(_, list)| list.len()).sum();
        assert_eq!(raw, 130);
        assert_eq!(registry().len(), 126);
    }

    #[test]
    fn test_registry_starts_with_basic_vowels() {
        let registry = registry();
        assert_eq!(&registry[..10], BASIC_VOWELS);
    }

    #[test]
    fn test_registry_contains_every_category_item() {
        let registry: HashSet<&str> = registry().into_iter().collect();
        for (_, list) in categories() {
            for item in list {
                assert!(registry.contains(item), "missing item: {item}");
            }
        }
    }

    #[test]
    fn test_duplicate_numbers_keep_syllable_position() {
        // 구 first appears as a syllable example, before the numbers list.
        let registry = registry();
        let first = registry.iter().position(|&item| item == "구").unwrap();
        let last = registry.iter().rposition(|&item| item == "구").unwrap();
        assert_eq!(first, last);

        let sip = registry.iter().position(|&item| item == "십").unwrap();
        assert!(first < sip);
    }

    #[test]
    fn test_registry_is_deterministic() {
        assert_eq!(registry(), registry());
    }

    #[test]
    fn test_jamo_and_syllables_are_distinct() {
        // ㅣ (vowel jamo) and 이 (syllable) must both survive the merge.
        let registry = registry();
        assert!(registry.contains(&"ㅣ"));
        assert!(registry.contains(&"이"));
    }
}
