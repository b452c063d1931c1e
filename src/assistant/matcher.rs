//! Keyword matching over the FAQ catalog
//!
//! This module implements the first-match scan connecting free-text input to
//! FAQ entries:
//! - Input is lower-cased before scanning
//! - An entry matches when any of its question tokens appears as a substring
//! - Categories and entries are scanned in their fixed catalog order

use crate::assistant::faq::{FaqEntry, FaqIndex};

/// Find the first FAQ entry whose keywords appear in the input.
///
/// The scan walks categories in catalog order and entries in declaration
/// order within each category; the first entry with any question token
/// contained in the lower-cased input wins. Declaration order is the only
/// tie-break between overlapping entries.
///
/// Short common tokens ("a", "is") match eagerly, and tokens keep their
/// punctuation ("room?"); there is no stop-word list. Catalogs are worded
/// with that in mind.
///
/// # Arguments
/// * `input` - Raw user input
/// * `index` - The FAQ catalog to scan
///
/// # Returns
/// The first matching entry, or `None` if nothing matches
pub fn find_match<'a>(input: &str, index: &'a FaqIndex) -> Option<&'a FaqEntry> {
    find_match_with_min_len(input, index, 1)
}

/// Find the first matching FAQ entry, ignoring question tokens shorter than
/// `min_token_len` characters.
///
/// A stricter variant of [`find_match`] for catalogs whose questions carry
/// short common words. The threshold counts characters, not bytes, so it
/// behaves the same for non-ASCII questions; `min_token_len = 1` reproduces
/// [`find_match`] exactly.
pub fn find_match_with_min_len<'a>(
    input: &str,
    index: &'a FaqIndex,
    min_token_len: usize,
) -> Option<&'a FaqEntry> {
    let normalized = input.to_lowercase();

    index
        .entries()
        .iter()
        .zip(index.keyword_sets())
        .find(|(_, tokens)| {
            tokens.iter().any(|token| {
                token.chars().count() >= min_token_len && normalized.contains(token.as_str())
            })
        })
        .map(|(entry, _)| entry)
}
