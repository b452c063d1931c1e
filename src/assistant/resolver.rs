//! Response resolution
//!
//! This module combines the keyword matcher and the fallback chain into one
//! total lookup: every input resolves to exactly one non-empty response.

use crate::assistant::fallback::fallback_response;
use crate::assistant::faq::FaqIndex;
use crate::assistant::matcher::find_match_with_min_len;

/// Resolves user input to an assistant response.
///
/// The resolver owns an immutable FAQ catalog and is a pure function of
/// `(input, catalog)`: the same input always yields the same response and
/// resolution never fails. Wrap one resolver in [`std::sync::Arc`] to share
/// it across conversations.
///
/// # Example
/// ```rust
/// use roomdesk::assistant::{FaqIndex, ResponseResolver};
///
/// let resolver = ResponseResolver::new(FaqIndex::default());
/// let answer = resolver.resolve("how do I book a room");
/// assert!(!answer.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ResponseResolver {
    /// The FAQ catalog answers come from
    index: FaqIndex,
    /// Minimum keyword length for the matcher (1 matches every token)
    min_token_len: usize,
}

impl ResponseResolver {
    /// Create a resolver over the given FAQ catalog
    pub fn new(index: FaqIndex) -> Self {
        Self {
            index,
            min_token_len: 1,
        }
    }

    /// Create a resolver that ignores question tokens shorter than `min_token_len`.
    ///
    /// Stricter matching for catalogs with short common words in their
    /// questions; `min_token_len = 1` behaves exactly like [`ResponseResolver::new`].
    pub fn with_min_token_len(index: FaqIndex, min_token_len: usize) -> Self {
        Self {
            index,
            min_token_len,
        }
    }

    /// The FAQ catalog backing this resolver
    pub fn index(&self) -> &FaqIndex {
        &self.index
    }

    /// Resolve user input to a response.
    ///
    /// Returns the answer of the first matching FAQ entry, or the fallback
    /// response when nothing matches. Always non-empty.
    pub fn resolve(&self, input: &str) -> String {
        match find_match_with_min_len(input, &self.index, self.min_token_len) {
            Some(entry) => entry.answer.clone(),
            None => fallback_response(input).to_string(),
        }
    }
}
