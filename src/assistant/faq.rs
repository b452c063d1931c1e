//! FAQ catalog and keyword indexing

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single question/answer pair in the FAQ catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Category this entry belongs to (e.g. "Bookings")
    pub category: String,
    /// The question shown in the FAQ browser
    pub question: String,
    /// The canned answer
    pub answer: String,
}

impl FaqEntry {
    /// Create a new FAQ entry
    pub fn new(category: &str, question: &str, answer: &str) -> Self {
        Self {
            category: category.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Immutable FAQ catalog with precomputed keyword sets
///
/// The index is built once and never changes afterwards. Entries are grouped
/// by category in first-appearance order, keeping their declaration order
/// within each category; that combined order is the scan order of the
/// keyword matcher and the tie-break between overlapping entries.
///
/// Each question is tokenized at build time (lower-cased, split on
/// whitespace, punctuation kept); the tokens stay internal to the index.
///
/// # Example
/// ```rust,no_run
/// use roomdesk::assistant::FaqIndex;
///
/// // Load a catalog (returns the built-in one if the file doesn't exist)
/// let index = FaqIndex::load("faq.json").expect("Failed to load catalog");
/// println!("{} entries in {} categories", index.len(), index.categories().len());
/// ```
#[derive(Debug, Clone)]
pub struct FaqIndex {
    /// Category names in first-appearance order
    categories: Vec<String>,
    /// Entries grouped by category, declaration order within each
    entries: Vec<FaqEntry>,
    /// Lower-cased question tokens, parallel to `entries`
    keywords: Vec<Vec<String>>,
}

impl FaqIndex {
    /// Build an index from a flat list of entries.
    ///
    /// Entries are grouped by category in the order categories first appear;
    /// within a category the declaration order is kept. An empty list builds
    /// a valid empty index.
    pub fn from_entries(entries: Vec<FaqEntry>) -> Self {
        let mut grouped: Vec<(String, Vec<FaqEntry>)> = Vec::new();
        for entry in entries {
            match grouped.iter_mut().find(|(name, _)| *name == entry.category) {
                Some((_, bucket)) => bucket.push(entry),
                None => grouped.push((entry.category.clone(), vec![entry])),
            }
        }

        let mut index = Self {
            categories: Vec::new(),
            entries: Vec::new(),
            keywords: Vec::new(),
        };
        for (name, bucket) in grouped {
            index.categories.push(name);
            for entry in bucket {
                index.keywords.push(tokenize(&entry.question));
                index.entries.push(entry);
            }
        }
        index
    }

    /// Parse a catalog from a JSON array of entries.
    ///
    /// Entries with an empty question or answer are rejected: the resolver
    /// promises non-empty responses and needs tokens to match on.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<FaqEntry> = serde_json::from_str(json)?;

        for entry in &entries {
            if entry.question.trim().is_empty() {
                return Err(Error::Catalog(format!(
                    "FAQ entry in category '{}' has an empty question",
                    entry.category
                )));
            }
            if entry.answer.trim().is_empty() {
                return Err(Error::Catalog(format!(
                    "FAQ entry '{}' has an empty answer",
                    entry.question
                )));
            }
        }

        Ok(Self::from_entries(entries))
    }

    /// Load a catalog from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the catalog file
    ///
    /// # Returns
    /// The loaded catalog, or the built-in one if the file doesn't exist or
    /// is empty
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)?;

        // Handle empty file (fall back to the built-in catalog)
        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_json_str(&data)
    }

    /// Number of entries in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category names in their fixed scan order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// All entries in their fixed scan order
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Entries belonging to the given category, in declaration order
    pub fn entries_for(&self, category: &str) -> Vec<&FaqEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    /// Keyword sets parallel to `entries()`, for the matcher
    pub(crate) fn keyword_sets(&self) -> &[Vec<String>] {
        &self.keywords
    }
}

impl Default for FaqIndex {
    /// The built-in marketplace catalog
    fn default() -> Self {
        Self::from_entries(builtin_catalog())
    }
}

/// Lower-case a question and split it on whitespace
fn tokenize(question: &str) -> Vec<String> {
    question
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// The catalog shipped with the library.
///
/// Question wording is deliberate: with substring matching, short common
/// tokens in an early entry capture input meant for later ones, so questions
/// stick to distinctive words and the entries each quick action targets are
/// reachable in scan order.
fn builtin_catalog() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "Bookings",
            "Need to cancel your booking?",
            "Open My Stays, choose the booking, and tap Cancel. Refunds follow the \
             cancellation policy shown on the listing page.",
        ),
        FaqEntry::new(
            "Bookings",
            "How to book your room?",
            "Open the listing you like, pick a move-in date, and tap Book Now. The owner \
             confirms within 24 hours and the booking appears under My Stays.",
        ),
        FaqEntry::new(
            "Bookings",
            "Could we visit the room first?",
            "Yes. Use Schedule Visit on the listing to request a time slot directly with \
             the owner.",
        ),
        FaqEntry::new(
            "Payments",
            "Which payment methods can be used?",
            "We accept UPI, debit and credit cards, and net banking. Cash handed to the \
             owner is not covered by our payment protection.",
        ),
        FaqEntry::new(
            "Payments",
            "When will my refund arrive?",
            "Refunds start within 48 hours of an approved cancellation and usually reach \
             your account in 5 to 7 business days.",
        ),
        FaqEntry::new(
            "Payments",
            "How much security deposit will be charged?",
            "Most listings ask for a refundable deposit of one month's rent. The exact \
             amount is shown in the pricing section of the listing.",
        ),
        FaqEntry::new(
            "Mess & Meals",
            "What mess plans are available?",
            "Listings with a mess offer monthly veg and non-veg plans. Weekly menus appear \
             under the Mess tab of the listing.",
        ),
        FaqEntry::new(
            "Mess & Meals",
            "Can the mess be used without booking a room?",
            "Yes, standalone mess subscriptions are available wherever the owner has \
             enabled them. Look for the Mess Only badge in search results.",
        ),
        FaqEntry::new(
            "Account",
            "How do I update my profile details?",
            "Open Profile from the menu, tap Edit, and save your changes. Phone numbers \
             can only be changed after re-verification.",
        ),
        FaqEntry::new(
            "Account",
            "How do I reset my password?",
            "Use Forgot Password on the login screen and we will email a reset link to \
             your registered address.",
        ),
    ]
}
