//! Support assistant module
//!
//! This module turns free-text user input into deterministic responses:
//! - `faq` - Categorized question/answer catalog with keyword indexing
//! - `matcher` - First-match keyword scan over the catalog
//! - `fallback` - Ordered fallback responses for unmatched input
//! - `resolver` - Total resolution: FAQ answer or fallback
//! - `quick_actions` - Predefined question shortcuts for the chat UI

// Submodules
pub mod faq;
pub mod fallback;
pub mod matcher;
pub mod quick_actions;
pub mod resolver;

// Re-export commonly used types
pub use faq::{FaqEntry, FaqIndex};
pub use fallback::fallback_response;
pub use matcher::{find_match, find_match_with_min_len};
pub use quick_actions::QuickAction;
pub use resolver::ResponseResolver;
