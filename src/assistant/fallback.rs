//! Fallback responses for unmatched input
//!
//! When no FAQ entry matches, an ordered rule chain picks a canned response:
//! greetings, thanks, pricing, location, then a generic clarification. Rule
//! order is part of the contract: earlier rules win.

/// A fallback rule: the keywords that trigger it and the response it yields
struct FallbackRule {
    keywords: &'static [&'static str],
    response: &'static str,
}

/// Fallback rules in evaluation order
const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &["hello", "hi", "hey"],
        response: "Hi there! How can I help you today? You can ask about bookings, \
                   payments, or mess plans.",
    },
    FallbackRule {
        keywords: &["thank"],
        response: "You're welcome! Is there anything else I can help you with?",
    },
    FallbackRule {
        keywords: &["price", "cost"],
        response: "Room and mess prices vary by listing. Open a listing to see its \
                   current tariff, or filter search results by budget.",
    },
    FallbackRule {
        keywords: &["location", "where"],
        response: "Every listing shows its full address and a map pin. You can also \
                   filter search results by city or locality.",
    },
];

/// Response when no rule matches
const GENERIC_RESPONSE: &str = "I'm not sure I understood that. Try one of the FAQ \
                                categories below, or write to our support team and \
                                we'll get back to you.";

/// Pick the fallback response for input no FAQ entry matched.
///
/// Rules are checked in a fixed order (greeting, thanks, pricing, location);
/// the first rule with a keyword contained in the lower-cased input wins,
/// and a generic clarification covers everything else. Always returns a
/// non-empty response.
pub fn fallback_response(input: &str) -> &'static str {
    let normalized = input.to_lowercase();

    FALLBACK_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| normalized.contains(keyword)))
        .map(|rule| rule.response)
        .unwrap_or(GENERIC_RESPONSE)
}
