// Shared content guards for free-text fields.
//
// These are denylist heuristics for immediate client-side feedback. Real
// sanitization happens server-side; nothing here is a security boundary.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

/// Attribute/protocol fragments rejected in free-text content.
const DANGEROUS_PATTERNS: [&str; 6] = [
    "javascript:",
    "vbscript:",
    "onload=",
    "onerror=",
    "onclick=",
    "onmouseover=",
];

lazy_static! {
    static ref SCRIPT_BLOCK: Regex = RegexBuilder::new(r"<script\b")
        .case_insensitive(true)
        .build()
        .unwrap();
}

/// Returns true if the text contains a `<script>` block or one of the fixed
/// dangerous attribute/protocol patterns, case-insensitively.
pub fn contains_dangerous_content(text: &str) -> bool {
    if SCRIPT_BLOCK.is_match(text) {
        return true;
    }

    let lowered = text.to_lowercase();
    DANGEROUS_PATTERNS
        .iter()
        .any(|pattern| lowered.contains(pattern))
}

/// Returns true if the text is made up entirely of punctuation/whitespace,
/// with no letter or digit in any script.
pub fn is_symbols_only(text: &str) -> bool {
    !text.chars().any(char::is_alphanumeric)
}

/// Compile a word list into a word-boundary, case-insensitive matcher.
///
/// Word boundaries matter: "dammit" does not match a "damn" entry.
pub(crate) fn word_list_matcher(words: &[&str]) -> Regex {
    let alternation = words.join("|");
    RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
        .case_insensitive(true)
        .build()
        .unwrap()
}
