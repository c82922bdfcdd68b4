//! Cleanup of extracted substrings

use regex_utils::{list, markup};

/// Hard cap on a cleaned description, in characters
pub const MAX_DESCRIPTION_CHARS: usize = 150;

/// Length a description is cut back to before the ellipsis is appended
pub const TRUNCATED_DESCRIPTION_CHARS: usize = 147;

/// Tech stack tokens must be strictly longer than this
const MIN_TECH_TOKEN_CHARS: usize = 2;

/// Split a captured tech stack line into individual technologies
///
/// Tokens of two characters or fewer are dropped (`"JS"`, `"&"`, stray bullets).
pub fn tech_tokens(raw: &str) -> Vec<String> {
    list::split(raw)
        .map(str::trim)
        .filter(|token| token.chars().count() > MIN_TECH_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Trim a single captured value
pub fn capture(raw: &str) -> String {
    raw.trim().to_string()
}

/// Strip markdown and special characters from a description, then bound its length
pub fn clean_description(description: &str) -> String {
    let stripped = markup::strip_all(description);
    let capped: String = stripped.chars().take(MAX_DESCRIPTION_CHARS).collect();
    let trimmed = capped.trim();

    if trimmed.chars().count() > TRUNCATED_DESCRIPTION_CHARS {
        let mut cut: String = trimmed.chars().take(TRUNCATED_DESCRIPTION_CHARS).collect();
        cut.push_str("...");
        cut
    } else {
        trimmed.to_string()
    }
}
