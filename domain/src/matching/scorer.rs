//! Entry scoring
//!
//! Triggers are matched as substrings of the normalized query, so a keyword
//! still counts when it is embedded in a longer phrase ("egitim bilgin
//! nedir"). Points grow with trigger length, which keeps short generic
//! triggers from outweighing distinctive ones.

use crate::knowledge::PreparedEntry;

/// Scores below this select the fallback response.
pub const MIN_CONFIDENCE: u32 = 3;

/// Minimum points for a keyword found as a substring
const KEYWORD_MIN_POINTS: u32 = 2;

/// Bonus when a keyword equals one of the query tokens
const EXACT_TOKEN_BONUS: u32 = 4;

/// Minimum points for a variation found as a substring
const VARIATION_MIN_POINTS: u32 = 1;

/// Score one entry against a normalized query and its tokens.
pub fn score_entry(entry: &PreparedEntry, normalized: &str, tokens: &[&str]) -> u32 {
    let mut score = 0;

    for keyword in &entry.keywords {
        if normalized.contains(keyword.text.as_str()) {
            score += KEYWORD_MIN_POINTS.max(keyword.chars as u32);
        }
        if tokens.contains(&keyword.text.as_str()) {
            score += EXACT_TOKEN_BONUS;
        }
    }

    for variation in &entry.variations {
        if normalized.contains(variation.text.as_str()) {
            score += VARIATION_MIN_POINTS.max(variation.chars as u32 / 2);
        }
    }

    score
}
