// ===== shiftbreak/src/scorer/lexical.rs =====
use crate::english::COMMON_WORDS;

/// Counts tokens of `text` that are common English function words.
///
/// Tokenization is deliberately blunt: every non-letter becomes a
/// separator, so "don't" splits into DON and T and an apostrophe can
/// never hide a match. Known limitation, kept as defined behavior.
pub fn lexical_hit_score(text: &str) -> u32 {
    let normalized: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_uppercase()
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|tok| COMMON_WORDS.contains(tok))
        .count() as u32
}
