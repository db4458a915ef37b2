// ===== shiftbreak/src/scorer/frequency.rs =====
use crate::english::{en_freq_total, letter_index, ALPHABET_LEN, EN_FREQ};

/// Expected counts of zero never occur with the real table, but the
/// divisor is floored anyway so a degenerate table cannot produce NaN.
const EXPECTED_FLOOR: f64 = 1e-9;

/// Case-insensitive counts of A..Z in `text`. Non-letters are ignored.
pub fn letter_counts(text: &str) -> [u32; ALPHABET_LEN] {
    let mut counts = [0u32; ALPHABET_LEN];
    for c in text.chars() {
        if let Some(i) = letter_index(c) {
            counts[i] += 1;
        }
    }
    counts
}

/// Chi-square goodness-of-fit of `text`'s letter distribution against
/// the English reference table. Lower = closer to English.
///
/// Text with no letters at all has no distribution to compare; it
/// returns +infinity so such candidates always rank behind any
/// candidate with at least one letter.
pub fn chi_square_english(text: &str) -> f64 {
    let counts = letter_counts(text);
    let n: u32 = counts.iter().sum();
    if n == 0 {
        return f64::INFINITY;
    }

    let total = en_freq_total();
    let mut chi = 0.0;
    // Fixed A..Z order keeps the float summation reproducible.
    for (i, &observed) in counts.iter().enumerate() {
        let expected = EN_FREQ[i] / total * n as f64;
        let diff = observed as f64 - expected;
        chi += diff * diff / expected.max(EXPECTED_FLOOR);
    }
    chi
}
