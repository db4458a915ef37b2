// ===== shiftbreak/src/english.rs =====

/// Size of the working alphabet (A..Z). Everything in the engine is
/// indexed by position in this range.
pub const ALPHABET_LEN: usize = 26;

/// Relative letter frequencies (percent) in English running text,
/// indexed A=0 .. Z=25. Classic Lewand/Cornell figures.
pub const EN_FREQ: [f64; ALPHABET_LEN] = [
    8.167,  // A
    1.492,  // B
    2.782,  // C
    4.253,  // D
    12.702, // E
    2.228,  // F
    2.015,  // G
    6.094,  // H
    6.966,  // I
    0.153,  // J
    0.772,  // K
    4.025,  // L
    2.406,  // M
    6.749,  // N
    7.507,  // O
    1.929,  // P
    0.095,  // Q
    5.987,  // R
    6.327,  // S
    9.056,  // T
    2.758,  // U
    0.978,  // V
    2.360,  // W
    0.150,  // X
    1.974,  // Y
    0.074,  // Z
];

/// Normalization denominator for expected counts. The table above sums
/// to ~100 but not exactly, so we divide by the real sum rather than 100.
pub fn en_freq_total() -> f64 {
    EN_FREQ.iter().sum()
}

/// Short high-frequency function words used as a crude plausibility
/// signal. Matching is exact against uppercased tokens.
pub const COMMON_WORDS: [&str; 24] = [
    "THE", "AND", "OF", "TO", "IN", "IS", "IT", "YOU", "THAT", "FOR", "ON", "WITH", "AS", "ARE",
    "AT", "BE", "BY", "THIS", "I", "NOT", "OR", "FROM", "HAVE", "AN",
];

/// Zero-based alphabet index for an ASCII letter, or None for anything else.
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}
