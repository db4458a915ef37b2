// ===== shiftbreak/src/shift.rs =====
use crate::english::ALPHABET_LEN;
use crate::{SbResult, ShiftBreakError};

/// Decrypts `text` under the assumption it was Caesar-encrypted with
/// `shift`: every ASCII letter moves `shift` positions backward in the
/// alphabet (wrapping), case preserved. Non-letters copy through.
///
/// A shift outside 0..26 is a caller error and is never clamped.
pub fn decrypt_shift(text: &str, shift: u8) -> SbResult<String> {
    if shift as usize >= ALPHABET_LEN {
        return Err(ShiftBreakError::InvalidShift(shift));
    }

    let out = text
        .chars()
        .map(|c| shift_letter_back(c, shift))
        .collect();
    Ok(out)
}

fn shift_letter_back(c: char, shift: u8) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };

    let idx = (c as u8) - base;
    // +26 keeps the subtraction in unsigned range before the wrap.
    let dec = (idx + ALPHABET_LEN as u8 - shift) % ALPHABET_LEN as u8;
    (base + dec) as char
}
