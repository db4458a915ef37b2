pub mod crack;
pub mod decrypt;

use shiftbreak::SbResult;
use std::io::Read;

/// Resolves the input source: positional text first, then --file,
/// then stdin. Trailing newlines from files/pipes are stripped.
pub fn read_ciphertext(text: &Option<String>, file: &Option<String>) -> SbResult<String> {
    if let Some(t) = text {
        return Ok(t.clone());
    }
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?.trim_end().to_string());
    }

    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end().to_string())
}
