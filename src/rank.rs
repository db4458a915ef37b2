// ===== shiftbreak/src/rank.rs =====
use crate::config::RankParams;
use crate::english::ALPHABET_LEN;
use crate::scorer::{chi_square_english, lexical_hit_score};
use crate::shift::decrypt_shift;
use crate::{SbResult, ShiftBreakError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// One hypothesized decryption: the shift that produced it, the
/// resulting plaintext, and both score components.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Candidate {
    pub shift: u8,
    pub plaintext: String,
    pub hits: u32,
    pub chi_square: f64,
}

impl Candidate {
    /// Rank comparator: more word hits first, then closer English fit,
    /// then lower shift. A total order, so the final ordering never
    /// depends on sort stability.
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        other
            .hits
            .cmp(&self.hits)
            .then_with(|| self.chi_square.total_cmp(&other.chi_square))
            .then_with(|| self.shift.cmp(&other.shift))
    }
}

/// The full 26-way ranking plus the requested top-K window.
#[derive(Serialize, Debug, Clone)]
pub struct Ranking {
    candidates: Vec<Candidate>,
    top_k: usize,
}

impl Ranking {
    /// All 26 candidates, best first (or shift order when unscored).
    pub fn all(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Prefix of `all()` of length min(top_k, 26).
    pub fn top(&self) -> &[Candidate] {
        &self.candidates[..self.top_k]
    }

    pub fn best(&self) -> &Candidate {
        &self.candidates[0]
    }
}

/// Tries all 26 shifts against `ciphertext` and ranks the results.
///
/// Parameter validation happens up front: a zero `top_k` aborts before
/// any candidate is computed. The 26 evaluations are independent, so
/// they run on the rayon pool; the sort is the synchronization point.
pub fn rank_shifts(ciphertext: &str, params: &RankParams) -> SbResult<Ranking> {
    if params.top_k == 0 {
        return Err(ShiftBreakError::InvalidTopK(params.top_k));
    }
    let top_k = params.top_k.min(ALPHABET_LEN);
    let scoring = params.scoring();

    let mut candidates = (0..ALPHABET_LEN as u8)
        .into_par_iter()
        .map(|shift| {
            let plaintext = decrypt_shift(ciphertext, shift)?;
            let (hits, chi_square) = if scoring {
                (lexical_hit_score(&plaintext), chi_square_english(&plaintext))
            } else {
                // Neutral score: ordering degenerates to shift order.
                (0, 0.0)
            };
            Ok(Candidate {
                shift,
                plaintext,
                hits,
                chi_square,
            })
        })
        .collect::<SbResult<Vec<Candidate>>>()?;

    if scoring {
        candidates.sort_by(Candidate::cmp_rank);
    } else {
        candidates.sort_by_key(|c| c.shift);
    }

    debug!(
        best_shift = candidates[0].shift,
        best_hits = candidates[0].hits,
        best_chi = candidates[0].chi_square,
        "ranked {} candidates",
        candidates.len()
    );

    Ok(Ranking { candidates, top_k })
}
