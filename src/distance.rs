//! Unit-cost Levenshtein distance and character error rate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of one CER computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreResult {
    pub edit_distance: usize,
    /// `None` when the normalized reference has no graphemes.
    pub cer: Option<f64>,
    pub reference_grapheme_count: usize,
}

impl ScoreResult {
    /// Score two grapheme sequences that have already been normalized.
    ///
    /// * empty reference → `cer == None`
    /// * empty hypothesis → `cer == Some(1.0)` (every reference grapheme deleted)
    /// * otherwise `edit_distance / reference_grapheme_count`, which exceeds
    ///   `1.0` when the hypothesis is much longer than the reference
    pub fn from_graphemes<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> Self {
        let edit_distance = levenshtein(reference, hypothesis);
        let cer = match reference.len() {
            0 => None,
            n => Some(edit_distance as f64 / n as f64),
        };
        Self {
            edit_distance,
            cer,
            reference_grapheme_count: reference.len(),
        }
    }
}

/// Classic Levenshtein distance: insertions, deletions and substitutions
/// all cost 1.
///
/// O(n·m) time, two rolling rows sized to the shorter input.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // distance is symmetric, so let the inner loop run over the shorter side
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, x) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, y) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(x != y);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}
