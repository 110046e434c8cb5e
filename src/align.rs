//! Longest-common-subsequence alignment of two token sequences.
//!
//! [`align`] is generic over the token type and the equality predicate, so
//! the same routine serves the word-level pass and the grapheme-level pass
//! inside replaced spans.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One step of an edit script, in left-to-right order.
///
/// `original` is the reference side (A), `hypothesis` the other side (B).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "lowercase"))]
pub enum EditOp<T> {
    Equal { original: T, hypothesis: T },
    Insert { hypothesis: T },
    Delete { original: T },
    Replace { original: T, hypothesis: T },
}

impl<T> EditOp<T> {
    /// The B-side token this op contributes, if any.
    #[inline]
    pub fn hypothesis(&self) -> Option<&T> {
        match self {
            EditOp::Equal { hypothesis, .. }
            | EditOp::Insert { hypothesis }
            | EditOp::Replace { hypothesis, .. } => Some(hypothesis),
            EditOp::Delete { .. } => None,
        }
    }

    /// The A-side token this op consumes, if any.
    #[inline]
    pub fn original(&self) -> Option<&T> {
        match self {
            EditOp::Equal { original, .. }
            | EditOp::Delete { original }
            | EditOp::Replace { original, .. } => Some(original),
            EditOp::Insert { .. } => None,
        }
    }

    #[inline]
    pub fn is_equal(&self) -> bool {
        matches!(self, EditOp::Equal { .. })
    }
}

/// Replays the B-producing ops; always equals the `b` passed to [`align`].
pub fn hypothesis_tokens<T: Clone>(ops: &[EditOp<T>]) -> Vec<T> {
    ops.iter().filter_map(EditOp::hypothesis).cloned().collect()
}

/// Replays the A-consuming ops; always equals the `a` passed to [`align`].
pub fn reference_tokens<T: Clone>(ops: &[EditOp<T>]) -> Vec<T> {
    ops.iter().filter_map(EditOp::original).cloned().collect()
}

/// Minimal edit script turning `a` into `b` under `eq`.
///
/// 1. Suffix LCS table: `lcs[i][j]` is the LCS length of `a[i..]` and `b[j..]`.
/// 2. Walk forward from `(0, 0)`: a match emits `Equal`; otherwise step
///    towards the larger remaining LCS, and on a tie consume `a` (`Delete`).
/// 3. One left-to-right pass turns each `Delete` immediately followed by an
///    `Insert` into a single `Replace`. Pairs are not merged transitively.
///
/// O(n·m) time and space.
pub fn align<T, F>(a: &[T], b: &[T], eq: F) -> Vec<EditOp<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let (n, m) = (a.len(), b.len());
    let width = m + 1;
    let mut lcs = vec![0u32; (n + 1) * width];
    let at = |i: usize, j: usize| i * width + j;

    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[at(i, j)] = if eq(&a[i], &b[j]) {
                lcs[at(i + 1, j + 1)] + 1
            } else {
                lcs[at(i + 1, j)].max(lcs[at(i, j + 1)])
            };
        }
    }

    let mut raw = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if eq(&a[i], &b[j]) {
            raw.push(EditOp::Equal {
                original: a[i].clone(),
                hypothesis: b[j].clone(),
            });
            i += 1;
            j += 1;
        } else if lcs[at(i + 1, j)] >= lcs[at(i, j + 1)] {
            // ties consume `a`
            raw.push(EditOp::Delete {
                original: a[i].clone(),
            });
            i += 1;
        } else {
            raw.push(EditOp::Insert {
                hypothesis: b[j].clone(),
            });
            j += 1;
        }
    }
    raw.extend(a[i..].iter().cloned().map(|original| EditOp::Delete { original }));
    raw.extend(b[j..].iter().cloned().map(|hypothesis| EditOp::Insert { hypothesis }));

    merge_replacements(raw)
}

fn merge_replacements<T>(raw: Vec<EditOp<T>>) -> Vec<EditOp<T>> {
    let mut ops = Vec::with_capacity(raw.len());
    let mut iter = raw.into_iter().peekable();
    while let Some(op) = iter.next() {
        let op = match op {
            EditOp::Delete { original } => {
                match iter.next_if(|next| matches!(next, EditOp::Insert { .. })) {
                    Some(EditOp::Insert { hypothesis }) => EditOp::Replace {
                        original,
                        hypothesis,
                    },
                    _ => EditOp::Delete { original },
                }
            }
            op => op,
        };
        ops.push(op);
    }
    ops
}
