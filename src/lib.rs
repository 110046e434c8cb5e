//! Character error rate and word-level diffs for transcripts in complex
//! scripts.
//!
//! Both sides are normalized (NFC, zero-width and punctuation removal,
//! whitespace collapsing, script-specific canonical folding) and compared as
//! extended grapheme clusters, so a vowel sign or nukta error counts once.

pub mod align;
pub mod context;
pub mod distance;
pub mod normalizer;
pub mod process;
pub mod profile;
pub mod render;
pub mod scorer;
pub mod script;
pub mod segment;
pub mod stage;
pub mod unicode;

#[cfg(test)]
mod testing;

pub use align::{EditOp, align, hypothesis_tokens, reference_tokens};
pub use context::Context;
pub use distance::{ScoreResult, levenshtein};
pub use normalizer::Normalizer;
pub use profile::{Profile, ProfileError};
pub use render::{DEFAULT_MARKERS, DiffRenderer, Markers, Mismatch, WordDiff};
pub use scorer::{
    DEFAULT_MAX_ALIGNED_TOKENS, ScoreError, Scorer, ScorerBuilder, compute_cer, compute_word_diff,
};
pub use script::data::{BENG, DEVA, GURU, LATN, all_scripts, from_code};
pub use script::{Canonical, CanonicalTable, DEFAULT_SCRIPT, Script};
#[cfg(feature = "segmentation")]
pub use segment::UnicodeSegmenter;
pub use segment::{NaiveSegmenter, Segmenter, default_segmenter};
pub use stage::canonicalize::Canonicalize;
pub use stage::normalization::NFC;
pub use stage::normalize_whitespace::{
    COLLAPSE_WHITESPACE, NORMALIZE_WHITESPACE_FULL, NormalizeWhitespace, TRIM_WHITESPACE,
};
pub use stage::strip_punctuation::StripPunctuation;
pub use stage::strip_zero_width::StripZeroWidth;
pub use stage::{Stage, StageError};
