//! Grapheme and word views of a string.
//!
//! Both views are lossless: concatenating the tokens in order gives back the
//! input exactly. Positions in either view are token indices, not byte offsets.

use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Splits text into user-perceived characters and word tokens.
pub trait Segmenter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Grapheme clusters in order.
    fn graphemes<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Word tokens with the whitespace between them kept as tokens.
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

static WS_OR_NON_WS_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+|\S+").expect("static segmentation pattern"));

/// Fallback without boundary tables: one grapheme per `char`, words are
/// maximal whitespace / non-whitespace runs.
///
/// Conjuncts and vowel signs in Indic scripts come apart (`কি` is two
/// graphemes here, one under UAX #29), so CER over such text is inflated.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveSegmenter;

impl Segmenter for NaiveSegmenter {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn graphemes<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect()
    }

    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        WS_OR_NON_WS_RUN
            .find_iter(text)
            .map(|m| m.as_str())
            .collect()
    }
}

/// UAX #29 extended grapheme clusters and word boundaries.
///
/// Word tokens are the UAX #29 segments: words, single punctuation marks and
/// whitespace runs each come out as their own token (`"গাই।"` → `["গাই", "।"]`).
#[cfg(feature = "segmentation")]
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSegmenter;

#[cfg(feature = "segmentation")]
impl Segmenter for UnicodeSegmenter {
    fn name(&self) -> &'static str {
        "uax29"
    }

    fn graphemes<'a>(&self, text: &'a str) -> Vec<&'a str> {
        use unicode_segmentation::UnicodeSegmentation;
        text.graphemes(true).collect()
    }

    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        use unicode_segmentation::UnicodeSegmentation;
        text.split_word_bounds().collect()
    }
}

static DEFAULT_SEGMENTER: LazyLock<Arc<dyn Segmenter>> = LazyLock::new(|| {
    #[cfg(feature = "segmentation")]
    let segmenter: Arc<dyn Segmenter> = Arc::new(UnicodeSegmenter);
    #[cfg(not(feature = "segmentation"))]
    let segmenter: Arc<dyn Segmenter> = Arc::new(NaiveSegmenter);
    segmenter
});

/// The best segmenter this build provides. The choice is made once, from
/// the enabled cargo features, and shared by every caller.
#[inline]
pub fn default_segmenter() -> Arc<dyn Segmenter> {
    Arc::clone(&DEFAULT_SEGMENTER)
}
