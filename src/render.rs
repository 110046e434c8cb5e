//! Turns a word-level edit script into hypothesis-facing HTML markup and a
//! list of mismatched word pairs.

use crate::{
    align::{EditOp, align},
    normalizer::Normalizer,
    profile::ProfileError,
    segment::Segmenter,
    unicode::{is_punctuation_only, is_whitespace_only},
};
use html_escape::encode_text_to_string;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// CSS classes put on the `<span>` markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    /// A hypothesis word with no counterpart in the reference.
    pub inserted: &'static str,
    /// A hypothesis word that replaced a reference word.
    pub replaced: &'static str,
    /// Graphemes that differ inside a replaced word.
    pub changed_char: &'static str,
}

pub const DEFAULT_MARKERS: Markers = Markers {
    inserted: "diff-inserted",
    replaced: "diff-replaced",
    changed_char: "diff-char",
};

impl Default for Markers {
    fn default() -> Self {
        DEFAULT_MARKERS
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mismatch {
    pub original: String,
    pub hypothesis: String,
}

impl Mismatch {
    fn new(original: &str, hypothesis: &str) -> Self {
        Self {
            original: original.trim().to_owned(),
            hypothesis: hypothesis.trim().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordDiff {
    /// Escaped HTML; embed as-is.
    pub markup: String,
    pub mismatches: Vec<Mismatch>,
    /// `false` when alignment was skipped by the length guard.
    pub aligned: bool,
}

impl WordDiff {
    /// Plain escaped hypothesis, no highlighting and no mismatches.
    pub fn unaligned(hypothesis: &str) -> Self {
        let mut markup = String::with_capacity(hypothesis.len());
        encode_text_to_string(hypothesis, &mut markup);
        Self {
            markup,
            mismatches: Vec::new(),
            aligned: false,
        }
    }
}

/// A token together with its normalized comparison key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub key: Cow<'a, str>,
}

impl Token<'_> {
    #[inline]
    pub fn same(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

/// Pair every token with its normalized key.
pub fn tokenize<'a>(
    normalizer: &Normalizer,
    tokens: &[&'a str],
) -> Result<Vec<Token<'a>>, ProfileError> {
    tokens
        .iter()
        .map(|&text| normalizer.normalize(text).map(|key| Token { text, key }))
        .collect()
}

pub struct DiffRenderer<'s> {
    normalizer: &'s Normalizer,
    segmenter: &'s dyn Segmenter,
    markers: Markers,
}

impl<'s> DiffRenderer<'s> {
    pub fn new(normalizer: &'s Normalizer, segmenter: &'s dyn Segmenter, markers: Markers) -> Self {
        Self {
            normalizer,
            segmenter,
            markers,
        }
    }

    /// Walk a word-level edit script.
    ///
    /// * `Equal`: the hypothesis token, escaped.
    /// * `Insert`: marked as inserted unless it is whitespace; reported unless
    ///   it is whitespace or punctuation.
    /// * `Delete`: not shown; reported unless whitespace or punctuation.
    /// * `Replace`: re-aligned grapheme by grapheme and marked as replaced;
    ///   reported unless either side is punctuation. A whitespace side turns
    ///   it back into a plain `Delete` or `Insert` of the other side.
    pub fn render(&self, ops: &[EditOp<Token<'_>>]) -> Result<WordDiff, ProfileError> {
        let mut markup = String::new();
        let mut mismatches = Vec::new();

        for op in ops {
            match op {
                EditOp::Equal { hypothesis, .. } => {
                    encode_text_to_string(hypothesis.text, &mut markup);
                }
                EditOp::Insert { hypothesis } => {
                    self.insert(hypothesis.text, &mut markup, &mut mismatches);
                }
                EditOp::Delete { original } => {
                    delete(original.text, &mut mismatches);
                }
                EditOp::Replace {
                    original,
                    hypothesis,
                } if is_whitespace_only(hypothesis.text) => {
                    delete(original.text, &mut mismatches);
                    encode_text_to_string(hypothesis.text, &mut markup);
                }
                EditOp::Replace {
                    original,
                    hypothesis,
                } if is_whitespace_only(original.text) => {
                    self.insert(hypothesis.text, &mut markup, &mut mismatches);
                }
                EditOp::Replace {
                    original,
                    hypothesis,
                } => {
                    self.open(&mut markup, self.markers.replaced);
                    self.render_graphemes(original.text, hypothesis.text, &mut markup)?;
                    markup.push_str("</span>");
                    if !is_punctuation_only(original.text) && !is_punctuation_only(hypothesis.text)
                    {
                        mismatches.push(Mismatch::new(original.text, hypothesis.text));
                    }
                }
            }
        }

        Ok(WordDiff {
            markup,
            mismatches,
            aligned: true,
        })
    }

    fn insert(&self, text: &str, markup: &mut String, mismatches: &mut Vec<Mismatch>) {
        if is_whitespace_only(text) {
            encode_text_to_string(text, markup);
            return;
        }
        self.open(markup, self.markers.inserted);
        encode_text_to_string(text, markup);
        markup.push_str("</span>");
        if !is_punctuation_only(text) {
            mismatches.push(Mismatch::new("", text));
        }
    }

    /// Hypothesis side of a replaced word, with differing graphemes marked.
    /// Runs of changed graphemes share one marker.
    fn render_graphemes(
        &self,
        original: &str,
        hypothesis: &str,
        out: &mut String,
    ) -> Result<(), ProfileError> {
        let a = tokenize(self.normalizer, &self.segmenter.graphemes(original))?;
        let b = tokenize(self.normalizer, &self.segmenter.graphemes(hypothesis))?;
        let ops = align(&a, &b, Token::same);

        let mut changed = String::new();
        for op in &ops {
            match op {
                EditOp::Equal { hypothesis, .. } => {
                    self.flush_changed(&mut changed, out);
                    encode_text_to_string(hypothesis.text, out);
                }
                EditOp::Insert { hypothesis } | EditOp::Replace { hypothesis, .. } => {
                    changed.push_str(hypothesis.text);
                }
                EditOp::Delete { .. } => {}
            }
        }
        self.flush_changed(&mut changed, out);
        Ok(())
    }

    fn flush_changed(&self, changed: &mut String, out: &mut String) {
        if changed.is_empty() {
            return;
        }
        self.open(out, self.markers.changed_char);
        encode_text_to_string(changed.as_str(), out);
        out.push_str("</span>");
        changed.clear();
    }

    #[inline]
    fn open(&self, out: &mut String, class: &str) {
        out.push_str("<span class=\"");
        out.push_str(class);
        out.push_str("\">");
    }
}

fn delete(text: &str, mismatches: &mut Vec<Mismatch>) {
    if !is_whitespace_only(text) && !is_punctuation_only(text) {
        mismatches.push(Mismatch::new(text, ""));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::NaiveSegmenter;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn diff(reference: &str, hypothesis: &str) -> Result<WordDiff, ProfileError> {
        let normalizer = Normalizer::default();
        let segmenter = NaiveSegmenter;
        let a = tokenize(&normalizer, &segmenter.words(reference))?;
        let b = tokenize(&normalizer, &segmenter.words(hypothesis))?;
        let ops = align(&a, &b, Token::same);
        DiffRenderer::new(&normalizer, &segmenter, DEFAULT_MARKERS).render(&ops)
    }

    #[test]
    fn replaced_word() -> TestResult {
        let d = diff("the quick fox", "the slow fox")?;
        assert_eq!(d.mismatches, [Mismatch::new("quick", "slow")]);
        assert!(d.aligned);
        assert!(d.markup.starts_with("the <span class=\"diff-replaced\">"));
        assert!(d.markup.ends_with("</span> fox"));
        Ok(())
    }

    #[test]
    fn grapheme_markers_inside_replace() -> TestResult {
        let d = diff("cat", "cut")?;
        assert_eq!(
            d.markup,
            "<span class=\"diff-replaced\">c<span class=\"diff-char\">u</span>t</span>"
        );
        Ok(())
    }

    #[test]
    fn insertions_and_deletions() -> TestResult {
        let d = diff("a b", "a b c")?;
        assert_eq!(d.markup, "a b <span class=\"diff-inserted\">c</span>");
        assert_eq!(d.mismatches, [Mismatch::new("", "c")]);

        let d = diff("a b c", "a b")?;
        assert_eq!(d.markup, "a b");
        assert_eq!(d.mismatches, [Mismatch::new("c", "")]);
        Ok(())
    }

    #[test]
    fn word_replaced_by_whitespace_is_reported() -> TestResult {
        // Delete(আমি) + Insert(" ") merge into one Replace.
        let d = diff("আমি", " তুমি")?;
        assert_eq!(
            d.mismatches,
            [Mismatch::new("আমি", ""), Mismatch::new("", "তুমি")]
        );
        assert_eq!(d.markup, " <span class=\"diff-inserted\">তুমি</span>");

        // Delete(" ") + Insert(তুমি): a plain insertion.
        let d = diff(" ", "তুমি")?;
        assert_eq!(d.mismatches, [Mismatch::new("", "তুমি")]);
        assert_eq!(d.markup, "<span class=\"diff-inserted\">তুমি</span>");
        Ok(())
    }

    #[test]
    fn whitespace_insert_is_unmarked() -> TestResult {
        let d = diff("ab", "ab ")?;
        assert_eq!(d.markup, "ab ");
        assert!(d.mismatches.is_empty());
        Ok(())
    }

    #[test]
    fn punctuation_is_not_reported() -> TestResult {
        let d = diff("আমি গাই", "আমি গাই ।")?;
        assert!(d.mismatches.is_empty(), "{:?}", d.mismatches);
        Ok(())
    }

    #[test]
    fn markup_is_escaped() -> TestResult {
        let d = diff("x", "<b>&")?;
        assert!(d.markup.contains("&lt;b&gt;&amp;"));
        assert!(!d.markup.contains("<b>"));
        Ok(())
    }

    #[test]
    fn unaligned_fallback() {
        let d = WordDiff::unaligned("a < b");
        assert_eq!(d.markup, "a &lt; b");
        assert!(d.mismatches.is_empty());
        assert!(!d.aligned);
    }

    #[test]
    fn custom_markers() -> TestResult {
        let normalizer = Normalizer::default();
        let a = tokenize(&normalizer, &["a"])?;
        let b = tokenize(&normalizer, &["a", "b"])?;
        let ops = align(&a, &b, Token::same);
        let markers = Markers {
            inserted: "ins",
            ..DEFAULT_MARKERS
        };
        let d = DiffRenderer::new(&normalizer, &NaiveSegmenter, markers).render(&ops)?;
        assert_eq!(d.markup, "a<span class=\"ins\">b</span>");
        Ok(())
    }
}
