use crate::{
    align::align,
    distance::ScoreResult,
    normalizer::Normalizer,
    profile::ProfileError,
    render::{DEFAULT_MARKERS, DiffRenderer, Markers, Token, WordDiff, tokenize},
    script::{CanonicalTable, DEFAULT_SCRIPT, Script},
    segment::{Segmenter, default_segmenter},
    stage::Stage,
};
use log::{debug, warn};
use std::sync::{Arc, LazyLock};
use thiserror::Error;

/// Combined reference + hypothesis word tokens above which alignment is skipped.
pub const DEFAULT_MAX_ALIGNED_TOKENS: usize = 500;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// Compares a reference transcript with a hypothesis.
///
/// Immutable once built; share it freely between threads.
#[derive(Clone)]
pub struct Scorer {
    normalizer: Normalizer,
    segmenter: Arc<dyn Segmenter>,
    markers: Markers,
    max_aligned_tokens: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Scorer::builder().build()
    }
}

impl Scorer {
    pub fn builder() -> ScorerBuilder {
        ScorerBuilder::default()
    }

    #[inline]
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    #[inline]
    pub fn segmenter(&self) -> &dyn Segmenter {
        self.segmenter.as_ref()
    }

    /// Edit distance and CER over normalized grapheme sequences.
    /// Absent input counts as empty.
    pub fn score<'a>(
        &self,
        reference: impl Into<Option<&'a str>>,
        hypothesis: impl Into<Option<&'a str>>,
    ) -> Result<ScoreResult, ScoreError> {
        let reference = self.normalizer.normalize(reference)?;
        let hypothesis = self.normalizer.normalize(hypothesis)?;

        let reference = self.segmenter.graphemes(&reference);
        let hypothesis = self.segmenter.graphemes(&hypothesis);
        let result = ScoreResult::from_graphemes(&reference, &hypothesis);

        debug!(
            "scored {} reference / {} hypothesis graphemes: distance {}, cer {:?}",
            reference.len(),
            hypothesis.len(),
            result.edit_distance,
            result.cer
        );
        Ok(result)
    }

    /// `None` when the normalized reference is empty.
    pub fn cer<'a>(
        &self,
        reference: impl Into<Option<&'a str>>,
        hypothesis: impl Into<Option<&'a str>>,
    ) -> Result<Option<f64>, ScoreError> {
        Ok(self.score(reference, hypothesis)?.cer)
    }

    /// Word-level diff rendered against the hypothesis.
    ///
    /// Above `max_aligned_tokens` combined word tokens the plain hypothesis
    /// is returned instead (`WordDiff::aligned == false`).
    pub fn word_diff<'a>(
        &self,
        reference: impl Into<Option<&'a str>>,
        hypothesis: impl Into<Option<&'a str>>,
    ) -> Result<WordDiff, ScoreError> {
        let reference = reference.into().unwrap_or_default();
        let hypothesis = hypothesis.into().unwrap_or_default();

        let reference = self.segmenter.words(reference);
        let hypothesis_words = self.segmenter.words(hypothesis);
        let total = reference.len() + hypothesis_words.len();
        if total > self.max_aligned_tokens {
            warn!(
                "skipping word alignment: {total} tokens exceed limit {}",
                self.max_aligned_tokens
            );
            return Ok(WordDiff::unaligned(hypothesis));
        }

        let a = tokenize(&self.normalizer, &reference)?;
        let b = tokenize(&self.normalizer, &hypothesis_words)?;
        let ops = align(&a, &b, Token::same);
        debug!(
            "aligned {} reference / {} hypothesis word tokens into {} ops",
            a.len(),
            b.len(),
            ops.len()
        );

        let renderer = DiffRenderer::new(&self.normalizer, self.segmenter.as_ref(), self.markers);
        Ok(renderer.render(&ops)?)
    }
}

pub struct ScorerBuilder {
    script: Script,
    canonical: Option<CanonicalTable>,
    segmenter: Option<Arc<dyn Segmenter>>,
    markers: Markers,
    max_aligned_tokens: usize,
    stages: Vec<Arc<dyn Stage>>,
}

impl Default for ScorerBuilder {
    fn default() -> Self {
        Self {
            script: DEFAULT_SCRIPT,
            canonical: None,
            segmenter: None,
            markers: DEFAULT_MARKERS,
            max_aligned_tokens: DEFAULT_MAX_ALIGNED_TOKENS,
            stages: Vec::new(),
        }
    }
}

impl ScorerBuilder {
    pub fn script(mut self, script: Script) -> Self {
        self.script = script;
        self
    }

    /// Replace the script's canonicalization table. Accepts a `'static`
    /// slice or a table built at runtime (`Vec<Canonical>`, `Arc<[Canonical]>`).
    pub fn canonical_table(mut self, table: impl Into<CanonicalTable>) -> Self {
        self.canonical = Some(table.into());
        self
    }

    pub fn segmenter<S: Segmenter + 'static>(mut self, segmenter: S) -> Self {
        self.segmenter = Some(Arc::new(segmenter));
        self
    }

    pub fn markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn max_aligned_tokens(mut self, limit: usize) -> Self {
        self.max_aligned_tokens = limit;
        self
    }

    /// Append a normalization stage after the built-in ones.
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Scorer {
        let normalizer = match self.canonical {
            Some(table) => Normalizer::with_table(self.script, table),
            None => Normalizer::new(self.script),
        };
        let normalizer = self
            .stages
            .into_iter()
            .fold(normalizer, Normalizer::with_stage);
        Scorer {
            normalizer,
            segmenter: self.segmenter.unwrap_or_else(default_segmenter),
            markers: self.markers,
            max_aligned_tokens: self.max_aligned_tokens,
        }
    }
}

static DEFAULT_SCORER: LazyLock<Scorer> = LazyLock::new(Scorer::default);

/// CER with the default Bengali configuration.
///
/// `Ok(None)` when the normalized reference is empty; `Ok(Some(1.0))` when
/// only the hypothesis is empty.
pub fn compute_cer<'a>(
    reference: impl Into<Option<&'a str>>,
    hypothesis: impl Into<Option<&'a str>>,
) -> Result<Option<f64>, ScoreError> {
    DEFAULT_SCORER.cer(reference, hypothesis)
}

/// Word diff with the default Bengali configuration.
pub fn compute_word_diff<'a>(
    reference: impl Into<Option<&'a str>>,
    hypothesis: impl Into<Option<&'a str>>,
) -> Result<WordDiff, ScoreError> {
    DEFAULT_SCORER.word_diff(reference, hypothesis)
}
