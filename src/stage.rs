//! Core normalization stage abstraction.
//!
//! A transcript is normalized by running it through an ordered list of
//! stages. Each stage gets a cheap `needs_apply` pre-check; when it answers
//! `false` the text is handed on untouched, so clean input travels the whole
//! pipeline as the caller's `Cow::Borrowed` without a single allocation.

pub mod canonicalize;
pub mod normalization;
pub mod normalize_whitespace;
pub mod strip_punctuation;
pub mod strip_zero_width;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Normalization failed at stage `{0}`: {1}")]
    Failed(&'static str, String),

    #[error("Normalization validation failed at stage `{0}`: {1}")]
    Validation(&'static str, String),
}

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for logging and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called on text for which `needs_apply` is `false`.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}
