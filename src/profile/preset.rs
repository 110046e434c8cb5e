use crate::{
    NFC, NORMALIZE_WHITESPACE_FULL, process::DynamicProcess, profile::Profile,
    stage::canonicalize::Canonicalize, stage::strip_punctuation::StripPunctuation,
    stage::strip_zero_width::StripZeroWidth,
};

/// Comparison form of a transcript: composed, no zero-width characters, no
/// punctuation or symbols, single spaces, trimmed, script-canonical.
/// The order of the stages is part of the contract.
///
/// Composition runs a second time before canonical folding: removing a
/// joiner or a mark between two combining characters can leave them out of
/// canonical order, and the output must be stable under a second pass.
pub fn transcript() -> Profile<DynamicProcess> {
    Profile::plugin_builder("transcript")
        .add_stage(NFC)
        .add_stage(StripZeroWidth)
        .add_stage(StripPunctuation)
        .add_stage(NORMALIZE_WHITESPACE_FULL)
        .add_stage(NFC)
        .add_stage(Canonicalize)
        .build()
}
