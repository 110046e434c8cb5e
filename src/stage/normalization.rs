use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::{borrow::Cow, sync::LazyLock};

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};

static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// Unicode Normalization Form C (Canonical Composition).
///
/// Note that composition exclusions (Bengali ড় ঢ় য়, Devanagari क़ …) come
/// out of NFC *decomposed*; `Canonicalize` folds them back afterwards.
#[derive(Debug, Default, Clone, Copy)]
pub struct NfcStage;

pub const NFC: NfcStage = NfcStage;

impl Stage for NfcStage {
    fn name(&self) -> &'static str {
        "nfc"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!ICU4X_NFC.is_normalized(text))
    }

    #[inline(always)]
    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if ICU4X_NFC.is_normalized(&text) {
            return Ok(text);
        }
        Ok(Cow::Owned(ICU4X_NFC.normalize(&text).into_owned()))
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for NfcStage {
    fn samples() -> &'static [&'static str] {
        &[
            "cafe\u{0301}",
            "\u{09C7}\u{09BE}",      // e-kar + aa-kar → o-kar
            "\u{09A1}\u{09BC}",      // stays decomposed (exclusion)
            "\u{09DC}",              // decomposes
            "আমি বাংলায় গান গাই",
            "",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("cafe\u{0301}", "café"),
            ("\u{0995}\u{09C7}\u{09BE}", "\u{0995}\u{09CB}"), // কো
            ("\u{09DC}", "\u{09A1}\u{09BC}"),
        ]
    }
}
