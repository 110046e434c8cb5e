use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::{contains_zero_width, is_zero_width},
};
use std::borrow::Cow;

/// Remove zero-width characters: ZWSP (U+200B), ZWNJ (U+200C), ZWJ (U+200D)
/// and the byte-order mark / ZWNBSP (U+FEFF).
///
/// ASR output and hand-typed references disagree constantly about ZWJ/ZWNJ
/// inside Bengali and Devanagari conjuncts, although the rendered text looks
/// identical. Removing them keeps those invisible choices out of the score.
///
/// Zero-copy when clean. Script-agnostic. Idempotent.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripZeroWidth;

impl Stage for StripZeroWidth {
    fn name(&self) -> &'static str {
        "strip_zero_width"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(contains_zero_width(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !contains_zero_width(&text) {
            return Ok(text);
        }
        let mut out = String::with_capacity(text.len());
        out.extend(text.chars().filter(|&c| !is_zero_width(c)));
        Ok(Cow::Owned(out))
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for StripZeroWidth {
    fn samples() -> &'static [&'static str] {
        &[
            "hello\u{200B}world",
            "\u{FEFF}bommed",
            "\u{0995}\u{09CD}\u{200D}\u{09B7}",
            "\u{0995}\u{09CD}\u{200C}\u{09B7}",
            "clean text",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello\u{200B}world", "helloworld"),
            ("\u{FEFF}text", "text"),
            ("\u{0995}\u{09CD}\u{200D}\u{09B7}", "\u{0995}\u{09CD}\u{09B7}"),
        ]
    }
}
