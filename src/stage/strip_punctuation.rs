use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::{PUNCT_OR_SYMBOL, contains_punct_or_symbol},
};
use std::borrow::Cow;

/// Remove every Unicode punctuation (`\p{P}`) and symbol (`\p{S}`) character.
///
/// Covers the Bengali/Devanagari danda (`।`, `॥`), ASCII and typographic
/// punctuation, currency signs and emoji. Nothing is inserted in their place:
/// `"গাই।"` becomes `"গাই"`, and `"a,b"` becomes `"ab"`.
///
/// Borrowed input that needs no change is returned as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripPunctuation;

impl Stage for StripPunctuation {
    fn name(&self) -> &'static str {
        "strip_punctuation"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(contains_punct_or_symbol(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(match text {
            Cow::Borrowed(s) => PUNCT_OR_SYMBOL.replace_all(s, ""),
            Cow::Owned(s) if !contains_punct_or_symbol(&s) => Cow::Owned(s),
            Cow::Owned(s) => Cow::Owned(PUNCT_OR_SYMBOL.replace_all(&s, "").into_owned()),
        })
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for StripPunctuation {
    fn samples() -> &'static [&'static str] {
        &[
            "আমি বাংলায় গান গাই।",
            "\"Hello\", world!",
            "দাম ৳৫০০",
            "emoji 👍 here",
            "no punctuation",
            "",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("গাই।", "গাই"),
            ("“Hello” — world…", "Hello  world"),
            ("a+b=c", "abc"),
            ("নমস্কার॥", "নমস্কার"),
        ]
    }
}
