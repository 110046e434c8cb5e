use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Fold script-specific multi-codepoint spellings into one canonical codepoint.
///
/// The table comes from the [`Context`] (`ctx.entry.canonical`), never from
/// this stage, so the same stage serves Bengali, Devanagari, Gurmukhi or any
/// caller-supplied table. At each position the longest matching source
/// sequence wins; text is scanned left to right and replacements are not
/// re-scanned.
///
/// For the shipped tables the stage is idempotent: every target is a single
/// codepoint that never begins a source sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct Canonicalize;

impl Stage for Canonicalize {
    fn name(&self) -> &'static str {
        "canonicalize"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.entry.has_canonical() && ctx.entry.contains_canonical(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }

        let mut out = String::with_capacity(text.len());
        let mut rest = text.as_ref();
        while let Some(c) = rest.chars().next() {
            match ctx.entry.canonical_prefix(rest) {
                Some(m) => {
                    out.push(m.to);
                    rest = &rest[m.from.len()..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        Ok(Cow::Owned(out))
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Canonicalize {
    fn samples() -> &'static [&'static str] {
        &[
            "\u{09AC}\u{09BE}\u{0982}\u{09B2}\u{09BE}\u{09AF}\u{09BC}", // বাংলায়
            "\u{09AA}\u{09A1}\u{09BC}\u{09BE}",                         // পড়া
            "\u{095B}\u{0930}\u{093E}",                                 // ज़रा, precomposed
            "\u{091C}\u{093C}\u{0930}\u{093E}",                         // ज़रा, decomposed
            "\u{0A38}\u{0A3C}\u{0A39}\u{0A3F}\u{0A30}",                 // ਸ਼ਹਿਰ
            "plain",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "test123", "\u{0986}\u{09AE}\u{09BF}", "\u{09DF}", ""]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Canonicalize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{
        Canonical,
        data::{BENG, DEVA, GURU, LATN},
    };

    fn run(ctx: &Context, input: &str) -> String {
        Canonicalize
            .apply(Cow::Borrowed(input), ctx)
            .unwrap()
            .into_owned()
    }

    #[test]
    fn bengali_nukta_letters() {
        let ctx = Context::new(BENG);
        assert_eq!(run(&ctx, "\u{09A1}\u{09BC}"), "\u{09DC}");
        assert_eq!(run(&ctx, "\u{09A2}\u{09BC}"), "\u{09DD}");
        assert_eq!(
            run(&ctx, "\u{09AC}\u{09BE}\u{0982}\u{09B2}\u{09BE}\u{09AF}\u{09BC}"),
            "\u{09AC}\u{09BE}\u{0982}\u{09B2}\u{09BE}\u{09DF}"
        );
    }

    #[test]
    fn devanagari_and_gurmukhi() {
        assert_eq!(run(&Context::new(DEVA), "\u{0915}\u{093C}"), "\u{0958}");
        assert_eq!(run(&Context::new(GURU), "\u{0A32}\u{0A3C}"), "\u{0A33}");
    }

    #[test]
    fn tables_do_not_leak_across_scripts() {
        let input = "\u{0915}\u{093C}";
        assert_eq!(run(&Context::new(BENG), input), input);
        assert!(!Canonicalize.needs_apply(input, &Context::new(LATN)).unwrap());
    }

    #[test]
    fn injected_table() {
        static LIGATURES: &[Canonical] = &[
            Canonical::new("ae", 'æ'),
            Canonical::new("oe", 'œ'),
        ];
        let ctx = Context::with_table(LATN, LIGATURES);
        assert_eq!(run(&ctx, "caesar foetus"), "cæsar fœtus");
    }

    #[test]
    fn empty_sources_are_ignored() {
        static BROKEN: &[Canonical] = &[Canonical::new("", 'x')];
        let ctx = Context::with_table(LATN, BROKEN);
        assert!(!Canonicalize.needs_apply("abc", &ctx).unwrap());
        assert_eq!(run(&ctx, "abc"), "abc");
    }
}
