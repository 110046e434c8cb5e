use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::is_any_whitespace,
};
use std::borrow::Cow;

/// Normalize and standardize whitespace.
///
/// | Operation                  | Flag               | Effect when enabled                                          |
/// |----------------------------|--------------------|--------------------------------------------------------------|
/// | **Collapse sequential WS** | `collapse`         | A run of whitespace → a single `replacement_char`            |
/// | **Trim edges**             | `trim`             | Remove leading and trailing whitespace                       |
/// | **Replacement**            | `replacement_char` | Character emitted for every kept whitespace (default `' '`) |
///
/// Whitespace means Unicode `White_Space=Yes`: ASCII space, tab and line
/// breaks, NBSP (U+00A0), U+2000–U+200A, U+202F, U+3000 and friends.
/// Zero-width characters are *not* whitespace; `StripZeroWidth` owns them.
///
/// One pass, at most one allocation, zero-copy when the text is already clean.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeWhitespace {
    /// Collapse multiple sequential whitespace chars into one
    pub collapse: bool,

    /// Remove leading and trailing whitespace
    pub trim: bool,

    /// Every emitted whitespace character is written as this char
    pub replacement_char: char,
}

/// Collapse, trim and map every whitespace to `' '`.
pub const NORMALIZE_WHITESPACE_FULL: NormalizeWhitespace = NormalizeWhitespace {
    collapse: true,
    trim: true,
    replacement_char: ' ',
};

/// Collapse sequential whitespace only, preserve edges
pub const COLLAPSE_WHITESPACE: NormalizeWhitespace = NormalizeWhitespace {
    collapse: true,
    trim: false,
    replacement_char: ' ',
};

/// Trim edges only, preserve internal spacing
pub const TRIM_WHITESPACE: NormalizeWhitespace = NormalizeWhitespace {
    collapse: false,
    trim: true,
    replacement_char: ' ',
};

impl Default for NormalizeWhitespace {
    fn default() -> Self {
        NORMALIZE_WHITESPACE_FULL
    }
}

impl NormalizeWhitespace {
    #[inline]
    fn emit_run(&self, out: &mut String, run: usize) {
        let n = if self.collapse { 1 } else { run };
        out.extend(std::iter::repeat_n(self.replacement_char, n));
    }
}

impl Stage for NormalizeWhitespace {
    fn name(&self) -> &'static str {
        "normalize_whitespace"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        let mut prev_ws = false;
        for (i, c) in text.char_indices() {
            if !is_any_whitespace(c) {
                prev_ws = false;
                continue;
            }
            if c != self.replacement_char || (self.collapse && prev_ws) || (self.trim && i == 0) {
                return Ok(true);
            }
            prev_ws = true;
        }
        // trailing whitespace
        Ok(self.trim && prev_ws)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }

        let mut out = String::with_capacity(text.len());
        let mut run = 0usize;
        let mut started = false;

        for c in text.chars() {
            if is_any_whitespace(c) {
                run += 1;
                continue;
            }
            if run > 0 && (started || !self.trim) {
                self.emit_run(&mut out, run);
            }
            run = 0;
            started = true;
            out.push(c);
        }

        if run > 0 && !self.trim {
            self.emit_run(&mut out, run);
        }

        Ok(Cow::Owned(out))
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for NormalizeWhitespace {
    fn samples() -> &'static [&'static str] {
        &[
            "  আমি  বাংলায়  ",
            "a\t\tb",
            "a\u{00A0}b",
            "\u{3000}x\u{3000}",
            "   ",
            "clean text",
            "",
        ]
    }
}
