use memchr::memchr2;
use regex::Regex;
use std::sync::LazyLock;

/// Every Unicode punctuation (`P*`) and symbol (`S*`) character.
pub(crate) static PUNCT_OR_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}\p{S}]+").expect("static punctuation pattern"));

static PUNCT_OR_SYMBOL_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{P}\p{S}]+$").expect("static punctuation pattern"));

// Zero-width characters stripped before comparison:
// U+200B ZWSP, U+200C ZWNJ, U+200D ZWJ, U+FEFF BOM / ZWNBSP.
#[inline(always)]
pub const fn is_zero_width(c: char) -> bool {
    matches!(c as u32, 0x200B..=0x200D | 0xFEFF)
}

/// UTF-8 lead bytes of the zero-width set are 0xE2 (U+200x) and 0xEF (U+FEFF).
/// Bengali and Devanagari text never produces either, so the byte scan
/// usually answers on its own.
#[inline]
pub fn contains_zero_width(text: &str) -> bool {
    memchr2(0xE2, 0xEF, text.as_bytes()).is_some() && text.chars().any(is_zero_width)
}

// Whitespace outside ASCII that `char::is_whitespace` may not cover in every
// toolchain's Unicode version.
#[inline(always)]
pub fn is_unicode_whitespace(c: char) -> bool {
    matches!(
        c as u32,
        0x0085 | // NEXT LINE (NEL)
        0x00A0 | // NO-BREAK SPACE
        0x1680 | // OGHAM SPACE MARK
        0x2000
            ..=0x200A | // EN QUAD through HAIR SPACE
        0x2028 | // LINE SEPARATOR
        0x2029 | // PARAGRAPH SEPARATOR
        0x202F | // NARROW NO-BREAK SPACE
        0x205F | // MEDIUM MATHEMATICAL SPACE
        0x3000 // IDEOGRAPHIC SPACE
    )
}

#[inline(always)]
pub fn is_any_whitespace(c: char) -> bool {
    c.is_whitespace() || is_unicode_whitespace(c)
}

#[inline]
pub fn is_whitespace_only(text: &str) -> bool {
    text.chars().all(is_any_whitespace)
}

#[inline]
pub fn contains_punct_or_symbol(text: &str) -> bool {
    PUNCT_OR_SYMBOL.is_match(text)
}

/// True when `text`, once trimmed, is one or more punctuation or symbol
/// characters and nothing else. Empty and whitespace-only text is not
/// punctuation; check it with [`is_whitespace_only`].
#[inline]
pub fn is_punctuation_only(text: &str) -> bool {
    PUNCT_OR_SYMBOL_ONLY.is_match(text.trim())
}
