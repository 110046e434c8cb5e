use crate::script::{Canonical, CanonicalTable, Script, ScriptEntry};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates constants, tables and the lookup map from one listing
/// ---------------------------------------------------------------------------
macro_rules! define_scripts {
($(
        $code:ident, $code_str:literal, $name:literal,
        canonical: [ $($cfrom:expr => $cto:expr),* $(,)? ]
    ),* $(,)?) => {
        $(
            pub const $code: Script = Script { code: $code_str, name: $name };
        )*

        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub const CANONICAL: &[Canonical] = &[
                        $(Canonical::new($cfrom, $cto)),*
                    ];
                }
            }
        )*

        paste! {
            pub static SCRIPT_TABLE: Map<&'static str, ScriptEntry> = phf_map! {
                $(
                    $code_str => ScriptEntry {
                        canonical: CanonicalTable::Static([<$code:lower _data>]::CANONICAL),
                    }
                ),*
            };
        }

        /// Resolve an ISO 15924 code, ignoring case.
        pub fn from_code(code: &str) -> Option<Script> {
            $(
                if code.eq_ignore_ascii_case($code_str) {
                    return Some($code);
                }
            )*
            None
        }

        pub fn all_scripts() -> &'static [Script] {
            &[$($code),*]
        }
    };
}

// ---------------------------------------------------------------------------
//    Script definitions
//    Every target below is a Unicode composition exclusion: NFC decomposes it
//    into base + nukta, so the table folds the pair back into one codepoint.
// ---------------------------------------------------------------------------
define_scripts! {
    BENG, "Beng", "Bengali",
        canonical: [
            "\u{09A1}\u{09BC}" => '\u{09DC}', // ড় RRA
            "\u{09A2}\u{09BC}" => '\u{09DD}', // ঢ় RHA
            "\u{09AF}\u{09BC}" => '\u{09DF}', // য় YYA
        ],

    DEVA, "Deva", "Devanagari",
        canonical: [
            "\u{0915}\u{093C}" => '\u{0958}', // क़
            "\u{0916}\u{093C}" => '\u{0959}', // ख़
            "\u{0917}\u{093C}" => '\u{095A}', // ग़
            "\u{091C}\u{093C}" => '\u{095B}', // ज़
            "\u{0921}\u{093C}" => '\u{095C}', // ड़
            "\u{0922}\u{093C}" => '\u{095D}', // ढ़
            "\u{092B}\u{093C}" => '\u{095E}', // फ़
            "\u{092F}\u{093C}" => '\u{095F}', // य़
        ],

    GURU, "Guru", "Gurmukhi",
        canonical: [
            "\u{0A32}\u{0A3C}" => '\u{0A33}', // ਲ਼
            "\u{0A38}\u{0A3C}" => '\u{0A36}', // ਸ਼
            "\u{0A16}\u{0A3C}" => '\u{0A59}', // ਖ਼
            "\u{0A17}\u{0A3C}" => '\u{0A5A}', // ਗ਼
            "\u{0A1C}\u{0A3C}" => '\u{0A5B}', // ਜ਼
            "\u{0A2B}\u{0A3C}" => '\u{0A5E}', // ਫ਼
        ],

    LATN, "Latn", "Latin",
        canonical: [],
}
