pub mod data;

use crate::script::data::BENG;
use std::{borrow::Cow, ops::Deref, sync::Arc};

/// A writing system, identified by its ISO 15924 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Script {
    pub code: &'static str,
    pub name: &'static str,
}

impl Script {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

pub const DEFAULT_SCRIPT: Script = BENG;

/// One canonical substitution: a multi-codepoint spelling and the single
/// codepoint it is folded into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canonical {
    pub from: Cow<'static, str>,
    pub to: char,
}

impl Canonical {
    pub const fn new(from: &'static str, to: char) -> Self {
        Self {
            from: Cow::Borrowed(from),
            to,
        }
    }

    /// Entry built at runtime, e.g. from a configuration file.
    pub fn owned(from: impl Into<String>, to: char) -> Self {
        Self {
            from: Cow::Owned(from.into()),
            to,
        }
    }
}

/// A canonicalization table: the `'static` data shipped with the crate, or
/// one assembled at runtime and shared behind an `Arc`. Cloning is cheap
/// either way.
#[derive(Clone, Debug)]
pub enum CanonicalTable {
    Static(&'static [Canonical]),
    Shared(Arc<[Canonical]>),
}

impl CanonicalTable {
    pub const EMPTY: CanonicalTable = CanonicalTable::Static(&[]);

    #[inline]
    pub fn as_slice(&self) -> &[Canonical] {
        match self {
            CanonicalTable::Static(t) => t,
            CanonicalTable::Shared(t) => &t[..],
        }
    }
}

impl Deref for CanonicalTable {
    type Target = [Canonical];

    #[inline]
    fn deref(&self) -> &[Canonical] {
        self.as_slice()
    }
}

impl PartialEq for CanonicalTable {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Default for CanonicalTable {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<&'static [Canonical]> for CanonicalTable {
    fn from(table: &'static [Canonical]) -> Self {
        CanonicalTable::Static(table)
    }
}

impl From<Arc<[Canonical]>> for CanonicalTable {
    fn from(table: Arc<[Canonical]>) -> Self {
        CanonicalTable::Shared(table)
    }
}

impl From<Vec<Canonical>> for CanonicalTable {
    fn from(table: Vec<Canonical>) -> Self {
        CanonicalTable::Shared(table.into())
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScriptEntry {
    pub canonical: CanonicalTable,
}

impl ScriptEntry {
    pub const EMPTY: ScriptEntry = ScriptEntry {
        canonical: CanonicalTable::EMPTY,
    };

    #[inline]
    pub fn has_canonical(&self) -> bool {
        !self.canonical.is_empty()
    }

    /// Longest table entry that `text` starts with.
    #[inline]
    pub fn canonical_prefix(&self, text: &str) -> Option<&Canonical> {
        self.canonical
            .iter()
            .filter(|m| !m.from.is_empty() && text.starts_with(&*m.from))
            .max_by_key(|m| m.from.len())
    }

    #[inline]
    pub fn contains_canonical(&self, text: &str) -> bool {
        self.canonical
            .iter()
            .any(|m| !m.from.is_empty() && text.contains(&*m.from))
    }
}
