// src/context.rs
// The only carrier of script configuration into the stages. Immutable once
// built; tables are 'static or Arc-shared, so clones are cheap.

use crate::script::{CanonicalTable, DEFAULT_SCRIPT, Script, ScriptEntry, data::SCRIPT_TABLE};

/// Runtime context passed to every normalization stage.
///
/// Contains:
/// - `script`: human identifier (for logging and debugging)
/// - `entry`: the canonicalization data actually used by the stages
#[derive(Debug, Clone)]
pub struct Context {
    pub script: Script,
    pub entry: ScriptEntry,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT)
    }
}

impl Context {
    /// Create a context from the shipped table for `script`.
    /// Scripts without a table get an empty one.
    #[inline(always)]
    pub fn new(script: Script) -> Self {
        let entry = SCRIPT_TABLE
            .get(script.code())
            .cloned()
            .unwrap_or_default();
        Self { script, entry }
    }

    /// Create a context and let the caller adjust the entry before use.
    #[inline(always)]
    pub fn with_modified(script: Script, f: impl FnOnce(&mut ScriptEntry)) -> Self {
        let mut ctx = Self::new(script);
        f(&mut ctx.entry);
        ctx
    }

    /// Create a context with a caller-supplied canonicalization table.
    #[inline(always)]
    pub fn with_table(script: Script, canonical: impl Into<CanonicalTable>) -> Self {
        Self {
            script,
            entry: ScriptEntry {
                canonical: canonical.into(),
            },
        }
    }
}
