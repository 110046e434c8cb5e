use crate::{
    context::Context,
    process::DynamicProcess,
    profile::{Profile, ProfileError, preset},
    script::{CanonicalTable, Script},
    stage::Stage,
};
use std::{borrow::Cow, sync::Arc};

/// Canonicalizes raw transcript text for comparison.
///
/// Runs [`preset::transcript`] under a [`Context`] that carries the
/// script's canonicalization table. Absent input is treated as empty.
#[derive(Clone)]
pub struct Normalizer {
    ctx: Context,
    profile: Profile<DynamicProcess>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::with_context(Context::default())
    }
}

impl Normalizer {
    pub fn new(script: Script) -> Self {
        Self::with_context(Context::new(script))
    }

    pub fn with_table(script: Script, canonical: impl Into<CanonicalTable>) -> Self {
        Self::with_context(Context::with_table(script, canonical))
    }

    pub fn with_context(ctx: Context) -> Self {
        Self {
            ctx,
            profile: preset::transcript(),
        }
    }

    /// Append a caller stage after the built-in ones.
    pub fn with_stage(mut self, stage: Arc<dyn Stage>) -> Self {
        self.profile = self.profile.with_stage(stage);
        self
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn normalize<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
    ) -> Result<Cow<'a, str>, ProfileError> {
        let text = text.into().unwrap_or_default();
        self.profile.run(Cow::Borrowed(text), &self.ctx)
    }
}
