//! Process abstraction.
//! `DynamicProcess` keeps its stages behind `Arc<dyn Stage>`, so a pipeline
//! can be assembled at runtime (built-in stages plus caller stages) and
//! shared across threads.
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use log::trace;
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

pub trait Process: Send + Sync {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

#[derive(Default, Clone)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    #[inline(always)]
    pub fn push_arc(mut self, stage: Arc<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(
        &self,
        mut text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        for stage in &self.stages {
            if !stage.needs_apply(&text, ctx)? {
                continue;
            }
            trace!("applying stage `{}` ({} bytes)", stage.name(), text.len());
            text = stage.apply(text, ctx)?;
        }
        Ok(text)
    }
}
