use crate::{context::Context, script::data::all_scripts, stage::Stage};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " আমি ", "TEST", ""]
    }

    /// Samples that must pass through unchanged and without allocation.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", "আমি বাংলায়", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal stage contract:
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields the same result as once
/// 3. `needs_apply_is_accurate` → predicts exactly whether apply() changes text
/// 4. `handles_empty_and_plain_text` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives mixed real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_and_plain_text($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &script in all_scripts() {
        let ctx = Context::new(script);

        for &input in S::samples() {
            let mut text = Cow::Borrowed(input);
            if stage.needs_apply(&text, &ctx).unwrap() {
                text = stage.apply(text, &ctx).unwrap();
            } else {
                assert_eq!(input as *const str, text.as_ref() as *const str);
            }

            // Second pass must never allocate again
            let old_ptr = text.as_ref() as *const str;
            if stage.needs_apply(&text, &ctx).unwrap() {
                text = stage.apply(text, &ctx).unwrap();
            }
            assert_eq!(
                old_ptr,
                text.as_ref() as *const str,
                "zero-copy violated on second pass (script: {script:?}, input: `{input}`)"
            );
        }

        for &pass_through in S::should_pass_through() {
            let mut text = Cow::Borrowed(pass_through);
            if stage.needs_apply(&text, &ctx).unwrap() {
                text = stage.apply(text, &ctx).unwrap();
            }
            assert_eq!(text.as_ref(), pass_through);
            assert_eq!(
                pass_through as *const str,
                text.as_ref() as *const str,
                "zero-copy violated on pass-through sample (script: {script:?}, input: `{pass_through}`)"
            );
        }

        for &(input, expected) in S::should_transform() {
            let mut text = Cow::Borrowed(input);
            if stage.needs_apply(&text, &ctx).unwrap() {
                text = stage.apply(text, &ctx).unwrap();
            }
            assert_eq!(text.as_ref(), expected, "stage `{}`", stage.name());
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for &script in all_scripts() {
        let ctx = Context::new(script);
        for &input in S::samples() {
            let once = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
            let twice = stage.apply(once.clone(), &ctx).unwrap();
            assert_eq!(
                once, twice,
                "apply() not idempotent in {script:?} on `{input}`"
            );
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    for &script in all_scripts() {
        let ctx = Context::new(script);
        for &sample in S::samples() {
            check_accuracy(&stage, sample, &ctx);
        }
        for &clean in &["", "hello", "world123", "আমি"] {
            check_accuracy(&stage, clean, &ctx);
        }
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx).expect("needs_apply errored");
    let output = stage
        .apply(Cow::Owned(input.to_owned()), ctx)
        .expect("apply errored");
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` in {script:?} on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
        script = ctx.script
    );
}

pub fn handles_empty_and_plain_text<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();
    let empty: &str = "";
    let result_empty = if stage.needs_apply(empty, &ctx).unwrap() {
        stage.apply(Cow::Borrowed(empty), &ctx).unwrap()
    } else {
        Cow::Borrowed(empty)
    };
    assert_eq!(result_empty.as_ref(), "");

    let plain = "hello world 123";
    let result_plain = stage.apply(Cow::Borrowed(plain), &ctx).unwrap();
    assert_eq!(result_plain.as_ref(), plain);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();
    let _ = stage.apply(
        Cow::Borrowed("Hello বাংলা हिन्दी ਪੰਜਾਬੀ русский العربية 简体中文 \u{200D}…"),
        &ctx,
    );
}
