use std::error::Error;

use cerdiff::{
    DEVA, Mismatch, Scorer, Segmenter, WordDiff, align, compute_cer, compute_word_diff,
    hypothesis_tokens, reference_tokens,
};

fn report(label: &str, reference: &str, hypothesis: &str, diff: &WordDiff, cer: Option<f64>) {
    println!("── {label}");
    println!("   reference : {reference}");
    println!("   hypothesis: {hypothesis}");
    match cer {
        Some(cer) => println!("   CER       : {:.2}%", cer * 100.0),
        None => println!("   CER       : n/a (empty reference)"),
    }
    println!("   markup    : {}", diff.markup);
    for Mismatch {
        original,
        hypothesis,
    } in &diff.mismatches
    {
        println!("   mismatch  : {original:?} → {hypothesis:?}");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // ────────────────────────────────────────────────────────────────
    // BENGALI – the default configuration
    // ────────────────────────────────────────────────────────────────
    let pairs = [
        ("আমি বাংলায় গান গাই।", "আমি  বাংলায়  গান  গাই"), // punctuation + spacing only
        ("আমি বাংলায় গান গাই", "আমি বাংলায় গান খাই"),   // one consonant
        ("আমার সোনার বাংলা", "আমার সোনা বাংলা আমি"),     // dropped vowel sign + extra word
        ("", "আমি"),                                      // nothing to score against
    ];
    for (i, (reference, hypothesis)) in pairs.into_iter().enumerate() {
        let cer = compute_cer(reference, hypothesis)?;
        let diff = compute_word_diff(reference, hypothesis)?;
        report(&format!("Bengali #{}", i + 1), reference, hypothesis, &diff, cer);
    }

    // ────────────────────────────────────────────────────────────────
    // DEVANAGARI – same pipeline, Hindi nukta table
    // ────────────────────────────────────────────────────────────────
    let hindi = Scorer::builder().script(DEVA).build();
    let (reference, hypothesis) = ("\u{095B}िंदगी", "\u{091C}\u{093C}िंदगी"); // ज़ both ways
    report(
        "Hindi",
        reference,
        hypothesis,
        &hindi.word_diff(reference, hypothesis)?,
        hindi.cer(reference, hypothesis)?,
    );

    // ────────────────────────────────────────────────────────────────
    // Raw alignment over graphemes
    // ────────────────────────────────────────────────────────────────
    let segmenter = hindi.segmenter();
    let a = segmenter.graphemes("नमस्ते");
    let b = segmenter.graphemes("नमस्कार");
    let ops = align(&a, &b, |x, y| x == y);
    println!("── edit script नमस्ते → नमस्कार");
    for op in &ops {
        println!("   {op:?}");
    }
    assert_eq!(hypothesis_tokens(&ops), b);
    assert_eq!(reference_tokens(&ops), a);

    Ok(())
}
