/*!
 * Tests for the text refinement pipeline
 */

use signflow::text::{collapse_duplicates, normalize, refine, resolve, segment};

fn toks(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_normalize_withAnyString_shouldBeIdempotent() {
    let inputs = [
        "Hello, World!",
        "  GOOD   morning?!  ",
        "what's-up",
        "",
        "123 mixed CASE, with punct...",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
    }
}

#[test]
fn test_normalize_withMixedInput_shouldUppercaseAndStrip() {
    assert_eq!(normalize("Hello, world! How are you?"), "HELLO WORLD HOW ARE YOU");
}

#[test]
fn test_collapse_withAdjacentDuplicates_shouldRemoveThem() {
    assert_eq!(
        collapse_duplicates(&toks(&["a", "a", "b", "b", "b", "c"])),
        toks(&["a", "b", "c"])
    );
}

#[test]
fn test_collapse_withNonAdjacentDuplicates_shouldPreserveThem() {
    assert_eq!(collapse_duplicates(&toks(&["a", "b", "a"])), toks(&["a", "b", "a"]));
}

#[test]
fn test_segment_withMergedGreeting_shouldSplitIntoSeparateTokens() {
    let segmented = segment("GOODMORNING");
    let tokens: Vec<&str> = segmented.split_whitespace().collect();
    assert!(tokens.contains(&"GOOD"));
    assert!(tokens.contains(&"MORNING"));
}

#[test]
fn test_segment_withShortChunk_shouldLeaveItUnchanged() {
    assert_eq!(segment("HI"), "HI");
}

#[test]
fn test_resolve_withRepeatedPartialSentences_shouldExtractLongestFinalCandidate() {
    let input = toks(&[
        "HELLO", "MY", "NAME", "IS", "HELLO", "MY", "NAME", "IS", "PRIYA",
    ]);
    let extracted = resolve(&input);
    assert_eq!(extracted, toks(&["HELLO", "MY", "NAME", "IS", "PRIYA"]));
    assert_eq!(extracted.last().map(|s| s.as_str()), Some("PRIYA"));
}

#[test]
fn test_refine_withNoisyTranscript_shouldProduceOrderedLowercaseTokens() {
    let tokens = refine("hello my name hello my name is hello my name is Priya!");
    assert_eq!(tokens, toks(&["hello", "my", "name", "is", "priya"]));
}

#[test]
fn test_refine_withEmptyInput_shouldReturnEmpty() {
    assert!(refine("").is_empty());
    assert!(refine("?!.,").is_empty());
}
