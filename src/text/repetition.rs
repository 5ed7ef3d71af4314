/*!
 * Repetition cleanup for continuous-recognition transcripts.
 *
 * Interim ASR results re-emit partial sentences over and over, so a raw
 * token stream often looks like "HELLO MY HELLO MY NAME HELLO MY NAME IS
 * PRIYA". This module collapses stuttered duplicates and extracts the
 * most likely final, complete utterance out of that noise.
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Extraction only kicks in past this many tokens; short inputs are
/// returned as-is.
const MIN_EXTRACTION_LEN: usize = 4;

/// Words that commonly open an utterance. The backward scan for the last
/// occurrence of any of these anchors the first extraction candidate.
static SENTENCE_STARTERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "HELLO", "HI", "GOOD", "NAMASTE", "MY", "I", "WE", "YOU", "WHAT",
        "WHERE", "HOW", "PLEASE", "THANK", "SORRY", "EXCUSE",
    ]
    .into_iter()
    .collect()
});

/// Fixed idiom anchoring the second extraction candidate.
const NAME_IDIOM: [&str; 3] = ["MY", "NAME", "IS"];

/// Collapse immediately repeated tokens, comparing adjacent tokens only.
///
/// `[A, A, B, B, B, C]` becomes `[A, B, C]`; non-adjacent repeats such as
/// `[A, B, A]` are preserved.
pub fn collapse_duplicates(tokens: &[String]) -> Vec<String> {
    let mut collapsed: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if collapsed.last().map(|last| last == token) != Some(true) {
            collapsed.push(token.clone());
        }
    }
    collapsed
}

/// Extract the most likely final sentence from a repeated token stream,
/// then collapse stuttered duplicates inside the chosen window.
///
/// Two candidates are computed: the suffix from the last sentence-starter
/// token, and a window around the last "MY NAME IS" idiom (falling back
/// to the last quartile when the idiom is absent). The longest candidate
/// wins; on a tie the starter candidate does, because it was computed
/// first. With no candidate at all the input is returned unchanged.
///
/// This is a heuristic, not a grammar. It can mis-segment input that does
/// not match the fixed patterns, and callers must tolerate that.
pub fn resolve(tokens: &[String]) -> Vec<String> {
    if tokens.len() < MIN_EXTRACTION_LEN {
        return collapse_duplicates(tokens);
    }

    let mut candidates: Vec<&[String]> = Vec::new();

    if let Some(start) = last_starter_index(tokens) {
        candidates.push(&tokens[start..]);
    }

    if let Some(start) = idiom_window_start(tokens) {
        candidates.push(&tokens[start..]);
    } else {
        // Last quartile of the stream; the final re-transcription is the
        // most complete one, and it always sits at the end.
        let quarter = (tokens.len() / 4).max(1);
        candidates.push(&tokens[tokens.len() - quarter..]);
    }

    // Longest candidate wins; a strictly-greater comparison keeps the
    // first-computed candidate on ties.
    let mut best: Option<&[String]> = None;
    for candidate in candidates {
        if best.map_or(true, |current| candidate.len() > current.len()) {
            best = Some(candidate);
        }
    }

    match best {
        Some(candidate) => collapse_duplicates(candidate),
        None => collapse_duplicates(tokens),
    }
}

/// Index of the last token that belongs to the sentence-starter set.
fn last_starter_index(tokens: &[String]) -> Option<usize> {
    tokens
        .iter()
        .rposition(|token| SENTENCE_STARTERS.contains(token.as_str()))
}

/// Start of the window anchored at the last "MY NAME IS" occurrence.
///
/// The window opens one token before the idiom so a greeting immediately
/// preceding it ("HELLO MY NAME IS ...") stays in the extracted sentence.
fn idiom_window_start(tokens: &[String]) -> Option<usize> {
    if tokens.len() < NAME_IDIOM.len() {
        return None;
    }

    (0..=tokens.len() - NAME_IDIOM.len())
        .rev()
        .find(|&i| {
            tokens[i..i + NAME_IDIOM.len()]
                .iter()
                .zip(NAME_IDIOM.iter())
                .all(|(token, idiom)| token == idiom)
        })
        .map(|i| i.saturating_sub(1))
}
