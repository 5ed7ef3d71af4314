/*!
 * Merged-word repair for ASR output.
 *
 * Continuous recognition frequently glues adjacent words together
 * ("GOODMORNING", "WHATIS"). This module repairs those merges with a
 * deterministic pattern table first and a recursive dictionary-driven
 * split as a fallback.
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Chunks at or below this length are treated as atomic and never split.
/// Deliberate recall/precision trade-off: short valid words ("PLEASE",
/// "COFFEE") would otherwise be corrupted by the heuristic.
const MIN_SPLITTABLE_LEN: usize = 7;

/// Minimum length of either side of a candidate cut.
const MIN_PIECE_LEN: usize = 3;

/// Known merged strings and their expansions. Applied before the
/// heuristic pass so frequent ASR artifacts are handled deterministically.
static MERGED_PATTERNS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("GOODMORNING", "GOOD MORNING"),
        ("GOODAFTERNOON", "GOOD AFTERNOON"),
        ("GOODEVENING", "GOOD EVENING"),
        ("GOODNIGHT", "GOOD NIGHT"),
        ("GOODBYE", "GOOD BYE"),
        ("THANKYOU", "THANK YOU"),
        ("HOWAREYOU", "HOW ARE YOU"),
        ("WHATISYOURNAME", "WHAT IS YOUR NAME"),
        ("MYNAMEIS", "MY NAME IS"),
        ("WHATIS", "WHAT IS"),
        ("WHEREIS", "WHERE IS"),
        ("NICETOMEETYOU", "NICE TO MEET YOU"),
        ("SEEYOULATER", "SEE YOU LATER"),
        ("EXCUSEME", "EXCUSE ME"),
        ("IAMFINE", "I AM FINE"),
        ("HELPME", "HELP ME"),
    ]
});

/// Common-word membership set driving the heuristic split. The left side
/// of a candidate cut must be one of these words.
static COMMON_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "GOOD", "MORNING", "AFTERNOON", "EVENING", "NIGHT", "HELLO", "WELCOME",
        "THANK", "THANKS", "PLEASE", "SORRY", "EXCUSE", "NICE", "MEET", "AGAIN",
        "WHAT", "WHERE", "WHEN", "WHO", "WHY", "HOW", "WHICH",
        "YOUR", "NAME", "MINE", "THIS", "THAT", "THESE", "THOSE",
        "HAVE", "NEED", "WANT", "LIKE", "LOVE", "KNOW", "THINK", "UNDERSTAND",
        "COME", "GOING", "STOP", "WAIT", "HELP", "WORK", "PLAY", "READ", "WRITE",
        "LEARN", "TEACH", "SPEAK", "LISTEN", "LOOK", "SHOW", "TELL", "GIVE", "TAKE",
        "MOTHER", "FATHER", "SISTER", "BROTHER", "FAMILY", "FRIEND", "TEACHER",
        "SCHOOL", "HOUSE", "HOME", "WATER", "FOOD", "BOOK", "TIME", "TODAY",
        "TOMORROW", "YESTERDAY", "HAPPY", "FINE", "WELL", "BEAUTIFUL", "IMPORTANT",
        "WITH", "FROM", "HERE", "THERE", "ABOUT", "AFTER", "BEFORE",
        "ARE", "YOU", "THE", "AND", "FOR", "NOT", "BUT", "CAN", "WILL",
    ]
    .into_iter()
    .collect()
});

/// Repair merged words in a normalized (uppercase) string.
///
/// Runs the exact-pattern pass over the whole string, then the recursive
/// heuristic split on each remaining whitespace-delimited chunk.
pub fn segment(normalized: &str) -> String {
    let mut text = normalized.to_string();
    for (merged, expansion) in MERGED_PATTERNS.iter() {
        // Input is already uppercased, so a plain replace is case-insensitive
        // with respect to the original transcript.
        text = text.replace(merged, expansion);
    }

    text.split_whitespace()
        .flat_map(|chunk| split_chunk(chunk))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Recursively split a single chunk at dictionary boundaries.
///
/// Tries every cut position left to right; the leftmost cut whose left
/// side is a common word and whose right side is either a common word or
/// at least three characters wins, and the right side is re-split. This
/// tie-break is load-bearing: it fixes the output for ambiguous merges.
fn split_chunk(chunk: &str) -> Vec<String> {
    let chars: Vec<char> = chunk.chars().collect();
    if chars.len() < MIN_SPLITTABLE_LEN {
        return vec![chunk.to_string()];
    }

    for i in MIN_PIECE_LEN..=chars.len() - MIN_PIECE_LEN {
        let left: String = chars[..i].iter().collect();
        let right: String = chars[i..].iter().collect();

        if COMMON_WORDS.contains(left.as_str())
            && (COMMON_WORDS.contains(right.as_str()) || right.chars().count() >= MIN_PIECE_LEN)
        {
            let mut pieces = vec![left];
            pieces.extend(split_chunk(&right));
            return pieces;
        }
    }

    vec![chunk.to_string()]
}
