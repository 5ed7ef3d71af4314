/*!
 * Text refinement pipeline for noisy ASR transcripts.
 *
 * Turns raw recognition output into a clean, ordered token list:
 *
 * - `normalizer`: case folding and punctuation stripping
 * - `segmenter`: repair of merged words ("GOODMORNING" -> "GOOD MORNING")
 * - `repetition`: stutter collapse and final-sentence extraction
 *
 * All stages are pure functions over module-scoped static tables; the
 * pipeline holds no state.
 */

pub mod normalizer;
pub mod repetition;
pub mod segmenter;

pub use normalizer::normalize;
pub use repetition::{collapse_duplicates, resolve};
pub use segmenter::segment;

/// Minimum token length kept after refinement; single characters are
/// almost always ASR noise.
const MIN_TOKEN_LEN: usize = 2;

/// Run the full refinement pipeline over a raw transcript.
///
/// Output tokens are lowercase, alphabetic/hyphen only, at least two
/// characters long, and in spoken order. Empty or unusable input yields
/// an empty list.
pub fn refine(raw: &str) -> Vec<String> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Vec::new();
    }

    let segmented = segment(&normalized);
    let tokens: Vec<String> = segmented
        .split_whitespace()
        .map(|t| t.to_string())
        .collect();

    resolve(&tokens)
        .into_iter()
        .map(|t| t.to_lowercase())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .filter(|t| t.chars().all(|c| c.is_alphabetic() || c == '-'))
        .collect()
}
