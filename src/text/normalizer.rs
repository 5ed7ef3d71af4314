/*!
 * Raw transcript normalization.
 *
 * First stage of the text pipeline: case-folds and strips punctuation
 * from raw ASR output so the later segmentation and dictionary stages
 * operate on a predictable alphabet.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// Everything except word characters, whitespace and hyphen is stripped.
static STRIP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());

// Runs of whitespace collapse to a single space
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a raw transcript for segmentation and dictionary lookup.
///
/// Uppercases, trims, strips all characters except word characters,
/// whitespace and hyphen, and collapses internal whitespace. Empty or
/// effectively-empty input yields an empty string rather than an error.
///
/// The function is pure and idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let upper = raw.to_uppercase();
    let stripped = STRIP_REGEX.replace_all(&upper, "");
    let collapsed = WHITESPACE_REGEX.replace_all(stripped.trim(), " ");
    collapsed.into_owned()
}
