/*!
 * Token-to-gloss translation.
 *
 * Maps refined tokens onto canonical sign glosses using the static
 * vocabulary, partitioning the input into resolved glosses and
 * unresolved tokens. Unknown vocabulary is reported, never silently
 * dropped.
 */

use log::debug;

use super::dictionary;

/// Result of one translation pass. `resolved` and `unresolved` partition
/// the input token list: together they cover every token, and no token
/// appears in both. Order follows the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    /// Canonical glosses for the tokens the vocabulary knows
    pub resolved: Vec<String>,

    /// Input tokens with no known gloss, in input order
    pub unresolved: Vec<String>,
}

impl Translation {
    /// Whether the pass produced no playable glosses at all
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

/// Translate a refined token list into glosses.
///
/// Lookup is case-insensitive: a direct dictionary hit first, then the
/// synonym table. Tokens that miss both are collected as unresolved and
/// excluded from the resolved sequence.
pub fn translate(tokens: &[String]) -> Translation {
    let mut translation = Translation::default();

    for token in tokens {
        let lowered = token.to_lowercase();
        match dictionary::lookup(&lowered) {
            Some(gloss) => translation.resolved.push(gloss.to_string()),
            None => {
                debug!("No gloss for token '{}'", token);
                translation.unresolved.push(token.clone());
            }
        }
    }

    translation
}
