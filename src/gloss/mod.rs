/*!
 * Gloss vocabulary and translation.
 *
 * - `dictionary`: the closed word-to-gloss vocabulary and synonym table
 * - `translator`: the translation pass partitioning tokens into
 *   resolved glosses and unresolved leftovers
 */

pub mod dictionary;
pub mod translator;

pub use translator::{translate, Translation};
