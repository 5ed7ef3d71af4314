/*!
 * # signflow - speech to sign-language clip sequencing
 *
 * A Rust library that turns noisy streaming speech-recognition output
 * into a clean, ordered sequence of sign-language glosses and drives
 * playback of the matching video clips.
 *
 * ## Features
 *
 * - Normalization of raw ASR transcripts (case folding, punctuation)
 * - Repair of merged words ("GOODMORNING" -> "GOOD MORNING")
 * - Collapse of stuttered repetitions and extraction of the final
 *   utterance from repeated interim transcripts
 * - Token-to-gloss translation with synonym folding and an explicit
 *   unresolved report
 * - Hot-swappable gloss-to-clip datasets (JSON file, remote endpoint,
 *   or clip directory scan)
 * - Deduplicating clip preloader over a shared cache
 * - Sequential playback state machine with cancellation, skip-on-error
 *   recovery, and a status event stream
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `text`: transcript refinement pipeline (normalize, segment,
 *   de-repeat)
 * - `gloss`: static vocabulary and the translation pass
 * - `dataset`: gloss-to-clip datasets and loaders
 * - `media`: clip fetch backends (HTTP, file, mock)
 * - `playback`: cache, preloader, queue, sink, and the sequence
 *   controller
 * - `asr`: the recognition event boundary
 * - `app_config`: configuration management
 * - `app_controller`: main application controller
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod asr;
pub mod dataset;
pub mod errors;
pub mod gloss;
pub mod media;
pub mod playback;
pub mod text;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use asr::{TranscriptEvent, TranscriptGate};
pub use dataset::{Dataset, DatasetStore};
pub use errors::{AppError, DatasetError, MediaError, PlaybackError};
pub use gloss::{translate, Translation};
pub use playback::{
    PlaybackEvent, PreloadCache, Preloader, SequenceController, SequenceOptions, SequenceState,
};
pub use text::refine;
