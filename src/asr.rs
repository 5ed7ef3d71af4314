/*!
 * Speech-recognition event boundary.
 *
 * The recognizer itself is an external collaborator; this module only
 * defines the event shape it feeds us and the gate that decides when a
 * transcript enters the refinement pipeline. Interim results are kept
 * for display but never refined: re-running segmentation on every
 * interim delta would be wasted work, and the final transcript
 * supersedes them all.
 */

use serde::{Deserialize, Serialize};

use crate::text;

/// One recognition event from the ASR stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEvent {
    /// Transcript text, possibly provisional
    pub text: String,

    /// Whether the recognizer has finalized this text
    #[serde(rename = "isFinal")]
    pub is_final: bool,
}

impl TranscriptEvent {
    /// Create an interim (provisional) event
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    /// Create a finalized event
    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Gate between the ASR stream and the text pipeline.
///
/// Only finalized transcripts are refined into tokens; interim text is
/// retained raw for display.
#[derive(Debug, Default)]
pub struct TranscriptGate {
    interim: String,
}

impl TranscriptGate {
    /// Create an empty gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one recognition event.
    ///
    /// Returns the refined token list for a finalized transcript, `None`
    /// for an interim one.
    pub fn push(&mut self, event: TranscriptEvent) -> Option<Vec<String>> {
        if event.is_final {
            self.interim.clear();
            Some(text::refine(&event.text))
        } else {
            self.interim = event.text;
            None
        }
    }

    /// Latest interim transcript, raw and for display only
    pub fn interim_text(&self) -> &str {
        &self.interim
    }
}
