/*!
 * Playback queue model.
 *
 * One queue is created per translation pass and owns the ordered glosses
 * of that pass, a cursor, and the resolved locator (or missing marker)
 * for each entry. The cursor only moves forward during playback; it is
 * repositioned only by explicit reset or stepping.
 */

/// One gloss in the queue with its resolved clip locator, if any.
#[derive(Debug, Clone)]
pub struct QueueEntry {
    /// Canonical gloss
    pub gloss: String,

    /// Resolved clip locator; `None` marks a gloss absent from the dataset
    pub locator: Option<String>,
}

/// Ordered sequence of glosses with a playback cursor.
#[derive(Debug, Clone, Default)]
pub struct PlaybackQueue {
    entries: Vec<QueueEntry>,
    cursor: usize,
}

impl PlaybackQueue {
    /// Create a queue from resolved entries, cursor at 0
    pub fn new(entries: Vec<QueueEntry>) -> Self {
        Self { entries, cursor: 0 }
    }

    /// Entries in playback order
    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Entry at the cursor, if the queue is not exhausted
    pub fn current(&self) -> Option<&QueueEntry> {
        self.entries.get(self.cursor)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the cursor sits on the last entry
    pub fn at_last(&self) -> bool {
        !self.entries.is_empty() && self.cursor == self.entries.len() - 1
    }

    /// Advance the cursor by one. Returns false when already at or past
    /// the last entry.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor one step forward, clamped to the last entry
    pub fn step_forward(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + 1).min(self.entries.len() - 1);
        }
    }

    /// Move the cursor one step back, clamped to 0
    pub fn step_back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Reposition the cursor to an absolute index, clamped to the queue
    pub fn seek(&mut self, index: usize) {
        if self.entries.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = index.min(self.entries.len() - 1);
        }
    }

    /// Glosses with no resolved locator, in queue order
    pub fn missing_glosses(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.locator.is_none())
            .map(|entry| entry.gloss.clone())
            .collect()
    }

    /// Locators of all resolved entries, in queue order
    pub fn resolved_locators(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|entry| entry.locator.clone())
            .collect()
    }
}
