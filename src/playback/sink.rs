/*!
 * Playback device boundary.
 *
 * The sequencer drives an abstract sink: `play` resolves when the clip
 * finishes, `stop` halts whatever is currently playing. The simulated
 * sink backs the CLI and tests with a fixed clip duration.
 */

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use log::info;

use crate::errors::PlaybackError;
use crate::media::ClipHandle;

/// Common trait for playback devices.
#[async_trait]
pub trait MediaSink: Send + Sync + Debug {
    /// Start the clip and wait for its end signal.
    ///
    /// Returns once the clip has played to completion. Implementations
    /// must abort promptly when [`stop`](MediaSink::stop) is called.
    async fn play(&self, clip: &ClipHandle) -> Result<(), PlaybackError>;

    /// Halt the currently playing clip immediately
    fn stop(&self);
}

/// Sink that simulates playback by sleeping for a fixed clip duration.
#[derive(Debug)]
pub struct SimulatedSink {
    clip_duration: Duration,
}

impl SimulatedSink {
    /// Create a sink with the given simulated clip duration
    pub fn new(clip_duration: Duration) -> Self {
        Self { clip_duration }
    }
}

#[async_trait]
impl MediaSink for SimulatedSink {
    async fn play(&self, clip: &ClipHandle) -> Result<(), PlaybackError> {
        info!("Playing clip '{}' ({} bytes)", clip.locator, clip.len());
        tokio::time::sleep(self.clip_duration).await;
        Ok(())
    }

    fn stop(&self) {
        // Nothing to interrupt; the sequencer cancels the play future.
    }
}
