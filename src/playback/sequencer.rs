/*!
 * Sequence playback controller.
 *
 * The state machine that owns the playback queue, advances one clip at a
 * time, and reacts to clip-end and clip-error signals. Playback is
 * strictly sequential; preloading runs alongside it as an optimization
 * and never affects playback order.
 *
 * Cancellation is handled with a per-run watch channel plus a generation
 * counter: `stop_sequence`, `reset`, and a superseding `play_sequence`
 * all bump the generation and signal the channel, so no timer or clip
 * wait scheduled by a previous run can ever act on a stale queue.
 */

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};
use tokio::sync::{mpsc, watch};

use super::preloader::Preloader;
use super::queue::{PlaybackQueue, QueueEntry};
use super::sink::MediaSink;
use crate::dataset::{Dataset, DatasetStore};
use crate::errors::PlaybackError;

/// Lifecycle states of the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    /// No queue loaded
    Idle,
    /// Queue created, warm-up started, first clip not yet playing
    Preloading,
    /// Advancing through the queue
    Playing,
    /// Stopped with the queue intact, resumable
    Paused,
    /// Queue played to the end
    Complete,
    /// Fatal playback fault
    Error,
}

impl fmt::Display for SequenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Preloading => "preloading",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Complete => "complete",
            Self::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// Status events emitted during playback, consumed by UI collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Glosses absent from the active dataset, reported once per sequence
    MissingWords(Vec<String>),
    /// The translation pass produced no playable glosses at all
    NoPlayableGlosses,
    /// A clip is about to start playing
    WordStart { gloss: String },
    /// A clip failed to load or play and was skipped
    ClipError { gloss: String },
    /// The queue played to the end
    SequenceComplete,
}

/// Timing and preload knobs for the sequencer.
#[derive(Debug, Clone)]
pub struct SequenceOptions {
    /// Pause between consecutive clips
    pub inter_clip_delay: Duration,
    /// Backoff before skipping a failed clip
    pub error_skip_delay: Duration,
    /// Whether to warm the cache ahead of playback
    pub preload: bool,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            inter_clip_delay: Duration::from_millis(300),
            error_skip_delay: Duration::from_millis(500),
            preload: true,
        }
    }
}

/// Command and state surface for sequence playback.
pub struct SequenceController {
    datasets: DatasetStore,
    preloader: Preloader,
    sink: Arc<dyn MediaSink>,
    options: SequenceOptions,

    state: Arc<RwLock<SequenceState>>,
    queue: Arc<RwLock<Option<PlaybackQueue>>>,
    events: mpsc::UnboundedSender<PlaybackEvent>,

    /// Cancellation signal for the active driver task
    cancel: Mutex<Option<watch::Sender<bool>>>,

    /// Bumped on every cancel; guards driver writes against stale runs
    generation: Arc<AtomicU64>,
}

impl SequenceController {
    /// Create a controller and the receiving end of its event stream.
    pub fn new(
        datasets: DatasetStore,
        preloader: Preloader,
        sink: Arc<dyn MediaSink>,
        options: SequenceOptions,
    ) -> (Self, mpsc::UnboundedReceiver<PlaybackEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let controller = Self {
            datasets,
            preloader,
            sink,
            options,
            state: Arc::new(RwLock::new(SequenceState::Idle)),
            queue: Arc::new(RwLock::new(None)),
            events,
            cancel: Mutex::new(None),
            generation: Arc::new(AtomicU64::new(0)),
        };
        (controller, receiver)
    }

    /// Current sequencer state
    pub fn state(&self) -> SequenceState {
        *self.state.read()
    }

    /// Cursor position of the active queue, if any
    pub fn cursor(&self) -> Option<usize> {
        self.queue.read().as_ref().map(|q| q.cursor())
    }

    /// Length of the active queue, if any
    pub fn queue_len(&self) -> Option<usize> {
        self.queue.read().as_ref().map(|q| q.len())
    }

    /// Start playing a gloss sequence, superseding any active sequence.
    ///
    /// Resolves each gloss against a snapshot of the active dataset,
    /// reports glosses without clips once in aggregate, kicks off cache
    /// warm-up, and begins playback at index 0 without waiting for the
    /// warm-up to finish.
    pub fn play_sequence(&self, glosses: &[String]) -> Result<(), PlaybackError> {
        self.cancel_active();

        let dataset = self.datasets.snapshot();
        let queue = Self::resolve_queue(glosses, &dataset);

        let missing = queue.missing_glosses();
        if !missing.is_empty() {
            warn!("{} glosses have no clip in dataset '{}'", missing.len(), dataset.name);
            let _ = self.events.send(PlaybackEvent::MissingWords(missing));
        }

        let locators = queue.resolved_locators();
        if locators.is_empty() {
            info!("No playable glosses in sequence of {} tokens", glosses.len());
            let _ = self.events.send(PlaybackEvent::NoPlayableGlosses);
            *self.queue.write() = None;
            *self.state.write() = SequenceState::Idle;
            return Ok(());
        }

        *self.queue.write() = Some(queue);
        *self.state.write() = SequenceState::Preloading;

        if self.options.preload {
            let preloader = self.preloader.clone();
            tokio::spawn(async move {
                preloader.warm(&locators).await;
            });
        }

        self.spawn_driver();
        Ok(())
    }

    /// Halt playback immediately, keeping the queue for `resume`.
    pub fn stop_sequence(&self) {
        self.cancel_active();
        if self.queue.read().is_some() {
            *self.state.write() = SequenceState::Paused;
            debug!("Sequence paused at cursor {:?}", self.cursor());
        }
    }

    /// Resume a paused sequence from its cursor.
    pub fn resume(&self) -> Result<(), PlaybackError> {
        if self.state() != SequenceState::Paused || self.queue.read().is_none() {
            return Err(PlaybackError::InvalidCommand {
                state: self.state().to_string(),
                command: "resume".to_string(),
            });
        }
        self.spawn_driver();
        Ok(())
    }

    /// Halt playback, discard the queue, and return to idle.
    pub fn reset(&self) {
        self.cancel_active();
        *self.queue.write() = None;
        *self.state.write() = SequenceState::Idle;
        info!("Sequencer reset");
    }

    /// Move the cursor one entry forward without starting playback.
    pub fn step_forward(&self) -> Result<(), PlaybackError> {
        self.step(|queue| queue.step_forward(), "step_forward")
    }

    /// Move the cursor one entry back without starting playback.
    pub fn step_back(&self) -> Result<(), PlaybackError> {
        self.step(|queue| queue.step_back(), "step_back")
    }

    fn step(
        &self,
        op: impl FnOnce(&mut PlaybackQueue),
        command: &str,
    ) -> Result<(), PlaybackError> {
        if self.state() == SequenceState::Idle {
            return Err(PlaybackError::InvalidCommand {
                state: self.state().to_string(),
                command: command.to_string(),
            });
        }

        let mut queue = self.queue.write();
        match queue.as_mut() {
            Some(queue) => {
                op(queue);
                Ok(())
            }
            None => Err(PlaybackError::InvalidCommand {
                state: self.state().to_string(),
                command: command.to_string(),
            }),
        }
    }

    /// Resolve glosses against a dataset snapshot into a fresh queue.
    fn resolve_queue(glosses: &[String], dataset: &Dataset) -> PlaybackQueue {
        let entries = glosses
            .iter()
            .map(|gloss| QueueEntry {
                gloss: gloss.clone(),
                locator: dataset.clip_locator(gloss),
            })
            .collect();
        PlaybackQueue::new(entries)
    }

    /// Invalidate the active driver and halt the sink.
    ///
    /// Bumping the generation first means a driver that already woke up
    /// can no longer touch shared state; the watch signal then wakes any
    /// driver parked on a delay or clip wait.
    fn cancel_active(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(cancel) = self.cancel.lock().take() {
            let _ = cancel.send(true);
        }
        self.sink.stop();
    }

    /// Spawn the driver task for the current queue.
    fn spawn_driver(&self) {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        *self.cancel.lock() = Some(cancel_tx);

        let driver = Driver {
            generation: self.generation.clone(),
            my_generation: self.generation.load(Ordering::SeqCst),
            state: self.state.clone(),
            queue: self.queue.clone(),
            preloader: self.preloader.clone(),
            sink: self.sink.clone(),
            events: self.events.clone(),
            options: self.options.clone(),
        };
        tokio::spawn(driver.run(cancel_rx));
    }
}

/// Owned task state advancing the queue one clip at a time.
struct Driver {
    generation: Arc<AtomicU64>,
    my_generation: u64,
    state: Arc<RwLock<SequenceState>>,
    queue: Arc<RwLock<Option<PlaybackQueue>>>,
    preloader: Preloader,
    sink: Arc<dyn MediaSink>,
    events: mpsc::UnboundedSender<PlaybackEvent>,
    options: SequenceOptions,
}

impl Driver {
    /// Whether this driver still owns the sequencer.
    fn live(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.my_generation
    }

    async fn run(self, mut cancel: watch::Receiver<bool>) {
        {
            let mut state = self.state.write();
            if !self.live() {
                return;
            }
            *state = SequenceState::Playing;
        }

        loop {
            let entry = self
                .queue
                .read()
                .as_ref()
                .and_then(|queue| queue.current().cloned());

            let Some(entry) = entry else {
                // Queue vanished under us; a reset won the race.
                return;
            };

            if let Some(locator) = &entry.locator {
                if !self.play_entry(&entry.gloss, locator, &mut cancel).await {
                    return;
                }
            } else {
                // Reported in aggregate at sequence start; skip silently.
                debug!("Skipping gloss '{}' with no clip", entry.gloss);
            }

            if !self.live() {
                return;
            }

            let finished = {
                let mut queue = self.queue.write();
                if !self.live() {
                    return;
                }
                match queue.as_mut() {
                    Some(queue) => !queue.advance(),
                    None => return,
                }
            };

            if finished {
                {
                    let mut state = self.state.write();
                    if !self.live() {
                        return;
                    }
                    *state = SequenceState::Complete;
                }
                info!("Sequence complete");
                // A dropped receiver is not a playback fault.
                let _ = self.events.send(PlaybackEvent::SequenceComplete);
                return;
            }

            if !self.pause(self.options.inter_clip_delay, &mut cancel).await {
                return;
            }
        }
    }

    /// Load and play one resolved clip. Returns false when cancelled.
    ///
    /// A load or play fault is never fatal: the clip is skipped after a
    /// fixed backoff and the fault surfaced as a `ClipError` event.
    async fn play_entry(
        &self,
        gloss: &str,
        locator: &str,
        cancel: &mut watch::Receiver<bool>,
    ) -> bool {
        let clip = tokio::select! {
            _ = cancel.changed() => return false,
            result = self.preloader.obtain(locator) => result,
        };

        match clip {
            Ok(clip) => {
                let _ = self.events.send(PlaybackEvent::WordStart {
                    gloss: gloss.to_string(),
                });

                let outcome = tokio::select! {
                    _ = cancel.changed() => return false,
                    result = self.sink.play(&clip) => result,
                };

                match outcome {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Clip playback failed for '{}': {}", gloss, e);
                        let _ = self.events.send(PlaybackEvent::ClipError {
                            gloss: gloss.to_string(),
                        });
                        self.pause(self.options.error_skip_delay, cancel).await
                    }
                }
            }
            Err(e) => {
                warn!("Clip load failed for '{}': {}", gloss, e);
                let _ = self.events.send(PlaybackEvent::ClipError {
                    gloss: gloss.to_string(),
                });
                self.pause(self.options.error_skip_delay, cancel).await
            }
        }
    }

    /// Cancellable delay. Returns false when the run was cancelled.
    async fn pause(&self, delay: Duration, cancel: &mut watch::Receiver<bool>) -> bool {
        tokio::select! {
            _ = cancel.changed() => false,
            _ = tokio::time::sleep(delay) => self.live(),
        }
    }
}
