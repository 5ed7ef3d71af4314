/*!
 * Clip playback subsystem.
 *
 * - `cache`: shared cache of loaded clip buffers
 * - `preloader`: deduplicating warm-up of clips ahead of playback
 * - `queue`: the per-translation playback queue and cursor
 * - `sink`: the playback device boundary
 * - `sequencer`: the state machine driving sequential clip playback
 */

pub mod cache;
pub mod preloader;
pub mod queue;
pub mod sequencer;
pub mod sink;

pub use cache::PreloadCache;
pub use preloader::Preloader;
pub use queue::{PlaybackQueue, QueueEntry};
pub use sequencer::{PlaybackEvent, SequenceController, SequenceOptions, SequenceState};
pub use sink::{MediaSink, SimulatedSink};
