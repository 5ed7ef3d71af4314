use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use crate::app_config::{Config, DatasetSource};
use crate::dataset::{Dataset, DatasetStore};
use crate::gloss::{self, Translation};
use crate::media::{FileFetcher, HttpFetcher, MediaFetcher, MockFetcher};
use crate::playback::{
    PlaybackEvent, PreloadCache, Preloader, SequenceController, SequenceOptions, SimulatedSink,
};
use crate::text;

// @module: Application controller wiring transcript refinement to playback

/// Outcome of one playback run, for reporting.
#[derive(Debug, Default)]
pub struct PlaybackSummary {
    /// Glosses whose clips played
    pub played: Vec<String>,
    /// Glosses with no clip in the dataset
    pub missing: Vec<String>,
    /// Glosses whose clips failed and were skipped
    pub errored: Vec<String>,
    /// Input tokens with no known gloss
    pub unresolved: Vec<String>,
    /// True when the input produced no playable glosses at all
    pub nothing_playable: bool,
}

/// Main application controller for transcript-to-sign playback
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Refine raw transcript text and translate it into glosses.
    pub fn translate_text(&self, raw: &str) -> (Vec<String>, Translation) {
        let tokens = text::refine(raw);
        let translation = gloss::translate(&tokens);
        (tokens, translation)
    }

    /// Load the dataset named by the configuration.
    pub async fn load_dataset(&self) -> Result<Dataset> {
        match &self.config.dataset {
            DatasetSource::Bundled => Ok(Dataset::bundled()),
            DatasetSource::File(path) => Dataset::from_file(path),
            DatasetSource::Url(url) => Dataset::from_url(url).await,
            DatasetSource::Dir(path) => Dataset::from_clip_dir(path),
        }
    }

    /// Translate raw text and play the resulting gloss sequence.
    ///
    /// With `simulate` set, clips are served from an in-memory fetcher so
    /// the full pipeline runs without any real assets on disk.
    pub async fn run_playback(&self, raw: &str, simulate: bool) -> Result<PlaybackSummary> {
        let (tokens, translation) = self.translate_text(raw);
        info!(
            "Refined {} tokens, {} resolved, {} unresolved",
            tokens.len(),
            translation.resolved.len(),
            translation.unresolved.len()
        );

        let mut summary = PlaybackSummary {
            unresolved: translation.unresolved.clone(),
            ..PlaybackSummary::default()
        };

        let dataset = self.load_dataset().await.context("Failed to load dataset")?;
        let datasets = DatasetStore::new(dataset);

        let fetcher = self.build_fetcher(simulate, &datasets);
        let preloader = Preloader::new(PreloadCache::new(), fetcher);
        let sink = Arc::new(SimulatedSink::new(Duration::from_millis(
            self.config.playback.clip_duration_ms,
        )));

        let options = SequenceOptions {
            inter_clip_delay: Duration::from_millis(self.config.playback.inter_clip_delay_ms),
            error_skip_delay: Duration::from_millis(self.config.playback.error_skip_delay_ms),
            preload: self.config.playback.preload,
        };

        let (controller, mut events) =
            SequenceController::new(datasets, preloader, sink, options);

        let progress = ProgressBar::new(translation.resolved.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );

        controller.play_sequence(&translation.resolved)?;

        // Drain events until the sequence settles.
        while let Some(event) = events.recv().await {
            match event {
                PlaybackEvent::MissingWords(glosses) => {
                    warn!("No clips for: {}", glosses.join(", "));
                    summary.missing = glosses;
                }
                PlaybackEvent::NoPlayableGlosses => {
                    summary.nothing_playable = true;
                    break;
                }
                PlaybackEvent::WordStart { gloss } => {
                    progress.set_message(gloss.clone());
                    progress.inc(1);
                    summary.played.push(gloss);
                }
                PlaybackEvent::ClipError { gloss } => {
                    warn!("Clip skipped for '{}'", gloss);
                    summary.errored.push(gloss);
                }
                PlaybackEvent::SequenceComplete => break,
            }
        }

        progress.finish_and_clear();
        Ok(summary)
    }

    /// Pick the fetch backend for the active dataset.
    fn build_fetcher(&self, simulate: bool, datasets: &DatasetStore) -> Arc<dyn MediaFetcher> {
        if simulate {
            return Arc::new(MockFetcher::new());
        }

        let snapshot = datasets.snapshot();
        let remote = snapshot
            .base_url
            .as_deref()
            .is_some_and(|base| base.starts_with("http"));

        if remote {
            Arc::new(HttpFetcher::new())
        } else {
            Arc::new(FileFetcher::new())
        }
    }
}
