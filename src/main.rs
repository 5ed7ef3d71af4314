// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::app_config::{Config, DatasetSource};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod asr;
mod dataset;
mod errors;
mod gloss;
mod media;
mod playback;
mod text;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Refine transcript text and print its gloss translation
    Translate(TranslateArgs),

    /// Refine transcript text and play the gloss sequence
    Play(PlayArgs),

    /// Generate shell completions for signflow
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Raw transcript text to translate
    #[arg(value_name = "TEXT")]
    text: String,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Raw transcript text to translate and play
    #[arg(value_name = "TEXT")]
    text: String,

    /// Serve clips from memory instead of the configured dataset assets
    #[arg(short, long)]
    simulate: bool,

    /// Dataset JSON file overriding the configured source
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// signflow - speech to sign-language clip sequencing
///
/// Translates noisy speech-recognition transcripts into ordered sign
/// glosses and plays the matching video clips.
#[derive(Parser, Debug)]
#[command(name = "signflow", version)]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "signflow", &mut std::io::stdout());
            Ok(())
        }
        Commands::Translate(args) => run_translate(args).await,
        Commands::Play(args) => run_play(args).await,
    }
}

/// Apply a CLI log level override to the global logger
fn apply_log_level(level: &Option<CliLogLevel>, config: &mut Config) {
    if let Some(cli_level) = level {
        let config_level: app_config::LogLevel = cli_level.clone().into();
        let filter = match config_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };
        log::set_max_level(filter);
        config.log_level = config_level;
    }
}

/// Load configuration, warning when the file is absent
fn load_config(config_path: &str) -> Result<Config> {
    let path = Path::new(config_path);
    if !path.exists() {
        warn!(
            "Config file not found at '{}', using default configuration",
            config_path
        );
    }
    Config::from_file(path).context("Failed to load configuration")
}

async fn run_translate(args: TranslateArgs) -> Result<()> {
    let mut config = load_config(&args.config_path)?;
    apply_log_level(&args.log_level, &mut config);

    let controller = Controller::with_config(config)?;
    let (tokens, translation) = controller.translate_text(&args.text);

    info!("Tokens: {}", tokens.join(" "));
    println!("glosses: {}", translation.resolved.join(" "));
    if !translation.unresolved.is_empty() {
        println!("unresolved: {}", translation.unresolved.join(" "));
    }
    Ok(())
}

async fn run_play(args: PlayArgs) -> Result<()> {
    let mut config = load_config(&args.config_path)?;
    apply_log_level(&args.log_level, &mut config);

    if let Some(dataset_path) = args.dataset {
        config.dataset = DatasetSource::File(dataset_path);
    }

    let controller = Controller::with_config(config)?;
    let summary = controller.run_playback(&args.text, args.simulate).await?;

    if summary.nothing_playable {
        println!("no playable glosses in input");
        return Ok(());
    }

    println!("played: {}", summary.played.join(" "));
    if !summary.missing.is_empty() {
        println!("missing clips: {}", summary.missing.join(" "));
    }
    if !summary.errored.is_empty() {
        println!("skipped after error: {}", summary.errored.join(" "));
    }
    if !summary.unresolved.is_empty() {
        println!("unresolved words: {}", summary.unresolved.join(" "));
    }
    Ok(())
}
