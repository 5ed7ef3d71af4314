/*!
 * Error types for the signflow application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when fetching clip media
#[derive(Error, Debug)]
pub enum MediaError {
    /// Error when a fetch request fails
    #[error("Clip fetch failed: {0}")]
    FetchFailed(String),

    /// Error when the fetch endpoint responds with a failure status
    #[error("Clip endpoint responded with error: {status_code} - {locator}")]
    EndpointError {
        /// HTTP status code
        status_code: u16,
        /// Locator the request was issued for
        locator: String,
    },

    /// Error when a locator cannot be resolved to a valid URL or path
    #[error("Invalid clip locator: {0}")]
    InvalidLocator(String),

    /// Error reading clip data from the local filesystem
    #[error("Clip I/O error: {0}")]
    Io(String),
}

/// Errors that can occur when loading or resolving a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Error reading or fetching the dataset definition
    #[error("Failed to load dataset: {0}")]
    LoadFailed(String),

    /// Error parsing the dataset definition
    #[error("Failed to parse dataset: {0}")]
    ParseError(String),

    /// Error when the dataset contains no clip mappings
    #[error("Dataset '{0}' contains no video mappings")]
    Empty(String),
}

/// Errors that can occur during sequence playback
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// Error from clip media fetching
    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    /// Error when a command is issued in an invalid state
    #[error("Invalid playback command in state {state}: {command}")]
    InvalidCommand {
        /// State the controller was in
        state: String,
        /// Command that was rejected
        command: String,
    },

    /// Error starting playback on the sink
    #[error("Sink error: {0}")]
    Sink(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from clip media fetching
    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    /// Error from dataset handling
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Error from sequence playback
    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
