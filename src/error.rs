//! Error types for envgen operations.
//!
//! This module defines [`EnvgenError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors are fatal and abort the run before any file is written
//! - Missing variables are never errors; they are collected in the generation report
//! - Write failures are stored per package and never propagate to the caller

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envgen operations.
#[derive(Debug, Error)]
pub enum EnvgenError {
    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to decode the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A supplementary .env file could not be loaded.
    #[error("Error loading env file {path}: {message}")]
    EnvFile { path: PathBuf, message: String },

    /// A generated env file could not be created or written.
    #[error("Failed to write {path}: {source}")]
    EnvFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A package worker panicked before reporting its outcome.
    #[error("Worker for package '{package}' panicked")]
    WorkerPanicked { package: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envgen operations.
pub type Result<T> = std::result::Result<T, EnvgenError>;
