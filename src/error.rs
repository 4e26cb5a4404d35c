//! Error types for my-ui operations.
//!
//! This module defines [`MyUiError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A malformed registry manifest is fatal: it surfaces as
//!   [`MyUiError::Manifest`] and the binary exits non-zero
//! - Per-item and per-file problems (unknown item, missing template, file
//!   already present) are not errors; they are reported as
//!   [`Advisory`](crate::materialize::Advisory) values
//! - Use `anyhow::Error` (via `MyUiError::Other`) for unexpected errors

use thiserror::Error;

use crate::registry::ManifestError;

/// Core error type for my-ui operations.
#[derive(Debug, Error)]
pub enum MyUiError {
    /// The registry manifest failed validation.
    #[error("registry.json: {0}")]
    Manifest(#[from] ManifestError),

    /// A prompt was needed but no answer is available without a terminal.
    #[error("Cannot prompt for '{key}' in non-interactive mode (no default value)")]
    PromptUnavailable { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for my-ui operations.
pub type Result<T> = std::result::Result<T, MyUiError>;
