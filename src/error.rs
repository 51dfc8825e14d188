//! Error types for clip-doctor operations.
//!
//! This module defines [`DoctorError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `MissingDependency` and `ModelFailure` are the two diagnostic outcomes;
//!   the driver catches them, prints their display text on a `✗` line, and
//!   exits 1 — they never abort the process on their own
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors
//! - Display texts double as the user-facing message bodies, so they must
//!   read well after a status icon

use thiserror::Error;

/// Core error type for clip-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// A required Python capability failed to import.
    #[error("{capability} not installed")]
    MissingDependency {
        capability: String,
        message: String,
    },

    /// The model smoke test failed at any point: instantiation, tokenization,
    /// encoding, or an unusable response. One category covers all of them.
    #[error("Error loading model: {message}")]
    ModelFailure { message: String },

    /// No usable Python interpreter on PATH (or the override is invalid).
    #[error("Python not found (tried {tried})")]
    InterpreterNotFound { tried: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DoctorError {
    /// The diagnostic message carried by the failure, where one exists.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::MissingDependency { message, .. } | Self::ModelFailure { message } => {
                Some(message)
            }
            _ => None,
        }
    }
}

/// Result type alias for clip-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
