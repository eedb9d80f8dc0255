//! Error handling for OvalKit
//!
//! Provides the error types used across the workspace:
//! - Control errors (drag lifecycle, transforms, handle identity)
//! - A unified [`Error`] wrapping them together with I/O failures
//!
//! All error types use `thiserror`.

use thiserror::Error;

/// Control error type
///
/// Represents misuse of the interaction state machine or geometry that
/// cannot be mapped between screen and image space.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    /// A drag was started before the host supplied a screen-to-image transform
    #[error("No screen-to-image transform has been set")]
    MissingTransform,

    /// A move event arrived while no drag session is active
    #[error("No active drag session")]
    NoActiveDrag,

    /// The transform cannot be inverted
    #[error("Transform is singular (determinant {determinant})")]
    SingularTransform {
        /// The determinant of the linear part.
        determinant: f64,
    },

    /// A handle index outside `0..9`
    #[error("Invalid handle index: {index}")]
    InvalidHandle {
        /// The rejected index.
        index: usize,
    },
}

/// Main error type for OvalKit
#[derive(Error, Debug)]
pub enum Error {
    /// Control error
    #[error(transparent)]
    Control(#[from] ControlError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
