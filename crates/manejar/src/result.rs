//! Result and error types for Manejar.

use thiserror::Error;

/// Result type for Manejar operations
pub type ManejarResult<T> = Result<T, ManejarError>;

/// Errors that can occur in Manejar
///
/// Queries for presence, visibility, or text never produce an error for a
/// "not found" condition; absence is a valid `Ok(false)` result. Everything
/// the underlying engine reports beyond the named kinds below surfaces
/// through [`ManejarError::Engine`] uninterpreted.
#[derive(Debug, Error)]
pub enum ManejarError {
    /// A locator value was empty or whitespace-only
    ///
    /// Raised at factory-call time, before any engine interaction.
    #[error("Invalid locator argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// The underlying browser session cannot be reached
    ///
    /// Distinct from an element not being found: "not found" is a valid
    /// `false` answer, "cannot ask" is this error.
    #[error("Driver unavailable: {message}")]
    DriverUnavailable {
        /// Error message
        message: String,
    },

    /// The engine reports the target element cannot receive the action
    #[error("Element at '{locator}' is not interactable: {message}")]
    ElementNotInteractable {
        /// Canonical locator string of the target element
        locator: String,
        /// Error message from the engine
        message: String,
    },

    /// A wait operation exceeded its allotted time
    #[error("Operation timed out after {ms}ms")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
    },

    /// Any other failure reported by the underlying engine
    #[error("Engine error: {message}")]
    Engine {
        /// Error message from the engine, unmodified
        message: String,
    },
}

impl ManejarError {
    /// Create an [`ManejarError::InvalidArgument`] error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a [`ManejarError::DriverUnavailable`] error
    #[must_use]
    pub fn driver_unavailable(message: impl Into<String>) -> Self {
        Self::DriverUnavailable {
            message: message.into(),
        }
    }

    /// Create an [`ManejarError::ElementNotInteractable`] error
    #[must_use]
    pub fn not_interactable(locator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ElementNotInteractable {
            locator: locator.into(),
            message: message.into(),
        }
    }

    /// Create an [`ManejarError::Engine`] error
    #[must_use]
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
        }
    }
}
