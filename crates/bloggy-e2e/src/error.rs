// Error types for bloggy-e2e

use std::time::Duration;
use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while driving the blog application
#[derive(Debug, Error)]
pub enum Error {
    /// A catalog selector matched no element within its bound
    ///
    /// Usually means the application's markup changed and the locator
    /// catalog has to be updated in lockstep.
    #[error("Locator unresolved: '{name}' ({selector}) matched no element within {timeout:?}")]
    LocatorUnresolved {
        name: String,
        selector: String,
        timeout: Duration,
    },

    /// Elements exist but the awaited condition never held
    #[error("Wait timeout: expected {condition} within {timeout:?}")]
    WaitTimeout { condition: String, timeout: Duration },

    /// Observed UI state does not match the expected value
    #[error("Assertion failed: expected {expected}, observed {actual}")]
    AssertionFailed { expected: String, actual: String },

    /// Operation invoked while the session is not in the state it presumes
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// Missing or invalid configuration (credentials file, environment)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reported by the Playwright driver
    #[error("Playwright error: {0}")]
    Playwright(#[from] playwright_rs::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    /// Returns the innermost error, looking through any context layers
    pub fn root(&self) -> &Error {
        match self {
            Error::Context(_, inner) => inner.root(),
            other => other,
        }
    }

    /// True when the failure is a catalog selector that matched nothing
    pub fn is_locator_unresolved(&self) -> bool {
        matches!(self.root(), Error::LocatorUnresolved { .. })
    }

    pub(crate) fn assertion(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Error::AssertionFailed {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
