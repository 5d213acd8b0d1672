//! Error types for iterforge

use thiserror::Error;

/// Boxed error produced by a caller-supplied callback.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for iterforge operations.
///
/// Exhaustion is never an error: adaptors signal it by returning `None`.
#[derive(Debug, Error)]
pub enum IterForgeError {
    /// Invalid construction parameters, raised before any element is pulled.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A caller-supplied projection, predicate or operator failed.
    #[error("Callback error: {0}")]
    Callback(#[source] BoxError),
}

impl IterForgeError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Wraps a callback failure.
    pub fn callback(error: impl Into<BoxError>) -> Self {
        Self::Callback(error.into())
    }

    /// Returns true for construction-time failures.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true for failures raised by caller callbacks.
    pub fn is_callback(&self) -> bool {
        matches!(self, Self::Callback(_))
    }
}

/// Result type alias for iterforge operations
pub type Result<T> = std::result::Result<T, IterForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_message() {
        let err = IterForgeError::config("tee count must be at least 1, got 0");
        assert!(err.is_config());
        assert_eq!(
            err.to_string(),
            "Configuration error: tee count must be at least 1, got 0"
        );
    }

    #[test]
    fn callback_error_keeps_source() {
        let parse = "x".parse::<i32>().unwrap_err();
        let err = IterForgeError::callback(parse);
        assert!(err.is_callback());
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Callback error: "));
    }

    #[test]
    fn callback_error_from_str() {
        let err = IterForgeError::callback("key lookup failed");
        assert_eq!(err.to_string(), "Callback error: key lookup failed");
    }
}
