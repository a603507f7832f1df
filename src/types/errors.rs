//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the tool catalog.
#[derive(Error, Debug)]
pub enum Error {
    /// Registry or index is inconsistent (undeclared category, missing
    /// fallback, duplicate identifiers). Fatal at load time.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed caller input at the shell boundary.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors that must stop the catalog from classifying anything.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

// Convenience constructors
impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            Error::configuration("fallback 'core' not declared").to_string(),
            "configuration error: fallback 'core' not declared"
        );
        assert_eq!(
            Error::validation("category id cannot be empty").to_string(),
            "validation error: category id cannot be empty"
        );
    }

    #[test]
    fn test_is_configuration() {
        assert!(Error::configuration("x").is_configuration());
        assert!(!Error::validation("x").is_configuration());
    }

    #[test]
    fn test_from_serde_json() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
