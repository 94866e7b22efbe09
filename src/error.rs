use thiserror::Error;

/// Unified error type for gh-tagger operations
#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Aborted: {0}")]
    Aborted(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gh-tagger
pub type Result<T> = std::result::Result<T, TaggerError>;

impl TaggerError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TaggerError::Config(msg.into())
    }

    /// Create an input error with context
    pub fn input(msg: impl Into<String>) -> Self {
        TaggerError::Input(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        TaggerError::Version(msg.into())
    }

    /// Create an API error from a response status and body message
    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        TaggerError::Api {
            status,
            message: msg.into(),
        }
    }

    pub fn aborted(msg: impl Into<String>) -> Self {
        TaggerError::Aborted(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaggerError::config("environment variable not set: GITHUB_TOKEN");
        assert_eq!(
            err.to_string(),
            "Configuration error: environment variable not set: GITHUB_TOKEN"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no tty");
        let err: TaggerError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_api_error_keeps_message_verbatim() {
        let err = TaggerError::api(422, "Reference already exists");
        assert_eq!(
            err.to_string(),
            "GitHub API error (422): Reference already exists"
        );
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (TaggerError::config("x"), "Configuration error"),
            (TaggerError::input("x"), "Input error"),
            (TaggerError::version("x"), "Version parsing error"),
            (TaggerError::api(500, "x"), "GitHub API error"),
            (TaggerError::aborted("x"), "Aborted"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            TaggerError::config(""),
            TaggerError::input(""),
            TaggerError::aborted(""),
        ];

        for err in errors {
            // Even with empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }
}
