//! Screen error types

use thiserror::Error;

/// Errors that can occur while building the app permissions screen
#[derive(Error, Debug)]
pub enum ScreenError {
    /// The package behind the screen no longer exists (or was never valid)
    #[error("App not found: {0}")]
    AppNotFound(String),

    /// Loading usage history failed
    #[error("Usage load failed: {0}")]
    UsageLoad(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ScreenError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        ScreenError::InvalidConfig(msg.into())
    }

    /// Create a usage load error
    pub fn usage_load(msg: impl Into<String>) -> Self {
        ScreenError::UsageLoad(msg.into())
    }

    /// Whether the screen should close after this error
    pub fn closes_screen(&self) -> bool {
        matches!(self, ScreenError::AppNotFound(_))
    }
}

/// Result type alias for screen operations
pub type ScreenResult<T> = Result<T, ScreenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScreenError::AppNotFound("com.example.app".into());
        assert_eq!(err.to_string(), "App not found: com.example.app");

        let err = ScreenError::usage_load("timed out");
        assert_eq!(err.to_string(), "Usage load failed: timed out");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let screen_err: ScreenError = io_err.into();
        assert!(matches!(screen_err, ScreenError::Io(_)));
    }

    #[test]
    fn test_closes_screen() {
        assert!(ScreenError::AppNotFound("x".into()).closes_screen());
        assert!(!ScreenError::usage_load("timeout").closes_screen());
    }
}
