/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Nothing in the gateway layer is fatal: configuration problems surface
/// through the admin notice channel and key-material failures degrade to a
/// boolean plus a log entry. These variants cover the cases callers still
/// need to branch on.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Programmer error: lifecycle method called before initialization
    #[error("Not initialized: {0}")]
    NotInitialized(String),

    /// Key material errors
    #[error("Key error: {0}")]
    Key(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn not_initialized(msg: impl Into<String>) -> Self {
        AppError::NotInitialized(msg.into())
    }

    pub fn key(msg: impl Into<String>) -> Self {
        AppError::Key(msg.into())
    }
}
