// ABOUTME: Defines all error types for the opauth library using thiserror.
// ABOUTME: Each concern has its own error enum, unified under AuthzError.

/// Top-level error type for the opauth library.
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    #[error("Operation error: {0}")]
    Operation(#[from] OperationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AuthzError {
    /// Returns true if this error was raised by argument validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AuthzError::Operation(OperationError::InvalidArgument(_)))
    }

    /// Returns true if the store rejected a write because of a constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, AuthzError::Store(StoreError::ConstraintViolation(_)))
    }
}

/// Errors from operation validation and hierarchy edits.
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised at the storage boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Backend error: {0}")]
    Backend(#[source] anyhow::Error),
}

/// Errors from loading hierarchy configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
