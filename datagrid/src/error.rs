//! Error types

/// Errors that can abort a table operation.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The configured mount container does not exist in the document.
    #[error("container not found: {0}")]
    Container(#[from] griddom::MountError),

    /// Delivering an export artifact failed.
    #[error("export delivery failed: {0}")]
    Export(#[from] std::io::Error),
}

/// Error returned by a cell transform rule.
///
/// Rule failures are isolated per cell: the pipeline logs them and keeps the
/// cell's previous value.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct RuleError(String);

impl RuleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<String> for RuleError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for RuleError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}
