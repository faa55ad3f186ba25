use thiserror::Error;

/// Errors that can occur at the outer surfaces of sortscope
///
/// The sorting engine itself has no recoverable failures: contract
/// violations inside it are programming faults and panic.
#[derive(Error, Debug)]
pub enum SortscopeError {
    /// Container or bar dimensions that cannot produce a sortable layout
    #[error("Invalid layout: {field} - {message}")]
    InvalidLayout { field: String, message: String },

    /// Error loading or parsing configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Error setting up or drawing to the terminal
    #[error("Terminal error: {0}")]
    TerminalError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for sortscope operations
pub type Result<T> = std::result::Result<T, SortscopeError>;

impl SortscopeError {
    /// Create a layout validation error
    pub fn layout(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidLayout {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
