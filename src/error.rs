use thiserror::Error;

/// Unified error type for scaffold-kit operations
#[derive(Error, Debug)]
pub enum ScaffoldKitError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Directory '{0}' does not exist.")]
    MissingDirectory(String),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in scaffold-kit
pub type Result<T> = std::result::Result<T, ScaffoldKitError>;

impl ScaffoldKitError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ScaffoldKitError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ScaffoldKitError::Version(msg.into())
    }

    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        ScaffoldKitError::Pattern(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        ScaffoldKitError::Branch(msg.into())
    }
}
