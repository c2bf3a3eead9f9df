//! Error types for logger setup

/// Result type for fallible setup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up the logger
///
/// Runtime logging itself never fails; suppressed or disallowed calls are
/// silent no-ops. Only explicit setup entry points surface errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The process-global logger was already installed
    #[error("global logger already initialized")]
    AlreadyInitialized,

    /// A method name did not match any canonical log method
    #[error("unknown log method: {0}")]
    UnknownMethod(String),
}
