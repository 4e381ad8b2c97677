use std::fmt;

// === CommandError ===

/// Errors from host commands. Commands are fire-and-forget; callers are
/// expected to read and discard these rather than escalate them.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The host capability is absent in this build.
    Unsupported(String),
    /// The host rejected the command (permission or gesture requirement).
    Rejected(String),
    /// The command referenced a tab that no longer exists.
    NotFound(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unsupported(msg) => write!(f, "Capability unsupported: {}", msg),
            CommandError::Rejected(msg) => write!(f, "Command rejected: {}", msg),
            CommandError::NotFound(id) => write!(f, "Tab not found: {}", id),
        }
    }
}

impl std::error::Error for CommandError {}

// === StorageError ===

/// Errors from the durable key-value store or the fast local cache.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The storage area denied access (e.g. a sandboxed context).
    AccessDenied(String),
    /// Reading or writing the backing file failed.
    IoError(String),
    /// Encoding or decoding a stored value failed.
    SerializationError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::AccessDenied(msg) => write!(f, "Storage access denied: {}", msg),
            StorageError::IoError(msg) => write!(f, "Storage I/O error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}
