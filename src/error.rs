//! Error types for btserial
//!
//! Provides a unified error type for all operations, plus the validation
//! taxonomy reported for rejected (address, command) pairs.

use thiserror::Error;

/// Result type alias using BtSerialError
pub type Result<T> = std::result::Result<T, BtSerialError>;

/// Unified error type for btserial operations
#[derive(Debug, Error)]
pub enum BtSerialError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Bundle corruption detected: {0}")]
    Corruption(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why an (address, command) pair cannot become a record.
///
/// The `Display` text is the short phrase shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Address is neither a placeholder nor a well-formed hardware address
    #[error("Invalid Mac")]
    InvalidAddress,

    /// Command is absent or empty
    #[error("Message not selected")]
    MissingOrEmptyCommand,

    /// A raw input was absent before a record could be attempted
    #[error("Missing address or command")]
    AbsentInput,
}

impl From<bincode::Error> for BtSerialError {
    fn from(err: bincode::Error) -> Self {
        BtSerialError::Serialization(err.to_string())
    }
}
