use crate::session::Register;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to the board.
///
/// Transfer errors carry the register that was being accessed. None of them
/// are retried by the driver: the protocol has no framing, so the caller
/// decides whether to repeat the whole logical operation.
#[derive(Error, Debug)]
pub enum Error {
    /// The device file could not be opened (missing, or permission denied).
    #[error("Device unavailable at '{}': {source}", .path.display())]
    DeviceUnavailable {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying OS error.
        source: std::io::Error,
    },
    /// The register select control call was rejected.
    #[error("Failed to select register {register:?}: {source}")]
    RegisterSelect {
        /// Register being selected.
        register: Register,
        /// Underlying OS error.
        source: std::io::Error,
    },
    /// Writing the payload failed at the OS level.
    #[error("Write to register {register:?} failed: {source}")]
    IoWrite {
        /// Register the payload was meant for.
        register: Register,
        /// Underlying OS error.
        source: std::io::Error,
    },
    /// The device accepted fewer bytes than the payload size.
    #[error("Short write to register {register:?}: {written} of 4 bytes")]
    ShortWrite {
        /// Register the payload was meant for.
        register: Register,
        /// Bytes actually accepted.
        written: usize,
    },
    /// Reading the payload failed at the OS level.
    #[error("Read from register {register:?} failed: {source}")]
    IoRead {
        /// Register being read.
        register: Register,
        /// Underlying OS error.
        source: std::io::Error,
    },
    /// The device returned fewer bytes than the payload size.
    #[error("Short read from register {register:?}: {read} of 4 bytes")]
    ShortRead {
        /// Register being read.
        register: Register,
        /// Bytes actually returned.
        read: usize,
    },
    /// A value cannot be represented in the register's layout. Raised before any I/O.
    #[error("Encoding error: {0}")]
    Encoding(String),
    /// The session was used after `close`.
    #[error("Device session is closed")]
    SessionClosed,
    /// Write to a read-only register, or read from a write-only one.
    #[error("Register {register:?} does not support this access")]
    InvalidAccess {
        /// Register that was misused.
        register: Register,
    },
}

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn digit_out_of_range(digit: u8) -> Error {
    Error::Encoding(format!("digit {} has no segment pattern (0-9)", digit))
}
