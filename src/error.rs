//! Error types for neoclip operations.
//!
//! Splitting and joining never fail; the errors here come from the layers
//! around them: Vim selection framing, configuration, file I/O and the CLI.

use thiserror::Error;

/// Result type alias for neoclip operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Selection framing errors (decoding `_VIM_TEXT` / `_VIMENC_TEXT`).
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// I/O errors (file and stream operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors raised while unframing clipboard payloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Framed payload has no motion byte.
    #[error("{format} payload is empty")]
    EmptyPayload {
        /// Selection target name (e.g. `_VIM_TEXT`).
        format: &'static str,
    },

    /// Motion byte is not one of 0, 1, 2 or 255.
    #[error("unknown motion type byte {byte:#04x}")]
    UnknownMotion {
        /// The offending byte.
        byte: u8,
    },

    /// Encoding name in a `_VIMENC_TEXT` payload is not NUL-terminated.
    #[error("encoding name is not terminated")]
    MissingEncodingTerminator,

    /// Payload was produced with an encoding other than UTF-8.
    #[error("unsupported encoding: {name}")]
    UnsupportedEncoding {
        /// Encoding name as found in the payload.
        name: String,
    },
}

/// I/O-specific errors for file and stream operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Command(err.into())
    }
}
