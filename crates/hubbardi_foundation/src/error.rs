//! Error types for hubbardi.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for hubbardi operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Attaches the archive file path, keeping any existing context.
    #[must_use]
    pub fn in_file(mut self, file: impl AsRef<Path>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_file(file));
        self
    }

    /// Creates a not-found error for a member path.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound { path: path.into() })
    }

    /// Creates a format mismatch error.
    #[must_use]
    pub fn format_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::new(ErrorKind::FormatMismatch {
            expected: expected.into(),
            found: found.into(),
        })
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates a read-only error for an attempted write.
    #[must_use]
    pub fn read_only(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::ReadOnly(path.into()))
    }

    /// Creates an invalid member name error.
    #[must_use]
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidName(name.into()))
    }

    /// Creates an unknown file mode error.
    #[must_use]
    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidMode(mode.into()))
    }

    /// Returns true if this is a [`ErrorKind::NotFound`] error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound { .. })
    }

    /// Returns true if this is a [`ErrorKind::FormatMismatch`] error.
    #[must_use]
    pub fn is_format_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::FormatMismatch { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The requested member does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// Path of the missing member.
        path: String,
    },

    /// The stored data does not have the expected shape or type.
    #[error("format mismatch: expected {expected}, found {found}")]
    FormatMismatch {
        /// Description of what the reader expected.
        expected: String,
        /// Description of what was stored.
        found: String,
    },

    /// The underlying storage medium failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Encoding or decoding the file image failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A write was attempted through a read-only handle.
    #[error("archive is read-only, cannot write {0}")]
    ReadOnly(String),

    /// A member name or path is empty or malformed.
    #[error("invalid member name: {0:?}")]
    InvalidName(String),

    /// A file mode string was not recognized.
    #[error("invalid file mode: {0:?}")]
    InvalidMode(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Archive file the operation targeted.
    pub file: Option<PathBuf>,
    /// Dataset or group path inside the archive.
    pub member: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the archive file.
    #[must_use]
    pub fn with_file(mut self, file: impl AsRef<Path>) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }

    /// Sets the member path.
    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, &self.member) {
            (Some(file), Some(member)) => write!(f, "at {}:{member}", file.display()),
            (Some(file), None) => write!(f, "at {}", file.display()),
            (None, Some(member)) => write!(f, "at {member}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result type alias for hubbardi operations.
pub type Result<T> = std::result::Result<T, Error>;
