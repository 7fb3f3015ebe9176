//! File open modes.

use std::fmt;
use std::str::FromStr;

use hubbardi_foundation::Error;

/// How an archive file is opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FileMode {
    /// Create the file, discarding any existing content (`"w"`).
    Truncate,
    /// Create the file, failing if it already exists (`"w-"`).
    CreateNew,
    /// Open an existing file for reading and writing (`"r+"`).
    ReadWrite,
    /// Open an existing file for reading and writing, creating it if
    /// missing (`"a"`).
    Append,
    /// Open an existing file for reading only (`"r"`).
    ReadOnly,
}

impl FileMode {
    /// Returns true if writes are allowed through a handle in this mode.
    #[must_use]
    pub const fn is_writable(self) -> bool {
        !matches!(self, Self::ReadOnly)
    }

    /// Returns the short mode string accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Truncate => "w",
            Self::CreateNew => "w-",
            Self::ReadWrite => "r+",
            Self::Append => "a",
            Self::ReadOnly => "r",
        }
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" | "truncate" => Ok(Self::Truncate),
            "w-" | "x" | "create-new" => Ok(Self::CreateNew),
            "r+" | "read-write" => Ok(Self::ReadWrite),
            "a" | "append" => Ok(Self::Append),
            "r" | "read-only" => Ok(Self::ReadOnly),
            other => Err(Error::invalid_mode(other)),
        }
    }
}
