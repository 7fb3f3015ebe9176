//! Member path parsing.
//!
//! Paths are `/`-separated member names relative to a group. A single
//! leading `/` is accepted and ignored.

use hubbardi_foundation::{Error, Result};

/// Path separator inside an archive.
pub const SEPARATOR: char = '/';

/// Splits a path into validated segments.
///
/// # Errors
///
/// Returns `InvalidName` if the path is empty or contains an empty,
/// `.` or `..` segment.
pub fn segments(path: &str) -> Result<Vec<&str>> {
    let trimmed = path.strip_prefix(SEPARATOR).unwrap_or(path);
    if trimmed.is_empty() {
        return Err(Error::invalid_name(path));
    }
    let parts: Vec<&str> = trimmed.split(SEPARATOR).collect();
    if parts
        .iter()
        .any(|part| part.is_empty() || *part == "." || *part == "..")
    {
        return Err(Error::invalid_name(path));
    }
    Ok(parts)
}

/// Splits a path into its parent segments and final member name.
///
/// # Errors
///
/// Same as [`segments`].
pub fn split(path: &str) -> Result<(Vec<&str>, &str)> {
    let mut parts = segments(path)?;
    // segments() never returns an empty vector
    let leaf = parts.pop().ok_or_else(|| Error::invalid_name(path))?;
    Ok((parts, leaf))
}

/// Joins segments back into a path.
#[must_use]
pub fn join(segments: &[&str]) -> String {
    segments.join("/")
}

/// Appends a member name to a prefix path.
#[must_use]
pub fn child(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}{SEPARATOR}{name}")
    }
}
