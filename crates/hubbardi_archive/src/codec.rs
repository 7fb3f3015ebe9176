//! Archive image encoding using `MessagePack`.
//!
//! A file holds one image: a magic string, a format version, and the root
//! group. Images are written with named fields so the layout stays
//! self-describing.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use hubbardi_foundation::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::group::Group;

/// Magic string at the start of every image.
pub const MAGIC: &str = "HBDA";

/// Newest image version this crate writes and reads.
pub const VERSION: u32 = 1;

#[derive(Serialize)]
struct ImageRef<'a> {
    magic: &'a str,
    version: u32,
    root: &'a Group,
}

#[derive(Deserialize)]
struct Image {
    magic: String,
    version: u32,
    root: Group,
}

/// Encodes a root group into image bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(root: &Group) -> Result<Vec<u8>> {
    let image = ImageRef {
        magic: MAGIC,
        version: VERSION,
        root,
    };
    rmp_serde::to_vec_named(&image).map_err(|e| Error::serialization(e.to_string()))
}

/// Decodes image bytes into the root group.
///
/// # Errors
///
/// Returns `FormatMismatch` if the bytes are not an image, carry the wrong
/// magic, or were written by a newer version.
pub fn from_bytes(bytes: &[u8]) -> Result<Group> {
    let image: Image = rmp_serde::from_slice(bytes).map_err(|e| {
        Error::format_mismatch("archive image", format!("undecodable data ({e})"))
    })?;
    if image.magic != MAGIC {
        return Err(Error::format_mismatch(
            format!("magic {MAGIC}"),
            format!("magic {}", image.magic),
        ));
    }
    if image.version > VERSION {
        return Err(Error::format_mismatch(
            format!("version <= {VERSION}"),
            format!("version {}", image.version),
        ));
    }
    Ok(image.root)
}

/// Saves a root group to a file, creating or overwriting it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(root: &Group, path: P, sync: bool) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(root)?;

    let file = File::create(path).map_err(|e| {
        Error::io(format!("failed to create file '{}': {e}", path.display()))
    })?;

    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(|e| {
        Error::io(format!("failed to write to file '{}': {e}", path.display()))
    })?;

    writer.flush().map_err(|e| {
        Error::io(format!("failed to flush file '{}': {e}", path.display()))
    })?;

    if sync {
        writer.get_ref().sync_all().map_err(|e| {
            Error::io(format!("failed to sync file '{}': {e}", path.display()))
        })?;
    }

    log::trace!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Loads a root group from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if decoding fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Group> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::io(format!("failed to open file '{}': {e}", path.display()))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::io(format!("failed to read file '{}': {e}", path.display()))
    })?;

    log::trace!("read {} bytes from {}", bytes.len(), path.display());
    from_bytes(&bytes).map_err(|e| e.in_file(path))
}
