//! Scoped handles on archive files.
//!
//! An [`Archive`] loads the whole image into memory on open and writes it
//! back on [`Archive::flush`], [`Archive::close`], or when the handle is
//! dropped. A handle must be released before another one opens the same
//! path; no locking is performed.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use hubbardi_foundation::{Error, ErrorContext, Result};

use crate::codec;
use crate::config::ArchiveConfig;
use crate::group::Group;
use crate::mode::FileMode;
use crate::persist::Persist;

/// An open archive file.
#[derive(Debug)]
pub struct Archive {
    path: PathBuf,
    mode: FileMode,
    config: ArchiveConfig,
    root: Group,
    dirty: bool,
    open: bool,
}

impl Archive {
    /// Opens an archive with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`Archive::open_with`].
    pub fn open<P: AsRef<Path>>(path: P, mode: FileMode) -> Result<Self> {
        Self::open_with(path, mode, ArchiveConfig::default())
    }

    /// Opens an archive.
    ///
    /// `Truncate`, `CreateNew`, and `Append` on a missing file write an
    /// empty image immediately, so the file exists once this returns.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be created, is missing in
    /// `ReadWrite`/`ReadOnly` mode, or already exists in `CreateNew` mode.
    /// Returns `FormatMismatch` if an existing file is not an archive.
    pub fn open_with<P: AsRef<Path>>(path: P, mode: FileMode, config: ArchiveConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let (root, fresh) = match mode {
            FileMode::Truncate => (Group::new(), true),
            FileMode::CreateNew => {
                OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&path)
                    .map_err(|e| {
                        Error::io(format!("failed to create file '{}': {e}", path.display()))
                    })?;
                (Group::new(), true)
            }
            FileMode::ReadWrite | FileMode::ReadOnly => (codec::load_from_file(&path)?, false),
            FileMode::Append => {
                if path.exists() {
                    (codec::load_from_file(&path)?, false)
                } else {
                    (Group::new(), true)
                }
            }
        };

        let mut archive = Self {
            path,
            mode,
            config,
            root,
            dirty: fresh,
            open: true,
        };
        if fresh {
            if let Err(e) = archive.flush() {
                archive.open = false;
                return Err(e);
            }
        }
        log::debug!("opened archive {} (mode {mode})", archive.path.display());
        Ok(archive)
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the mode the file was opened in.
    #[must_use]
    pub fn mode(&self) -> FileMode {
        self.mode
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Returns true if there are changes not yet written to disk.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the root group.
    #[must_use]
    pub fn root(&self) -> &Group {
        &self.root
    }

    /// Returns the root group for direct editing and marks the archive dirty.
    ///
    /// # Errors
    ///
    /// Returns `ReadOnly` if the handle is not writable.
    pub fn root_mut(&mut self) -> Result<&mut Group> {
        self.ensure_writable("/")?;
        self.dirty = true;
        Ok(&mut self.root)
    }

    /// Stores `value` under `name`, replacing any existing member.
    ///
    /// # Errors
    ///
    /// Returns `ReadOnly` for a read-only handle, plus any error from
    /// [`Persist::write_to`].
    pub fn write<T: Persist>(&mut self, name: &str, value: &T) -> Result<()> {
        self.ensure_writable(name)?;
        value
            .write_to(&mut self.root, name)
            .map_err(|e| self.locate(e, name))?;
        self.dirty = true;
        log::trace!("wrote {name} to {}", self.path.display());
        Ok(())
    }

    /// Reads the value stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `name` is absent and `FormatMismatch` if the
    /// stored data does not match `T`.
    pub fn read<T: Persist>(&self, name: &str) -> Result<T> {
        let value = T::read_from(&self.root, name).map_err(|e| self.locate(e, name))?;
        log::trace!("read {name} from {}", self.path.display());
        Ok(value)
    }

    /// Reads the value stored under `name` into an existing target.
    ///
    /// The target is left untouched if the read fails.
    ///
    /// # Errors
    ///
    /// Same as [`Archive::read`].
    pub fn read_into<T: Persist>(&self, name: &str, target: &mut T) -> Result<()> {
        *target = self.read(name)?;
        Ok(())
    }

    /// Returns true if a member exists at `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.root.contains(name)
    }

    /// Iterates over top-level member names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys()
    }

    /// Removes the member at `name`.
    ///
    /// # Errors
    ///
    /// Returns `ReadOnly` for a read-only handle and `NotFound` if nothing
    /// is stored at `name`.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        self.ensure_writable(name)?;
        self.root.remove(name).map_err(|e| self.locate(e, name))?;
        self.dirty = true;
        Ok(())
    }

    /// Writes pending changes to disk.
    ///
    /// Does nothing for read-only handles or when nothing changed.
    ///
    /// # Errors
    ///
    /// Returns `Io` or `Serialization` if the image cannot be written.
    pub fn flush(&mut self) -> Result<()> {
        if !self.mode.is_writable() || !self.dirty {
            return Ok(());
        }
        codec::save_to_file(&self.root, &self.path, self.config.sync_on_flush)?;
        self.dirty = false;
        log::debug!("flushed archive {}", self.path.display());
        Ok(())
    }

    /// Flushes and releases the handle.
    ///
    /// # Errors
    ///
    /// Same as [`Archive::flush`]. The handle is released either way.
    pub fn close(mut self) -> Result<()> {
        let result = self.flush();
        self.open = false;
        log::debug!("closed archive {}", self.path.display());
        result
    }

    fn ensure_writable(&self, name: &str) -> Result<()> {
        if self.mode.is_writable() {
            Ok(())
        } else {
            Err(self.locate(Error::read_only(name), name))
        }
    }

    fn locate(&self, err: Error, name: &str) -> Error {
        if err.context.is_some() {
            return err.in_file(&self.path);
        }
        err.with_context(ErrorContext::new().with_file(&self.path).with_member(name))
    }
}

impl Drop for Archive {
    fn drop(&mut self) {
        if !self.open {
            return;
        }
        if self.dirty {
            if self.config.flush_on_drop {
                if let Err(e) = self.flush() {
                    log::error!("failed to flush archive {} on drop: {e}", self.path.display());
                }
            } else {
                log::warn!(
                    "discarding unflushed changes to archive {}",
                    self.path.display()
                );
            }
        }
        log::debug!("released archive {}", self.path.display());
    }
}
