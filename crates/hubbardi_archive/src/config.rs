//! Configuration for archive handles.

/// Configuration for an [`Archive`](crate::Archive) handle.
///
/// Controls when the in-memory image is written back to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// Flush pending changes when the handle is dropped without `close`.
    pub flush_on_drop: bool,

    /// Call `fsync` after every flush.
    pub sync_on_flush: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            flush_on_drop: true,
            sync_on_flush: false,
        }
    }
}

impl ArchiveConfig {
    /// Creates a configuration that syncs every flush to stable storage.
    #[must_use]
    pub fn durable() -> Self {
        Self {
            sync_on_flush: true,
            ..Self::default()
        }
    }

    /// Builder method to set drop-time flushing.
    #[must_use]
    pub fn with_flush_on_drop(mut self, flush: bool) -> Self {
        self.flush_on_drop = flush;
        self
    }

    /// Builder method to set fsync after flush.
    #[must_use]
    pub fn with_sync_on_flush(mut self, sync: bool) -> Self {
        self.sync_on_flush = sync;
        self
    }
}
