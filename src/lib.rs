//! hubbardi - Toy value type and scoped container-file persistence
//!
//! This crate re-exports all layers of hubbardi for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: hubbardi_archive     — Container files, groups, persistence, diff
//! Layer 0: hubbardi_foundation  — Core types (Toto, Scalar, Error)
//! ```

pub use hubbardi_archive as archive;
pub use hubbardi_foundation as foundation;

pub use hubbardi_archive::{Archive, ArchiveConfig, FileMode, Persist};
pub use hubbardi_foundation::{Error, ErrorKind, Result, Toto};
