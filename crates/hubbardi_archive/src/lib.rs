//! Scoped container files, groups, datasets, and persistence for hubbardi.
//!
//! This crate provides:
//! - [`Archive`] - A scoped handle on one container file
//! - [`Group`] / [`Node`] - The in-memory container tree
//! - [`Persist`] - Reading and writing typed values under a name
//! - [`diff()`] - Structural comparison of two archives
//!
//! # Example
//!
//! ```no_run
//! use hubbardi_archive::{Archive, FileMode};
//! use hubbardi_foundation::Toto;
//!
//! # fn main() -> hubbardi_foundation::Result<()> {
//! let mut f = Archive::open("f.h5", FileMode::Truncate)?;
//! f.write("a", &Toto::new(0))?;
//! f.close()?;
//!
//! let f = Archive::open("f.h5", FileMode::ReadWrite)?;
//! let a: Toto = f.read("a")?;
//! assert_eq!(a, Toto::new(0));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod archive;
pub mod codec;
pub mod config;
pub mod diff;
pub mod group;
pub mod mode;
pub mod path;
pub mod persist;

pub use archive::Archive;
pub use config::ArchiveConfig;
pub use diff::{Difference, diff, diff_files};
pub use group::{FORMAT_ATTRIBUTE, Group, Node};
pub use mode::FileMode;
pub use persist::{Format, Persist};
