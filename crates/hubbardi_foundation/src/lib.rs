//! Core value type, scalar datasets, and errors for hubbardi.
//!
//! This crate provides:
//! - [`Toto`] - The toy value type wrapping one integer
//! - [`Scalar`] - Primitive payloads stored as datasets and attributes
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod scalar;
pub mod toto;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use scalar::{Scalar, ScalarKind};
pub use toto::Toto;
