//! Integration tests for Layer 1: Archive
//!
//! Tests for container files: modes, persistence, errors, and diffing.

#[path = "../common/mod.rs"]
mod common;
mod diffing;
mod persistence;
