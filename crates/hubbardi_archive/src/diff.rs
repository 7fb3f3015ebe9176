//! Structural comparison of two archives.
//!
//! Reports every member present on only one side, every member whose node
//! kind differs, and every attribute or dataset whose value differs. Floats
//! compare within an absolute tolerance.

use std::fmt;
use std::path::Path;

use hubbardi_foundation::{Result, Scalar};

use crate::archive::Archive;
use crate::group::{Group, Node};
use crate::mode::FileMode;
use crate::path;

/// One difference between two archives.
#[derive(Clone, Debug, PartialEq)]
pub enum Difference {
    /// Member exists only in the left archive.
    OnlyInLeft(String),
    /// Member exists only in the right archive.
    OnlyInRight(String),
    /// Member is a group on one side and a dataset on the other.
    KindMismatch {
        /// Member path.
        path: String,
        /// Node kind on the left.
        left: &'static str,
        /// Node kind on the right.
        right: &'static str,
    },
    /// Dataset values differ.
    ValueMismatch {
        /// Member path.
        path: String,
        /// Value on the left.
        left: Scalar,
        /// Value on the right.
        right: Scalar,
    },
    /// Group attribute differs or is missing on one side.
    AttributeMismatch {
        /// Group path.
        path: String,
        /// Attribute name.
        name: String,
        /// Value on the left, if present.
        left: Option<Scalar>,
        /// Value on the right, if present.
        right: Option<Scalar>,
    },
}

impl Difference {
    /// Returns the member path this difference refers to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::OnlyInLeft(p) | Self::OnlyInRight(p) => p,
            Self::KindMismatch { path, .. }
            | Self::ValueMismatch { path, .. }
            | Self::AttributeMismatch { path, .. } => path,
        }
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}

fn display_attr(value: Option<&Scalar>) -> String {
    value.map_or_else(|| "<missing>".to_string(), ToString::to_string)
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnlyInLeft(p) => write!(f, "{}: only in left", display_path(p)),
            Self::OnlyInRight(p) => write!(f, "{}: only in right", display_path(p)),
            Self::KindMismatch { path, left, right } => {
                write!(f, "{}: {left} vs {right}", display_path(path))
            }
            Self::ValueMismatch { path, left, right } => {
                write!(f, "{}: {left} vs {right}", display_path(path))
            }
            Self::AttributeMismatch {
                path,
                name,
                left,
                right,
            } => write!(
                f,
                "{}@{name}: {} vs {}",
                display_path(path),
                display_attr(left.as_ref()),
                display_attr(right.as_ref())
            ),
        }
    }
}

/// Compares two group trees.
#[must_use]
pub fn diff(left: &Group, right: &Group, tolerance: f64) -> Vec<Difference> {
    let mut out = Vec::new();
    diff_group("", left, right, tolerance, &mut out);
    out
}

/// Compares two archive files, opening both read-only.
///
/// # Errors
///
/// Returns an error if either file cannot be opened.
pub fn diff_files<P: AsRef<Path>, Q: AsRef<Path>>(
    left: P,
    right: Q,
    tolerance: f64,
) -> Result<Vec<Difference>> {
    let left = Archive::open(left, FileMode::ReadOnly)?;
    let right = Archive::open(right, FileMode::ReadOnly)?;
    let differences = diff(left.root(), right.root(), tolerance);
    log::debug!(
        "{} differences between {} and {}",
        differences.len(),
        left.path().display(),
        right.path().display()
    );
    Ok(differences)
}

fn diff_group(prefix: &str, left: &Group, right: &Group, tolerance: f64, out: &mut Vec<Difference>) {
    for (name, value) in left.attributes() {
        match right.attribute(name) {
            Some(other) if value.is_close(other, tolerance) => {}
            other => out.push(Difference::AttributeMismatch {
                path: prefix.to_string(),
                name: name.to_string(),
                left: Some(value.clone()),
                right: other.cloned(),
            }),
        }
    }
    for (name, value) in right.attributes() {
        if left.attribute(name).is_none() {
            out.push(Difference::AttributeMismatch {
                path: prefix.to_string(),
                name: name.to_string(),
                left: None,
                right: Some(value.clone()),
            });
        }
    }

    for (name, node) in left.members() {
        let member = path::child(prefix, name);
        match (node, right.member(name)) {
            (_, None) => out.push(Difference::OnlyInLeft(member)),
            (Node::Group(l), Some(Node::Group(r))) => diff_group(&member, l, r, tolerance, out),
            (Node::Dataset(l), Some(Node::Dataset(r))) => {
                if !l.is_close(r, tolerance) {
                    out.push(Difference::ValueMismatch {
                        path: member,
                        left: l.clone(),
                        right: r.clone(),
                    });
                }
            }
            (l, Some(r)) => out.push(Difference::KindMismatch {
                path: member,
                left: l.kind_name(),
                right: r.kind_name(),
            }),
        }
    }
    for name in right.keys() {
        if left.member(name).is_none() {
            out.push(Difference::OnlyInRight(path::child(prefix, name)));
        }
    }
}
