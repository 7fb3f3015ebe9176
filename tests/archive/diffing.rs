//! Integration tests for archive comparison
//!
//! Tests diffing two files written independently.

use hubbardi_archive::{Archive, Difference, FileMode, diff_files};
use hubbardi_foundation::{Scalar, Toto};

use crate::common::TempFile;

fn write_archive(file: &TempFile, toto: i64, beta: f64) {
    let mut f = Archive::open(file.path(), FileMode::Truncate).unwrap();
    f.write("a", &Toto::new(toto)).unwrap();
    f.write("beta", &beta).unwrap();
    f.close().unwrap();
}

#[test]
fn same_content_has_no_differences() {
    let left = TempFile::new("diff_l");
    let right = TempFile::new("diff_r");
    write_archive(&left, 0, 50.0);
    write_archive(&right, 0, 50.0);

    assert!(diff_files(left.path(), right.path(), 0.0).unwrap().is_empty());
}

#[test]
fn changed_values_are_reported() {
    let left = TempFile::new("diff_l");
    let right = TempFile::new("diff_r");
    write_archive(&left, 0, 50.0);
    write_archive(&right, 2, 50.0 + 1e-9);

    let d = diff_files(left.path(), right.path(), 1e-6).unwrap();
    assert_eq!(
        d,
        vec![Difference::ValueMismatch {
            path: "a/i".to_string(),
            left: Scalar::Int(0),
            right: Scalar::Int(2),
        }]
    );
}

#[test]
fn diff_of_missing_file_fails() {
    let left = TempFile::new("diff_l");
    let missing = TempFile::new("diff_missing");
    write_archive(&left, 0, 50.0);

    assert!(diff_files(left.path(), missing.path(), 0.0).is_err());
}
