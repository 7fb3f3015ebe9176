//! Truncate-mode isolation across handles.

use hubbardi::archive::diff_files;
use hubbardi::{Archive, FileMode, Toto};

use crate::common::TempFile;

#[test]
fn only_value_written_after_truncate_is_readable() {
    let file = TempFile::new("truncation_xy");

    {
        let mut f = Archive::open(file.path(), FileMode::Truncate).unwrap();
        f.write("a", &Toto::new(1)).unwrap();
    }
    {
        let mut f = Archive::open(file.path(), FileMode::Truncate).unwrap();
        f.write("a", &Toto::new(2)).unwrap();
    }

    let f = Archive::open(file.path(), FileMode::ReadWrite).unwrap();
    assert_eq!(f.read::<Toto>("a").unwrap(), Toto::new(2));
    assert_eq!(f.keys().count(), 1);
}

#[test]
fn truncated_file_matches_fresh_file() {
    let reused = TempFile::new("truncation_reused");
    let fresh = TempFile::new("truncation_fresh");

    {
        let mut f = Archive::open(reused.path(), FileMode::Truncate).unwrap();
        f.write("stale", &Toto::new(5)).unwrap();
    }
    for path in [reused.path(), fresh.path()] {
        let mut f = Archive::open(path, FileMode::Truncate).unwrap();
        f.write("a", &Toto::new(0)).unwrap();
        f.close().unwrap();
    }

    assert!(diff_files(reused.path(), fresh.path(), 0.0).unwrap().is_empty());
}
