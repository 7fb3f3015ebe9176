//! Integration tests for typed persistence
//!
//! Tests round-trips, nested paths, and the error kinds surfaced by reads.

use hubbardi_archive::{Archive, FileMode, Group, Persist};
use hubbardi_foundation::{ErrorKind, Scalar, Toto};
use proptest::prelude::*;

use crate::common::TempFile;

// =============================================================================
// Round-trips
// =============================================================================

#[test]
fn toto_round_trip_through_file() {
    let file = TempFile::new("toto");
    let a = Toto::new(0);

    let mut f = Archive::open(file.path(), FileMode::Truncate).unwrap();
    f.write("a", &a).unwrap();
    f.close().unwrap();

    let f = Archive::open(file.path(), FileMode::ReadWrite).unwrap();
    let mut a2 = Toto::default();
    f.read_into("a", &mut a2).unwrap();
    assert_eq!(a, a2);
}

#[test]
fn nested_paths_round_trip() {
    let file = TempFile::new("nested");

    let mut f = Archive::open(file.path(), FileMode::Truncate).unwrap();
    f.write("Solver/beta", &50.0).unwrap();
    f.write("Solver/n_iw", &1025i64).unwrap();
    f.write("Solver/block", &"up".to_string()).unwrap();
    f.write("Solver/calc_gw", &false).unwrap();
    f.write("Solver/toto", &Toto::new(4)).unwrap();
    f.close().unwrap();

    let f = Archive::open(file.path(), FileMode::ReadOnly).unwrap();
    assert!((f.read::<f64>("Solver/beta").unwrap() - 50.0).abs() < f64::EPSILON);
    assert_eq!(f.read::<i64>("Solver/n_iw").unwrap(), 1025);
    assert_eq!(f.read::<String>("Solver/block").unwrap(), "up");
    assert!(!f.read::<bool>("Solver/calc_gw").unwrap());
    assert_eq!(f.read::<Toto>("Solver/toto").unwrap(), Toto::new(4));
    assert_eq!(f.read::<Scalar>("Solver/n_iw").unwrap(), Scalar::Int(1025));
}

#[test]
fn overwriting_a_key_replaces_it() {
    let file = TempFile::new("overwrite");
    let mut f = Archive::open(file.path(), FileMode::Truncate).unwrap();
    f.write("a", &Toto::new(1)).unwrap();
    f.write("a", &Toto::new(2)).unwrap();
    assert_eq!(f.read::<Toto>("a").unwrap(), Toto::new(2));
}

// =============================================================================
// Error kinds
// =============================================================================

#[test]
fn never_written_key_is_not_found() {
    let file = TempFile::new("absent");
    let mut f = Archive::open(file.path(), FileMode::Truncate).unwrap();
    f.write("a", &Toto::new(0)).unwrap();
    f.close().unwrap();

    let f = Archive::open(file.path(), FileMode::ReadWrite).unwrap();
    let mut target = Toto::new(11);
    let err = f.read_into("b", &mut target).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotFound { ref path } if path == "b"));
    assert_eq!(target, Toto::new(11));
}

#[test]
fn wrong_shape_is_format_mismatch() {
    let file = TempFile::new("shape");
    let mut f = Archive::open(file.path(), FileMode::Truncate).unwrap();
    f.write("n", &3i64).unwrap();
    f.write("t", &Toto::new(3)).unwrap();

    assert!(f.read::<Toto>("n").unwrap_err().is_format_mismatch());
    assert!(f.read::<i64>("t").unwrap_err().is_format_mismatch());
    assert!(f.read::<String>("n").unwrap_err().is_format_mismatch());
}

#[test]
fn invalid_names_are_rejected() {
    let file = TempFile::new("names");
    let mut f = Archive::open(file.path(), FileMode::Truncate).unwrap();
    for name in ["", "/", "a//b", "a/"] {
        let err = f.write(name, &Toto::new(0)).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidName(_)), "{name:?}");
    }
    assert!(f.root().is_empty());
}

#[test]
fn custom_composite_type_uses_format_tag() {
    use hubbardi_archive::Format;
    use hubbardi_archive::persist::{create_tagged, open_tagged};

    #[derive(Debug, PartialEq)]
    struct Params {
        beta: f64,
        n_iw: i64,
    }

    impl Format for Params {
        const FORMAT: &'static str = "Params";
    }

    impl Persist for Params {
        fn write_to(&self, group: &mut Group, name: &str) -> hubbardi_foundation::Result<()> {
            let g = create_tagged::<Self>(group, name)?;
            self.beta.write_to(g, "beta")?;
            self.n_iw.write_to(g, "n_iw")
        }

        fn read_from(group: &Group, name: &str) -> hubbardi_foundation::Result<Self> {
            let g = open_tagged::<Self>(group, name)?;
            Ok(Self {
                beta: f64::read_from(g, "beta")?,
                n_iw: i64::read_from(g, "n_iw")?,
            })
        }
    }

    let file = TempFile::new("composite");
    let params = Params {
        beta: 50.0,
        n_iw: 20,
    };
    let mut f = Archive::open(file.path(), FileMode::Truncate).unwrap();
    f.write("params", &params).unwrap();
    f.write("toto", &Toto::new(1)).unwrap();
    f.close().unwrap();

    let f = Archive::open(file.path(), FileMode::ReadOnly).unwrap();
    assert_eq!(f.read::<Params>("params").unwrap(), params);
    assert!(f.read::<Params>("toto").unwrap_err().is_format_mismatch());
    assert!(f.read::<Toto>("params").unwrap_err().is_format_mismatch());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_toto_round_trips(i in any::<i64>()) {
        let file = TempFile::new("prop");
        let mut f = Archive::open(file.path(), FileMode::Truncate).unwrap();
        f.write("a", &Toto::new(i)).unwrap();
        f.close().unwrap();

        let f = Archive::open(file.path(), FileMode::ReadWrite).unwrap();
        prop_assert_eq!(f.read::<Toto>("a").unwrap(), Toto::new(i));
    }
}
