//! Reading and writing typed values inside a group.
//!
//! Primitive values are stored as scalar datasets. Composite values are
//! stored as a subgroup tagged with a `Format` attribute naming the type,
//! and reading such a group back checks the tag before touching its
//! members.

use hubbardi_foundation::{Error, Result, Scalar, ScalarKind, Toto};

use crate::group::Group;

/// A value that can be written to and read from a group under a name.
pub trait Persist: Sized {
    /// Stores `self` at `name` inside `group`, replacing any existing member.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for a malformed name, or `FormatMismatch` if
    /// the path runs through a dataset.
    fn write_to(&self, group: &mut Group, name: &str) -> Result<()>;

    /// Reconstructs a value stored at `name` inside `group`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing is stored at `name`, and
    /// `FormatMismatch` if the stored node does not have this type's shape.
    fn read_from(group: &Group, name: &str) -> Result<Self>;
}

/// A composite type stored as a tagged group.
pub trait Format {
    /// Type name written to the group's `Format` attribute.
    const FORMAT: &'static str;
}

/// Creates the group for a composite value and tags it.
///
/// # Errors
///
/// Same as [`Group::create_group`].
pub fn create_tagged<'g, T: Format>(group: &'g mut Group, name: &str) -> Result<&'g mut Group> {
    let tagged = group.create_group(name)?;
    tagged.set_format(T::FORMAT);
    Ok(tagged)
}

/// Opens the group for a composite value and checks its tag.
///
/// # Errors
///
/// Returns `NotFound` if `name` is absent and `FormatMismatch` if it is a
/// dataset or carries a different `Format` tag.
pub fn open_tagged<'g, T: Format>(group: &'g Group, name: &str) -> Result<&'g Group> {
    let tagged = group.group(name)?;
    match tagged.format() {
        Some(format) if format == T::FORMAT => Ok(tagged),
        Some(format) => Err(Error::format_mismatch(
            format!("format {}", T::FORMAT),
            format!("format {format}"),
        )),
        None => Err(Error::format_mismatch(
            format!("format {}", T::FORMAT),
            "untagged group",
        )),
    }
}

/// Reads a required dataset member of a composite value.
///
/// A missing member means the stored group does not match the type, so
/// `NotFound` becomes `FormatMismatch` here.
fn read_member<T: Format>(group: &Group, name: &str) -> Result<i64> {
    i64::read_from(group, name).map_err(|e| {
        if e.is_not_found() {
            Error::format_mismatch(
                format!("{} with member {name}", T::FORMAT),
                format!("group without {name}"),
            )
        } else {
            e
        }
    })
}

fn read_scalar<T>(
    group: &Group,
    name: &str,
    kind: ScalarKind,
    extract: impl FnOnce(&Scalar) -> Option<T>,
) -> Result<T> {
    let scalar = group.dataset(name)?;
    extract(scalar).ok_or_else(|| {
        Error::format_mismatch(format!("{kind} dataset"), format!("{} dataset", scalar.kind()))
    })
}

impl Persist for i64 {
    fn write_to(&self, group: &mut Group, name: &str) -> Result<()> {
        group.put_dataset(name, *self)
    }

    fn read_from(group: &Group, name: &str) -> Result<Self> {
        read_scalar(group, name, ScalarKind::Int, Scalar::as_int)
    }
}

impl Persist for f64 {
    fn write_to(&self, group: &mut Group, name: &str) -> Result<()> {
        group.put_dataset(name, *self)
    }

    fn read_from(group: &Group, name: &str) -> Result<Self> {
        read_scalar(group, name, ScalarKind::Float, Scalar::as_float)
    }
}

impl Persist for bool {
    fn write_to(&self, group: &mut Group, name: &str) -> Result<()> {
        group.put_dataset(name, *self)
    }

    fn read_from(group: &Group, name: &str) -> Result<Self> {
        read_scalar(group, name, ScalarKind::Bool, Scalar::as_bool)
    }
}

impl Persist for String {
    fn write_to(&self, group: &mut Group, name: &str) -> Result<()> {
        group.put_dataset(name, self.as_str())
    }

    fn read_from(group: &Group, name: &str) -> Result<Self> {
        read_scalar(group, name, ScalarKind::Str, |s| s.as_str().map(str::to_string))
    }
}

impl Persist for Scalar {
    fn write_to(&self, group: &mut Group, name: &str) -> Result<()> {
        group.put_dataset(name, self.clone())
    }

    fn read_from(group: &Group, name: &str) -> Result<Self> {
        group.dataset(name).cloned()
    }
}

impl Format for Toto {
    const FORMAT: &'static str = "Toto";
}

impl Persist for Toto {
    fn write_to(&self, group: &mut Group, name: &str) -> Result<()> {
        let tagged = create_tagged::<Self>(group, name)?;
        self.i().write_to(tagged, "i")
    }

    fn read_from(group: &Group, name: &str) -> Result<Self> {
        let tagged = open_tagged::<Self>(group, name)?;
        Ok(Toto::new(read_member::<Self>(tagged, "i")?))
    }
}
