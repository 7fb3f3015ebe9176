//! The toy value type wrapping a single integer.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value object holding one integer.
///
/// Two instances are equal exactly when their integers are equal. Addition
/// returns a new instance holding the sum; operands are never mutated.
///
/// `Toto::default()` holds zero and serves as the landing spot for values
/// populated from an archive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Toto {
    i: i64,
}

impl Toto {
    /// Creates a value holding `i`.
    #[must_use]
    pub const fn new(i: i64) -> Self {
        Self { i }
    }

    /// Returns the wrapped integer.
    #[must_use]
    pub const fn i(self) -> i64 {
        self.i
    }

    /// Adds two values, returning `None` if the integer sum overflows.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.i.checked_add(rhs.i) {
            Some(i) => Some(Self { i }),
            None => None,
        }
    }
}

/// Integer sum of the wrapped fields. Overflow wraps.
impl Add for Toto {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            i: self.i.wrapping_add(rhs.i),
        }
    }
}

impl AddAssign for Toto {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Toto {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a Toto> for Toto {
    fn sum<I: Iterator<Item = &'a Toto>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<i64> for Toto {
    fn from(i: i64) -> Self {
        Self::new(i)
    }
}

impl From<i32> for Toto {
    fn from(i: i32) -> Self {
        Self::new(i64::from(i))
    }
}

impl From<Toto> for i64 {
    fn from(t: Toto) -> Self {
        t.i
    }
}

impl fmt::Display for Toto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Toto({})", self.i)
    }
}
