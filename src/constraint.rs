//! The constraint on the primitive values that a [`Finite`] may represent.
//!
//! [`Finite`]: crate::Finite

#[cfg(not(feature = "std"))]
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "std")]
use thiserror::Error;

use crate::primitive::Primitive;

pub(crate) trait Description {
    const DESCRIPTION: &'static str;
}

/// Error returned when narrowing a value that is `NaN`, `+INF`, or `-INF` into a [`Finite`].
///
/// [`Finite`]: crate::Finite
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(feature = "std", error("{}", NotFiniteError::DESCRIPTION))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NotFiniteError;

impl Description for NotFiniteError {
    const DESCRIPTION: &'static str = "value must be a real number";
}

#[cfg(not(feature = "std"))]
impl Display for NotFiniteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", NotFiniteError::DESCRIPTION)
    }
}

/// Disallows IEEE 754 `NaN`, `+INF`, and `-INF` values.
pub(crate) enum IsReal {}

impl IsReal {
    pub fn check<T>(inner: T) -> Result<(), NotFiniteError>
    where
        T: Primitive,
    {
        if inner.is_nan() || inner.is_infinite() {
            Err(NotFiniteError)
        }
        else {
            Ok(())
        }
    }
}
