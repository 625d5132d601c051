//! Unary functions shared by every transreal representation.

use core::ops::Neg;

use crate::primitive::Primitive;
use crate::sign::Sign;
use crate::transreal::Transreal;

/// Unary operations over transreal representations.
///
/// This trait is implemented by [`Finite`], [`Nonfinite`], and [`Transreal`]. Binary operations
/// are only defined over the closed [`Transreal`] type; see the [`arithmetic`] module.
///
/// Negation is closed over each representation, but reciprocals are not: the reciprocal of a
/// finite value may be infinite and the reciprocal of an infinity is finite, so reciprocals always
/// output a [`Transreal`].
///
/// [`arithmetic`]: crate::arithmetic
/// [`Finite`]: crate::Finite
/// [`Nonfinite`]: crate::Nonfinite
/// [`Transreal`]: crate::Transreal
pub trait UnaryTransrealFunction<T>: Copy + Neg<Output = Self> + Sized
where
    T: Primitive,
{
    fn sign(self) -> Sign;

    /// Returns `true` if the value is strictly positive. Zero and nullity are neither positive nor
    /// negative.
    fn is_positive(self) -> bool {
        self.sign().is_non_zero_positive()
    }

    /// Returns `true` if the value is strictly negative. Zero and nullity are neither positive nor
    /// negative.
    fn is_negative(self) -> bool {
        self.sign().is_non_zero_negative()
    }

    /// $\frac{1}{x}$
    fn recip(self) -> Transreal<T>;

    /// $-\frac{1}{x}$
    fn anti_recip(self) -> Transreal<T>;
}
