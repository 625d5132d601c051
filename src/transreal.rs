#[cfg(feature = "approx")]
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::hash::{Hash, Hasher};
use core::iter::{Product, Sum};
use core::mem;
use core::num::FpCategory;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::arithmetic;
use crate::constraint::NotFiniteError;
use crate::finite::Finite;
use crate::function::UnaryTransrealFunction;
use crate::nonfinite::Nonfinite;
use crate::primitive::Primitive;
use crate::sign::Sign;

/// A transreal number: a real number, $-\infin$, $+\infin$, or $\Phi$ (nullity).
///
/// `Transreal` is the closed value type of this crate. Addition, subtraction, multiplication,
/// division, negation, and reciprocals are total: every operation on every `Transreal` outputs
/// another `Transreal` and never panics.
///
/// Transreal values are constructed from primitive floating-point values by classification (see
/// [`Transreal::new`]), which maps `NaN` to $\Phi$ and IEEE infinities to transreal infinities.
/// Arithmetic over finite values uses IEEE 754 arithmetic and is classified in the same way, so a
/// finite result that overflows is promoted to an infinity.
///
/// Unlike `NaN`, nullity is equal to itself. Equivalence is otherwise IEEE 754 equivalence, so
/// `+0.0` and `-0.0` are equal. `Transreal` implements [`Eq`] and [`Hash`].
///
/// # Examples
///
/// ```rust
/// use transreal::T64;
///
/// let x = T64::new(1.0);
/// assert_eq!(x / 0.0, T64::INFINITY);
/// assert_eq!(-x / 0.0, T64::NEG_INFINITY);
/// assert_eq!(T64::INFINITY * 0.0, T64::NULLITY);
/// assert_eq!(T64::INFINITY - T64::INFINITY, T64::NULLITY);
/// ```
///
/// [`Eq`]: core::cmp::Eq
/// [`Hash`]: core::hash::Hash
/// [`Transreal::new`]: crate::Transreal::new
#[derive(Clone, Copy, Debug)]
pub enum Transreal<T> {
    Finite(Finite<T>),
    Nonfinite(Nonfinite),
}

impl<T> Transreal<T>
where
    T: Primitive,
{
    pub const ZERO: Self = Transreal::Finite(Finite::ZERO);
    pub const ONE: Self = Transreal::Finite(Finite::ONE);
    pub const MAX_FINITE: Self = Transreal::Finite(Finite::MAX_FINITE);
    pub const MIN_FINITE: Self = Transreal::Finite(Finite::MIN_FINITE);
    pub const NULLITY: Self = Transreal::Nonfinite(Nonfinite::NULLITY);
    pub const INFINITY: Self = Transreal::Nonfinite(Nonfinite::INFINITY);
    pub const NEG_INFINITY: Self = Transreal::Nonfinite(Nonfinite::NEG_INFINITY);

    /// Classifies a primitive floating-point value as a transreal value.
    ///
    /// `NaN` (of any representation) is classified as nullity, IEEE infinities are classified as
    /// the corresponding transreal infinities, and all other values are finite. This never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transreal::T64;
    ///
    /// assert_eq!(T64::new(f64::NAN), T64::NULLITY);
    /// assert_eq!(T64::new(f64::NEG_INFINITY), T64::NEG_INFINITY);
    /// assert!(T64::new(2.0).is_finite());
    /// ```
    pub fn new(inner: T) -> Self {
        match inner.classify() {
            FpCategory::Nan => Transreal::NULLITY,
            FpCategory::Infinite => {
                if inner.is_sign_positive() {
                    Transreal::INFINITY
                }
                else {
                    Transreal::NEG_INFINITY
                }
            }
            _ => Transreal::Finite(Finite::unchecked(inner)),
        }
    }

    /// Constructs the nonfinite value identified by the given sign.
    pub const fn from_sign(sign: Sign) -> Self {
        Transreal::Nonfinite(Nonfinite::from_sign(sign))
    }

    /// Converts a transreal value into a primitive floating-point value.
    ///
    /// Nullity is converted to `NaN` and infinities are converted to IEEE infinities. This
    /// conversion is lossy: distinct primitive `NaN`s are not preserved through a round trip.
    pub fn into_primitive(self) -> T {
        match self {
            Transreal::Finite(finite) => finite.into_inner(),
            Transreal::Nonfinite(nonfinite) => match nonfinite.sign() {
                Sign::Negative => T::NEG_INFINITY,
                Sign::Zero => T::NAN,
                Sign::Positive => T::INFINITY,
            },
        }
    }

    pub fn finite(self) -> Option<Finite<T>> {
        match self {
            Transreal::Finite(finite) => Some(finite),
            _ => None,
        }
    }

    pub fn nonfinite(self) -> Option<Nonfinite> {
        match self {
            Transreal::Nonfinite(nonfinite) => Some(nonfinite),
            _ => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Transreal::Finite(_))
    }

    pub fn is_nonfinite(self) -> bool {
        matches!(self, Transreal::Nonfinite(_))
    }

    pub fn is_infinite(self) -> bool {
        self.nonfinite()
            .map_or(false, |nonfinite| nonfinite.is_infinite())
    }

    pub fn is_nullity(self) -> bool {
        self.nonfinite()
            .map_or(false, |nonfinite| nonfinite.is_nullity())
    }

    pub fn is_zero(self) -> bool {
        self.finite().map_or(false, |finite| finite.is_zero())
    }

    // It is burdensome and probably unexpected to need to import `UnaryTransrealFunction` to use
    // these functions, so the trait implementation forwards calls to these inherent functions.

    pub fn sign(self) -> Sign {
        match self {
            Transreal::Finite(finite) => finite.sign(),
            Transreal::Nonfinite(nonfinite) => nonfinite.sign(),
        }
    }

    pub fn is_positive(self) -> bool {
        self.sign().is_non_zero_positive()
    }

    pub fn is_negative(self) -> bool {
        self.sign().is_non_zero_negative()
    }

    /// $\frac{1}{x}$
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transreal::T64;
    ///
    /// assert_eq!(T64::ZERO.recip(), T64::INFINITY);
    /// assert_eq!(T64::INFINITY.recip(), T64::ZERO);
    /// assert_eq!(T64::NULLITY.recip(), T64::NULLITY);
    /// ```
    pub fn recip(self) -> Self {
        arithmetic::recip(self)
    }

    /// $-\frac{1}{x}$
    ///
    /// Note that the anti-reciprocal of a finite zero is $-\infin$, but the anti-reciprocal of
    /// either infinity is zero, the same as its reciprocal.
    pub fn anti_recip(self) -> Self {
        arithmetic::anti_recip(self)
    }
}

#[cfg(feature = "approx")]
impl<T> AbsDiffEq for Transreal<T>
where
    T: AbsDiffEq<Epsilon = T> + Primitive,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self, other) {
            (Transreal::Finite(left), Transreal::Finite(right)) => {
                left.abs_diff_eq(right, epsilon)
            }
            (Transreal::Nonfinite(left), Transreal::Nonfinite(right)) => left == right,
            _ => false,
        }
    }
}

impl<T> Eq for Transreal<T> where T: Primitive {}

impl<T> From<Finite<T>> for Transreal<T> {
    fn from(finite: Finite<T>) -> Self {
        Transreal::Finite(finite)
    }
}

impl<T> From<Nonfinite> for Transreal<T> {
    fn from(nonfinite: Nonfinite) -> Self {
        Transreal::Nonfinite(nonfinite)
    }
}

impl<T> From<T> for Transreal<T>
where
    T: Primitive,
{
    fn from(inner: T) -> Self {
        Transreal::new(inner)
    }
}

impl<T> Hash for Transreal<T>
where
    T: Primitive,
{
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        mem::discriminant(self).hash(state);
        match self {
            Transreal::Finite(finite) => finite.hash(state),
            Transreal::Nonfinite(nonfinite) => nonfinite.hash(state),
        }
    }
}

impl<T> Neg for Transreal<T>
where
    T: Primitive,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        arithmetic::neg(self)
    }
}

impl<T> PartialEq for Transreal<T>
where
    T: Primitive,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Transreal::Finite(left), Transreal::Finite(right)) => left == right,
            (Transreal::Nonfinite(left), Transreal::Nonfinite(right)) => left == right,
            _ => false,
        }
    }
}

impl<T> Product for Transreal<T>
where
    T: Primitive,
{
    fn product<I>(input: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        input.fold(Transreal::ONE, arithmetic::mul)
    }
}

#[cfg(feature = "approx")]
impl<T> RelativeEq for Transreal<T>
where
    T: Primitive + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        match (self, other) {
            (Transreal::Finite(left), Transreal::Finite(right)) => {
                left.relative_eq(right, epsilon, max_relative)
            }
            (Transreal::Nonfinite(left), Transreal::Nonfinite(right)) => left == right,
            _ => false,
        }
    }
}

impl<T> Sum for Transreal<T>
where
    T: Primitive,
{
    fn sum<I>(input: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        input.fold(Transreal::ZERO, arithmetic::add)
    }
}

#[cfg(feature = "approx")]
impl<T> UlpsEq for Transreal<T>
where
    T: Primitive + UlpsEq<Epsilon = T>,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        match (self, other) {
            (Transreal::Finite(left), Transreal::Finite(right)) => {
                left.ulps_eq(right, epsilon, max_ulps)
            }
            (Transreal::Nonfinite(left), Transreal::Nonfinite(right)) => left == right,
            _ => false,
        }
    }
}

impl<T> UnaryTransrealFunction<T> for Transreal<T>
where
    T: Primitive,
{
    fn sign(self) -> Sign {
        Transreal::sign(self)
    }

    fn recip(self) -> Transreal<T> {
        Transreal::recip(self)
    }

    fn anti_recip(self) -> Transreal<T> {
        Transreal::anti_recip(self)
    }
}

macro_rules! impl_binary_operation {
    () => {
        with_binary_operations!(impl_binary_operation);
    };
    (operation => $trait:ident :: $method:ident, assign => $assign:ident :: $assign_method:ident) => {
        impl<T> $trait for Transreal<T>
        where
            T: Primitive,
        {
            type Output = Self;

            fn $method(self, other: Self) -> Self::Output {
                arithmetic::$method(self, other)
            }
        }

        impl<T> $trait<T> for Transreal<T>
        where
            T: Primitive,
        {
            type Output = Self;

            fn $method(self, other: T) -> Self::Output {
                arithmetic::$method(self, Transreal::new(other))
            }
        }

        impl<T> $assign for Transreal<T>
        where
            T: Primitive,
        {
            fn $assign_method(&mut self, other: Self) {
                *self = arithmetic::$method(*self, other);
            }
        }

        impl<T> $assign<T> for Transreal<T>
        where
            T: Primitive,
        {
            fn $assign_method(&mut self, other: T) {
                *self = arithmetic::$method(*self, Transreal::new(other));
            }
        }

        macro_rules! impl_primitive_binary_operation {
            (primitive => $t:ty) => {
                impl $trait<Transreal<$t>> for $t {
                    type Output = Transreal<$t>;

                    fn $method(self, other: Transreal<$t>) -> Self::Output {
                        arithmetic::$method(Transreal::new(self), other)
                    }
                }
            };
        }
        with_primitives!(impl_primitive_binary_operation);
    };
}
impl_binary_operation!();

macro_rules! impl_conversions_for_transreal {
    () => {
        with_primitives!(impl_conversions_for_transreal);
    };
    (primitive => $t:ty) => {
        impl From<Transreal<$t>> for $t {
            fn from(transreal: Transreal<$t>) -> Self {
                transreal.into_primitive()
            }
        }

        impl TryFrom<Transreal<$t>> for Finite<$t> {
            type Error = NotFiniteError;

            fn try_from(transreal: Transreal<$t>) -> Result<Self, Self::Error> {
                transreal.finite().ok_or(NotFiniteError)
            }
        }
    };
}
impl_conversions_for_transreal!();

#[cfg(test)]
mod tests {
    use crate::constraint::NotFiniteError;
    use crate::finite::Finite;
    use crate::nonfinite::Nonfinite;
    use crate::sign::Sign;
    use crate::{T32, T64};

    #[test]
    #[allow(clippy::zero_divided_by_zero)]
    fn classify() {
        assert_eq!(T64::new(0.0 / 0.0), T64::NULLITY);
        assert_eq!(T64::new(f64::NAN), T64::NULLITY);
        assert_eq!(T64::new(-f64::NAN), T64::NULLITY);
        assert_eq!(T64::new(f64::INFINITY), T64::INFINITY);
        assert_eq!(T64::new(f64::NEG_INFINITY), T64::NEG_INFINITY);
        assert_eq!(T32::new(f32::NAN), T32::NULLITY);
        assert_eq!(T32::new(f32::NEG_INFINITY), T32::NEG_INFINITY);

        let x = T64::new(-3.5);
        assert!(x.is_finite());
        assert_eq!(x.finite().map(Finite::into_inner), Some(-3.5));
        assert_eq!(T64::new(f64::MAX), T64::MAX_FINITE);
        assert_eq!(T64::new(f64::MIN), T64::MIN_FINITE);
    }

    #[test]
    fn nullity_eq() {
        assert_eq!(T64::NULLITY, T64::NULLITY);
        assert_eq!(T64::new(f64::NAN), T64::new(f64::NAN));
        assert_ne!(T64::NULLITY, T64::ZERO);
        assert_ne!(T64::NULLITY, T64::INFINITY);
    }

    #[test]
    fn signed_zero_eq() {
        assert_eq!(T64::new(0.0), T64::new(-0.0));
        assert_eq!(T64::ZERO, -T64::ZERO);
    }

    #[test]
    fn mixed_variant_ne() {
        assert_ne!(T64::MAX_FINITE, T64::INFINITY);
        assert_ne!(T64::ZERO, T64::NULLITY);
    }

    #[cfg(feature = "std")]
    #[test]
    fn hash_agrees_with_eq() {
        use std::collections::HashSet;

        let set: HashSet<T64> = [
            T64::new(0.0),
            T64::new(-0.0),
            T64::new(f64::NAN),
            T64::NULLITY,
            T64::INFINITY,
            T64::new(f64::INFINITY),
            T64::new(1.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 4);
        assert!(set.contains(&T64::ZERO));
        assert!(set.contains(&T64::NULLITY));
    }

    #[test]
    fn predicates() {
        assert!(T64::INFINITY.is_positive());
        assert!(T64::NEG_INFINITY.is_negative());
        assert!(!T64::NULLITY.is_positive());
        assert!(!T64::NULLITY.is_negative());
        assert!(!T64::ZERO.is_positive());
        assert!(!T64::ZERO.is_negative());
        assert!(T64::new(1e-300).is_positive());
        assert!(T64::new(-1e-300).is_negative());

        assert!(T64::INFINITY.is_infinite());
        assert!(!T64::NULLITY.is_infinite());
        assert!(T64::NULLITY.is_nullity());
        assert!(T64::NULLITY.is_nonfinite());
        assert!(T64::new(-0.0).is_zero());
        assert!(!T64::NULLITY.is_zero());
    }

    #[test]
    fn sign() {
        assert_eq!(T64::new(-2.0).sign(), Sign::Negative);
        assert_eq!(T64::NULLITY.sign(), Sign::Zero);
        assert_eq!(T64::from_sign(Sign::Positive), T64::INFINITY);
        assert_eq!(T64::from_sign(Sign::Zero), T64::NULLITY);
        assert_eq!(T64::from(Nonfinite::NEG_INFINITY), T64::NEG_INFINITY);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn into_primitive() {
        assert_eq!(f64::from(T64::new(2.5)), 2.5);
        assert_eq!(f64::from(T64::INFINITY), f64::INFINITY);
        assert_eq!(f32::from(T32::NEG_INFINITY), f32::NEG_INFINITY);
        assert!(T64::NULLITY.into_primitive().is_nan());
    }

    #[test]
    fn try_into_finite() {
        let x: Result<Finite<f64>, _> = T64::new(2.0).try_into();
        assert_eq!(x.map(Finite::into_inner), Ok(2.0));
        let y: Result<Finite<f64>, _> = T64::INFINITY.try_into();
        assert_eq!(y, Err(NotFiniteError));
        let z: Result<Finite<f32>, _> = T32::NULLITY.try_into();
        assert_eq!(z, Err(NotFiniteError));
    }

    #[test]
    fn operators() {
        let mut x = T64::new(1.0);
        x += 2.0;
        assert_eq!(x, T64::new(3.0));
        x -= T64::new(1.0);
        assert_eq!(x, T64::new(2.0));
        x *= 4.0;
        assert_eq!(x, T64::new(8.0));
        x /= T64::ZERO;
        assert_eq!(x, T64::INFINITY);
        x *= 0.0;
        assert_eq!(x, T64::NULLITY);

        assert_eq!(1.0f64 / T64::ZERO, T64::INFINITY);
        assert_eq!(2.0f64 - T64::INFINITY, T64::NEG_INFINITY);
        assert_eq!(2.0f32 * T32::new(3.0), T32::new(6.0));
        assert_eq!(1.0f64 + T64::NULLITY, T64::NULLITY);
    }

    #[test]
    fn sum() {
        let xs = [T64::new(1.0), T64::new(2.0), T64::new(3.0)];
        assert_eq!(xs.iter().copied().sum::<T64>(), T64::new(6.0));

        let xs = [T64::new(1.0), T64::INFINITY, T64::NEG_INFINITY];
        assert_eq!(xs.iter().copied().sum::<T64>(), T64::NULLITY);

        assert_eq!(core::iter::empty::<T64>().sum::<T64>(), T64::ZERO);
    }

    #[test]
    fn product() {
        let xs = [T64::new(1.0), T64::new(2.0), T64::new(3.0)];
        assert_eq!(xs.iter().copied().product::<T64>(), T64::new(6.0));

        let xs = [T64::new(-1.0), T64::INFINITY, T64::new(2.0)];
        assert_eq!(xs.iter().copied().product::<T64>(), T64::NEG_INFINITY);

        assert_eq!(core::iter::empty::<T64>().product::<T64>(), T64::ONE);
    }

    #[cfg(feature = "approx")]
    #[test]
    fn approx() {
        use approx::{assert_abs_diff_eq, assert_relative_eq, assert_relative_ne, assert_ulps_eq};

        assert_abs_diff_eq!(T64::new(0.1) + 0.2, T64::new(0.3));
        assert_relative_eq!(T64::new(1.0) / 3.0 * 3.0, T64::ONE);
        assert_ulps_eq!(T64::new(0.1) * 3.0, T64::new(0.3));
        assert_relative_eq!(T64::INFINITY, T64::INFINITY);
        assert_relative_eq!(T64::NULLITY, T64::NULLITY);
        assert_relative_ne!(T64::INFINITY, T64::NEG_INFINITY);
        assert_relative_ne!(T64::MAX_FINITE, T64::INFINITY);
    }

    #[test]
    fn fmt() {
        format_args!("{0:?} {0:#?}", T64::new(1.0));
        format_args!("{0:?} {0:#?}", T64::NULLITY);
    }
}
