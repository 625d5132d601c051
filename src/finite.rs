#[cfg(feature = "approx")]
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg};

use crate::constraint::{IsReal, NotFiniteError};
use crate::function::UnaryTransrealFunction;
use crate::primitive::Primitive;
use crate::sign::Sign;
use crate::transreal::Transreal;

/// A finite transreal value: a primitive floating-point value that is neither `NaN` nor infinite.
///
/// `Finite` is the real-number variant of [`Transreal`]. Sums and products of `Finite`s may
/// overflow, so these operations output a [`Transreal`] that is promoted to an infinity when the
/// primitive result is not finite.
///
/// Equivalence follows IEEE 754: `+0.0` and `-0.0` are equal. Because `Finite` can never represent
/// `NaN`, this equivalence is reflexive and `Finite` implements [`Eq`] and [`Hash`].
///
/// [`Eq`]: core::cmp::Eq
/// [`Hash`]: core::hash::Hash
/// [`Transreal`]: crate::Transreal
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Finite<T> {
    inner: T,
}

impl<T> Finite<T> {
    pub(crate) const fn unchecked(inner: T) -> Self {
        Finite { inner }
    }
}

impl<T> Finite<T>
where
    T: Copy,
{
    pub const fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> Finite<T>
where
    T: Primitive,
{
    pub const ZERO: Self = Finite::unchecked(T::ZERO);
    pub const ONE: Self = Finite::unchecked(T::ONE);
    pub const MAX_FINITE: Self = Finite::unchecked(T::MAX_FINITE);
    pub const MIN_FINITE: Self = Finite::unchecked(T::MIN_FINITE);

    /// Constructs a `Finite` from a primitive floating-point value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is `NaN`, `+INF`, or `-INF`. To construct a transreal value
    /// from any primitive value, use [`Transreal::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transreal::Finite;
    ///
    /// let x = Finite::try_new(2.0f64).unwrap();
    /// assert!(Finite::try_new(f64::INFINITY).is_err());
    /// ```
    ///
    /// [`Transreal::new`]: crate::Transreal::new
    pub fn try_new(inner: T) -> Result<Self, NotFiniteError> {
        IsReal::check(inner).map(|_| Finite::unchecked(inner))
    }

    pub fn is_zero(self) -> bool {
        self.inner == T::ZERO
    }
}

#[cfg(feature = "approx")]
impl<T> AbsDiffEq for Finite<T>
where
    T: AbsDiffEq<Epsilon = T> + Primitive,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.inner.abs_diff_eq(&other.inner, epsilon)
    }
}

impl<T> Add for Finite<T>
where
    T: Primitive,
{
    type Output = Transreal<T>;

    fn add(self, other: Self) -> Self::Output {
        Transreal::new(self.inner + other.inner)
    }
}

impl<T> AsRef<T> for Finite<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

impl<T> Debug for Finite<T>
where
    T: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Finite").field(self.as_ref()).finish()
    }
}

impl<T> Eq for Finite<T> where T: Primitive {}

impl<T> Hash for Finite<T>
where
    T: Primitive,
{
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.to_canonical_bits().hash(state);
    }
}

impl<T> Mul for Finite<T>
where
    T: Primitive,
{
    type Output = Transreal<T>;

    fn mul(self, other: Self) -> Self::Output {
        Transreal::new(self.inner * other.inner)
    }
}

impl<T> Neg for Finite<T>
where
    T: Primitive,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        // Negating a real number always produces a real number.
        Finite::unchecked(-self.inner)
    }
}

impl<T> PartialEq for Finite<T>
where
    T: Primitive,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

#[cfg(feature = "approx")]
impl<T> RelativeEq for Finite<T>
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
        self.inner.relative_eq(&other.inner, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl<T> UlpsEq for Finite<T>
where
    T: Primitive + UlpsEq<Epsilon = T>,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.inner.ulps_eq(&other.inner, epsilon, max_ulps)
    }
}

impl<T> UnaryTransrealFunction<T> for Finite<T>
where
    T: Primitive,
{
    fn sign(self) -> Sign {
        if self.inner > T::ZERO {
            Sign::Positive
        }
        else if self.inner < T::ZERO {
            Sign::Negative
        }
        else {
            Sign::Zero
        }
    }

    fn recip(self) -> Transreal<T> {
        if self.is_zero() {
            Transreal::INFINITY
        }
        else {
            Transreal::new(T::ONE / self.inner)
        }
    }

    fn anti_recip(self) -> Transreal<T> {
        if self.is_zero() {
            Transreal::NEG_INFINITY
        }
        else {
            Transreal::new(-T::ONE / self.inner)
        }
    }
}

macro_rules! impl_conversions_for_finite {
    () => {
        with_primitives!(impl_conversions_for_finite);
    };
    (primitive => $t:ty) => {
        impl From<Finite<$t>> for $t {
            fn from(finite: Finite<$t>) -> Self {
                finite.into_inner()
            }
        }

        impl TryFrom<$t> for Finite<$t> {
            type Error = NotFiniteError;

            fn try_from(inner: $t) -> Result<Self, Self::Error> {
                Finite::try_new(inner)
            }
        }
    };
}
impl_conversions_for_finite!();

#[cfg(test)]
mod tests {
    use crate::constraint::NotFiniteError;
    use crate::finite::Finite;
    use crate::function::UnaryTransrealFunction;
    use crate::sign::Sign;
    use crate::transreal::Transreal;

    #[test]
    #[allow(clippy::zero_divided_by_zero)]
    fn try_new() {
        assert_eq!(Finite::try_new(1.0f64).map(Finite::into_inner), Ok(1.0));
        assert_eq!(Finite::try_new(0.0f64 / 0.0), Err(NotFiniteError));
        assert_eq!(Finite::try_new(f64::INFINITY), Err(NotFiniteError));
        assert_eq!(Finite::try_new(f32::NEG_INFINITY), Err(NotFiniteError));

        let x: Result<Finite<f32>, _> = 3.0f32.try_into();
        assert_eq!(x.map(f32::from), Ok(3.0));
    }

    #[test]
    fn signed_zero_eq() {
        let zero = Finite::try_new(0.0f64).unwrap();
        let neg_zero = Finite::try_new(-0.0f64).unwrap();
        assert_eq!(zero, neg_zero);
        assert_eq!(-zero, zero);
    }

    #[cfg(feature = "std")]
    #[test]
    fn hash_agrees_with_eq() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash<T>(value: &T) -> u64
        where
            T: Hash,
        {
            let mut state = DefaultHasher::new();
            value.hash(&mut state);
            state.finish()
        }

        let zero = Finite::try_new(0.0f64).unwrap();
        let neg_zero = Finite::try_new(-0.0f64).unwrap();
        assert_eq!(hash(&zero), hash(&neg_zero));
    }

    #[test]
    fn sign() {
        assert_eq!(Finite::try_new(5.0f64).unwrap().sign(), Sign::Positive);
        assert_eq!(Finite::try_new(-5.0f64).unwrap().sign(), Sign::Negative);
        assert_eq!(Finite::try_new(-0.0f64).unwrap().sign(), Sign::Zero);
        assert!(!Finite::<f64>::ZERO.is_positive());
        assert!(!Finite::<f64>::ZERO.is_negative());
    }

    #[test]
    fn overflow() {
        assert_eq!(
            Finite::<f64>::MAX_FINITE + Finite::MAX_FINITE,
            Transreal::INFINITY
        );
        assert_eq!(
            Finite::<f64>::MIN_FINITE * Finite::MAX_FINITE,
            Transreal::NEG_INFINITY
        );
        assert_eq!(
            Finite::<f32>::MAX_FINITE + Finite::MAX_FINITE,
            Transreal::INFINITY
        );
    }

    #[test]
    fn recip() {
        let two = Finite::try_new(2.0f64).unwrap();
        assert_eq!(two.recip(), Transreal::new(0.5));
        assert_eq!(two.anti_recip(), Transreal::new(-0.5));
        assert_eq!(Finite::<f64>::ZERO.recip(), Transreal::INFINITY);
        assert_eq!(Finite::<f64>::ZERO.anti_recip(), Transreal::NEG_INFINITY);

        let neg_zero = Finite::try_new(-0.0f64).unwrap();
        assert_eq!(neg_zero.recip(), Transreal::INFINITY);
        assert_eq!(neg_zero.anti_recip(), Transreal::NEG_INFINITY);
    }

    #[test]
    fn recip_of_subnormal_overflows() {
        let tiny = Finite::try_new(f64::from_bits(1)).unwrap();
        assert_eq!(tiny.recip(), Transreal::INFINITY);
        assert_eq!(tiny.anti_recip(), Transreal::NEG_INFINITY);
        assert_eq!((-tiny).recip(), Transreal::NEG_INFINITY);
    }
}
