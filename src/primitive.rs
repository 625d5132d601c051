//! Primitive IEEE 754 floating-point types.

use core::fmt::Debug;
#[cfg(not(feature = "std"))]
use num_traits::float::FloatCore as Float;
#[cfg(feature = "std")]
use num_traits::Float;

use crate::sealed::Sealed;

/// A primitive IEEE 754 floating-point type (`f32` or `f64`).
///
/// This trait is sealed and exposes the constants that transreal values need in `const` contexts
/// along with a canonical bit representation used for hashing.
pub trait Primitive: Copy + Debug + Float + Sealed {
    const ZERO: Self;
    const ONE: Self;
    const MAX_FINITE: Self;
    const MIN_FINITE: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const NAN: Self;

    /// Converts the value into a canonical bit representation.
    ///
    /// Unlike `to_bits`, both zeros share one representation and every `NaN` shares one
    /// representation, so canonical bits agree with IEEE equality on all non-`NaN` values.
    fn to_canonical_bits(self) -> u64;
}

macro_rules! impl_primitive {
    () => {
        with_primitives!(impl_primitive);
    };
    (primitive => $t:ident) => {
        impl Primitive for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const MAX_FINITE: Self = <$t>::MAX;
            const MIN_FINITE: Self = <$t>::MIN;
            const INFINITY: Self = <$t>::INFINITY;
            const NEG_INFINITY: Self = <$t>::NEG_INFINITY;
            const NAN: Self = <$t>::NAN;

            fn to_canonical_bits(self) -> u64 {
                if self.is_nan() {
                    u64::from(<$t>::NAN.to_bits())
                }
                // Matches both `+0.0` and `-0.0`.
                else if self == 0.0 {
                    0
                }
                else {
                    u64::from(self.to_bits())
                }
            }
        }

        impl Sealed for $t {}
    };
}
impl_primitive!();
