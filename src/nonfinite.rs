use core::ops::{Add, Mul, Neg};

use crate::function::UnaryTransrealFunction;
use crate::primitive::Primitive;
use crate::sign::Sign;
use crate::transreal::Transreal;

/// A nonfinite transreal value: $-\infin$, $\Phi$ (nullity), or $+\infin$.
///
/// A `Nonfinite` is identified entirely by its [`Sign`]:
///
/// | Sign             | Value         |
/// |------------------|---------------|
/// | `Sign::Negative` | $-\infin$     |
/// | `Sign::Zero`     | $\Phi$        |
/// | `Sign::Positive` | $+\infin$     |
///
/// Sums and products of `Nonfinite`s are the sums and products of their signs and so are closed.
/// In particular, $\infin + (-\infin) = \Phi$ and $\Phi$ absorbs every product.
///
/// [`Sign`]: crate::Sign
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Nonfinite {
    sign: Sign,
}

impl Nonfinite {
    pub const NULLITY: Self = Nonfinite::from_sign(Sign::Zero);
    pub const INFINITY: Self = Nonfinite::from_sign(Sign::Positive);
    pub const NEG_INFINITY: Self = Nonfinite::from_sign(Sign::Negative);

    pub const fn from_sign(sign: Sign) -> Self {
        Nonfinite { sign }
    }

    pub const fn sign(self) -> Sign {
        self.sign
    }

    pub fn is_nullity(self) -> bool {
        self.sign.is_zero()
    }

    pub fn is_infinite(self) -> bool {
        !self.is_nullity()
    }
}

impl Add for Nonfinite {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Nonfinite::from_sign(self.sign + other.sign)
    }
}

impl From<Sign> for Nonfinite {
    fn from(sign: Sign) -> Self {
        Nonfinite::from_sign(sign)
    }
}

impl Mul for Nonfinite {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Nonfinite::from_sign(self.sign * other.sign)
    }
}

impl Neg for Nonfinite {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Nonfinite::from_sign(-self.sign)
    }
}

impl<T> UnaryTransrealFunction<T> for Nonfinite
where
    T: Primitive,
{
    fn sign(self) -> Sign {
        Nonfinite::sign(self)
    }

    fn recip(self) -> Transreal<T> {
        if self.is_nullity() {
            Transreal::NULLITY
        }
        else {
            Transreal::ZERO
        }
    }

    // Zero is unsigned here, so the anti-reciprocal of either infinity is the same zero as its
    // reciprocal.
    fn anti_recip(self) -> Transreal<T> {
        UnaryTransrealFunction::<T>::recip(self)
    }
}
