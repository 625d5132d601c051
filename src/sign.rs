//! Sign selectors.
//!
//! A [`Sign`] is one of $\lbrace -1, 0, +1 \rbrace$. Besides describing the sign of any transreal
//! value, a sign fully determines the identity of a [`Nonfinite`] value, so the arithmetic of
//! nonfinite values is the arithmetic of signs:
//!
//! | Operation | Definition                  |
//! |-----------|-----------------------------|
//! | $a + b$   | $\operatorname{sgn}(a + b)$ |
//! | $a b$     | $a b$                       |
//! | $-a$      | $-a$                        |
//!
//! [`Nonfinite`]: crate::Nonfinite
//! [`Sign`]: crate::Sign

use core::ops::{Add, Mul, Neg};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Gets the sign of an integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transreal::Sign;
    ///
    /// assert_eq!(Sign::from_signum(-7), Sign::Negative);
    /// assert_eq!(Sign::from_signum(0), Sign::Zero);
    /// ```
    pub const fn from_signum(n: i8) -> Self {
        if n > 0 {
            Sign::Positive
        }
        else if n < 0 {
            Sign::Negative
        }
        else {
            Sign::Zero
        }
    }

    pub const fn into_signum(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    pub fn is_non_zero_positive(&self) -> bool {
        matches!(self, Sign::Positive)
    }

    pub fn is_non_zero_negative(&self) -> bool {
        matches!(self, Sign::Negative)
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Sign::Zero)
    }
}

impl Add for Sign {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        // The sum of two selectors is in `[-2, 2]` and cannot overflow.
        Sign::from_signum(self.into_signum() + other.into_signum())
    }
}

impl From<Sign> for i8 {
    fn from(sign: Sign) -> Self {
        sign.into_signum()
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Sign::from_signum(self.into_signum() * other.into_signum())
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Sign::from_signum(-self.into_signum())
    }
}
