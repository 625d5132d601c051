//! Total arithmetic for floating-point types: transreal numbers.
//!
//! Transreal arithmetic extends the real numbers with three nonfinite values: $+\infin$,
//! $-\infin$, and nullity $\Phi$. Every operation is total: division by zero, $0 \times \infin$,
//! and $\infin - \infin$ are all defined and produce another transreal value. There are no
//! floating-point exceptions, errors, or panics in transreal arithmetic.
//!
//! # Values
//!
//! [`Transreal`] is a closed sum type with two variants:
//!
//! | Variant       | Representation            | Values                         |
//! |---------------|---------------------------|--------------------------------|
//! | [`Finite`]    | primitive floating-point  | real numbers                   |
//! | [`Nonfinite`] | [`Sign`] in $\lbrace -1, 0, +1 \rbrace$ | $-\infin$, $\Phi$, $+\infin$ |
//!
//! Transreal values are constructed from primitive floating-point values by classification:
//! `NaN` becomes $\Phi$ and IEEE infinities become transreal infinities. The `T32` and `T64` type
//! definitions are provided for `f32` and `f64`.
//!
//! # Arithmetic
//!
//! | Expression         | Result    |
//! |--------------------|-----------|
//! | $1 / 0$            | $+\infin$ |
//! | $-1 / 0$           | $-\infin$ |
//! | $0 \times \infin$  | $\Phi$    |
//! | $\infin - \infin$  | $\Phi$    |
//! | $1 / \infin$       | $0$       |
//! | $1 / \Phi$         | $\Phi$    |
//!
//! Arithmetic over finite values is IEEE 754 arithmetic, and a finite result that overflows is
//! promoted to an infinity. See the [`arithmetic`] module for the complete rules.
//!
//! # Examples
//!
//! ```rust
//! use transreal::T64;
//!
//! fn harmonic_mean(xs: &[T64]) -> T64 {
//!     let n = T64::new(xs.len() as f64);
//!     n / xs.iter().map(|x| x.recip()).sum::<T64>()
//! }
//!
//! let xs = [T64::new(1.0), T64::new(4.0), T64::new(4.0)];
//! assert_eq!(harmonic_mean(&xs), T64::new(2.0));
//!
//! // A zero yields a zero mean rather than a division by zero.
//! let xs = [T64::new(1.0), T64::ZERO];
//! assert_eq!(harmonic_mean(&xs), T64::ZERO);
//! ```
//!
//! [`arithmetic`]: crate::arithmetic
//! [`Finite`]: crate::Finite
//! [`Nonfinite`]: crate::Nonfinite
//! [`Sign`]: crate::Sign
//! [`Transreal`]: crate::Transreal

#![no_std]

#[cfg(feature = "std")]
extern crate std;

macro_rules! with_primitives {
    ($f:ident) => {
        $f!(primitive => f32);
        $f!(primitive => f64);
    };
}

macro_rules! with_binary_operations {
    ($f:ident) => {
        $f!(operation => Add::add, assign => AddAssign::add_assign);
        $f!(operation => Div::div, assign => DivAssign::div_assign);
        $f!(operation => Mul::mul, assign => MulAssign::mul_assign);
        $f!(operation => Sub::sub, assign => SubAssign::sub_assign);
    };
}

pub mod arithmetic;
mod constraint;
mod finite;
mod function;
mod nonfinite;
mod primitive;
mod sign;
mod transreal;

pub use crate::constraint::NotFiniteError;
pub use crate::finite::Finite;
pub use crate::function::UnaryTransrealFunction;
pub use crate::nonfinite::Nonfinite;
pub use crate::primitive::Primitive;
pub use crate::sign::Sign;
pub use crate::transreal::Transreal;

/// A transreal number backed by `f32`.
pub type T32 = Transreal<f32>;
/// A transreal number backed by `f64`.
pub type T64 = Transreal<f64>;

mod sealed {
    pub trait Sealed {}
}
