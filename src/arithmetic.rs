//! Total arithmetic over transreal values.
//!
//! Each binary operation is a single function that matches on the variants of both of its
//! operands, so every combination of finite and nonfinite operands is handled in one place:
//!
//! | $x + y$        | Finite $y$       | Nonfinite $y$    |
//! |----------------|------------------|------------------|
//! | Finite $x$     | IEEE $x + y$     | $y$              |
//! | Nonfinite $x$  | $x$              | sign of $x + y$  |
//!
//! | $x y$          | Finite $y$                              | Nonfinite $y$     |
//! |----------------|-----------------------------------------|-------------------|
//! | Finite $x$     | IEEE $x y$                              | sign of $x$ × $y$ |
//! | Nonfinite $x$  | $x$ × sign of $y$                       | $x y$             |
//!
//! IEEE results are classified, so overflow is promoted to an infinity. In products with a
//! nonfinite value, a finite operand contributes only its sign; zero therefore absorbs an infinity
//! into nullity: $0 \times \infin = \Phi$.
//!
//! Subtraction and division are compositions: $x - y = x + (-y)$ and $x / y = x \times y^{-1}$.
//!
//! These functions are also exposed through the standard operator traits implemented by
//! [`Transreal`].
//!
//! [`Transreal`]: crate::Transreal

use crate::function::UnaryTransrealFunction;
use crate::nonfinite::Nonfinite;
use crate::primitive::Primitive;
use crate::transreal::Transreal;

pub fn add<T>(x: Transreal<T>, y: Transreal<T>) -> Transreal<T>
where
    T: Primitive,
{
    match (x, y) {
        (Transreal::Finite(x), Transreal::Finite(y)) => x + y,
        // A finite operand is absorbed by a nonfinite operand.
        (Transreal::Finite(_), Transreal::Nonfinite(n))
        | (Transreal::Nonfinite(n), Transreal::Finite(_)) => Transreal::Nonfinite(n),
        (Transreal::Nonfinite(x), Transreal::Nonfinite(y)) => Transreal::Nonfinite(x + y),
    }
}

pub fn sub<T>(x: Transreal<T>, y: Transreal<T>) -> Transreal<T>
where
    T: Primitive,
{
    add(x, neg(y))
}

pub fn mul<T>(x: Transreal<T>, y: Transreal<T>) -> Transreal<T>
where
    T: Primitive,
{
    match (x, y) {
        (Transreal::Finite(x), Transreal::Finite(y)) => x * y,
        (Transreal::Finite(f), Transreal::Nonfinite(n))
        | (Transreal::Nonfinite(n), Transreal::Finite(f)) => {
            Transreal::Nonfinite(Nonfinite::from(f.sign()) * n)
        }
        (Transreal::Nonfinite(x), Transreal::Nonfinite(y)) => Transreal::Nonfinite(x * y),
    }
}

pub fn div<T>(x: Transreal<T>, y: Transreal<T>) -> Transreal<T>
where
    T: Primitive,
{
    mul(x, recip(y))
}

pub fn neg<T>(x: Transreal<T>) -> Transreal<T>
where
    T: Primitive,
{
    match x {
        Transreal::Finite(x) => Transreal::Finite(-x),
        Transreal::Nonfinite(x) => Transreal::Nonfinite(-x),
    }
}

pub fn recip<T>(x: Transreal<T>) -> Transreal<T>
where
    T: Primitive,
{
    match x {
        Transreal::Finite(x) => x.recip(),
        Transreal::Nonfinite(x) => UnaryTransrealFunction::<T>::recip(x),
    }
}

pub fn anti_recip<T>(x: Transreal<T>) -> Transreal<T>
where
    T: Primitive,
{
    match x {
        Transreal::Finite(x) => x.anti_recip(),
        Transreal::Nonfinite(x) => UnaryTransrealFunction::<T>::anti_recip(x),
    }
}
