//! Per-element arithmetic with error classification
//!
//! Each function computes one element pair using the type's native
//! arithmetic and reports whether the result is an arithmetic error. The
//! value is always produced, so the permissive policy can write it as-is.
//!
//! # Integer `pow`
//!
//! | base        | exponent | result                          |
//! |-------------|----------|---------------------------------|
//! | 1           | < 0      | 1                               |
//! | -1          | < 0      | ±1 by exponent parity           |
//! | 0           | < 0      | `DomainError` (division by zero)|
//! | other       | < 0      | `DomainError` (fractional)      |
//! | any         | ≥ 0      | `Overflow` if out of range      |
//!
//! Domain errors carry a raw value of 0 (the fraction truncated toward zero);
//! overflows carry the wrapped two's complement power.
//!
//! # Float `pow`
//!
//! Finite results are never errors. A non-finite result is `NonFinite` when an
//! input was already non-finite, `DomainError` for NaN from finite inputs or a
//! pole (zero base, negative exponent), and `Overflow` otherwise.

use crate::dtype::Element;
use crate::error::ArithmeticErrorKind;
use crate::ops::BinaryOp;
use num_traits::ops::overflowing::OverflowingMul;
use num_traits::{Float, PrimInt};

/// A computed element and its classification
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Checked<T> {
    /// Raw computed value
    pub value: T,
    /// Classified error, if any
    pub error: Option<ArithmeticErrorKind>,
}

impl<T> Checked<T> {
    #[inline]
    fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    #[inline]
    fn err(value: T, kind: ArithmeticErrorKind) -> Self {
        Self {
            value,
            error: Some(kind),
        }
    }
}

/// Element types the kernels can combine
pub trait ArithElement: Element {
    /// Compute `op(a, b)` and classify the result
    fn checked_binary(op: BinaryOp, a: Self, b: Self) -> Checked<Self>;
}

macro_rules! impl_arith_int {
    ($($ty:ty),*) => {
        $(
            impl ArithElement for $ty {
                #[inline]
                fn checked_binary(op: BinaryOp, a: Self, b: Self) -> Checked<Self> {
                    match op {
                        BinaryOp::Pow => pow_int(a, b),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_arith_float {
    ($($ty:ty),*) => {
        $(
            impl ArithElement for $ty {
                #[inline]
                fn checked_binary(op: BinaryOp, a: Self, b: Self) -> Checked<Self> {
                    match op {
                        BinaryOp::Pow => pow_float(a, b),
                    }
                }
            }
        )*
    };
}

impl_arith_int!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_arith_float!(f32, f64);

/// Integer power with overflow and domain classification
pub fn pow_int<T: PrimInt + OverflowingMul>(base: T, exp: T) -> Checked<T> {
    if exp < T::zero() {
        if base == T::one() {
            return Checked::ok(T::one());
        }
        // None for unsigned types, which never reach this branch anyway
        let minus_one = T::zero().checked_sub(&T::one());
        if Some(base) == minus_one {
            let odd = exp & T::one() == T::one();
            return Checked::ok(if odd { base } else { T::one() });
        }
        return Checked::err(T::zero(), ArithmeticErrorKind::DomainError);
    }

    // Non-negative values of every supported integer type fit in u64
    let exp = exp.to_u64().unwrap_or(u64::MAX);
    let (value, overflowed) = overflowing_pow(base, exp);
    if overflowed {
        Checked::err(value, ArithmeticErrorKind::Overflow)
    } else {
        Checked::ok(value)
    }
}

/// Square-and-multiply power returning the wrapped result and whether any
/// contributing product overflowed
///
/// The base is not squared after the last exponent bit, so a spurious
/// overflow from an unused square is never reported.
pub fn overflowing_pow<T: PrimInt + OverflowingMul>(base: T, exp: u64) -> (T, bool) {
    if exp == 0 {
        return (T::one(), false);
    }

    let mut base = base;
    let mut exp = exp;
    let mut acc = T::one();
    let mut overflowed = false;

    while exp > 1 {
        if exp & 1 == 1 {
            let (r, o) = acc.overflowing_mul(&base);
            acc = r;
            overflowed |= o;
        }
        exp /= 2;
        let (r, o) = base.overflowing_mul(&base);
        base = r;
        overflowed |= o;
    }

    let (r, o) = acc.overflowing_mul(&base);
    (r, overflowed | o)
}

/// Float power with non-finite result classification
pub fn pow_float<T: Float>(base: T, exp: T) -> Checked<T> {
    let value = base.powf(exp);
    if value.is_finite() {
        return Checked::ok(value);
    }

    let kind = if !base.is_finite() || !exp.is_finite() {
        ArithmeticErrorKind::NonFinite
    } else if value.is_nan() || (base == T::zero() && exp < T::zero()) {
        ArithmeticErrorKind::DomainError
    } else {
        ArithmeticErrorKind::Overflow
    };
    Checked::err(value, kind)
}
