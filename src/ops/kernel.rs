//! Binary operation kernels
//!
//! One loop per [`Shape`](super::Shape), generic over the element type. Each
//! kernel walks its slices in increasing index order. Under
//! [`ErrorPolicy::Strict`] the first classified error stops the loop before
//! its index is written; everything before it stays written.
//!
//! Callers pass slices already cut to the processed length; inputs and output
//! of the same call have equal lengths.

use super::classify::ArithElement;
use super::{BinaryOp, ErrorPolicy};
use crate::error::{Error, Result};

#[inline(always)]
fn combine<T: ArithElement>(
    op: BinaryOp,
    policy: ErrorPolicy,
    index: usize,
    a: T,
    b: T,
) -> Result<T> {
    let checked = T::checked_binary(op, a, b);
    match (checked.error, policy) {
        (Some(kind), ErrorPolicy::Strict) => Err(Error::arithmetic(index, kind)),
        _ => Ok(checked.value),
    }
}

/// `a[i] = op(a[i], s)`
pub fn buffer_scalar_in_place<T: ArithElement>(
    op: BinaryOp,
    a: &mut [T],
    s: T,
    policy: ErrorPolicy,
) -> Result<()> {
    for (i, x) in a.iter_mut().enumerate() {
        *x = combine(op, policy, i, *x, s)?;
    }
    Ok(())
}

/// `out[i] = op(a[i], s)`
pub fn buffer_scalar_out<T: ArithElement>(
    op: BinaryOp,
    a: &[T],
    s: T,
    out: &mut [T],
    policy: ErrorPolicy,
) -> Result<()> {
    debug_assert_eq!(a.len(), out.len());
    for (i, (o, &x)) in out.iter_mut().zip(a).enumerate() {
        *o = combine(op, policy, i, x, s)?;
    }
    Ok(())
}

/// `b[i] = op(s, b[i])`
pub fn scalar_buffer_in_place<T: ArithElement>(
    op: BinaryOp,
    s: T,
    b: &mut [T],
    policy: ErrorPolicy,
) -> Result<()> {
    for (i, y) in b.iter_mut().enumerate() {
        *y = combine(op, policy, i, s, *y)?;
    }
    Ok(())
}

/// `out[i] = op(s, b[i])`
pub fn scalar_buffer_out<T: ArithElement>(
    op: BinaryOp,
    s: T,
    b: &[T],
    out: &mut [T],
    policy: ErrorPolicy,
) -> Result<()> {
    debug_assert_eq!(b.len(), out.len());
    for (i, (o, &y)) in out.iter_mut().zip(b).enumerate() {
        *o = combine(op, policy, i, s, y)?;
    }
    Ok(())
}

/// `a[i] = op(a[i], b[i])`
pub fn buffer_buffer_in_place<T: ArithElement>(
    op: BinaryOp,
    a: &mut [T],
    b: &[T],
    policy: ErrorPolicy,
) -> Result<()> {
    debug_assert_eq!(a.len(), b.len());
    for (i, (x, &y)) in a.iter_mut().zip(b).enumerate() {
        *x = combine(op, policy, i, *x, y)?;
    }
    Ok(())
}

/// `out[i] = op(a[i], b[i])`
pub fn buffer_buffer_out<T: ArithElement>(
    op: BinaryOp,
    a: &[T],
    b: &[T],
    out: &mut [T],
    policy: ErrorPolicy,
) -> Result<()> {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    for (i, ((o, &x), &y)) in out.iter_mut().zip(a).zip(b).enumerate() {
        *o = combine(op, policy, i, x, y)?;
    }
    Ok(())
}
