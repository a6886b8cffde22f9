//! Binary operation dispatcher
//!
//! [`apply_binary_op`] is the single entry point: it checks the call, resolves
//! the element dtype, picks the shape, and runs the matching typed kernel.
//! [`BinaryOpCall`] is a builder over it for callers that collect arguments
//! one at a time.

use super::classify::ArithElement;
use super::kernel;
use super::shape::{Shape, Side, select_shape};
use super::{BinaryOp, ErrorPolicy, OpConfig};
use crate::buffer::{BufferMut, BufferRef, Operand};
use crate::dispatch_dtype;
use crate::dtype::{DType, Element, Scalar};
use crate::error::{Error, Result};
use log::{debug, trace};

/// Everything the kernel needs that validation has established
#[derive(Copy, Clone, Debug)]
struct Plan {
    shape: Shape,
    dtype: DType,
    len: usize,
    count: usize,
}

/// Apply `op` element-wise
///
/// Exactly one operand may be a scalar, or both may be buffers. With no
/// `output`, results are written back into the first buffer operand (the lhs
/// when it is a buffer, otherwise the rhs), which must be an
/// [`Operand::BufferMut`].
///
/// Only the first `config.limit` elements (all of them when unset) are
/// processed; the destination is not touched beyond that.
///
/// # Errors
///
/// - [`Error::UsageError`]: two scalars, a read-only in-place target, a limit
///   beyond the buffer length, or a misaligned raw buffer
/// - [`Error::TypeMismatch`]: buffers or output of different dtypes, or a
///   scalar not representable in the buffer dtype
/// - [`Error::LengthMismatch`]: buffers of different lengths, or an output
///   shorter than the processed length
/// - [`Error::ArithmeticFailure`]: under [`ErrorPolicy::Strict`], the first
///   failing element. Elements before it have already been written.
///
/// All errors other than `ArithmeticFailure` are raised before any element is
/// written.
pub fn apply_binary_op(
    op: BinaryOp,
    lhs: Operand<'_>,
    rhs: Operand<'_>,
    output: Option<BufferMut<'_>>,
    config: OpConfig,
) -> Result<()> {
    let plan = validate(&lhs, &rhs, output.as_ref(), config)?;

    trace!(
        "BINARY_OP DISPATCH: op={}, dtype={}, shape={:?}, len={}, count={}, policy={:?}",
        op.name(),
        plan.dtype,
        plan.shape,
        plan.len,
        plan.count,
        config.error_policy
    );

    let result = dispatch_dtype!(plan.dtype, T => {
        run::<T>(op, &plan, lhs, rhs, output, config.error_policy)
    });

    if let Err(Error::ArithmeticFailure { index, kind }) = &result {
        debug!(
            "BINARY_OP ABORTED: op={}, dtype={}, index={}, kind={}",
            op.name(),
            plan.dtype,
            index,
            kind
        );
    }
    result
}

fn validate(
    lhs: &Operand<'_>,
    rhs: &Operand<'_>,
    output: Option<&BufferMut<'_>>,
    config: OpConfig,
) -> Result<Plan> {
    let shape = select_shape(lhs.kind(), rhs.kind(), output.is_some())?;

    let (dtype, len) = match shape.scalar_side() {
        Some(side) => {
            let (s, buf) = match side {
                Side::Lhs => (scalar_of(lhs)?, buffer_of(rhs)?),
                Side::Rhs => (scalar_of(rhs)?, buffer_of(lhs)?),
            };
            if !s.is_compatible_with(buf.dtype()) {
                return Err(Error::type_mismatch(format!(
                    "scalar {} ({}) is not representable as {}",
                    s,
                    s.dtype(),
                    buf.dtype()
                )));
            }
            (buf.dtype(), buf.len())
        }
        None => {
            let a = buffer_of(lhs)?;
            let b = buffer_of(rhs)?;
            if a.dtype() != b.dtype() {
                return Err(Error::type_mismatch(format!(
                    "operands have different dtypes: {} vs {}",
                    a.dtype(),
                    b.dtype()
                )));
            }
            if a.len() != b.len() {
                return Err(Error::length_mismatch(format!(
                    "operands have different lengths: {} vs {}",
                    a.len(),
                    b.len()
                )));
            }
            (a.dtype(), a.len())
        }
    };

    let count = match config.limit {
        Some(limit) if limit > len => {
            return Err(Error::usage(format!(
                "limit {limit} exceeds buffer length {len}"
            )));
        }
        Some(limit) => limit,
        None => len,
    };

    match (shape.in_place_side(), output) {
        (Some(side), _) => {
            let target = match side {
                Side::Lhs => lhs,
                Side::Rhs => rhs,
            };
            if !matches!(target, Operand::BufferMut(_)) {
                return Err(Error::usage(
                    "no output given and the in-place target buffer is read-only",
                ));
            }
        }
        (None, Some(out)) => {
            if out.dtype() != dtype {
                return Err(Error::type_mismatch(format!(
                    "output dtype {} does not match operand dtype {}",
                    out.dtype(),
                    dtype
                )));
            }
            if out.len() < count {
                return Err(Error::length_mismatch(format!(
                    "output length {} is shorter than the {} elements to process",
                    out.len(),
                    count
                )));
            }
        }
        (None, None) => {
            return Err(Error::usage("separate-output shape without an output"));
        }
    }

    Ok(Plan {
        shape,
        dtype,
        len,
        count,
    })
}

fn buffer_of<'o>(operand: &'o Operand<'_>) -> Result<BufferRef<'o>> {
    operand
        .buffer()
        .ok_or_else(|| Error::usage("expected a buffer operand, got a scalar"))
}

fn scalar_of(operand: &Operand<'_>) -> Result<Scalar> {
    match operand {
        Operand::Scalar(s) => Ok(*s),
        _ => Err(Error::usage("expected a scalar operand, got a buffer")),
    }
}

fn input<'o, T: Element>(operand: &'o Operand<'_>) -> Result<&'o [T]> {
    buffer_of(operand)?.typed::<T>()
}

fn in_place<T: Element>(operand: Operand<'_>) -> Result<&mut [T]> {
    match operand {
        Operand::BufferMut(b) => b.into_typed::<T>(),
        _ => Err(Error::usage("in-place target buffer is read-only")),
    }
}

fn scalar<T: Element>(operand: &Operand<'_>) -> Result<T> {
    scalar_of(operand)?.coerce::<T>()
}

fn output<T: Element>(output: Option<BufferMut<'_>>) -> Result<&mut [T]> {
    output
        .ok_or_else(|| Error::usage("separate-output shape without an output"))?
        .into_typed::<T>()
}

fn run<T: ArithElement>(
    op: BinaryOp,
    plan: &Plan,
    lhs: Operand<'_>,
    rhs: Operand<'_>,
    out: Option<BufferMut<'_>>,
    policy: ErrorPolicy,
) -> Result<()> {
    let n = plan.count;
    match plan.shape {
        Shape::BufferScalarInPlace => {
            let s = scalar::<T>(&rhs)?;
            let a = in_place::<T>(lhs)?;
            kernel::buffer_scalar_in_place(op, &mut a[..n], s, policy)
        }
        Shape::BufferScalarOut => {
            let a = input::<T>(&lhs)?;
            let s = scalar::<T>(&rhs)?;
            let out = output::<T>(out)?;
            kernel::buffer_scalar_out(op, &a[..n], s, &mut out[..n], policy)
        }
        Shape::ScalarBufferInPlace => {
            let s = scalar::<T>(&lhs)?;
            let b = in_place::<T>(rhs)?;
            kernel::scalar_buffer_in_place(op, s, &mut b[..n], policy)
        }
        Shape::ScalarBufferOut => {
            let s = scalar::<T>(&lhs)?;
            let b = input::<T>(&rhs)?;
            let out = output::<T>(out)?;
            kernel::scalar_buffer_out(op, s, &b[..n], &mut out[..n], policy)
        }
        Shape::BufferBufferInPlace => {
            let b = input::<T>(&rhs)?;
            let a = in_place::<T>(lhs)?;
            kernel::buffer_buffer_in_place(op, &mut a[..n], &b[..n], policy)
        }
        Shape::BufferBufferOut => {
            let a = input::<T>(&lhs)?;
            let b = input::<T>(&rhs)?;
            let out = output::<T>(out)?;
            kernel::buffer_buffer_out(op, &a[..n], &b[..n], &mut out[..n], policy)
        }
    }
}

/// Builder for one dispatch call with optional arguments
///
/// Mirrors a generic call interface where operands may be missing and the
/// limit arrives as a signed integer; those cases are reported as
/// [`Error::UsageError`] by [`run`](Self::run).
///
/// ```
/// use numkern::buffer::Operand;
/// use numkern::ops::{BinaryOp, BinaryOpCall};
///
/// let mut a = [1i32, 2, 3, 4];
/// BinaryOpCall::new(BinaryOp::Pow)
///     .lhs(&mut a[..])
///     .rhs(Operand::scalar(2i32))
///     .limit(3)
///     .run()?;
/// assert_eq!(a, [1, 4, 9, 4]);
/// # Ok::<(), numkern::error::Error>(())
/// ```
#[derive(Debug)]
pub struct BinaryOpCall<'a> {
    op: BinaryOp,
    lhs: Option<Operand<'a>>,
    rhs: Option<Operand<'a>>,
    output: Option<BufferMut<'a>>,
    error_policy: ErrorPolicy,
    limit: Option<i64>,
}

impl<'a> BinaryOpCall<'a> {
    /// Start a call of `op` with no arguments
    pub fn new(op: BinaryOp) -> Self {
        Self {
            op,
            lhs: None,
            rhs: None,
            output: None,
            error_policy: ErrorPolicy::default(),
            limit: None,
        }
    }

    /// Set the left operand
    pub fn lhs(mut self, operand: impl Into<Operand<'a>>) -> Self {
        self.lhs = Some(operand.into());
        self
    }

    /// Set the right operand
    pub fn rhs(mut self, operand: impl Into<Operand<'a>>) -> Self {
        self.rhs = Some(operand.into());
        self
    }

    /// Write results here instead of in place
    pub fn output(mut self, output: impl Into<BufferMut<'a>>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set the arithmetic error policy
    pub fn error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Process only the first `limit` elements; negative values are rejected
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Validate the arguments and dispatch
    pub fn run(self) -> Result<()> {
        let (lhs, rhs) = match (self.lhs, self.rhs) {
            (Some(lhs), Some(rhs)) => (lhs, rhs),
            (None, None) => {
                return Err(Error::usage(format!(
                    "{} requires two operands, got none",
                    self.op.name()
                )));
            }
            _ => {
                return Err(Error::usage(format!(
                    "{} requires two operands, got one",
                    self.op.name()
                )));
            }
        };

        let limit = match self.limit {
            Some(n) => Some(usize::try_from(n).map_err(|_| {
                Error::usage(format!("limit must be non-negative, got {n}"))
            })?),
            None => None,
        };

        let config = OpConfig {
            error_policy: self.error_policy,
            limit,
        };
        apply_binary_op(self.op, lhs, rhs, self.output, config)
    }
}
