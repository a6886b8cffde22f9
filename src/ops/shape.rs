//! Iteration shape selection

use crate::error::{Error, Result};

/// Whether an operand is a single value or a buffer
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// Single value broadcast across the other operand
    Scalar,
    /// Buffer of elements
    Buffer,
}

/// The six ways a binary operation walks its operands
///
/// Operand order is preserved in every shape: the left operand is always the
/// first argument of the operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `a[i] = op(a[i], s)`
    BufferScalarInPlace,
    /// `out[i] = op(a[i], s)`
    BufferScalarOut,
    /// `b[i] = op(s, b[i])`
    ScalarBufferInPlace,
    /// `out[i] = op(s, b[i])`
    ScalarBufferOut,
    /// `a[i] = op(a[i], b[i])`
    BufferBufferInPlace,
    /// `out[i] = op(a[i], b[i])`
    BufferBufferOut,
}

impl Shape {
    /// Which operand, if any, is a scalar
    pub const fn scalar_side(self) -> Option<Side> {
        match self {
            Self::BufferScalarInPlace | Self::BufferScalarOut => Some(Side::Rhs),
            Self::ScalarBufferInPlace | Self::ScalarBufferOut => Some(Side::Lhs),
            Self::BufferBufferInPlace | Self::BufferBufferOut => None,
        }
    }

    /// Which operand receives the result when operating in place
    pub const fn in_place_side(self) -> Option<Side> {
        match self {
            Self::BufferScalarInPlace | Self::BufferBufferInPlace => Some(Side::Lhs),
            Self::ScalarBufferInPlace => Some(Side::Rhs),
            _ => None,
        }
    }
}

/// Left or right operand
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// First operand
    Lhs,
    /// Second operand
    Rhs,
}

/// Pick the iteration shape for the given operand kinds
pub fn select_shape(lhs: OperandKind, rhs: OperandKind, has_output: bool) -> Result<Shape> {
    use OperandKind::{Buffer, Scalar};

    let shape = match (lhs, rhs, has_output) {
        (Buffer, Scalar, false) => Shape::BufferScalarInPlace,
        (Buffer, Scalar, true) => Shape::BufferScalarOut,
        (Scalar, Buffer, false) => Shape::ScalarBufferInPlace,
        (Scalar, Buffer, true) => Shape::ScalarBufferOut,
        (Buffer, Buffer, false) => Shape::BufferBufferInPlace,
        (Buffer, Buffer, true) => Shape::BufferBufferOut,
        (Scalar, Scalar, _) => {
            return Err(Error::usage(
                "at least one operand must be a buffer, got two scalars",
            ));
        }
    };
    Ok(shape)
}
