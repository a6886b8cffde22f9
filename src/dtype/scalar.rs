//! Typed scalar operands and their compatibility with buffer dtypes

use super::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;

/// A single numeric value tagged with its dtype
///
/// Used as one side of a binary operation and broadcast across the other
/// side's buffer. Before the kernel runs, the scalar is coerced to the buffer's
/// element type according to a fixed table:
///
/// | scalar \ buffer | integer dtype       | float dtype   |
/// |-----------------|---------------------|---------------|
/// | integer scalar  | exact range check   | always (cast) |
/// | float scalar    | rejected            | always (cast) |
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Scalar {
    /// 64-bit floating point
    F64(f64),
    /// 32-bit floating point
    F32(f32),
    /// 64-bit signed integer
    I64(i64),
    /// 32-bit signed integer
    I32(i32),
    /// 16-bit signed integer
    I16(i16),
    /// 8-bit signed integer
    I8(i8),
    /// 64-bit unsigned integer
    U64(u64),
    /// 32-bit unsigned integer
    U32(u32),
    /// 16-bit unsigned integer
    U16(u16),
    /// 8-bit unsigned integer
    U8(u8),
}

impl Scalar {
    /// The dtype this scalar was created with
    pub const fn dtype(self) -> DType {
        match self {
            Self::F64(_) => DType::F64,
            Self::F32(_) => DType::F32,
            Self::I64(_) => DType::I64,
            Self::I32(_) => DType::I32,
            Self::I16(_) => DType::I16,
            Self::I8(_) => DType::I8,
            Self::U64(_) => DType::U64,
            Self::U32(_) => DType::U32,
            Self::U16(_) => DType::U16,
            Self::U8(_) => DType::U8,
        }
    }

    /// The value of an integer scalar, widened without loss
    ///
    /// Returns None for float scalars.
    pub fn as_i128(self) -> Option<i128> {
        match self {
            Self::I64(v) => Some(v as i128),
            Self::I32(v) => Some(v as i128),
            Self::I16(v) => Some(v as i128),
            Self::I8(v) => Some(v as i128),
            Self::U64(v) => Some(v as i128),
            Self::U32(v) => Some(v as i128),
            Self::U16(v) => Some(v as i128),
            Self::U8(v) => Some(v as i128),
            Self::F64(_) | Self::F32(_) => None,
        }
    }

    /// Returns true if this scalar can be used against a buffer of `dtype`
    pub fn is_compatible_with(self, dtype: DType) -> bool {
        if dtype.is_float() {
            return true;
        }
        match (self.as_i128(), int_bounds(dtype)) {
            (Some(v), Some((lo, hi))) => lo <= v && v <= hi,
            _ => false,
        }
    }

    /// Convert to the element type `T`, following the compatibility table
    pub fn coerce<T: Element>(self) -> Result<T> {
        T::from_scalar(self).ok_or_else(|| {
            Error::type_mismatch(format!(
                "scalar {} ({}) is not representable as {}",
                self,
                self.dtype(),
                T::DTYPE
            ))
        })
    }
}

/// Inclusive integer range of an integer dtype
fn int_bounds(dtype: DType) -> Option<(i128, i128)> {
    let bounds = match dtype {
        DType::I64 => (i64::MIN as i128, i64::MAX as i128),
        DType::I32 => (i32::MIN as i128, i32::MAX as i128),
        DType::I16 => (i16::MIN as i128, i16::MAX as i128),
        DType::I8 => (i8::MIN as i128, i8::MAX as i128),
        DType::U64 => (0, u64::MAX as i128),
        DType::U32 => (0, u32::MAX as i128),
        DType::U16 => (0, u16::MAX as i128),
        DType::U8 => (0, u8::MAX as i128),
        DType::F64 | DType::F32 => return None,
    };
    Some(bounds)
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::F64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                #[inline]
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_scalar_from!(
    f64 => F64,
    f32 => F32,
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
);
