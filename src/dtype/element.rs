//! Element trait for mapping Rust types to DType

use super::{DType, Scalar};
use bytemuck::{Pod, Zeroable};
use std::fmt::Debug;

/// Trait for types that can be elements of a buffer
///
/// This trait connects Rust's type system to numkern's runtime dtype system.
/// It's implemented for the ten primitive numeric types numkern supports.
///
/// # Bounds
/// - `Copy + Clone + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe reinterpretation of buffer bytes (bytemuck)
/// - `PartialOrd + Debug` - Comparison and diagnostics
pub trait Element:
    Copy + Clone + Send + Sync + Pod + Zeroable + 'static + PartialOrd + Debug
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert a scalar operand into this type
    ///
    /// Integer types accept integer scalars within range. Float types accept
    /// every scalar. Returns None when the scalar is not representable.
    fn from_scalar(s: Scalar) -> Option<Self>;
}

macro_rules! impl_element_int {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$variant;

                #[inline]
                fn from_scalar(s: Scalar) -> Option<Self> {
                    s.as_i128().and_then(|v| <$ty>::try_from(v).ok())
                }
            }
        )*
    };
}

macro_rules! impl_element_float {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$variant;

                #[inline]
                fn from_scalar(s: Scalar) -> Option<Self> {
                    Some(match s {
                        Scalar::F64(v) => v as $ty,
                        Scalar::F32(v) => v as $ty,
                        Scalar::I64(v) => v as $ty,
                        Scalar::I32(v) => v as $ty,
                        Scalar::I16(v) => v as $ty,
                        Scalar::I8(v) => v as $ty,
                        Scalar::U64(v) => v as $ty,
                        Scalar::U32(v) => v as $ty,
                        Scalar::U16(v) => v as $ty,
                        Scalar::U8(v) => v as $ty,
                    })
                }
            }
        )*
    };
}

impl_element_int!(
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
);

impl_element_float!(f64 => F64, f32 => F32);
