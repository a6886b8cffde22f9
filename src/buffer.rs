//! Borrowed, dtype-tagged buffer views and operands
//!
//! numkern never owns element storage. Callers lend contiguous memory either as
//! typed slices or as raw bytes plus a [`DType`]; the kernels reinterpret the
//! bytes as `&[T]` once the dtype has been resolved.

use crate::dtype::{DType, Element, Scalar};
use crate::error::{Error, Result};
use crate::ops::OperandKind;

/// Read-only view of a caller-owned buffer
#[derive(Copy, Clone, Debug)]
pub struct BufferRef<'a> {
    dtype: DType,
    bytes: &'a [u8],
}

impl<'a> BufferRef<'a> {
    /// View a typed slice
    pub fn new<T: Element>(data: &'a [T]) -> Self {
        Self {
            dtype: T::DTYPE,
            bytes: bytemuck::cast_slice(data),
        }
    }

    /// View raw bytes as elements of `dtype`
    ///
    /// The byte length must be a whole number of elements. Alignment is
    /// checked when the kernel first reads the buffer.
    pub fn from_bytes(dtype: DType, bytes: &'a [u8]) -> Result<Self> {
        check_whole_elements(dtype, bytes.len())?;
        Ok(Self { dtype, bytes })
    }

    /// Element dtype
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / self.dtype.size_in_bytes()
    }

    /// Returns true if the buffer holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reinterpret as a typed slice
    pub fn typed<T: Element>(&self) -> Result<&'a [T]> {
        check_dtype::<T>(self.dtype)?;
        bytemuck::try_cast_slice(self.bytes).map_err(|e| misaligned(self.dtype, e))
    }
}

/// Mutable view of a caller-owned buffer
#[derive(Debug)]
pub struct BufferMut<'a> {
    dtype: DType,
    bytes: &'a mut [u8],
}

impl<'a> BufferMut<'a> {
    /// View a typed mutable slice
    pub fn new<T: Element>(data: &'a mut [T]) -> Self {
        Self {
            dtype: T::DTYPE,
            bytes: bytemuck::cast_slice_mut(data),
        }
    }

    /// View raw mutable bytes as elements of `dtype`
    pub fn from_bytes(dtype: DType, bytes: &'a mut [u8]) -> Result<Self> {
        check_whole_elements(dtype, bytes.len())?;
        Ok(Self { dtype, bytes })
    }

    /// Element dtype
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / self.dtype.size_in_bytes()
    }

    /// Returns true if the buffer holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow as a read-only view
    #[inline]
    pub fn view(&self) -> BufferRef<'_> {
        BufferRef {
            dtype: self.dtype,
            bytes: &*self.bytes,
        }
    }

    /// Reinterpret as a typed mutable slice, consuming the view
    pub fn into_typed<T: Element>(self) -> Result<&'a mut [T]> {
        check_dtype::<T>(self.dtype)?;
        let dtype = self.dtype;
        bytemuck::try_cast_slice_mut(self.bytes).map_err(|e| misaligned(dtype, e))
    }
}

impl<'a, T: Element> From<&'a mut [T]> for BufferMut<'a> {
    fn from(data: &'a mut [T]) -> Self {
        Self::new(data)
    }
}

fn check_whole_elements(dtype: DType, byte_len: usize) -> Result<()> {
    if byte_len % dtype.size_in_bytes() != 0 {
        return Err(Error::length_mismatch(format!(
            "{byte_len} bytes is not a whole number of {dtype} elements"
        )));
    }
    Ok(())
}

fn check_dtype<T: Element>(dtype: DType) -> Result<()> {
    if T::DTYPE != dtype {
        return Err(Error::type_mismatch(format!(
            "{dtype} buffer viewed as {}",
            T::DTYPE
        )));
    }
    Ok(())
}

fn misaligned(dtype: DType, err: bytemuck::PodCastError) -> Error {
    Error::usage(format!("{dtype} buffer cannot be viewed as typed data: {err}"))
}

/// One input of a binary operation
#[derive(Debug)]
pub enum Operand<'a> {
    /// A single value broadcast across the other operand
    Scalar(Scalar),
    /// A read-only buffer
    Buffer(BufferRef<'a>),
    /// A buffer that may also receive the result when no output is given
    BufferMut(BufferMut<'a>),
}

impl<'a> Operand<'a> {
    /// Scalar operand from any supported primitive
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        Self::Scalar(value.into())
    }

    /// Scalar or buffer
    #[inline]
    pub fn kind(&self) -> OperandKind {
        match self {
            Self::Scalar(_) => OperandKind::Scalar,
            Self::Buffer(_) | Self::BufferMut(_) => OperandKind::Buffer,
        }
    }

    /// Read-only view of a buffer operand
    pub fn buffer(&self) -> Option<BufferRef<'_>> {
        match self {
            Self::Scalar(_) => None,
            Self::Buffer(b) => Some(*b),
            Self::BufferMut(b) => Some(b.view()),
        }
    }
}

impl From<Scalar> for Operand<'_> {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl<'a> From<BufferRef<'a>> for Operand<'a> {
    fn from(b: BufferRef<'a>) -> Self {
        Self::Buffer(b)
    }
}

impl<'a> From<BufferMut<'a>> for Operand<'a> {
    fn from(b: BufferMut<'a>) -> Self {
        Self::BufferMut(b)
    }
}

impl<'a, T: Element> From<&'a [T]> for Operand<'a> {
    fn from(data: &'a [T]) -> Self {
        Self::Buffer(BufferRef::new(data))
    }
}

impl<'a, T: Element> From<&'a mut [T]> for Operand<'a> {
    fn from(data: &'a mut [T]) -> Self {
        Self::BufferMut(BufferMut::new(data))
    }
}
