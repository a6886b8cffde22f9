//! # numkern
//!
//! **Element-wise binary-operation kernels over caller-owned numeric buffers.**
//!
//! numkern applies a binary operation (currently `pow`) element by element over
//! flat, homogeneously typed buffers. Either side may be a scalar, results go
//! in place or into a separate output buffer, arithmetic errors are detected
//! per element, and an optional limit restricts processing to a prefix.
//!
//! ## Supported dtypes
//!
//! `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`, `f32`, `f64`.
//!
//! ## Quick Start
//!
//! ```rust
//! use numkern::prelude::*;
//!
//! let mut a = [1i32, 2, 3];
//! let b = [3i32, 2, 1];
//! apply_binary_op(
//!     BinaryOp::Pow,
//!     Operand::from(&mut a[..]),
//!     Operand::from(&b[..]),
//!     None,
//!     OpConfig::default(),
//! )?;
//! assert_eq!(a, [1, 4, 3]);
//!
//! // Overflow is reported with the failing index under the default policy
//! let mut c = [2i8];
//! let err = apply_binary_op(
//!     BinaryOp::Pow,
//!     Operand::from(&mut c[..]),
//!     Operand::scalar(127i8),
//!     None,
//!     OpConfig::default(),
//! )
//! .unwrap_err();
//! assert_eq!(err.arithmetic_kind(), Some((0, ArithmeticErrorKind::Overflow)));
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Error policies
//!
//! - [`ErrorPolicy::Strict`](ops::ErrorPolicy::Strict) (default): stop at the
//!   first failing element; earlier elements stay written
//! - [`ErrorPolicy::Permissive`](ops::ErrorPolicy::Permissive): write the raw
//!   result (wrapped integer, NaN, infinity) and continue
//!
//! ## Logging
//!
//! Dispatch decisions are logged through the [`log`] facade at `trace` level and
//! strict-mode aborts at `debug` level. No logger is installed by the crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod dtype;
pub mod error;
pub mod ops;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::buffer::{BufferMut, BufferRef, Operand};
    pub use crate::dtype::{DType, Element, Scalar};
    pub use crate::error::{ArithmeticErrorKind, Error, Result};
    pub use crate::ops::{BinaryOp, BinaryOpCall, ErrorPolicy, OpConfig, apply_binary_op};
}
