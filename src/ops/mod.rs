//! Element-wise binary operations
//!
//! # Layering
//!
//! 1. [`apply_binary_op`] (and the [`BinaryOpCall`] builder) validate the call,
//!    resolve the element dtype and choose a [`Shape`].
//! 2. The `dispatch_dtype!` macro instantiates the typed kernel.
//! 3. [`kernel`] loops over the elements, asking [`classify`] to compute and
//!    classify each pair, and applies the [`ErrorPolicy`].
//!
//! # Shapes
//!
//! | lhs    | rhs    | output  | shape                         |
//! |--------|--------|---------|-------------------------------|
//! | buffer | scalar | none    | [`Shape::BufferScalarInPlace`] |
//! | buffer | scalar | buffer  | [`Shape::BufferScalarOut`]     |
//! | scalar | buffer | none    | [`Shape::ScalarBufferInPlace`] |
//! | scalar | buffer | buffer  | [`Shape::ScalarBufferOut`]     |
//! | buffer | buffer | none    | [`Shape::BufferBufferInPlace`] |
//! | buffer | buffer | buffer  | [`Shape::BufferBufferOut`]     |

mod arithmetic;
mod binary;
pub mod classify;
mod dispatch;
pub mod kernel;
mod shape;

pub use arithmetic::{BinaryOp, ErrorPolicy, OpConfig};
pub use binary::{BinaryOpCall, apply_binary_op};
pub use classify::{ArithElement, Checked};
pub use shape::{OperandKind, Shape, Side, select_shape};
