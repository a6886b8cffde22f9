//! Common test utilities
#![allow(dead_code)]

use numkern::buffer::{BufferMut, Operand};
use numkern::dtype::Element;
use numkern::error::Result;
use numkern::ops::{BinaryOp, OpConfig, apply_binary_op};

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f32 slices are close within tolerance
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// `a[i] = a[i] ** b[i]`
pub fn pow_in_place<T: Element>(a: &mut [T], b: &[T], config: OpConfig) -> Result<()> {
    apply_binary_op(
        BinaryOp::Pow,
        Operand::from(a),
        Operand::from(b),
        None,
        config,
    )
}

/// `out[i] = a[i] ** b[i]`
pub fn pow_into<T: Element>(a: &[T], b: &[T], out: &mut [T], config: OpConfig) -> Result<()> {
    apply_binary_op(
        BinaryOp::Pow,
        Operand::from(a),
        Operand::from(b),
        Some(BufferMut::new(out)),
        config,
    )
}

/// Bit patterns of a slice, for exact before/after comparisons (NaN-safe)
pub fn bits<T: Element>(data: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(data).to_vec()
}
