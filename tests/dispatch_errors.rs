//! Integration tests for call validation
//!
//! Every error here is raised before any element is written, so each test
//! also checks that the buffers are untouched.

mod common;

use common::{bits, pow_in_place, pow_into};
use numkern::buffer::{BufferMut, BufferRef, Operand};
use numkern::dtype::{DType, Scalar};
use numkern::error::Error;
use numkern::ops::{BinaryOp, BinaryOpCall, ErrorPolicy, OpConfig, apply_binary_op};

#[test]
fn test_float_lhs_int_rhs_type_mismatch() {
    let mut a = vec![1.5f64, 2.5];
    let b = vec![2i8, 3];
    let err = apply_binary_op(
        BinaryOp::Pow,
        Operand::from(&mut a[..]),
        Operand::from(&b[..]),
        None,
        OpConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert!(!err.is_arithmetic());
    assert_eq!(a, vec![1.5, 2.5]);
}

#[test]
fn test_no_operands() {
    let err = BinaryOpCall::new(BinaryOp::Pow).run().unwrap_err();
    assert!(matches!(err, Error::UsageError { .. }));
}

#[test]
fn test_one_operand() {
    let mut a = vec![2u8];
    let err = BinaryOpCall::new(BinaryOp::Pow)
        .lhs(&mut a[..])
        .run()
        .unwrap_err();
    assert!(matches!(err, Error::UsageError { .. }));
    assert_eq!(a, vec![2]);
}

#[test]
fn test_two_scalars() {
    let err = apply_binary_op(
        BinaryOp::Pow,
        Operand::scalar(2i32),
        Operand::scalar(3i32),
        None,
        OpConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::UsageError { .. }));
}

#[test]
fn test_length_mismatch() {
    let mut a = vec![1i32, 2, 3];
    let b = vec![1i32, 2];
    let err = pow_in_place(&mut a, &b, OpConfig::default()).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { .. }));
    assert_eq!(a, vec![1, 2, 3]);
}

#[test]
fn test_output_too_short() {
    let a = vec![1u16, 2, 3];
    let b = vec![2u16, 2, 2];
    let mut out = vec![5u16; 2];
    let err = pow_into(&a, &b, &mut out, OpConfig::default()).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { .. }));
    assert_eq!(out, vec![5, 5]);
}

#[test]
fn test_output_longer_is_fine() {
    let a = vec![2u16, 3];
    let b = vec![2u16, 2];
    let mut out = vec![5u16; 4];
    pow_into(&a, &b, &mut out, OpConfig::default()).unwrap();
    assert_eq!(out, vec![4, 9, 5, 5]);
}

#[test]
fn test_output_wrong_dtype() {
    let a = vec![1.0f32, 2.0];
    let mut out = vec![0.0f64; 2];
    let err = apply_binary_op(
        BinaryOp::Pow,
        Operand::from(&a[..]),
        Operand::scalar(2.0f32),
        Some(BufferMut::new(&mut out)),
        OpConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert_eq!(out, vec![0.0, 0.0]);
}

#[test]
fn test_limit_beyond_length() {
    let mut a = vec![2i64, 3];
    let b = vec![2i64, 2];
    let err = pow_in_place(&mut a, &b, OpConfig::new().with_limit(5)).unwrap_err();
    assert!(matches!(err, Error::UsageError { .. }));
    assert_eq!(a, vec![2, 3]);
}

#[test]
fn test_limit_equal_to_length() {
    let mut a = vec![2i64, 3];
    let b = vec![2i64, 2];
    pow_in_place(&mut a, &b, OpConfig::new().with_limit(2)).unwrap();
    assert_eq!(a, vec![4, 9]);
}

#[test]
fn test_negative_limit() {
    let mut a = vec![2i64, 3];
    let err = BinaryOpCall::new(BinaryOp::Pow)
        .lhs(&mut a[..])
        .rhs(Operand::scalar(2i64))
        .limit(-3)
        .run()
        .unwrap_err();
    assert!(matches!(err, Error::UsageError { .. }));
    assert_eq!(a, vec![2, 3]);
}

#[test]
fn test_read_only_in_place_target() {
    let a = vec![2u32, 3];
    let b = vec![2u32, 2];
    let err = apply_binary_op(
        BinaryOp::Pow,
        Operand::from(&a[..]),
        Operand::from(&b[..]),
        None,
        OpConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::UsageError { .. }));

    // the rhs receives the result when the lhs is a scalar
    let err = apply_binary_op(
        BinaryOp::Pow,
        Operand::scalar(2u32),
        Operand::from(&b[..]),
        None,
        OpConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::UsageError { .. }));
}

#[test]
fn test_fractional_scalar_against_int_buffer() {
    let mut a = vec![4i32, 9];
    let err = apply_binary_op(
        BinaryOp::Pow,
        Operand::from(&mut a[..]),
        Operand::Scalar(Scalar::F64(0.5)),
        None,
        OpConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert_eq!(a, vec![4, 9]);
}

#[test]
fn test_raw_byte_buffers() {
    let a = vec![2u32, 3, 4];
    let mut out = vec![0u32; 3];
    let a_bytes: &[u8] = bytemuck::cast_slice(&a);
    let out_bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut out);

    apply_binary_op(
        BinaryOp::Pow,
        Operand::Buffer(BufferRef::from_bytes(DType::U32, a_bytes).unwrap()),
        Operand::scalar(3u32),
        Some(BufferMut::from_bytes(DType::U32, out_bytes).unwrap()),
        OpConfig::default(),
    )
    .unwrap();
    assert_eq!(out, vec![8, 27, 64]);
}

#[test]
fn test_raw_bytes_mismatched_dtype_tags() {
    let a = vec![2u32, 3];
    let mut out = vec![0u32; 2];
    let before = bits(&out);
    let a_bytes: &[u8] = bytemuck::cast_slice(&a);
    let out_bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut out);

    let err = apply_binary_op(
        BinaryOp::Pow,
        Operand::Buffer(BufferRef::from_bytes(DType::U32, a_bytes).unwrap()),
        Operand::scalar(3u32),
        Some(BufferMut::from_bytes(DType::I32, out_bytes).unwrap()),
        OpConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert_eq!(bits(&out), before);
}

#[test]
fn test_policy_does_not_suppress_usage_errors() {
    let mut a = vec![2i8];
    let b = vec![2i8, 2];
    let err = BinaryOpCall::new(BinaryOp::Pow)
        .lhs(&mut a[..])
        .rhs(&b[..])
        .error_policy(ErrorPolicy::Permissive)
        .run()
        .unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { .. }));
}

#[test]
fn test_repeated_runs_are_identical() {
    let a = vec![2i16, -3, 7, 300, 0];
    let b = vec![3i16, 5, -1, 2, 0];
    let mut first = vec![0i16; 5];
    let mut second = vec![0i16; 5];
    pow_into(&a, &b, &mut first, OpConfig::new().permissive()).unwrap();
    pow_into(&a, &b, &mut second, OpConfig::new().permissive()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec![8, -243, 0, 300i16.wrapping_pow(2), 1]);
}
