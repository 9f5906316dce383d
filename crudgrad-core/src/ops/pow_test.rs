use super::*;
use crate::autograd::backward_op::OpKind;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let a = Value::new(2.0);
    let b = pow_op(&a, 3.0);
    assert_relative_eq!(b.data(), 8.0, epsilon = 1e-12);
    assert_eq!(b.op(), Some(OpKind::Pow));
    assert_eq!(b.operands().len(), 1);
}

#[test]
fn test_pow_backward() {
    // d/dx x^3 = 3x^2 = 12 at x = 2
    let a = Value::new(2.0);
    let b = pow_op(&a, 3.0);
    b.backward();
    assert_relative_eq!(a.grad(), 12.0, epsilon = 1e-12);
}

#[test]
fn test_pow_negative_and_fractional_exponents() {
    let a = Value::new(4.0);
    let inv = pow_op(&a, -1.0);
    assert_relative_eq!(inv.data(), 0.25);
    inv.backward();
    assert_relative_eq!(a.grad(), -1.0 / 16.0);

    let b = Value::new(9.0);
    let root = b.pow(0.5);
    assert_relative_eq!(root.data(), 3.0);
    root.backward();
    assert_relative_eq!(b.grad(), 0.5 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_pow_zero_base_negative_exponent_is_infinite() {
    let a = Value::new(0.0);
    let b = pow_op(&a, -1.0);
    assert!(b.data().is_infinite());
    b.backward();
    assert!(!a.grad().is_finite());
}

#[test]
fn test_pow_num_traits_impl() {
    use num_traits::Pow;
    let a = Value::new(3.0);
    let b = Pow::pow(&a, 2.0);
    assert_relative_eq!(b.data(), 9.0);
}

#[test]
fn test_pow_grad_check() {
    for &k in &[2.0, 3.0, -1.0, 0.5] {
        check_grad(
            |xs| pow_op(&xs[0], k),
            &[1.7],
            &GradCheckConfig::default(),
        )
        .unwrap_or_else(|e| panic!("pow({}) grad check failed: {}", k, e));
    }
}
