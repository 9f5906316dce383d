use crate::autograd::backward_op::Op;
use crate::ops::apply_binary_op;
use crate::value::Value;

/// Computes `a * b`.
///
/// Backward: `a` receives `b.data * grad`, `b` receives `a.data * grad`.
/// Squaring by `mul_op(&a, &a)` records `a` twice, so both contributions land on it.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    apply_binary_op(a, b, |x, y| x * y, Op::Mul)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
