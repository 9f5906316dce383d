use crate::autograd::backward_op::Op;
use crate::ops::apply_binary_op;
use crate::value::Value;

/// Computes `a + b`.
///
/// Backward: the upstream gradient flows unchanged to both operands.
pub fn add_op(a: &Value, b: &Value) -> Value {
    apply_binary_op(a, b, |x, y| x + y, Op::Add)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
