use crate::autograd::backward_op::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Computes \( e^a \). Large inputs overflow to `+inf`.
pub fn exp_op(a: &Value) -> Value {
    apply_unary_op(a, f64::exp, Op::Exp)
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
