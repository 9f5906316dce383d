use crate::autograd::backward_op::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Hyperbolic tangent.
///
/// Backward: \( \frac{dL}{da} = (1 - \tanh(a)^2) \cdot \frac{dL}{dz} \), using the
/// stored output instead of recomputing `tanh`.
pub fn tanh_op(a: &Value) -> Value {
    apply_unary_op(a, f64::tanh, Op::Tanh)
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
