use crate::autograd::backward_op::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Computes the natural logarithm \( \ln(a) \).
///
/// Backward: \( \frac{dL}{da} = \frac{1}{a} \cdot \frac{dL}{dz} \).
///
/// # Domain Considerations
/// Only defined for strictly positive inputs. `ln(0)` is `-inf` and negative
/// inputs give NaN; the gradient \( 1/a \) is then infinite or negative.
/// Guarding the domain is the caller's job.
pub fn ln_op(a: &Value) -> Value {
    apply_unary_op(a, f64::ln, Op::Log)
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
