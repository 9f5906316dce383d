use crate::autograd::backward_op::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Raises `a` to the constant power `exponent`.
///
/// The exponent is a plain number, not a node: the derivative
/// \( k \cdot a^{k-1} \) is only defined here for a fixed `k`.
pub fn pow_op(a: &Value, exponent: f64) -> Value {
    apply_unary_op(a, |x| x.powf(exponent), |a| Op::Pow(a, exponent))
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
