use crate::ops::math_elem::{exp_op, ln_op, tanh_op};
use crate::ops::pow_op;
use crate::value::Value;

impl Value {
    /// `self` raised to a constant power.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }

    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    /// Natural logarithm. Non-positive inputs give NaN or -inf, unguarded.
    pub fn log(&self) -> Value {
        ln_op(self)
    }
}
