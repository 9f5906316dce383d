//! # Operations (`ops`)
//!
//! One file per operation. Each exposes an `xxx_op` function computing the
//! forward value and recording an [`Op`] on the new node so
//! [`Value::backward`](crate::Value::backward) can differentiate it later.
//!
//! - Primitive rules: [`add`], [`mul`], [`pow`], and in [`math_elem`] `tanh`,
//!   `exp`, `ln`.
//! - Compositions: [`neg`] (multiply by -1), [`sub`] (add the negation),
//!   [`div`] (multiply by the power -1). They add intermediate nodes but no
//!   new derivative rules.
//!
//! Operands are only read; every call allocates exactly the nodes it needs.

use crate::autograd::backward_op::Op;
use crate::value::Value;
use crate::value_data::ValueData;

pub mod add;
pub mod div;
pub mod math_elem;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use math_elem::{exp_op, ln_op, tanh_op};
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;

/// Applies a unary operation: computes `forward(a)` and links the result to `a`.
pub(crate) fn apply_unary_op<F, B>(a: &Value, forward: F, backward_builder: B) -> Value
where
    F: FnOnce(f64) -> f64,
    B: FnOnce(Value) -> Op,
{
    let data = forward(a.data());
    Value::from_value_data(ValueData::from_op(data, backward_builder(a.clone())))
}

/// Applies a binary operation: computes `forward(a, b)` and links the result to both.
pub(crate) fn apply_binary_op<F, B>(a: &Value, b: &Value, forward: F, backward_builder: B) -> Value
where
    F: FnOnce(f64, f64) -> f64,
    B: FnOnce(Value, Value) -> Op,
{
    let data = forward(a.data(), b.data());
    Value::from_value_data(ValueData::from_op(
        data,
        backward_builder(a.clone(), b.clone()),
    ))
}
