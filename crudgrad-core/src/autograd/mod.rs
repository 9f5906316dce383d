//! # Autograd
//!
//! Reverse-mode differentiation over the scalar graph:
//! - [`backward_op`]: the closed set of operations and their local-derivative rules.
//! - [`graph`]: topological ordering of the nodes reachable from a root.
//! - [`grad_check`]: comparison of analytical gradients with finite differences.
//!
//! The driver itself is [`Value::backward`](crate::Value::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{Op, OpKind};
pub use grad_check::{check_grad, numerical_grad, GradCheckConfig};
